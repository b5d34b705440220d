use std::collections::HashMap;

/// One identifier known to the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Spelling exactly as first encountered, regardless of later casing.
    pub original_spelling: String,
    /// Incremented on every occurrence. Never below 1.
    pub occurrences: u32,
}

/// Case-insensitive registry of the identifiers seen during one scan pass.
///
/// Keys are lowercased spellings; entries are never removed. Reserved words,
/// operators and literals are never inserted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            entries: HashMap::new(),
        }
    }

    /// Registers one occurrence of `spelling` and returns its canonical key.
    ///
    /// The first occurrence fixes `original_spelling`; later occurrences only
    /// bump the count.
    pub fn insert(&mut self, spelling: &str) -> String {
        let key = spelling.to_lowercase();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.occurrences += 1;
        } else {
            self.entries.insert(
                key.clone(),
                SymbolEntry {
                    original_spelling: spelling.to_string(),
                    occurrences: 1,
                },
            );
        }

        key
    }

    pub fn lookup(&self, spelling: &str) -> Option<&SymbolEntry> {
        self.entries.get(&spelling.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(canonical_key, entry)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SymbolEntry)> {
        self.entries.iter()
    }
}
