use crate::SourcePos;

/// Forward-only cursor over the source text.
///
/// Owns the position/line/column state for one scan pass. The position only
/// ever moves forward and every character is consumed at most once; lookahead
/// past the end of the input yields `None` with no side effect.
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Next unconsumed character, without advancing.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Bounded lookahead; `peek_at(0)` is `peek`.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consumes and returns the current character, updating line/column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the current character iff it equals `expected`.
    pub fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Position of the next unconsumed character.
    pub fn source_pos(&self) -> SourcePos {
        SourcePos {
            line: self.line,
            column: self.column,
        }
    }
}
