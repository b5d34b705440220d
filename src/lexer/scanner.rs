use crate::{errors::errors::LexErrorCause, SourcePos, MK_ERROR, MK_TOKEN};

use super::cursor::Cursor;
use super::symbols::SymbolTable;
use super::tokens::{Token, TokenKind, LOGIC_OPS, MAX_IDENT_LEN, RESERVED_WORDS, WORD_MOD};

/// Everything one scan pass produces: the ordered token sequence and the
/// identifier registry populated along the way.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(|token| token.is_error())
    }
}

/// One scan pass over one source text.
///
/// Owns its cursor, symbol table and output sequence; nothing is shared
/// between passes.
pub struct Scanner {
    cursor: Cursor,
    symbols: SymbolTable,
    tokens: Vec<Token>,
    halted: bool,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            cursor: Cursor::new(source),
            symbols: SymbolTable::new(),
            tokens: vec![],
            halted: false,
        }
    }

    /// Runs the pass to completion.
    pub fn scan(mut self) -> ScanOutput {
        while let Some(token) = self.next_token() {
            self.tokens.push(token);
        }

        ScanOutput {
            tokens: self.tokens,
            symbols: self.symbols,
        }
    }

    /// Skips whitespace and `/* ... */` comments before a token attempt.
    ///
    /// Comments do not nest; the first `*/` closes the comment. Reaching
    /// end-of-input inside a comment emits one error token and halts the
    /// pass.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let Some(ch) = self.cursor.peek() else { return };

            if ch.is_whitespace() {
                self.cursor.advance();
                continue;
            }

            if ch == '/' && self.cursor.peek_at(1) == Some('*') {
                let start = self.cursor.source_pos();
                self.cursor.advance();
                self.cursor.advance();

                loop {
                    match self.cursor.peek() {
                        None => {
                            self.tokens.push(MK_ERROR!(
                                LexErrorCause::UnterminatedComment,
                                String::from("/*"),
                                start
                            ));
                            self.halted = true;
                            return;
                        }
                        Some('*') if self.cursor.peek_at(1) == Some('/') => {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        Some(_) => {
                            self.cursor.advance();
                        }
                    }
                }
                continue;
            }

            return;
        }
    }

    /// Classifies the next token, or `None` at end-of-input.
    ///
    /// Dual-emission cases (oversized identifiers, unterminated comments)
    /// push their extra error token directly so it precedes the returned
    /// token in the output sequence.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();
        if self.halted {
            return None;
        }

        let ch = self.cursor.peek()?;
        let start = self.cursor.source_pos();

        if ch.is_alphabetic() || ch == '_' {
            return Some(self.word(start));
        }
        if ch.is_ascii_digit() {
            return Some(self.number(start));
        }

        match ch {
            '\'' => Some(self.char_const(start)),
            '"' => Some(self.string_const(start)),
            ':' => {
                self.cursor.advance();
                if self.cursor.match_next('=') {
                    Some(MK_TOKEN!(TokenKind::Assign, String::from(":="), start))
                } else {
                    Some(MK_TOKEN!(TokenKind::SpecialSymbol, String::from(":"), start))
                }
            }
            '>' | '<' | '=' => Some(self.relational(ch, start)),
            '.' => {
                self.cursor.advance();
                Some(MK_TOKEN!(TokenKind::EndMarker, String::from("."), start))
            }
            ',' | ';' | '(' | ')' => {
                self.cursor.advance();
                Some(MK_TOKEN!(TokenKind::SpecialSymbol, ch.to_string(), start))
            }
            '+' | '-' | '*' | '/' => {
                self.cursor.advance();
                Some(MK_TOKEN!(TokenKind::ArithOp, ch.to_string(), start))
            }
            _ => {
                self.cursor.advance();
                Some(MK_ERROR!(
                    LexErrorCause::UnrecognisedCharacter,
                    ch.to_string(),
                    start
                ))
            }
        }
    }

    /// Maximal run of letters/digits/`_`: reserved word, logical operator,
    /// `mod`, or identifier.
    fn word(&mut self, start: SourcePos) -> Token {
        let mut lexeme = String::new();
        while let Some(c) = self.cursor.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            self.bump(&mut lexeme);
        }

        if lexeme.chars().count() > MAX_IDENT_LEN {
            let truncated: String = lexeme.chars().take(MAX_IDENT_LEN).collect();
            self.tokens.push(MK_ERROR!(
                LexErrorCause::OversizedIdentifier,
                truncated.clone(),
                start
            ));
            self.symbols.insert(&truncated);
            return MK_TOKEN!(TokenKind::Identifier, truncated, start);
        }

        let lower = lexeme.to_lowercase();
        if RESERVED_WORDS.contains(lower.as_str()) {
            return MK_TOKEN!(TokenKind::ReservedWord, lexeme, start);
        }
        if LOGIC_OPS.contains(lower.as_str()) {
            return MK_TOKEN!(TokenKind::LogicOp, lexeme, start);
        }
        if lower == WORD_MOD {
            return MK_TOKEN!(TokenKind::ArithOp, lexeme, start);
        }

        self.symbols.insert(&lexeme);
        MK_TOKEN!(TokenKind::Identifier, lexeme, start)
    }

    /// Digit run, optional fraction (a `.` counts only when a digit follows
    /// it), optional exponent.
    fn number(&mut self, start: SourcePos) -> Token {
        let mut lexeme = String::new();
        self.consume_digits(&mut lexeme);

        let has_fraction = self.cursor.peek() == Some('.')
            && self.cursor.peek_at(1).is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.bump(&mut lexeme);
            self.consume_digits(&mut lexeme);
        }

        if matches!(self.cursor.peek(), Some('e') | Some('E')) {
            if !self.exponent(&mut lexeme) {
                return MK_ERROR!(LexErrorCause::MalformedExponent, lexeme, start);
            }
            return MK_TOKEN!(TokenKind::RealNumber, lexeme, start);
        }

        if has_fraction {
            MK_TOKEN!(TokenKind::RealNumber, lexeme, start)
        } else {
            MK_TOKEN!(TokenKind::IntNumber, lexeme, start)
        }
    }

    /// Consumes `e`/`E` and an optional sign, then requires at least one
    /// digit. Returns false when none follows.
    fn exponent(&mut self, lexeme: &mut String) -> bool {
        self.bump(lexeme);
        if matches!(self.cursor.peek(), Some('+') | Some('-')) {
            self.bump(lexeme);
        }
        if !self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        self.consume_digits(lexeme);
        true
    }

    /// `'c'` or `'\c'`. The content is one unit; anything longer, or running
    /// out of input, is an error. On error the scanner still consumes
    /// through the next `'` so the pass resumes past the literal.
    fn char_const(&mut self, start: SourcePos) -> Token {
        let mut lexeme = String::new();
        self.bump(&mut lexeme);

        if self.cursor.at_eof() {
            return MK_ERROR!(LexErrorCause::BadCharConst, lexeme, start);
        }

        if self.cursor.peek() == Some('\\') {
            self.bump(&mut lexeme);
            if !self.cursor.at_eof() {
                self.bump(&mut lexeme);
            }
        } else {
            self.bump(&mut lexeme);
        }

        if self.cursor.peek() == Some('\'') {
            self.bump(&mut lexeme);
            return MK_TOKEN!(TokenKind::CharConst, lexeme, start);
        }

        while let Some(c) = self.cursor.peek() {
            if c == '\'' {
                break;
            }
            self.cursor.advance();
        }
        self.cursor.match_next('\'');

        MK_ERROR!(LexErrorCause::BadCharConst, lexeme, start)
    }

    /// `"..."`, consumed through the closing quote or end-of-input.
    fn string_const(&mut self, start: SourcePos) -> Token {
        let mut lexeme = String::new();
        self.bump(&mut lexeme);

        loop {
            match self.cursor.peek() {
                None => return MK_ERROR!(LexErrorCause::UnterminatedString, lexeme, start),
                Some('"') => {
                    self.bump(&mut lexeme);
                    return MK_TOKEN!(TokenKind::StringConst, lexeme, start);
                }
                Some(_) => {
                    self.bump(&mut lexeme);
                }
            }
        }
    }

    /// `>=`, `<=`, `<>`, or a single `>`/`<`/`=`.
    fn relational(&mut self, first: char, start: SourcePos) -> Token {
        self.cursor.advance();

        let lexeme = match (first, self.cursor.peek()) {
            ('>', Some('=')) => {
                self.cursor.advance();
                String::from(">=")
            }
            ('<', Some('=')) => {
                self.cursor.advance();
                String::from("<=")
            }
            ('<', Some('>')) => {
                self.cursor.advance();
                String::from("<>")
            }
            _ => first.to_string(),
        };

        MK_TOKEN!(TokenKind::RelOp, lexeme, start)
    }

    fn bump(&mut self, lexeme: &mut String) {
        if let Some(c) = self.cursor.advance() {
            lexeme.push(c);
        }
    }

    fn consume_digits(&mut self, lexeme: &mut String) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump(lexeme);
        }
    }
}

/// Runs one full scan pass over `source`.
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan()
}
