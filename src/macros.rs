//! Utility macros for the lexical analyzer.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a lexical-error Token carrying its cause
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's matched text
/// * `$pos` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntNumber, "42".to_string(), pos);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $pos:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            pos: $pos,
            cause: None,
        }
    };
}

/// Creates a lexical-error Token.
///
/// The token's kind is always `TokenKind::LexError`; the cause records which
/// situation produced it.
///
/// # Arguments
///
/// * `$cause` - The LexErrorCause
/// * `$lexeme` - Whatever text was collected before the error was detected
/// * `$pos` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_ERROR!(LexErrorCause::MalformedExponent, "1e".to_string(), pos);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($cause:expr, $lexeme:expr, $pos:expr) => {
        Token {
            kind: TokenKind::LexError,
            lexeme: $lexeme,
            pos: $pos,
            cause: Some($cause),
        }
    };
}
