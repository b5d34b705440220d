use std::fmt::Display;

use thiserror::Error;

use crate::SourcePos;

/// The situation that produced a lexical-error token.
///
/// Error tokens are distinguished from ordinary tokens purely by their kind;
/// the cause is extra context for reporting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorCause {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated string constant")]
    UnterminatedString,
    #[error("malformed character constant")]
    BadCharConst,
    #[error("exponent marker with no digits")]
    MalformedExponent,
    #[error("identifier longer than 64 characters")]
    OversizedIdentifier,
    #[error("unrecognised character")]
    UnrecognisedCharacter,
}

/// A lexical error lifted out of an error token for reporting.
#[derive(Debug, Clone)]
pub struct LexError {
    cause: LexErrorCause,
    lexeme: String,
    position: SourcePos,
}

impl LexError {
    pub fn new(cause: LexErrorCause, lexeme: String, position: SourcePos) -> Self {
        LexError {
            cause,
            lexeme,
            position,
        }
    }

    pub fn get_position(&self) -> &SourcePos {
        &self.position
    }

    pub fn get_cause(&self) -> LexErrorCause {
        self.cause
    }

    pub fn get_error_name(&self) -> &str {
        match &self.cause {
            LexErrorCause::UnterminatedComment => "UnterminatedComment",
            LexErrorCause::UnterminatedString => "UnterminatedString",
            LexErrorCause::BadCharConst => "BadCharConst",
            LexErrorCause::MalformedExponent => "MalformedExponent",
            LexErrorCause::OversizedIdentifier => "OversizedIdentifier",
            LexErrorCause::UnrecognisedCharacter => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.cause {
            LexErrorCause::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Comment is never closed, did you forget a `*/`?",
            )),
            LexErrorCause::UnterminatedString => ErrorTip::Suggestion(format!(
                "String `{}` is never closed, did you forget a `\"`?",
                self.lexeme
            )),
            LexErrorCause::BadCharConst => ErrorTip::Suggestion(format!(
                "`{}` is not a valid character constant, expected `'` after one character",
                self.lexeme
            )),
            LexErrorCause::MalformedExponent => ErrorTip::Suggestion(format!(
                "Number `{}` has an exponent marker with no digits after it",
                self.lexeme
            )),
            LexErrorCause::OversizedIdentifier => ErrorTip::Suggestion(format!(
                "Identifier truncated to `{}`, the limit is 64 characters",
                self.lexeme
            )),
            LexErrorCause::UnrecognisedCharacter => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
