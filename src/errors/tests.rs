//! Unit tests for error handling.
//!
//! This module contains tests for lexical error causes and reporting.

use crate::errors::errors::{ErrorTip, LexError, LexErrorCause};
use crate::SourcePos;

#[test]
fn test_error_creation() {
    let error = LexError::new(
        LexErrorCause::UnrecognisedCharacter,
        "@".to_string(),
        SourcePos { line: 1, column: 10 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_cause(), LexErrorCause::UnrecognisedCharacter);
}

#[test]
fn test_error_position() {
    let error = LexError::new(
        LexErrorCause::UnterminatedString,
        "\"abc".to_string(),
        SourcePos { line: 4, column: 2 },
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_unterminated_comment_error() {
    let error = LexError::new(
        LexErrorCause::UnterminatedComment,
        "/*".to_string(),
        SourcePos { line: 1, column: 1 },
    );

    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_bad_char_const_error() {
    let error = LexError::new(
        LexErrorCause::BadCharConst,
        "'a".to_string(),
        SourcePos { line: 1, column: 1 },
    );

    assert_eq!(error.get_error_name(), "BadCharConst");
}

#[test]
fn test_malformed_exponent_error() {
    let error = LexError::new(
        LexErrorCause::MalformedExponent,
        "1e".to_string(),
        SourcePos { line: 1, column: 1 },
    );

    assert_eq!(error.get_error_name(), "MalformedExponent");
}

#[test]
fn test_oversized_identifier_error() {
    let error = LexError::new(
        LexErrorCause::OversizedIdentifier,
        "a".repeat(64),
        SourcePos { line: 1, column: 1 },
    );

    assert_eq!(error.get_error_name(), "OversizedIdentifier");
}

#[test]
fn test_error_tip_none() {
    let error = LexError::new(
        LexErrorCause::UnrecognisedCharacter,
        "@".to_string(),
        SourcePos { line: 1, column: 1 },
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = LexError::new(
        LexErrorCause::UnterminatedString,
        "\"abc".to_string(),
        SourcePos { line: 1, column: 1 },
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("\"abc")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_cause_display_messages() {
    assert_eq!(
        LexErrorCause::UnterminatedComment.to_string(),
        "unterminated block comment"
    );
    assert_eq!(
        LexErrorCause::MalformedExponent.to_string(),
        "exponent marker with no digits"
    );
    assert_eq!(
        LexErrorCause::OversizedIdentifier.to_string(),
        "identifier longer than 64 characters"
    );
}
