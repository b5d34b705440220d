//! Lexical analysis module.
//!
//! This module contains the scanner that converts Pascal-like source text
//! into an ordered sequence of classified tokens. It handles:
//!
//! - Forward-only cursor navigation with bounded lookahead
//! - Whitespace and block-comment elision
//! - Maximal-munch recognition of reserved words, identifiers, numbers,
//!   character/string constants, operators and special symbols
//! - A case-insensitive symbol table of the identifiers seen in one pass
//! - Token position tracking for error reporting

pub mod cursor;
pub mod scanner;
pub mod symbols;
pub mod tokens;
