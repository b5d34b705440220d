//! Error types for the lexical analyzer.
//!
//! This module defines how lexical trouble is represented. It includes:
//!
//! - The situational causes a lexical-error token can carry
//! - A reporting-side wrapper pairing a cause with its lexeme and position
//! - Error naming and suggestion formatting for diagnostics
//!
//! The scanner itself never returns these as `Err`; every lexical error is
//! emitted as a token in the output sequence and only turned into a
//! `LexError` when something wants to report it.

pub mod errors;

#[cfg(test)]
mod tests;
