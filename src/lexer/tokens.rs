use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{errors::errors::LexErrorCause, SourcePos};

/// Identifiers longer than this are truncated and reported.
pub const MAX_IDENT_LEN: usize = 64;

lazy_static! {
    /// Reserved words of the language, keyed by lowercased spelling.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("absolute");
        set.insert("array");
        set.insert("begin");
        set.insert("case");
        set.insert("char");
        set.insert("const");
        set.insert("div");
        set.insert("do");
        set.insert("dowto");
        set.insert("else");
        set.insert("end");
        set.insert("external");
        set.insert("file");
        set.insert("for");
        set.insert("forward");
        set.insert("func");
        set.insert("function");
        set.insert("goto");
        set.insert("if");
        set.insert("implementation");
        set.insert("integer");
        set.insert("interface");
        set.insert("interrupt");
        set.insert("label");
        set.insert("main");
        set.insert("nil");
        set.insert("nit");
        set.insert("of");
        set.insert("packed");
        set.insert("proc");
        set.insert("program");
        set.insert("real");
        set.insert("record");
        set.insert("repeat");
        set.insert("set");
        set.insert("shl");
        set.insert("shr");
        set.insert("string");
        set.insert("then");
        set.insert("to");
        set.insert("type");
        set.insert("unit");
        set.insert("until");
        set.insert("uses");
        set.insert("var");
        set.insert("while");
        set.insert("with");
        set.insert("xor");
        set
    };

    /// Word-shaped logical operators, keyed by lowercased spelling.
    pub static ref LOGIC_OPS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("and");
        set.insert("or");
        set.insert("not");
        set
    };
}

/// `mod` is word-shaped but classifies as an arithmetic operator.
pub const WORD_MOD: &str = "mod";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    IntNumber,
    RealNumber,
    CharConst,
    StringConst,
    ArithOp,
    RelOp,
    LogicOp,
    SpecialSymbol,
    Assign,
    EndMarker,
    LexError,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntNumber => "INT_NUMBER",
            TokenKind::RealNumber => "REAL_NUMBER",
            TokenKind::CharConst => "CHAR_CONST",
            TokenKind::StringConst => "STRING_CONST",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::RelOp => "REL_OP",
            TokenKind::LogicOp => "LOGIC_OP",
            TokenKind::SpecialSymbol => "SPECIAL_SYMBOL",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EndMarker => "END_MARKER",
            TokenKind::LexError => "LEXICAL_ERROR",
        };

        write!(f, "{}", name)
    }
}

/// One classified lexical unit. Immutable once produced.
///
/// `cause` is `Some` exactly when `kind` is [`TokenKind::LexError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: SourcePos,
    pub cause: Option<LexErrorCause>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, {}, line {}, column {}>",
            self.lexeme, self.kind, self.pos.line, self.pos.column
        )
    }
}

impl Token {
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::LexError
    }
}
