#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;

/// 1-based line/column position of a character in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn start() -> Self {
        SourcePos { line: 1, column: 1 }
    }
}

impl Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

pub fn get_line(source: &str, line_number: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line_number.saturating_sub(1) as usize)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let source = "program demo;\nvar x: integer;\nbegin\nend.\n";

        assert_eq!(super::get_line(source, 1), Some("program demo;"));
        assert_eq!(super::get_line(source, 3), Some("begin"));
        assert_eq!(super::get_line(source, 4), Some("end."));
        assert_eq!(super::get_line(source, 40), None);
    }

    #[test]
    fn test_source_pos_display() {
        let pos = super::SourcePos { line: 3, column: 12 };
        assert_eq!(pos.to_string(), "line 3, column 12");
    }
}
