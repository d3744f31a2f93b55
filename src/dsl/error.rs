//! TrineDSL error reporting with source positions.

use std::fmt;

use thiserror::Error;

/// Which phase produced the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DslErrorKind {
    Lex,
    Parse,
    Runtime,
}

impl fmt::Display for DslErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DslErrorKind::Lex => f.write_str("Lexing Error"),
            DslErrorKind::Parse => f.write_str("Parsing Error"),
            DslErrorKind::Runtime => f.write_str("Runtime Error"),
        }
    }
}

/// A positioned TrineDSL error. The display format is what the GUI
/// shows the user verbatim.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}: {statement}\n    in line {line}: {line_text}\n    {description}")]
pub struct DslError {
    pub kind: DslErrorKind,
    /// Short headline, e.g. "Unexpected Token".
    pub statement: String,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
    pub description: String,
}

impl DslError {
    /// Runtime errors raised by the operator layer have no precise
    /// source location.
    pub fn runtime(statement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: DslErrorKind::Runtime,
            statement: statement.into(),
            line: 1,
            column: 1,
            line_text: String::new(),
            description: description.into(),
        }
    }
}

/// Map a character offset into (line, column, line text), all 1-based.
pub(crate) fn pos_to_line_col(src: &str, pos: usize) -> (usize, usize, String) {
    let chars: Vec<char> = src.chars().collect();
    let pos = pos.min(chars.len());

    let line_start = chars[..pos]
        .iter()
        .rposition(|&c| c == '\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = chars[pos..]
        .iter()
        .position(|&c| c == '\n')
        .map(|i| pos + i)
        .unwrap_or(chars.len());

    let line_text: String = chars[line_start..line_end].iter().collect();
    let line_no = chars[..pos].iter().filter(|&&c| c == '\n').count() + 1;
    let col_no = pos - line_start + 1;
    (line_no, col_no, line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_to_line_col() {
        let src = "trit A;\nA = 0;";
        assert_eq!(pos_to_line_col(src, 0), (1, 1, "trit A;".to_string()));
        assert_eq!(pos_to_line_col(src, 8), (2, 1, "A = 0;".to_string()));
        assert_eq!(pos_to_line_col(src, 12), (2, 5, "A = 0;".to_string()));
    }

    #[test]
    fn test_display_format() {
        let err = DslError {
            kind: DslErrorKind::Parse,
            statement: "Missing Semicolon".into(),
            line: 3,
            column: 7,
            line_text: "A = 0".into(),
            description: "Expected ';' at the end of the statement.".into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("Parsing Error: Missing Semicolon"));
        assert!(text.contains("in line 3: A = 0"));
    }
}
