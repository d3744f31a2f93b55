//! TrineDSL lexer.

use super::error::{pos_to_line_col, DslError, DslErrorKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    /// Trit literal: -1, 0, or +1.
    TritLit,
    /// The `trit` declaration keyword.
    KwTrit,
    Equal,
    Comma,
    Semi,
    LParen,
    RParen,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Character offset in the source.
    pub pos: usize,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn lex_error(src: &str, pos: usize, statement: &str, description: String) -> DslError {
    let (line, column, line_text) = pos_to_line_col(src, pos);
    DslError {
        kind: DslErrorKind::Lex,
        statement: statement.to_string(),
        line,
        column,
        line_text,
        description,
    }
}

/// Tokenize a TrineDSL source string. The returned stream always ends
/// with an `Eof` token.
pub fn tokenize(src: &str) -> Result<Vec<Token>, DslError> {
    let chars: Vec<char> = src.chars().collect();
    let n = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < n {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Line comments: //...
        if c == '/' && i + 1 < n && chars[i + 1] == '/' {
            i += 2;
            while i < n && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        let symbol = match c {
            '=' => Some(TokenKind::Equal),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semi),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        };
        if let Some(kind) = symbol {
            tokens.push(Token {
                kind,
                text: c.to_string(),
                pos: i,
            });
            i += 1;
            continue;
        }

        // Trit literals: -1, 0, +1
        if c == '+' || c == '-' || c.is_ascii_digit() {
            let start = i;
            if c == '+' || c == '-' {
                i += 1;
                if i >= n || !chars[i].is_ascii_digit() {
                    return Err(lex_error(
                        src,
                        start,
                        "Invalid Trit Literal",
                        "Invalid signed numeric literal; trits must be -1, 0, or +1.".into(),
                    ));
                }
            }
            while i < n && chars[i].is_ascii_digit() {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            if text != "-1" && text != "0" && text != "+1" {
                return Err(lex_error(
                    src,
                    start,
                    "Invalid Trit Literal",
                    format!("Invalid trit literal '{text}'; trits must be -1, 0, or +1."),
                ));
            }
            tokens.push(Token {
                kind: TokenKind::TritLit,
                text,
                pos: start,
            });
            continue;
        }

        // Identifiers and the 'trit' keyword
        if is_ident_start(c) {
            let start = i;
            while i < n && is_ident_part(chars[i]) {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let kind = if text == "trit" {
                TokenKind::KwTrit
            } else {
                TokenKind::Ident
            };
            tokens.push(Token {
                kind,
                text,
                pos: start,
            });
            continue;
        }

        return Err(lex_error(
            src,
            i,
            "Unexpected Character",
            format!("Unexpected character '{c}' in input."),
        ));
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: String::new(),
        pos: n,
    });
    Ok(tokens)
}
