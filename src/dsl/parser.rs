//! TrineDSL recursive-descent parser.

use super::ast::{Expr, Program, Stmt};
use super::error::{pos_to_line_col, DslError, DslErrorKind};
use super::lexer::{tokenize, Token, TokenKind};
use crate::ternary::Trit;

struct Parser<'a> {
    tokens: Vec<Token>,
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token>, src: &'a str) -> Self {
        Self {
            tokens,
            src,
            pos: 0,
        }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, token: &Token, statement: &str, description: String) -> DslError {
        let (line, column, line_text) = pos_to_line_col(self.src, token.pos);
        DslError {
            kind: DslErrorKind::Parse,
            statement: statement.to_string(),
            line,
            column,
            line_text,
            description,
        }
    }

    // Program ::= { Statement }
    fn parse_program(&mut self) -> Result<Program, DslError> {
        let mut statements = Vec::new();
        while self.current().kind != TokenKind::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    // Statement ::= DeclStmt ";" | AssignStmt ";"
    fn parse_statement(&mut self) -> Result<Stmt, DslError> {
        let stmt = match self.current().kind {
            TokenKind::KwTrit => self.parse_decl()?,
            TokenKind::Ident => self.parse_assign()?,
            _ => {
                let token = self.current().clone();
                return Err(self.error(
                    &token,
                    "Unexpected Token at Statement Start",
                    format!(
                        "Unexpected token '{}' at the beginning of a statement.",
                        token.text
                    ),
                ));
            }
        };

        if self.current().kind != TokenKind::Semi {
            let token = self.current().clone();
            return Err(self.error(
                &token,
                "Missing Semicolon",
                "Expected ';' at the end of the statement.".into(),
            ));
        }
        self.advance();
        Ok(stmt)
    }

    // DeclStmt ::= "trit" IDENT { "," IDENT }
    fn parse_decl(&mut self) -> Result<Stmt, DslError> {
        self.advance(); // 'trit'

        let mut names = Vec::new();
        let first = self.current().clone();
        if first.kind != TokenKind::Ident {
            return Err(self.error(
                &first,
                "Expected Identifier in Declaration",
                "Expected an identifier after 'trit'.".into(),
            ));
        }
        self.advance();
        names.push(first.text);

        while self.matches(TokenKind::Comma) {
            let ident = self.current().clone();
            if ident.kind != TokenKind::Ident {
                return Err(self.error(
                    &ident,
                    "Expected Identifier in Declaration",
                    "Expected an identifier after ','.".into(),
                ));
            }
            self.advance();
            names.push(ident.text);
        }

        Ok(Stmt::Decl { names })
    }

    // AssignStmt ::= IDENT "=" Expr
    fn parse_assign(&mut self) -> Result<Stmt, DslError> {
        let name = self.advance().text;

        let eq = self.current().clone();
        if eq.kind != TokenKind::Equal {
            return Err(self.error(
                &eq,
                "Expected '=' After Identifier",
                "Expected '=' after identifier in assignment.".into(),
            ));
        }
        self.advance();

        let expr = self.parse_expr()?;
        Ok(Stmt::Assign { name, expr })
    }

    // Expr ::= TRIT_LITERAL | IDENT | IDENT "(" [Expr {"," Expr}] ")"
    fn parse_expr(&mut self) -> Result<Expr, DslError> {
        let token = self.current().clone();

        if token.kind == TokenKind::TritLit {
            self.advance();
            let value = match token.text.as_str() {
                "-1" => Trit::Minus,
                "0" => Trit::Zero,
                "+1" => Trit::Plus,
                other => {
                    // The lexer only emits the three literals above.
                    return Err(self.error(
                        &token,
                        "Invalid Trit Literal",
                        format!("Invalid trit literal '{other}'."),
                    ));
                }
            };
            return Ok(Expr::Literal(value));
        }

        if token.kind == TokenKind::Ident {
            let ident = self.advance();
            if self.matches(TokenKind::LParen) {
                let mut args = Vec::new();
                if self.current().kind != TokenKind::RParen {
                    args.push(self.parse_expr()?);
                    while self.matches(TokenKind::Comma) {
                        args.push(self.parse_expr()?);
                    }
                }
                let rparen = self.current().clone();
                if rparen.kind != TokenKind::RParen {
                    return Err(self.error(
                        &rparen,
                        "Missing Closing Parenthesis",
                        "Expected ')' to close function call arguments.".into(),
                    ));
                }
                self.advance();
                return Ok(Expr::Call {
                    func: ident.text,
                    args,
                });
            }
            return Ok(Expr::Name(ident.text));
        }

        Err(self.error(
            &token,
            "Unexpected Token in Expression",
            format!("Unexpected token '{}' in expression.", token.text),
        ))
    }
}

/// Tokenize and parse a TrineDSL source string.
pub fn parse_program(src: &str) -> Result<Program, DslError> {
    let tokens = tokenize(src)?;
    Parser::new(tokens, src).parse_program()
}
