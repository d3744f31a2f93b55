//! TrineDSL abstract syntax tree.

use crate::ternary::Trit;

/// A whole source file: a sequence of statements.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `trit A, B, S;`
    Decl { names: Vec<String> },
    /// `S = TXOR(A, B);`
    Assign { name: String, expr: Expr },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Reference to a declared signal.
    Name(String),
    /// Literal trit value.
    Literal(Trit),
    /// Gate application, e.g. `TNAND(A, +1)`.
    Call { func: String, args: Vec<Expr> },
}
