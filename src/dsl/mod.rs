//! TrineDSL: a small netlist language over trits.
//!
//! Programs declare trit signals and assign gate expressions to them:
//!
//! ```text
//! trit A, B, S, C;
//! A = +1;
//! B = -1;
//! S = TSUM(A, B);
//! C = TCARRY(A, B);
//! ```

pub mod ast;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Program, Stmt};
pub use error::{DslError, DslErrorKind};
pub use interp::{apply_func, eval_program, Env};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse_program;

use crate::ternary::Trit;

/// Parse and execute a program in a fresh environment, returning the
/// final variable bindings.
pub fn run(src: &str) -> Result<Env, DslError> {
    let program = parse_program(src)?;
    let mut env = Env::new();
    eval_program(&program, &mut env)?;
    Ok(env)
}

/// Parse and execute, then read a single output variable.
pub fn run_and_read(src: &str, output: &str) -> Result<Trit, DslError> {
    let env = run(src)?;
    env.get(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::Trit;

    #[test]
    fn test_half_adder_program() {
        let src = "
            trit A, B, S, C;
            A = +1;
            B = +1;
            S = TSUM(A, B);
            C = TCARRY(A, B);
        ";
        let env = run(src).unwrap();
        assert_eq!(env.get("S").unwrap(), Trit::Zero);
        assert_eq!(env.get("C").unwrap(), Trit::Plus);
    }

    #[test]
    fn test_nested_calls_and_comments() {
        let src = "
            // ternary NAND via composition
            trit X, Y;
            X = -1;
            Y = TNOT(TAND(X, +1));
        ";
        assert_eq!(run_and_read(src, "Y").unwrap(), Trit::Plus);
    }

    #[test]
    fn test_lex_error_reports_position() {
        let err = run("trit A;\nA = $;").unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Lex);
        assert_eq!(err.line, 2);
        assert_eq!(err.line_text, "A = $;");
    }

    #[test]
    fn test_missing_semicolon_is_parse_error() {
        let err = run("trit A\nA = 0;").unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Parse);
    }

    #[test]
    fn test_undeclared_variable_is_runtime_error() {
        let err = run("trit A; A = B;").unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Runtime);
    }
}
