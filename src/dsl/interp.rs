//! TrineDSL interpreter.

use std::collections::HashMap;

use super::ast::{Expr, Program, Stmt};
use super::error::DslError;
use crate::ternary::{self, Trit};

/// Runtime environment: declared signal names and their trit values.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: HashMap<String, Trit>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a fresh variable, initialized to 0.
    pub fn declare(&mut self, name: &str) -> Result<(), DslError> {
        if self.vars.contains_key(name) {
            return Err(DslError::runtime(
                "Redeclaration of Variable",
                format!("Variable '{name}' is already declared."),
            ));
        }
        self.vars.insert(name.to_string(), Trit::Zero);
        Ok(())
    }

    pub fn set(&mut self, name: &str, value: Trit) -> Result<(), DslError> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DslError::runtime(
                "Assignment to Undeclared Variable",
                format!("Variable '{name}' is not declared."),
            )),
        }
    }

    pub fn get(&self, name: &str) -> Result<Trit, DslError> {
        self.vars.get(name).copied().ok_or_else(|| {
            DslError::runtime(
                "Use of Undeclared Variable",
                format!("Variable '{name}' is not declared."),
            )
        })
    }

    /// All bindings, for display.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Trit)> {
        self.vars.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Dispatch a TrineDSL function name to the corresponding gate.
///
/// Supported names: C, N, A, TNOT, TAND, TOR, TNAND, TNOR, TXOR,
/// TSUM, TCARRY.
pub fn apply_func(name: &str, args: &[Trit]) -> Result<Trit, DslError> {
    let arity_error = |expected: usize| {
        DslError::runtime(
            "Wrong Number of Arguments",
            format!(
                "Function '{name}' expects {expected} argument(s), but {} was provided.",
                args.len()
            ),
        )
    };

    let unary: Option<fn(Trit) -> Trit> = match name {
        "C" => Some(ternary::cyclic),
        "N" => Some(ternary::negator),
        "A" => Some(ternary::antinegator),
        "TNOT" => Some(ternary::tnot),
        _ => None,
    };
    if let Some(op) = unary {
        if args.len() != 1 {
            return Err(arity_error(1));
        }
        return Ok(op(args[0]));
    }

    let binary: Option<fn(Trit, Trit) -> Trit> = match name {
        "TAND" => Some(ternary::tand),
        "TOR" => Some(ternary::tor),
        "TNAND" => Some(ternary::tnand),
        "TNOR" => Some(ternary::tnor),
        "TXOR" => Some(ternary::txor),
        "TSUM" => Some(ternary::tsum),
        "TCARRY" => Some(ternary::tcarry),
        _ => None,
    };
    if let Some(op) = binary {
        if args.len() != 2 {
            return Err(arity_error(2));
        }
        return Ok(op(args[0], args[1]));
    }

    Err(DslError::runtime(
        "Unknown Function",
        format!("Function '{name}' is not defined."),
    ))
}

/// Execute a program in the given environment.
pub fn eval_program(program: &Program, env: &mut Env) -> Result<(), DslError> {
    for stmt in &program.statements {
        eval_stmt(stmt, env)?;
    }
    Ok(())
}

fn eval_stmt(stmt: &Stmt, env: &mut Env) -> Result<(), DslError> {
    match stmt {
        Stmt::Decl { names } => {
            for name in names {
                env.declare(name)?;
            }
            Ok(())
        }
        Stmt::Assign { name, expr } => {
            let value = eval_expr(expr, env)?;
            env.set(name, value)
        }
    }
}

fn eval_expr(expr: &Expr, env: &Env) -> Result<Trit, DslError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Name(name) => env.get(name),
        Expr::Call { func, args } => {
            let values = args
                .iter()
                .map(|arg| eval_expr(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            apply_func(func, &values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse_program;

    #[test]
    fn test_declare_and_assign() {
        let mut env = Env::new();
        let program = parse_program("trit A; A = +1;").unwrap();
        eval_program(&program, &mut env).unwrap();
        assert_eq!(env.get("A").unwrap(), Trit::Plus);
    }

    #[test]
    fn test_declarations_default_to_zero() {
        let mut env = Env::new();
        eval_program(&parse_program("trit Q;").unwrap(), &mut env).unwrap();
        assert_eq!(env.get("Q").unwrap(), Trit::Zero);
    }

    #[test]
    fn test_redeclaration_rejected() {
        let mut env = Env::new();
        let program = parse_program("trit A; trit A;").unwrap();
        let err = eval_program(&program, &mut env).unwrap_err();
        assert_eq!(err.statement, "Redeclaration of Variable");
    }

    #[test]
    fn test_apply_func_dispatch() {
        assert_eq!(apply_func("C", &[Trit::Minus]).unwrap(), Trit::Zero);
        assert_eq!(apply_func("N", &[Trit::Plus]).unwrap(), Trit::Minus);
        assert_eq!(
            apply_func("TOR", &[Trit::Minus, Trit::Zero]).unwrap(),
            Trit::Zero
        );
        assert_eq!(
            apply_func("TXOR", &[Trit::Plus, Trit::Minus]).unwrap(),
            Trit::Plus
        );
    }

    #[test]
    fn test_apply_func_arity_and_unknown() {
        let err = apply_func("TAND", &[Trit::Plus]).unwrap_err();
        assert_eq!(err.statement, "Wrong Number of Arguments");
        let err = apply_func("TMAJ", &[Trit::Plus]).unwrap_err();
        assert_eq!(err.statement, "Unknown Function");
    }

    #[test]
    fn test_expression_uses_environment() {
        let mut env = Env::new();
        let src = "trit A, B, OUT; A = +1; B = 0; OUT = TNOR(A, B);";
        eval_program(&parse_program(src).unwrap(), &mut env).unwrap();
        assert_eq!(env.get("OUT").unwrap(), Trit::Minus);
    }
}
