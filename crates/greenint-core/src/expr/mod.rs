//! Arithmetic expression language: parsing, evaluation over named variables,
//! and symbolic partial differentiation.

mod ast;
mod diff;
mod engine;
mod eval;
mod lexer;
mod parser;
mod simplify;

use thiserror::Error;

pub use ast::{Expr, Func};
pub use engine::{ExpressionEngine, SymbolicEngine};
pub use eval::{constant, Bindings};
pub use parser::parse;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("function '{name}' at position {pos} needs a parenthesised argument")]
    MissingArgument { name: String, pos: usize },

    #[error("expression nested too deeply at position {pos}")]
    TooDeep { pos: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("undefined symbol '{0}'")]
    UndefinedSymbol(String),
}

/// Whether an evaluation produced a usable number. NaN and infinities are
/// both treated as non-numeric.
pub fn is_numeric(value: f64) -> bool {
    value.is_finite()
}

/// Parse and evaluate `source` in one go.
pub fn evaluate_str(source: &str, bindings: Bindings<'_>) -> crate::error::Result<f64> {
    SymbolicEngine.evaluate(&SymbolicEngine.compile(source)?, bindings)
}

/// Symbolic partial derivative of `source` with respect to `var`, as a
/// re-parsable expression string.
pub fn differentiate_str(source: &str, var: &str) -> crate::error::Result<String> {
    let compiled = SymbolicEngine.compile(source)?;
    let derivative = SymbolicEngine.differentiate(&compiled, var)?;
    Ok(SymbolicEngine.render(&derivative))
}
