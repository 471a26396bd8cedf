use crate::error::{GreenError, Result};

use super::ast::Expr;
use super::eval::Bindings;
use super::parser::parse;

/// Evaluator and differentiator consumed by the integration engine.
///
/// Expressions are compiled once per calculation and then evaluated many
/// times, so implementors should do all string work in `compile`.
pub trait ExpressionEngine: Send + Sync {
    type Compiled: Clone + Send + Sync;

    fn name(&self) -> &str;

    fn compile(&self, source: &str) -> Result<Self::Compiled>;

    /// May return a non-finite value; the caller decides whether that is an
    /// error.
    fn evaluate(&self, expr: &Self::Compiled, bindings: Bindings<'_>) -> Result<f64>;

    fn differentiate(&self, expr: &Self::Compiled, var: &str) -> Result<Self::Compiled>;

    fn render(&self, expr: &Self::Compiled) -> String;
}

/// AST-based engine backed by this crate's parser and differentiator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolicEngine;

impl ExpressionEngine for SymbolicEngine {
    type Compiled = Expr;

    fn name(&self) -> &str {
        "symbolic"
    }

    fn compile(&self, source: &str) -> Result<Expr> {
        parse(source).map_err(|error| GreenError::Parse {
            source_text: source.to_string(),
            error,
        })
    }

    fn evaluate(&self, expr: &Expr, bindings: Bindings<'_>) -> Result<f64> {
        Ok(expr.eval(bindings)?)
    }

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr> {
        Ok(expr.derivative(var))
    }

    fn render(&self, expr: &Expr) -> String {
        expr.to_string()
    }
}
