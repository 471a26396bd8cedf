use std::f64::consts::{E, PI};

use super::ast::Expr;
use super::EvalError;

/// Variable name to value pairs, e.g. `&[("x", 1.0), ("y", 0.5)]`.
pub type Bindings<'a> = &'a [(&'a str, f64)];

/// Value of a named constant, used when no binding shadows it.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}

impl Expr {
    /// Evaluate against `bindings`.
    ///
    /// Domain errors such as `sqrt(-1)` or `log(0)` are not errors here: they
    /// produce a non-finite value that callers classify with
    /// [`super::is_numeric`]. Only an unbound variable fails.
    pub fn eval(&self, bindings: Bindings<'_>) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Num(v) => *v,
            Expr::Var(name) => lookup(name, bindings)?,
            Expr::Neg(a) => -a.eval(bindings)?,
            Expr::Add(a, b) => a.eval(bindings)? + b.eval(bindings)?,
            Expr::Sub(a, b) => a.eval(bindings)? - b.eval(bindings)?,
            Expr::Mul(a, b) => a.eval(bindings)? * b.eval(bindings)?,
            Expr::Div(a, b) => a.eval(bindings)? / b.eval(bindings)?,
            Expr::Pow(base, exp) => power(base.eval(bindings)?, exp.eval(bindings)?),
            Expr::Call(func, arg) => func.apply(arg.eval(bindings)?),
        };
        Ok(value)
    }
}

fn lookup(name: &str, bindings: Bindings<'_>) -> Result<f64, EvalError> {
    bindings
        .iter()
        .find(|(bound, _)| *bound == name)
        .map(|(_, value)| *value)
        .or_else(|| constant(name))
        .ok_or_else(|| EvalError::UndefinedSymbol(name.to_string()))
}

/// Integer exponents go through `powi` for exactness on negative bases.
fn power(base: f64, exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp.abs() <= i32::MAX as f64 {
        base.powi(exp as i32)
    } else {
        base.powf(exp)
    }
}
