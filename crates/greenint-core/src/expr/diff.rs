use std::f64::consts::LN_10;

use super::ast::{Expr, Func};

impl Expr {
    /// Partial derivative with respect to `var`, simplified.
    ///
    /// Other variables are treated as constants. The result is a plain
    /// expression that evaluates against the same bindings as `self`.
    pub fn derivative(&self, var: &str) -> Expr {
        self.diff_raw(var).simplify()
    }

    fn diff_raw(&self, var: &str) -> Expr {
        match self {
            Expr::Num(_) => Expr::num(0.0),
            Expr::Var(name) => Expr::num(if name == var { 1.0 } else { 0.0 }),
            Expr::Neg(a) => -a.diff_raw(var),
            Expr::Add(a, b) => a.diff_raw(var) + b.diff_raw(var),
            Expr::Sub(a, b) => a.diff_raw(var) - b.diff_raw(var),
            // (uv)' = u'v + uv'
            Expr::Mul(a, b) => {
                a.diff_raw(var) * (**b).clone() + (**a).clone() * b.diff_raw(var)
            }
            // (u/v)' = (u'v - uv') / v^2
            Expr::Div(a, b) => {
                (a.diff_raw(var) * (**b).clone() - (**a).clone() * b.diff_raw(var))
                    / (**b).clone().pow(Expr::num(2.0))
            }
            Expr::Pow(base, exp) => diff_pow(base, exp, var),
            Expr::Call(func, arg) => outer_derivative(*func, arg) * arg.diff_raw(var),
        }
    }
}

fn diff_pow(base: &Expr, exp: &Expr, var: &str) -> Expr {
    let u = base.clone();
    let v = exp.clone();
    match (base.depends_on(var), exp.depends_on(var)) {
        (false, false) => Expr::num(0.0),
        // (u^n)' = n u^(n-1) u'
        (true, false) => v.clone() * u.pow(v - Expr::num(1.0)) * base.diff_raw(var),
        // (a^v)' = a^v ln(a) v'
        (false, true) => {
            u.clone().pow(v) * Expr::call(Func::Ln, u) * exp.diff_raw(var)
        }
        // (u^v)' = u^v (v' ln(u) + v u' / u)
        (true, true) => {
            u.clone().pow(v.clone())
                * (exp.diff_raw(var) * Expr::call(Func::Ln, u.clone())
                    + v * base.diff_raw(var) / u)
        }
    }
}

/// f'(u) for f applied to `u`, before the chain-rule factor.
fn outer_derivative(func: Func, u: &Expr) -> Expr {
    let u = u.clone();
    let one = || Expr::num(1.0);
    match func {
        Func::Sin => Expr::call(Func::Cos, u),
        Func::Cos => -Expr::call(Func::Sin, u),
        Func::Tan => one() / Expr::call(Func::Cos, u).pow(Expr::num(2.0)),
        Func::Asin => one() / Expr::call(Func::Sqrt, one() - u.pow(Expr::num(2.0))),
        Func::Acos => -(one() / Expr::call(Func::Sqrt, one() - u.pow(Expr::num(2.0)))),
        Func::Atan => one() / (one() + u.pow(Expr::num(2.0))),
        Func::Sinh => Expr::call(Func::Cosh, u),
        Func::Cosh => Expr::call(Func::Sinh, u),
        Func::Tanh => one() / Expr::call(Func::Cosh, u).pow(Expr::num(2.0)),
        Func::Exp => Expr::call(Func::Exp, u),
        Func::Ln => one() / u,
        Func::Log10 => one() / (u * Expr::num(LN_10)),
        Func::Sqrt => one() / (Expr::num(2.0) * Expr::call(Func::Sqrt, u)),
        Func::Cbrt => one() / (Expr::num(3.0) * Expr::call(Func::Cbrt, u).pow(Expr::num(2.0))),
        Func::Abs => Expr::call(Func::Sign, u),
        Func::Sign => Expr::num(0.0),
    }
}
