use super::ast::Expr;

impl Expr {
    /// Bottom-up constant folding and algebraic identities.
    ///
    /// Folding is skipped when the folded value would not be finite, so the
    /// printed form always stays re-parsable.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Num(_) | Expr::Var(_) => self.clone(),
            Expr::Neg(a) => match a.simplify() {
                Expr::Num(v) => Expr::Num(-v),
                Expr::Neg(inner) => *inner,
                a => -a,
            },
            Expr::Add(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Num(x), Expr::Num(y)) => fold(x + y).unwrap_or_else(|| num(x) + num(y)),
                (Expr::Num(z), other) | (other, Expr::Num(z)) if z == 0.0 => other,
                (a, Expr::Neg(b)) => a - *b,
                (a, b) => a + b,
            },
            Expr::Sub(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Num(x), Expr::Num(y)) => fold(x - y).unwrap_or_else(|| num(x) - num(y)),
                (a, Expr::Num(z)) if z == 0.0 => a,
                (Expr::Num(z), b) if z == 0.0 => (-b).simplify(),
                (a, Expr::Neg(b)) => a + *b,
                (a, b) if a == b => num(0.0),
                (a, b) => a - b,
            },
            Expr::Mul(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Num(x), Expr::Num(y)) => fold(x * y).unwrap_or_else(|| num(x) * num(y)),
                (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => num(0.0),
                (Expr::Num(o), other) | (other, Expr::Num(o)) if o == 1.0 => other,
                (Expr::Num(m), other) | (other, Expr::Num(m)) if m == -1.0 => {
                    (-other).simplify()
                }
                (Expr::Neg(a), Expr::Neg(b)) => *a * *b,
                // Keep numeric coefficients in front.
                (other, Expr::Num(c)) => num(c) * other,
                (a, b) => a * b,
            },
            Expr::Div(a, b) => match (a.simplify(), b.simplify()) {
                (Expr::Num(x), Expr::Num(y)) => fold(x / y).unwrap_or_else(|| num(x) / num(y)),
                (Expr::Num(z), _) if z == 0.0 => num(0.0),
                (a, Expr::Num(o)) if o == 1.0 => a,
                (a, b) => a / b,
            },
            Expr::Pow(base, exp) => match (base.simplify(), exp.simplify()) {
                (Expr::Num(x), Expr::Num(y)) => {
                    fold(x.powf(y)).unwrap_or_else(|| num(x).pow(num(y)))
                }
                (_, Expr::Num(z)) if z == 0.0 => num(1.0),
                (base, Expr::Num(o)) if o == 1.0 => base,
                (base, exp) => base.pow(exp),
            },
            Expr::Call(func, arg) => match arg.simplify() {
                Expr::Num(v) => fold(func.apply(v)).unwrap_or_else(|| Expr::call(*func, num(v))),
                arg => Expr::call(*func, arg),
            },
        }
    }
}

fn num(v: f64) -> Expr {
    Expr::Num(v)
}

fn fold(v: f64) -> Option<Expr> {
    v.is_finite().then_some(Expr::Num(v))
}
