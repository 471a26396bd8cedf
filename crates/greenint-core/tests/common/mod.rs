#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use greenint_core::error::Result;
use greenint_core::expr::{Bindings, Expr, ExpressionEngine, SymbolicEngine};
use greenint_core::integrate::{
    BoundaryCurves, CalculationRequest, CancelToken, ProgressReporter, Range,
};

/// `SymbolicEngine` wrapper that counts calls per operation.
#[derive(Default)]
pub struct CountingEngine {
    pub compiles: AtomicUsize,
    pub differentiations: AtomicUsize,
    pub evaluations: AtomicUsize,
}

impl CountingEngine {
    pub fn compiles(&self) -> usize {
        self.compiles.load(Ordering::SeqCst)
    }

    pub fn differentiations(&self) -> usize {
        self.differentiations.load(Ordering::SeqCst)
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

impl ExpressionEngine for CountingEngine {
    type Compiled = Expr;

    fn name(&self) -> &str {
        "counting"
    }

    fn compile(&self, source: &str) -> Result<Expr> {
        self.compiles.fetch_add(1, Ordering::SeqCst);
        SymbolicEngine.compile(source)
    }

    fn evaluate(&self, expr: &Expr, bindings: Bindings<'_>) -> Result<f64> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        SymbolicEngine.evaluate(expr, bindings)
    }

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr> {
        self.differentiations.fetch_add(1, Ordering::SeqCst);
        SymbolicEngine.differentiate(expr, var)
    }

    fn render(&self, expr: &Expr) -> String {
        SymbolicEngine.render(expr)
    }
}

/// Reporter that records every call, optionally cancelling a token once a
/// given number of columns is done.
#[derive(Default)]
pub struct RecordingReporter {
    pub total: Mutex<Option<usize>>,
    pub advances: Mutex<Vec<usize>>,
    pub finished: AtomicBool,
    pub cancel_after: Option<(usize, CancelToken)>,
}

impl RecordingReporter {
    pub fn cancelling_after(columns: usize, token: CancelToken) -> Self {
        Self {
            cancel_after: Some((columns, token)),
            ..Default::default()
        }
    }

    pub fn advances(&self) -> Vec<usize> {
        self.advances.lock().unwrap().clone()
    }

    pub fn total(&self) -> Option<usize> {
        *self.total.lock().unwrap()
    }

    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

impl ProgressReporter for RecordingReporter {
    fn begin(&self, total_columns: usize) {
        *self.total.lock().unwrap() = Some(total_columns);
    }

    fn advance(&self, columns_done: usize) {
        self.advances.lock().unwrap().push(columns_done);
        if let Some((limit, ref token)) = self.cancel_after {
            if columns_done >= limit {
                token.cancel();
            }
        }
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}

pub fn unit_square_direct(integrand: &str) -> CalculationRequest {
    CalculationRequest::direct(
        integrand,
        BoundaryCurves::new("0", "1"),
        Range::new(0.0, 1.0),
    )
}

/// Central finite difference of `source` in `var` at the given point.
pub fn numeric_partial(source: &str, var: &str, x: f64, y: f64) -> f64 {
    let h = 1e-6;
    let at = |dx: f64, dy: f64| {
        greenint_core::expr::evaluate_str(source, &[("x", x + dx), ("y", y + dy)]).unwrap()
    };
    match var {
        "x" => (at(h, 0.0) - at(-h, 0.0)) / (2.0 * h),
        _ => (at(0.0, h) - at(0.0, -h)) / (2.0 * h),
    }
}
