use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Thread-safe progress reporting for a running integration.
///
/// Work is counted in x columns. All methods have default no-op
/// implementations.
pub trait ProgressReporter: Send + Sync {
    /// The outer loop is about to start. `total_columns` is an estimate: the
    /// float accumulator can land one column either side of it.
    fn begin(&self, _total_columns: usize) {}

    /// One more x column has been summed.
    fn advance(&self, _columns_done: usize) {}

    /// Summation finished successfully.
    fn finish(&self) {}
}

/// No-op progress reporter, used when `integrate` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Shared flag a caller sets to stop a running integration. It is polled
/// between x columns and periodically inside a column.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
