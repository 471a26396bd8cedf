use greenint_core::display::CurveSamples;
use greenint_core::integrate::CancelToken;

/// UI-only state. The calculator form itself lives in `CalculatorSession`.
#[derive(Default)]
pub struct UIState {
    /// Token of the integration currently running (None = idle).
    pub running: Option<CancelToken>,

    /// Progress, in x columns.
    pub progress_done: Option<usize>,
    pub progress_total: Option<usize>,

    /// Chart data for the session's graph snapshot.
    pub samples: Option<CurveSamples>,

    /// Wall time of the last finished calculation.
    pub last_elapsed: Option<std::time::Duration>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Ask the running integration to stop at its next column.
    pub fn cancel(&mut self) {
        if let Some(ref token) = self.running {
            token.cancel();
            self.add_log("Cancelling...".into());
        }
    }

    pub fn finish_run(&mut self) {
        self.running = None;
        self.progress_done = None;
        self.progress_total = None;
    }
}
