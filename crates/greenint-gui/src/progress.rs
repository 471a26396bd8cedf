use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

use greenint_core::integrate::ProgressReporter;

use crate::messages::WorkerResult;

/// Progress reporter that sends updates over an mpsc channel to the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    current_total: AtomicUsize,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self {
            tx,
            ctx,
            current_total: AtomicUsize::new(0),
        }
    }

    fn send(&self, columns_done: usize) {
        let total = self.current_total.load(Ordering::Relaxed);
        let _ = self.tx.send(WorkerResult::Progress {
            columns_done,
            columns_total: if total > 0 { Some(total) } else { None },
        });
        self.ctx.request_repaint();
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin(&self, total_columns: usize) {
        self.current_total.store(total_columns, Ordering::Relaxed);
        self.send(0);
    }

    fn advance(&self, columns_done: usize) {
        self.send(columns_done);
    }

    fn finish(&self) {
        // Completion arrives as WorkerResult::Calculated
    }
}
