use std::time::Duration;

use greenint_core::config::{DisplayConfig, IntegrationConfig};
use greenint_core::display::{CurveSamples, GraphSnapshot};
use greenint_core::integrate::{CalculationRequest, CalculationResult, CancelToken};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Run one integration. `cancel` is shared with the UI's Cancel button.
    Calculate {
        request: CalculationRequest,
        config: IntegrationConfig,
        cancel: CancelToken,
    },

    /// Resample the boundary curves of a snapshot for the chart.
    Sample {
        snapshot: GraphSnapshot,
        display: DisplayConfig,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Progress update during an integration, counted in x columns.
    Progress {
        columns_done: usize,
        columns_total: Option<usize>,
    },

    /// Integration finished, successfully or not. The request travels back so
    /// the session can commit the result against what was actually computed.
    Calculated {
        request: CalculationRequest,
        result: CalculationResult,
        elapsed: Duration,
    },

    Sampled {
        samples: CurveSamples,
    },

    ConfigImported {
        config: IntegrationConfig,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
