mod engine;
mod label;
mod request;
mod result;
mod types;

pub use engine::{integrate, integrate_reported};
pub use label::{expression_label, round_to};
pub use request::{BoundaryCurves, CalculationRequest, IntegrationMode, Range};
pub use result::{CalculationResponse, CalculationResult, FailureKind, IntegralValue};
pub use types::{CancelToken, NoOpReporter, ProgressReporter};
