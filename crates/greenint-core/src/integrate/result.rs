use serde::{Deserialize, Serialize};
use tracing::error;

use crate::consts::{MSG_CANCELLED, MSG_MISSING_INPUT, MSG_UNEXPECTED_FAILURE};
use crate::error::GreenError;

/// Why a calculation stopped without a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// A required expression or limit was empty.
    MissingInput,
    /// A boundary curve was non-numeric at some x.
    InvalidBound,
    /// The integrand was non-numeric at some (x, y).
    InvalidIntegrand,
    /// Anything else the evaluator raised, e.g. a syntax error.
    UnexpectedFailure,
    Cancelled,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => write!(f, "Missing Input"),
            Self::InvalidBound => write!(f, "Invalid Bound"),
            Self::InvalidIntegrand => write!(f, "Invalid Integrand"),
            Self::UnexpectedFailure => write!(f, "Unexpected Failure"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A successfully computed integral.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegralValue {
    /// Sum rounded to `decimals` digits.
    pub value: f64,
    /// Human-readable description of what was integrated.
    pub expression_label: String,
    pub decimals: u32,
    /// Number of (x, y) cells that contributed.
    pub samples: usize,
}

impl IntegralValue {
    /// Fixed-point rendering, e.g. `2.0000`.
    pub fn formatted_value(&self) -> String {
        format!("{:.*}", self.decimals as usize, self.value)
    }
}

/// Outcome of one calculation. Built fresh per call and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum CalculationResult {
    Success(IntegralValue),
    Failure { kind: FailureKind, message: String },
}

impl CalculationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success(v) => Some(v.value),
            Self::Failure { .. } => None,
        }
    }

    pub fn success(&self) -> Option<&IntegralValue> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// User-facing failure text, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// Classify an engine error into a user-facing failure.
    ///
    /// Unexpected errors are logged with their cause; the user only sees a
    /// generic hint.
    pub fn from_error(err: GreenError) -> Self {
        let (kind, message) = match err {
            GreenError::MissingInput(_) => (FailureKind::MissingInput, MSG_MISSING_INPUT.into()),
            GreenError::InvalidBound { x } => {
                (FailureKind::InvalidBound, format!("Invalid limits at x = {x}"))
            }
            GreenError::InvalidIntegrand { x, y } => (
                FailureKind::InvalidIntegrand,
                format!("Error evaluating the integrand at (x={x}, y={y})."),
            ),
            GreenError::Cancelled => (FailureKind::Cancelled, MSG_CANCELLED.into()),
            other => {
                error!(cause = %other, "Calculation failed");
                (FailureKind::UnexpectedFailure, MSG_UNEXPECTED_FAILURE.into())
            }
        };
        Self::Failure { kind, message }
    }

    pub fn to_response(&self) -> CalculationResponse {
        match self {
            Self::Success(v) => CalculationResponse::Success {
                result: v.formatted_value(),
                expression_label: v.expression_label.clone(),
            },
            Self::Failure { message, .. } => CalculationResponse::Error {
                error: message.clone(),
            },
        }
    }
}

impl From<GreenError> for CalculationResult {
    fn from(err: GreenError) -> Self {
        Self::from_error(err)
    }
}

/// Wire shape of a result: `{ "result", "expressionLabel" }` or `{ "error" }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Success {
        result: String,
        #[serde(rename = "expressionLabel")]
        expression_label: String,
    },
    Error {
        error: String,
    },
}
