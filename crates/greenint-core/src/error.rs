use thiserror::Error;

use crate::expr::{EvalError, ParseError};

#[derive(Error, Debug)]
pub enum GreenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid limits at x = {x}")]
    InvalidBound { x: f64 },

    #[error("Non-numeric integrand at (x={x}, y={y})")]
    InvalidIntegrand { x: f64, y: f64 },

    #[error("Parse error in `{source_text}`: {error}")]
    Parse {
        source_text: String,
        error: ParseError,
    },

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Invalid step size: {0}")]
    InvalidStep(f64),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config format error: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    #[error("Calculation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, GreenError>;
