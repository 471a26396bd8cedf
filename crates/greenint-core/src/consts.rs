/// Default grid resolution for both integration axes.
pub const DEFAULT_STEP: f64 = 0.01;

/// Number of decimal digits the integral is rounded to.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Default resolution used when resampling boundary curves for display.
pub const DEFAULT_DISPLAY_STEP: f64 = 0.05;

/// Extra x-span drawn past `x_max` when plotting the boundary curves.
pub const DEFAULT_DISPLAY_X_EXTENSION: f64 = 1.0;

/// Minimum number of display samples before curve evaluation goes parallel.
pub const PARALLEL_SAMPLE_THRESHOLD: usize = 2_048;

/// Upper limit on display samples for a single snapshot. Protects the
/// renderer against a tiny display step over a huge range.
pub const MAX_DISPLAY_SAMPLES: usize = 200_000;

/// Initial x-range shown in a fresh calculator session.
pub const DEFAULT_X_RANGE: (f64, f64) = (-2.0, 2.0);

/// X-range a session falls back to after a successful calculation.
pub const RESET_X_RANGE: (f64, f64) = (0.0, 1.0);

/// Inner-loop samples between cancellation checks inside one x column.
pub const CANCEL_CHECK_SAMPLES: usize = 4_096;

/// Deepest expression tree the parser accepts. Evaluation, differentiation
/// and printing all recurse over the tree.
pub const MAX_EXPR_DEPTH: usize = 256;

/// Variable bound to the outer integration axis.
pub const VAR_X: &str = "x";

/// Variable bound to the inner integration axis.
pub const VAR_Y: &str = "y";

pub const MSG_MISSING_INPUT: &str = "Please supply all functions and limits.";

pub const MSG_UNEXPECTED_FAILURE: &str =
    "An error occurred during the calculation. Check your functions.";

pub const MSG_CANCELLED: &str = "Calculation cancelled.";

pub const LOWER_CURVE_LABEL: &str = "Lower curve (yMin)";

pub const UPPER_CURVE_LABEL: &str = "Upper curve (yMax)";
