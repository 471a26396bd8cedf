use tracing::{debug, info, warn};

use crate::config::IntegrationConfig;
use crate::consts::{CANCEL_CHECK_SAMPLES, VAR_X, VAR_Y};
use crate::error::{GreenError, Result};
use crate::expr::{is_numeric, ExpressionEngine};

use super::label::{expression_label, round_to};
use super::request::{CalculationRequest, IntegrationMode};
use super::result::{CalculationResult, IntegralValue};
use super::types::{CancelToken, NoOpReporter, ProgressReporter};

/// Integrate `request` on a fixed grid of spacing `step`.
///
/// Pure with respect to its inputs: no state survives the call. The first
/// failure of any kind ends the calculation.
pub fn integrate<E: ExpressionEngine>(
    engine: &E,
    request: &CalculationRequest,
    step: f64,
) -> CalculationResult {
    let config = IntegrationConfig {
        step,
        ..IntegrationConfig::default()
    };
    integrate_reported(engine, request, &config, &NoOpReporter, &CancelToken::new())
}

/// Same as [`integrate`], with per-column progress and cooperative
/// cancellation. The token is checked before every x column and every
/// [`CANCEL_CHECK_SAMPLES`] samples within a column.
pub fn integrate_reported<E: ExpressionEngine>(
    engine: &E,
    request: &CalculationRequest,
    config: &IntegrationConfig,
    reporter: &dyn ProgressReporter,
    cancel: &CancelToken,
) -> CalculationResult {
    match run(engine, request, config, reporter, cancel) {
        Ok(value) => CalculationResult::Success(value),
        Err(err) => CalculationResult::from_error(err),
    }
}

/// Compiled form of the per-sample value.
enum Integrand<C> {
    Direct(C),
    /// Partial derivatives are taken once per calculation, not per sample.
    Curl { dq_dx: C, dp_dy: C },
}

impl<C> Integrand<C> {
    fn compile<E>(engine: &E, request: &CalculationRequest) -> Result<Self>
    where
        E: ExpressionEngine<Compiled = C>,
    {
        match request.mode {
            IntegrationMode::DirectIntegrand => Ok(Self::Direct(engine.compile(&request.field_q)?)),
            IntegrationMode::VectorField => {
                let p = engine.compile(&request.field_p)?;
                let q = engine.compile(&request.field_q)?;
                let dq_dx = engine.differentiate(&q, VAR_X)?;
                let dp_dy = engine.differentiate(&p, VAR_Y)?;
                debug!(
                    dq_dx = %engine.render(&dq_dx),
                    dp_dy = %engine.render(&dp_dy),
                    "Differentiated vector field"
                );
                Ok(Self::Curl { dq_dx, dp_dy })
            }
        }
    }

    fn value<E>(&self, engine: &E, x: f64, y: f64) -> Result<f64>
    where
        E: ExpressionEngine<Compiled = C>,
    {
        let bindings = [(VAR_X, x), (VAR_Y, y)];
        match self {
            Self::Direct(q) => engine.evaluate(q, &bindings),
            Self::Curl { dq_dx, dp_dy } => {
                Ok(engine.evaluate(dq_dx, &bindings)? - engine.evaluate(dp_dy, &bindings)?)
            }
        }
    }
}

fn run<E: ExpressionEngine>(
    engine: &E,
    request: &CalculationRequest,
    config: &IntegrationConfig,
    reporter: &dyn ProgressReporter,
    cancel: &CancelToken,
) -> Result<IntegralValue> {
    request.validate()?;
    config.validate()?;

    let step = config.step;
    let (x_min, x_max) = (request.x_range.min, request.x_range.max);
    debug!(
        mode = %request.mode,
        x_min,
        x_max,
        step,
        engine = engine.name(),
        "Starting double integration"
    );

    let lower = engine.compile(&request.curves.lower)?;
    let upper = engine.compile(&request.curves.upper)?;
    let integrand = Integrand::compile(engine, request)?;

    reporter.begin(column_estimate(x_min, x_max, step));

    let cell_area = step * step;
    let mut total = 0.0;
    let mut columns = 0usize;
    let mut samples = 0usize;

    let mut x = x_min;
    while x <= x_max {
        if cancel.is_cancelled() {
            info!(columns, "Integration cancelled");
            return Err(GreenError::Cancelled);
        }

        let y_min = engine.evaluate(&lower, &[(VAR_X, x)])?;
        let y_max = engine.evaluate(&upper, &[(VAR_X, x)])?;
        if !is_numeric(y_min) || !is_numeric(y_max) {
            warn!(x, y_min, y_max, "Boundary curve is not numeric");
            return Err(GreenError::InvalidBound { x });
        }

        // A zero-height column has no area, so it gets no samples either.
        if y_min < y_max {
            let mut y = y_min;
            while y <= y_max {
                if samples % CANCEL_CHECK_SAMPLES == 0 && cancel.is_cancelled() {
                    info!(columns, samples, "Integration cancelled mid-column");
                    return Err(GreenError::Cancelled);
                }
                let value = integrand.value(engine, x, y)?;
                if !is_numeric(value) {
                    warn!(x, y, value, "Integrand is not numeric");
                    return Err(GreenError::InvalidIntegrand { x, y });
                }
                total += value * cell_area;
                samples += 1;
                y = advance(y, step)?;
            }
        }

        columns += 1;
        reporter.advance(columns);
        x = advance(x, step)?;
    }

    reporter.finish();

    let value = round_to(total, config.decimals);
    info!(value, columns, samples, "Integration complete");

    Ok(IntegralValue {
        value,
        expression_label: expression_label(request),
        decimals: config.decimals,
        samples,
    })
}

/// Step the accumulator. Fails instead of spinning forever when `step` is
/// below the float resolution at `at`.
fn advance(at: f64, step: f64) -> Result<f64> {
    let next = at + step;
    if next == at {
        return Err(GreenError::InvalidStep(step));
    }
    Ok(next)
}

fn column_estimate(x_min: f64, x_max: f64, step: f64) -> usize {
    if x_max < x_min {
        0
    } else {
        ((x_max - x_min) / step).floor() as usize + 1
    }
}
