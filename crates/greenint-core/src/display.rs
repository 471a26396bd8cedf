//! Boundary-curve data for charts.
//!
//! The renderer owns the snapshot of the last successful calculation and
//! resamples it here at its own resolution.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DisplayConfig;
use crate::consts::{MAX_DISPLAY_SAMPLES, PARALLEL_SAMPLE_THRESHOLD, VAR_X};
use crate::error::Result;
use crate::expr::ExpressionEngine;
use crate::integrate::{BoundaryCurves, CalculationRequest, Range};

/// Curves and x-range of the most recent successful calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub curves: BoundaryCurves,
    pub x_range: Range,
}

impl GraphSnapshot {
    pub fn from_request(request: &CalculationRequest) -> Self {
        Self {
            curves: request.curves.clone(),
            x_range: request.x_range,
        }
    }
}

/// Resampled boundary curves, one entry per x.
///
/// Non-numeric values are kept as they came out of the evaluator; charts
/// decide how to draw gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveSamples {
    pub x: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl CurveSamples {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn lower_points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.lower).map(|(&x, &y)| [x, y]).collect()
    }

    pub fn upper_points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.upper).map(|(&x, &y)| [x, y]).collect()
    }
}

/// Number of display samples covering `[x_min, x_max + x_extension]`.
pub fn display_sample_count(x_range: Range, display: &DisplayConfig) -> usize {
    let end = x_range.max + display.x_extension;
    if !(end >= x_range.min) || !(display.step > 0.0) {
        return 0;
    }
    // Tolerate the last position landing a hair past `end`.
    let intervals = ((end - x_range.min) / display.step + 1e-9).floor();
    (intervals as usize).saturating_add(1).min(MAX_DISPLAY_SAMPLES)
}

/// Evaluate both snapshot curves over the display range.
///
/// Positions are `x_min + i * step`, so long ranges do not drift.
pub fn sample_curves<E: ExpressionEngine>(
    engine: &E,
    snapshot: &GraphSnapshot,
    display: &DisplayConfig,
) -> Result<CurveSamples> {
    let lower = engine.compile(&snapshot.curves.lower)?;
    let upper = engine.compile(&snapshot.curves.upper)?;

    let count = display_sample_count(snapshot.x_range, display);
    let xs: Vec<f64> = (0..count)
        .map(|i| snapshot.x_range.min + i as f64 * display.step)
        .collect();

    let eval_pair = |&x: &f64| -> Result<(f64, f64)> {
        Ok((
            engine.evaluate(&lower, &[(VAR_X, x)])?,
            engine.evaluate(&upper, &[(VAR_X, x)])?,
        ))
    };

    let pairs: Vec<(f64, f64)> = if count >= PARALLEL_SAMPLE_THRESHOLD {
        xs.par_iter().map(eval_pair).collect::<Result<_>>()?
    } else {
        xs.iter().map(eval_pair).collect::<Result<_>>()?
    };

    debug!(samples = count, "Resampled boundary curves");

    let (lower, upper): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    Ok(CurveSamples { x: xs, lower, upper })
}
