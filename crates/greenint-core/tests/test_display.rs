use approx::assert_relative_eq;
use greenint_core::config::DisplayConfig;
use greenint_core::consts::MAX_DISPLAY_SAMPLES;
use greenint_core::display::{display_sample_count, sample_curves, GraphSnapshot};
use greenint_core::expr::SymbolicEngine;
use greenint_core::integrate::{BoundaryCurves, CalculationRequest, Range};

fn snapshot(lower: &str, upper: &str, min: f64, max: f64) -> GraphSnapshot {
    GraphSnapshot {
        curves: BoundaryCurves::new(lower, upper),
        x_range: Range::new(min, max),
    }
}

// ---------------------------------------------------------------------------
// Sample count
// ---------------------------------------------------------------------------

#[test]
fn test_default_sample_count() {
    // [0, 1] extended by 1.0 at 0.05 spacing.
    let count = display_sample_count(Range::new(0.0, 1.0), &DisplayConfig::default());
    assert_eq!(count, 41);
}

#[test]
fn test_sample_count_without_extension() {
    let display = DisplayConfig {
        step: 0.25,
        x_extension: 0.0,
    };
    assert_eq!(display_sample_count(Range::new(-1.0, 1.0), &display), 9);
    assert_eq!(display_sample_count(Range::new(2.0, 2.0), &display), 1);
}

#[test]
fn test_sample_count_empty_when_inverted() {
    let display = DisplayConfig {
        step: 0.1,
        x_extension: 0.5,
    };
    assert_eq!(display_sample_count(Range::new(3.0, 1.0), &display), 0);
}

#[test]
fn test_sample_count_is_capped() {
    let display = DisplayConfig {
        step: 1e-9,
        x_extension: 0.0,
    };
    assert_eq!(
        display_sample_count(Range::new(0.0, 1000.0), &display),
        MAX_DISPLAY_SAMPLES
    );
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

#[test]
fn test_samples_follow_curves() {
    let samples = sample_curves(
        &SymbolicEngine,
        &snapshot("x^2", "x + 1", 0.0, 1.0),
        &DisplayConfig::default(),
    )
    .unwrap();

    assert_eq!(samples.len(), 41);
    assert_relative_eq!(samples.x[0], 0.0);
    assert_relative_eq!(samples.x[40], 2.0, epsilon = 1e-12);
    for i in 0..samples.len() {
        let x = samples.x[i];
        assert_relative_eq!(samples.lower[i], x * x, epsilon = 1e-12);
        assert_relative_eq!(samples.upper[i], x + 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_positions_do_not_drift() {
    let display = DisplayConfig {
        step: 0.1,
        x_extension: 0.0,
    };
    let samples = sample_curves(&SymbolicEngine, &snapshot("0", "1", 0.0, 100.0), &display).unwrap();
    assert_eq!(samples.len(), 1001);
    assert_eq!(samples.x[1000], 1000.0 * 0.1);
}

#[test]
fn test_parallel_path_matches_sequential_values() {
    let display = DisplayConfig {
        step: 0.05,
        x_extension: 0.0,
    };
    // 4001 samples, above the parallel threshold.
    let samples =
        sample_curves(&SymbolicEngine, &snapshot("sin(x)", "cos(x)", 0.0, 200.0), &display)
            .unwrap();

    assert_eq!(samples.len(), 4001);
    for (i, &x) in samples.x.iter().enumerate() {
        assert_eq!(samples.lower[i], x.sin());
        assert_eq!(samples.upper[i], x.cos());
    }
}

#[test]
fn test_non_numeric_values_pass_through() {
    let display = DisplayConfig {
        step: 0.5,
        x_extension: 0.0,
    };
    let samples = sample_curves(&SymbolicEngine, &snapshot("sqrt(x)", "1", -1.0, 1.0), &display)
        .unwrap();

    assert_eq!(samples.len(), 5);
    assert!(samples.lower[0].is_nan());
    assert!(samples.lower[1].is_nan());
    assert_eq!(samples.lower[2], 0.0);
    assert_eq!(samples.lower[4], 1.0);
}

#[test]
fn test_empty_range_gives_no_samples() {
    let display = DisplayConfig {
        step: 0.1,
        x_extension: 0.0,
    };
    let samples = sample_curves(&SymbolicEngine, &snapshot("0", "1", 1.0, 0.0), &display).unwrap();
    assert!(samples.is_empty());
    assert!(samples.lower_points().is_empty());
}

#[test]
fn test_invalid_curve_is_an_error() {
    let result = sample_curves(
        &SymbolicEngine,
        &snapshot("x +", "1", 0.0, 1.0),
        &DisplayConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_point_pairs() {
    let display = DisplayConfig {
        step: 1.0,
        x_extension: 0.0,
    };
    let samples = sample_curves(&SymbolicEngine, &snapshot("-x", "2x", 0.0, 2.0), &display).unwrap();
    assert_eq!(samples.lower_points(), vec![[0.0, 0.0], [1.0, -1.0], [2.0, -2.0]]);
    assert_eq!(samples.upper_points(), vec![[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]);
}

#[test]
fn test_snapshot_from_request() {
    let request = CalculationRequest::direct(
        "x y",
        BoundaryCurves::new("0", "x"),
        Range::new(-1.0, 3.0),
    );
    let snap = GraphSnapshot::from_request(&request);
    assert_eq!(snap.curves, request.curves);
    assert_eq!(snap.x_range, Range::new(-1.0, 3.0));
}
