mod common;

use approx::assert_relative_eq;
use greenint_core::config::IntegrationConfig;
use greenint_core::consts::{DEFAULT_STEP, MSG_CANCELLED, MSG_MISSING_INPUT, MSG_UNEXPECTED_FAILURE};
use greenint_core::expr::SymbolicEngine;
use greenint_core::integrate::{
    integrate, integrate_reported, BoundaryCurves, CalculationRequest, CalculationResult,
    CancelToken, FailureKind, NoOpReporter, Range,
};

use common::{unit_square_direct, CountingEngine, RecordingReporter};

fn run(request: &CalculationRequest) -> CalculationResult {
    integrate(&SymbolicEngine, request, DEFAULT_STEP)
}

fn value_of(request: &CalculationRequest, step: f64) -> f64 {
    let result = integrate(&SymbolicEngine, request, step);
    result
        .value()
        .unwrap_or_else(|| panic!("expected success, got {result:?}"))
}

// ---------------------------------------------------------------------------
// Successful integration
// ---------------------------------------------------------------------------

#[test]
fn test_constant_over_unit_square() {
    let result = run(&unit_square_direct("2"));
    let value = result.success().expect("success");

    assert_eq!(value.value, 2.0);
    assert_eq!(value.formatted_value(), "2.0000");
    assert_eq!(value.expression_label, "∬(2) dy dx, x ∈ [0, 1], y ∈ [0, 1]");
    assert_eq!(value.samples, 100 * 100);
}

#[test]
fn test_constant_over_rectangle() {
    let request = CalculationRequest::direct(
        "3",
        BoundaryCurves::new("0", "2"),
        Range::new(0.0, 1.5),
    );
    assert_relative_eq!(value_of(&request, DEFAULT_STEP), 9.0, epsilon = 0.15);
    assert_relative_eq!(value_of(&request, 0.0025), 9.0, epsilon = 0.04);
}

#[test]
fn test_product_converges_with_step() {
    let request = unit_square_direct("x * y");
    let coarse = value_of(&request, DEFAULT_STEP);
    let fine = value_of(&request, 0.0025);
    assert_relative_eq!(coarse, 0.25, epsilon = 0.01);
    assert_relative_eq!(fine, 0.25, epsilon = 0.003);
}

#[test]
fn test_region_between_curves() {
    // Area between y = x^2 and y = x on [0, 1] is 1/6.
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("x^2", "x"),
        Range::new(0.0, 1.0),
    );
    assert_relative_eq!(value_of(&request, 0.0025), 1.0 / 6.0, epsilon = 0.01);
}

#[test]
fn test_disc_area() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("-sqrt(1 - x^2)", "sqrt(1 - x^2)"),
        Range::new(-1.0, 1.0),
    );
    assert_relative_eq!(
        value_of(&request, DEFAULT_STEP),
        std::f64::consts::PI,
        epsilon = 0.1
    );
}

#[test]
fn test_repeat_calls_are_identical() {
    let request = unit_square_direct("sin(x) + y^2");
    assert_eq!(run(&request), run(&request));
}

#[test]
fn test_result_is_rounded_to_config_decimals() {
    let request = unit_square_direct("x * y");
    let config = IntegrationConfig {
        decimals: 2,
        ..IntegrationConfig::default()
    };
    let result = integrate_reported(
        &SymbolicEngine,
        &request,
        &config,
        &NoOpReporter,
        &CancelToken::new(),
    );
    let value = result.success().expect("success");
    assert_eq!(value.decimals, 2);
    assert_eq!(value.formatted_value().len(), "0.25".len());
    assert_eq!(value.value, (value.value * 100.0).round() / 100.0);
}

// ---------------------------------------------------------------------------
// Degenerate regions
// ---------------------------------------------------------------------------

#[test]
fn test_equal_curves_give_zero() {
    let request = CalculationRequest::direct(
        "5",
        BoundaryCurves::new("x", "x"),
        Range::new(0.0, 1.0),
    );
    let result = run(&request);
    let value = result.success().expect("success");
    assert_eq!(value.value, 0.0);
    assert_eq!(value.samples, 0);
}

#[test]
fn test_inverted_curves_give_zero() {
    let request = CalculationRequest::direct(
        "5",
        BoundaryCurves::new("1", "0"),
        Range::new(0.0, 1.0),
    );
    assert_eq!(run(&request).value(), Some(0.0));
}

#[test]
fn test_inverted_x_range_gives_zero() {
    let request = CalculationRequest::direct(
        "5",
        BoundaryCurves::new("0", "1"),
        Range::new(1.0, 0.0),
    );
    let result = run(&request);
    assert_eq!(result.value(), Some(0.0));
    assert_eq!(result.success().map(|v| v.samples), Some(0));
}

#[test]
fn test_negative_result_has_no_negative_zero() {
    let request = unit_square_direct("-0.00000001");
    let value = run(&request).value().expect("success");
    assert!(value.is_sign_positive());
    assert_eq!(value, 0.0);
}

// ---------------------------------------------------------------------------
// Vector field mode
// ---------------------------------------------------------------------------

#[test]
fn test_vector_field_matches_direct_curl() {
    let curves = BoundaryCurves::new("x^2", "x");
    let range = Range::new(0.0, 1.0);
    let field = CalculationRequest::vector_field("0", "x", curves.clone(), range);
    let direct = CalculationRequest::direct("1", curves, range);

    assert_eq!(run(&field).value(), run(&direct).value());
}

#[test]
fn test_greens_theorem_area_form() {
    // P = -y, Q = x has curl 2, so the result is twice the area.
    let request = CalculationRequest::vector_field(
        "-y",
        "x",
        BoundaryCurves::new("0", "1"),
        Range::new(0.0, 1.0),
    );
    let result = run(&request);
    assert_eq!(result.value(), Some(2.0));
    assert_eq!(
        result.success().map(|v| v.expression_label.as_str()),
        Some("∬(∂Q/∂x − ∂P/∂y) dy dx, x ∈ [0, 1], y ∈ [0, 1]")
    );
}

#[test]
fn test_vector_field_nonlinear() {
    // curl of (x y^2, x^2 y) is 2xy - 2xy = 0.
    let request = CalculationRequest::vector_field(
        "x y^2",
        "x^2 y",
        BoundaryCurves::new("0", "1 + x"),
        Range::new(0.0, 1.0),
    );
    assert_relative_eq!(value_of(&request, DEFAULT_STEP), 0.0, epsilon = 1e-9);
}

#[test]
fn test_direct_mode_ignores_field_p() {
    let mut request = unit_square_direct("2");
    request.field_p = "this is not parsed".into();
    assert_eq!(run(&request).value(), Some(2.0));
}

#[test]
fn test_derivatives_taken_once_per_calculation() {
    let engine = CountingEngine::default();
    let request = CalculationRequest::vector_field(
        "-y",
        "x",
        BoundaryCurves::new("0", "1"),
        Range::new(0.0, 1.0),
    );
    let result = integrate(&engine, &request, DEFAULT_STEP);

    assert!(result.is_success());
    assert_eq!(engine.differentiations(), 2);
    assert_eq!(engine.compiles(), 4);
}

#[test]
fn test_direct_mode_compiles_three_expressions() {
    let engine = CountingEngine::default();
    let result = integrate(&engine, &unit_square_direct("2"), DEFAULT_STEP);

    assert!(result.is_success());
    assert_eq!(engine.compiles(), 3);
    assert_eq!(engine.differentiations(), 0);
    // Two bounds per column plus one integrand value per cell.
    assert_eq!(engine.evaluations(), 2 * 100 + 100 * 100);
}

// ---------------------------------------------------------------------------
// Missing input
// ---------------------------------------------------------------------------

fn assert_missing(request: &CalculationRequest) {
    let result = run(request);
    assert_eq!(result.failure_kind(), Some(FailureKind::MissingInput));
    assert_eq!(result.message(), Some(MSG_MISSING_INPUT));
}

#[test]
fn test_missing_integrand() {
    assert_missing(&unit_square_direct(""));
    assert_missing(&unit_square_direct("   "));
}

#[test]
fn test_missing_curve() {
    let mut request = unit_square_direct("1");
    request.curves.upper.clear();
    assert_missing(&request);
}

#[test]
fn test_vector_field_needs_p() {
    let request = CalculationRequest::vector_field(
        "",
        "x",
        BoundaryCurves::new("0", "1"),
        Range::new(0.0, 1.0),
    );
    assert_missing(&request);
}

#[test]
fn test_non_finite_limits_are_missing() {
    let mut request = unit_square_direct("1");
    request.x_range.max = f64::NAN;
    assert_missing(&request);
}

#[test]
fn test_missing_input_checked_before_parsing() {
    let engine = CountingEngine::default();
    let mut request = unit_square_direct("");
    request.curves.lower = "((".into();
    let result = integrate(&engine, &request, DEFAULT_STEP);
    assert_eq!(result.failure_kind(), Some(FailureKind::MissingInput));
    assert_eq!(engine.compiles(), 0);
}

// ---------------------------------------------------------------------------
// Non-numeric bounds and integrands
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_bound_at_start() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("sqrt(-1 - x^2)", "1"),
        Range::new(0.0, 1.0),
    );
    let result = run(&request);
    assert_eq!(result.failure_kind(), Some(FailureKind::InvalidBound));
    assert_eq!(result.message(), Some("Invalid limits at x = 0"));
}

#[test]
fn test_invalid_bound_partway() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("0", "sqrt(0.5 - x)"),
        Range::new(0.0, 1.0),
    );
    let result = run(&request);
    assert_eq!(result.failure_kind(), Some(FailureKind::InvalidBound));
    let message = result.message().unwrap_or_default();
    assert!(message.starts_with("Invalid limits at x = 0.5"), "{message}");
}

#[test]
fn test_invalid_integrand() {
    let result = run(&unit_square_direct("1 / x"));
    assert_eq!(result.failure_kind(), Some(FailureKind::InvalidIntegrand));
    assert_eq!(
        result.message(),
        Some("Error evaluating the integrand at (x=0, y=0).")
    );
}

#[test]
fn test_invalid_integrand_reports_first_cell() {
    let result = run(&unit_square_direct("log(y - 0.5)"));
    assert_eq!(result.failure_kind(), Some(FailureKind::InvalidIntegrand));
    let message = result.message().unwrap_or_default();
    assert!(message.starts_with("Error evaluating the integrand at (x=0, y="), "{message}");
}

#[test]
fn test_infinite_bound_is_invalid() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("0", "1 / x"),
        Range::new(0.0, 1.0),
    );
    assert_eq!(run(&request).failure_kind(), Some(FailureKind::InvalidBound));
}

// ---------------------------------------------------------------------------
// Unexpected failures
// ---------------------------------------------------------------------------

fn assert_unexpected(result: &CalculationResult) {
    assert_eq!(result.failure_kind(), Some(FailureKind::UnexpectedFailure));
    assert_eq!(result.message(), Some(MSG_UNEXPECTED_FAILURE));
}

#[test]
fn test_syntax_error() {
    assert_unexpected(&run(&unit_square_direct("x +")));
    assert_unexpected(&run(&unit_square_direct("foo(x)")));
}

#[test]
fn test_deeply_nested_integrand() {
    let integrand = format!("{}x{}", "(".repeat(5_000), ")".repeat(5_000));
    assert_unexpected(&run(&unit_square_direct(&integrand)));
    let vector = CalculationRequest::vector_field(
        format!("{}y", "-".repeat(3_000)),
        "x",
        BoundaryCurves::new("0", "1"),
        Range::new(0.0, 1.0),
    );
    assert_unexpected(&run(&vector));
}

#[test]
fn test_undefined_variable() {
    assert_unexpected(&run(&unit_square_direct("x * z")));
}

#[test]
fn test_curve_may_not_use_y() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("0", "y"),
        Range::new(0.0, 1.0),
    );
    assert_unexpected(&run(&request));
}

#[test]
fn test_malformed_expression_fails_on_empty_range() {
    let request = CalculationRequest::direct(
        "x +",
        BoundaryCurves::new("0", "1"),
        Range::new(1.0, 0.0),
    );
    assert_unexpected(&run(&request));
}

#[test]
fn test_invalid_step() {
    let request = unit_square_direct("1");
    assert_unexpected(&integrate(&SymbolicEngine, &request, 0.0));
    assert_unexpected(&integrate(&SymbolicEngine, &request, -0.01));
    assert_unexpected(&integrate(&SymbolicEngine, &request, f64::NAN));
}

#[test]
fn test_step_below_float_resolution() {
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("0", "1"),
        Range::new(1e20, 1e20 + 1e5),
    );
    assert_unexpected(&integrate(&SymbolicEngine, &request, 1.0));
}

// ---------------------------------------------------------------------------
// Progress and cancellation
// ---------------------------------------------------------------------------

#[test]
fn test_progress_counts_columns() {
    let reporter = RecordingReporter::default();
    let result = integrate_reported(
        &SymbolicEngine,
        &unit_square_direct("1"),
        &IntegrationConfig::default(),
        &reporter,
        &CancelToken::new(),
    );

    assert!(result.is_success());
    let advances = reporter.advances();
    assert_eq!(advances.len(), 100);
    assert_eq!(advances, (1..=100).collect::<Vec<_>>());
    assert!(reporter.total().is_some());
    assert!(reporter.finished());
}

#[test]
fn test_cancelled_before_start() {
    let token = CancelToken::new();
    token.cancel();
    let reporter = RecordingReporter::default();
    let result = integrate_reported(
        &SymbolicEngine,
        &unit_square_direct("1"),
        &IntegrationConfig::default(),
        &reporter,
        &token,
    );

    assert_eq!(result.failure_kind(), Some(FailureKind::Cancelled));
    assert_eq!(result.message(), Some(MSG_CANCELLED));
    assert!(reporter.advances().is_empty());
    assert!(!reporter.finished());
}

#[test]
fn test_cancelled_between_columns() {
    let token = CancelToken::new();
    let reporter = RecordingReporter::cancelling_after(3, token.clone());
    let result = integrate_reported(
        &SymbolicEngine,
        &unit_square_direct("1"),
        &IntegrationConfig::default(),
        &reporter,
        &token,
    );

    assert_eq!(result.failure_kind(), Some(FailureKind::Cancelled));
    assert_eq!(reporter.advances(), vec![1, 2, 3]);
    assert!(!reporter.finished());
}

#[test]
fn test_cancelled_inside_tall_column() {
    // One column of 10^8 cells: finishing it would take seconds at least.
    let request = CalculationRequest::direct(
        "1",
        BoundaryCurves::new("0", "1e5"),
        Range::new(0.0, 0.0),
    );
    let config = IntegrationConfig {
        step: 0.001,
        ..IntegrationConfig::default()
    };
    let token = CancelToken::new();
    let reporter = RecordingReporter::default();

    let canceller = {
        let token = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            token.cancel();
        })
    };
    let started = std::time::Instant::now();
    let result = integrate_reported(&SymbolicEngine, &request, &config, &reporter, &token);
    let elapsed = started.elapsed();
    canceller.join().unwrap();

    assert_eq!(result.failure_kind(), Some(FailureKind::Cancelled));
    assert!(reporter.advances().is_empty());
    assert!(elapsed < std::time::Duration::from_secs(2), "took {elapsed:?}");
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn test_success_response_json() {
    let response = run(&unit_square_direct("2")).to_response();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "result": "2.0000",
            "expressionLabel": "∬(2) dy dx, x ∈ [0, 1], y ∈ [0, 1]",
        })
    );
}

#[test]
fn test_error_response_json() {
    let response = run(&unit_square_direct("")).to_response();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({ "error": MSG_MISSING_INPUT }));
}

#[test]
fn test_request_from_json() {
    let request: CalculationRequest = serde_json::from_str(
        r#"{
            "mode": "VectorField",
            "field_p": "-y",
            "field_q": "x",
            "curves": { "lower": "0", "upper": "1" },
            "x_range": { "min": 0.0, "max": 1.0 }
        }"#,
    )
    .unwrap();
    assert_eq!(run(&request).value(), Some(2.0));
}
