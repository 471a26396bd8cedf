use super::request::{CalculationRequest, IntegrationMode};

/// Describe what a request integrates, e.g.
/// `∬(2) dy dx, x ∈ [0, 1], y ∈ [0, 1]`.
pub fn expression_label(request: &CalculationRequest) -> String {
    let integrand = match request.mode {
        IntegrationMode::VectorField => "∂Q/∂x − ∂P/∂y",
        IntegrationMode::DirectIntegrand => request.field_q.as_str(),
    };
    format!(
        "∬({integrand}) dy dx, x ∈ [{}, {}], y ∈ [{}, {}]",
        request.x_range.min, request.x_range.max, request.curves.lower, request.curves.upper
    )
}

/// Round half away from zero to `decimals` digits. Negative zero becomes zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
