use serde::{Deserialize, Serialize};

use crate::error::{GreenError, Result};

/// What is being integrated over the region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationMode {
    /// Curl term `∂Q/∂x − ∂P/∂y` of the field `(P, Q)`.
    VectorField,
    /// `Q(x, y)` integrated directly.
    #[default]
    DirectIntegrand,
}

impl IntegrationMode {
    pub const ALL: &[Self] = &[Self::VectorField, Self::DirectIntegrand];

    pub fn needs_field_p(self) -> bool {
        matches!(self, Self::VectorField)
    }
}

impl std::fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VectorField => write!(f, "Vector Field (P, Q)"),
            Self::DirectIntegrand => write!(f, "Direct Integrand"),
        }
    }
}

/// Lower and upper edge of the region as functions of `x`.
///
/// `lower(x) <= upper(x)` is not required; where it fails the column is
/// simply empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCurves {
    pub lower: String,
    pub upper: String,
}

impl BoundaryCurves {
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }
}

/// Closed interval. `min > max` is allowed and means "no samples".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Everything a single calculation needs, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub mode: IntegrationMode,
    /// P(x, y); only read in [`IntegrationMode::VectorField`].
    #[serde(default)]
    pub field_p: String,
    /// Q(x, y); the integrand itself in [`IntegrationMode::DirectIntegrand`].
    #[serde(default)]
    pub field_q: String,
    pub curves: BoundaryCurves,
    pub x_range: Range,
}

impl CalculationRequest {
    pub fn direct(
        integrand: impl Into<String>,
        curves: BoundaryCurves,
        x_range: Range,
    ) -> Self {
        Self {
            mode: IntegrationMode::DirectIntegrand,
            field_p: String::new(),
            field_q: integrand.into(),
            curves,
            x_range,
        }
    }

    pub fn vector_field(
        field_p: impl Into<String>,
        field_q: impl Into<String>,
        curves: BoundaryCurves,
        x_range: Range,
    ) -> Self {
        Self {
            mode: IntegrationMode::VectorField,
            field_p: field_p.into(),
            field_q: field_q.into(),
            curves,
            x_range,
        }
    }

    /// Check that every field the mode needs was supplied.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.curves.lower.trim().is_empty() {
            missing.push("lower curve");
        }
        if self.curves.upper.trim().is_empty() {
            missing.push("upper curve");
        }
        if self.mode.needs_field_p() && self.field_p.trim().is_empty() {
            missing.push("P(x, y)");
        }
        if self.field_q.trim().is_empty() {
            missing.push("Q(x, y)");
        }
        if !self.x_range.is_finite() {
            missing.push("x limits");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GreenError::MissingInput(missing.join(", ")))
        }
    }
}
