use crate::config::IntegrationConfig;
use crate::consts::{DEFAULT_X_RANGE, RESET_X_RANGE};
use crate::display::GraphSnapshot;
use crate::expr::ExpressionEngine;
use crate::integrate::{
    integrate_reported, BoundaryCurves, CalculationRequest, CalculationResult, CancelToken,
    IntegralValue, IntegrationMode, NoOpReporter, Range,
};

/// Form state of an interactive calculator, plus what the last calculation
/// left behind.
///
/// Fields are public so front ends can bind widgets straight to them.
#[derive(Clone, Debug)]
pub struct CalculatorSession {
    pub mode: IntegrationMode,
    pub field_p: String,
    pub field_q: String,
    pub curve_lower: String,
    pub curve_upper: String,
    pub x_min: f64,
    pub x_max: f64,
    config: IntegrationConfig,
    last_result: Option<CalculationResult>,
    last_success: Option<IntegralValue>,
    graph: Option<GraphSnapshot>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(IntegrationConfig::default())
    }
}

impl CalculatorSession {
    pub fn new(config: IntegrationConfig) -> Self {
        Self {
            mode: IntegrationMode::default(),
            field_p: String::new(),
            field_q: String::new(),
            curve_lower: String::new(),
            curve_upper: String::new(),
            x_min: DEFAULT_X_RANGE.0,
            x_max: DEFAULT_X_RANGE.1,
            config,
            last_result: None,
            last_success: None,
            graph: None,
        }
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: IntegrationConfig) {
        self.config = config;
    }

    /// Snapshot of the current form as an engine request.
    pub fn request(&self) -> CalculationRequest {
        CalculationRequest {
            mode: self.mode,
            field_p: self.field_p.clone(),
            field_q: self.field_q.clone(),
            curves: BoundaryCurves::new(self.curve_lower.clone(), self.curve_upper.clone()),
            x_range: Range::new(self.x_min, self.x_max),
        }
    }

    /// Run the current form synchronously and commit the outcome.
    pub fn calculate<E: ExpressionEngine>(&mut self, engine: &E) -> &CalculationResult {
        let request = self.request();
        let result = integrate_reported(
            engine,
            &request,
            &self.config,
            &NoOpReporter,
            &CancelToken::new(),
        );
        self.apply(&request, result)
    }

    /// Commit a result computed for `request`, possibly on another thread.
    ///
    /// Success replaces the graph snapshot and clears the inputs that were
    /// used. Failure leaves the form, the last value and the graph alone.
    pub fn apply(
        &mut self,
        request: &CalculationRequest,
        result: CalculationResult,
    ) -> &CalculationResult {
        if let CalculationResult::Success(ref value) = result {
            self.graph = Some(GraphSnapshot::from_request(request));
            self.last_success = Some(value.clone());
            self.reset_fields(request.mode);
        }
        self.last_result.insert(result)
    }

    fn reset_fields(&mut self, mode: IntegrationMode) {
        if mode.needs_field_p() {
            self.field_p.clear();
        }
        self.field_q.clear();
        self.curve_lower.clear();
        self.curve_upper.clear();
        self.x_min = RESET_X_RANGE.0;
        self.x_max = RESET_X_RANGE.1;
    }

    /// Outcome of the most recent calculation, success or not.
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// Most recent successful value; survives later failures.
    pub fn last_success(&self) -> Option<&IntegralValue> {
        self.last_success.as_ref()
    }

    pub fn graph(&self) -> Option<&GraphSnapshot> {
        self.graph.as_ref()
    }
}
