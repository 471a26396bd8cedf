use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use greenint_core::expr::SymbolicEngine;
use greenint_core::integrate::{
    integrate_reported, BoundaryCurves, CalculationRequest, CancelToken, IntegrationMode,
    ProgressReporter, Range,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::load_config;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Integrate Q(x, y) directly
    Direct,
    /// Integrate ∂Q/∂x − ∂P/∂y of the field (P, Q)
    VectorField,
}

impl From<ModeArg> for IntegrationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Direct => IntegrationMode::DirectIntegrand,
            ModeArg::VectorField => IntegrationMode::VectorField,
        }
    }
}

#[derive(Args)]
pub struct IntegrateArgs {
    /// What to integrate [default: direct]
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// P(x, y), vector-field mode only
    #[arg(long)]
    pub p: Option<String>,

    /// Q(x, y), or the integrand in direct mode
    #[arg(long)]
    pub q: Option<String>,

    /// Lower boundary curve y = f(x)
    #[arg(long)]
    pub lower: Option<String>,

    /// Upper boundary curve y = g(x)
    #[arg(long)]
    pub upper: Option<String>,

    /// Start of the x-range [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// End of the x-range [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Grid step for both axes (overrides config)
    #[arg(long)]
    pub step: Option<f64>,

    /// Decimal digits of the result (overrides config)
    #[arg(long)]
    pub decimals: Option<u32>,

    /// Integration config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read the whole request from a TOML file instead of flags
    #[arg(long, conflicts_with_all = ["mode", "p", "q", "lower", "upper", "x_min", "x_max"])]
    pub request: Option<PathBuf>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

/// Drives an indicatif bar from the engine's per-column progress.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total_columns: usize) {
        self.pb.set_length(total_columns as u64);
        self.pb.set_message("Integrating");
    }

    fn advance(&self, columns_done: usize) {
        self.pb.set_position(columns_done as u64);
    }

    fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}

pub fn run(args: &IntegrateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(step) = args.step {
        config.step = step;
    }
    if let Some(decimals) = args.decimals {
        config.decimals = decimals;
    }
    config.validate().context("Invalid integration settings")?;

    let request = match args.request {
        Some(ref path) => load_request(path)?,
        None => request_from_args(args),
    };

    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len} columns")?
                .progress_chars("=> "),
        );
        pb
    };
    let reporter = BarReporter { pb };

    let start = Instant::now();
    let result = integrate_reported(
        &SymbolicEngine,
        &request,
        &config,
        &reporter,
        &CancelToken::new(),
    );
    let elapsed = start.elapsed();
    reporter.pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.to_response())?);
        return Ok(());
    }

    crate::summary::print_integration_summary(&request, &config, &result, elapsed);
    match result.message() {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}

fn request_from_args(args: &IntegrateArgs) -> CalculationRequest {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    CalculationRequest {
        mode: args.mode.unwrap_or(ModeArg::Direct).into(),
        field_p: text(&args.p),
        field_q: text(&args.q),
        curves: BoundaryCurves::new(text(&args.lower), text(&args.upper)),
        x_range: Range::new(args.x_min.unwrap_or(0.0), args.x_max.unwrap_or(1.0)),
    }
}

fn load_request(path: &Path) -> Result<CalculationRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    let request: CalculationRequest =
        toml::from_str(&contents).context("Invalid calculation request")?;
    debug!(path = %path.display(), mode = %request.mode, "Loaded request");
    Ok(request)
}
