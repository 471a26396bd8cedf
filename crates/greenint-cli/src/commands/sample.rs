use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use greenint_core::consts::{LOWER_CURVE_LABEL, UPPER_CURVE_LABEL};
use greenint_core::display::{sample_curves, GraphSnapshot};
use greenint_core::expr::SymbolicEngine;
use greenint_core::integrate::{BoundaryCurves, Range};

use super::load_config;

#[derive(Args)]
pub struct SampleArgs {
    /// Lower boundary curve y = f(x)
    pub lower: String,

    /// Upper boundary curve y = g(x)
    pub upper: String,

    /// Start of the x-range
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub x_min: f64,

    /// End of the x-range
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub x_max: f64,

    /// Spacing between samples (overrides config)
    #[arg(long)]
    pub step: Option<f64>,

    /// How far past x-max to sample (overrides config)
    #[arg(long)]
    pub extension: Option<f64>,

    /// Integration config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print samples as JSON arrays
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(step) = args.step {
        config.display.step = step;
    }
    if let Some(extension) = args.extension {
        config.display.x_extension = extension;
    }
    config.validate().context("Invalid display settings")?;

    let snapshot = GraphSnapshot {
        curves: BoundaryCurves::new(args.lower.clone(), args.upper.clone()),
        x_range: Range::new(args.x_min, args.x_max),
    };
    let samples = sample_curves(&SymbolicEngine, &snapshot, &config.display)
        .context("Failed to sample boundary curves")?;

    if args.json {
        let json = serde_json::json!({
            "x": samples.x,
            "lower": samples.lower,
            "upper": samples.upper,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "{:>12}  {:>20}  {:>20}",
        "x", LOWER_CURVE_LABEL, UPPER_CURVE_LABEL
    );
    println!("{}", "-".repeat(56));
    for i in 0..samples.len() {
        println!(
            "{:>12.4}  {:>20.6}  {:>20.6}",
            samples.x[i], samples.lower[i], samples.upper[i]
        );
    }

    Ok(())
}
