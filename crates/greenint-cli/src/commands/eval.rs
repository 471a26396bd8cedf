use anyhow::{Context, Result};
use clap::Args;
use greenint_core::expr::{evaluate_str, is_numeric};

#[derive(Args)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. "sqrt(x^2 + y^2)"
    pub expr: String,

    /// Variable bindings as name=value, e.g. x=1.5 y=2
    #[arg(value_parser = parse_binding)]
    pub bindings: Vec<(String, f64)>,
}

fn parse_binding(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

pub fn run(args: &EvalArgs) -> Result<()> {
    let bindings: Vec<(&str, f64)> = args
        .bindings
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();

    let value = evaluate_str(&args.expr, &bindings)
        .with_context(|| format!("Cannot evaluate `{}`", args.expr))?;

    if is_numeric(value) {
        println!("{value}");
    } else {
        println!("non-numeric ({value})");
    }
    Ok(())
}
