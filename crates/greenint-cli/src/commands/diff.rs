use anyhow::{Context, Result};
use clap::Args;
use greenint_core::expr::differentiate_str;

#[derive(Args)]
pub struct DiffArgs {
    /// Expression to differentiate, e.g. "x^2 y"
    pub expr: String,

    /// Variable to differentiate with respect to
    #[arg(long, default_value = "x")]
    pub var: String,
}

pub fn run(args: &DiffArgs) -> Result<()> {
    let derivative = differentiate_str(&args.expr, &args.var)
        .with_context(|| format!("Cannot differentiate `{}`", args.expr))?;
    println!("{derivative}");
    Ok(())
}
