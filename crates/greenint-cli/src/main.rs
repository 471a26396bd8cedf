mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greenint", about = "Double integrals over curve-bounded regions")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate a field or integrand between two curves
    Integrate(commands::integrate::IntegrateArgs),
    /// Resample the boundary curves for plotting
    Sample(commands::sample::SampleArgs),
    /// Differentiate an expression symbolically
    Diff(commands::diff::DiffArgs),
    /// Evaluate an expression
    Eval(commands::eval::EvalArgs),
    /// Print or save the default integration config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Integrate(args) => commands::integrate::run(args),
        Commands::Sample(args) => commands::sample::run(args),
        Commands::Diff(args) => commands::diff::run(args),
        Commands::Eval(args) => commands::eval::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
