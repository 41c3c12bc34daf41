use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use treegen_cli::Args;

fn main() -> Result<()> {
    // Colors only on a terminal, unless forced
    let should_use_colors = std::env::var("FORCE_COLOR").is_ok()
        || (std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err());
    colored::control::set_override(should_use_colors);

    let args = Args::parse();
    init_logging(args.verbose);

    let output = treegen_cli::run(&args)?;
    print!("{output}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
