//! Folio CLI - parse archived public-domain texts into paragraph records.

use clap::Parser;
use folio_cli::{output, Cli, Config, Runner};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> folio_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    if cli.save_config {
        match cli.config.as_deref() {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
    }

    let runner = Runner::new(config).with_progress(cli.progress);
    let summary = runner.run()?;

    let color = std::io::stdout().is_terminal();
    println!("{}", output::render_summary(&summary, color));

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
