//! Magic square CLI entry point

use anyhow::{Context, Result};
use chrono::Local;
use magicsquare::config::cli::Cli;
use magicsquare::config::{SearchConfig, SIZE};
use magicsquare::coordinator;
use magicsquare::output::text;
use magicsquare::search::SearchContext;
use magicsquare::signal;
use magicsquare::util::resource;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let context = Arc::new(SearchContext::<SIZE>::new());
    signal::install(context.stop_flag())
        .context("Failed to install interrupt handler")?;

    let started = Local::now();
    let cores = resource::cpu_count();
    text::print_banner(&started, cores);

    let config = SearchConfig::new(cores);

    let report = coordinator::run(&config, Arc::clone(&context))?;
    for worker in &report.workers {
        debug!(worker = worker.id, trials = worker.trials, found = worker.found, "worker summary");
    }

    text::print_results(&report);

    Ok(())
}
