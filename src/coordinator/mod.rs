//! Coordinator module
//!
//! Spawns one worker thread per configured worker, waits for all of them and
//! aggregates the result into a [`SearchReport`].
//!
//! # Example
//!
//! ```
//! use magicsquare::config::SearchConfig;
//! use magicsquare::coordinator::{self, SearchOutcome};
//! use magicsquare::search::SearchContext;
//! use std::sync::Arc;
//!
//! // Two workers, 100 trials each, on the default 1..=1000 range
//! let config = SearchConfig::new(2).with_max_trials(100);
//! let ctx = Arc::new(SearchContext::<3>::new());
//! let report = coordinator::run(&config, ctx)?;
//!
//! assert_eq!(report.tries, 200);
//! assert_eq!(report.outcome, SearchOutcome::Exhausted);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::validator::validate_config;
use crate::config::SearchConfig;
use crate::generator::uniform::UniformGenerator;
use crate::generator::ValueGenerator;
use crate::search::SearchContext;
use crate::square::Square;
use crate::util::time::calculate_rate;
use crate::worker::{Worker, WorkerStats};
use crate::Result;
use anyhow::Context;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<const N: usize> {
    /// A worker found this grid (values before squaring)
    Found(Square<N>),
    /// The stop flag was raised without a solution (interrupt)
    Interrupted,
    /// Every worker spent its trial budget
    Exhausted,
}

/// Aggregated result of a search
#[derive(Debug, Clone)]
pub struct SearchReport<const N: usize> {
    /// Trials performed by all workers
    pub tries: u64,
    /// Wall-clock time from first spawn to last join
    pub elapsed: Duration,
    pub outcome: SearchOutcome<N>,
    /// Per-worker statistics, in worker ID order
    pub workers: Vec<WorkerStats>,
}

impl<const N: usize> SearchReport<N> {
    /// Trials per second over the whole search
    pub fn rate(&self) -> f64 {
        calculate_rate(self.tries, self.elapsed)
    }

    /// The solution, if one was found
    pub fn solution(&self) -> Option<Square<N>> {
        match self.outcome {
            SearchOutcome::Found(square) => Some(square),
            _ => None,
        }
    }
}

/// Raises the stop flag if the owning worker thread unwinds
struct StopOnPanic<'a, const N: usize>(&'a SearchContext<N>);

impl<const N: usize> Drop for StopOnPanic<'_, N> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.request_stop();
        }
    }
}

/// Run the search with entropy-seeded uniform generators
pub fn run<const N: usize>(
    config: &SearchConfig,
    ctx: Arc<SearchContext<N>>,
) -> Result<SearchReport<N>> {
    let (min, max) = (config.min_value, config.max_value);
    run_with(config, ctx, move |_| UniformGenerator::new(min, max))
}

/// Run the search, building each worker's generator with `make_generator`
///
/// `make_generator` receives the worker ID. The configuration is validated
/// before any thread is spawned.
pub fn run_with<const N: usize, G, F>(
    config: &SearchConfig,
    ctx: Arc<SearchContext<N>>,
    make_generator: F,
) -> Result<SearchReport<N>>
where
    G: ValueGenerator + 'static,
    F: Fn(usize) -> G,
{
    validate_config(config, N).context("Configuration validation failed")?;

    info!(size = N, %config, "starting search");
    let start = Instant::now();

    // Spawn worker threads
    let mut handles = Vec::with_capacity(config.workers);
    let mut failure = None;
    for id in 0..config.workers {
        let worker_ctx = Arc::clone(&ctx);
        let mut worker = Worker::with_generator(id, make_generator(id), config.max_trials);

        let spawned = thread::Builder::new()
            .name(format!("worker-{}", id))
            .spawn(move || {
                let _guard = StopOnPanic(&worker_ctx);
                worker.run(&worker_ctx)
            })
            .with_context(|| format!("Failed to spawn worker {}", id));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                error!(worker = id, "{:#}", e);
                ctx.request_stop();
                failure = Some(e);
                break;
            }
        }
    }
    debug!(workers = handles.len(), "all workers spawned");

    // Wait for all workers to complete, even after a failure
    let mut workers = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.join() {
            Ok(stats) => workers.push(stats),
            Err(_) => {
                ctx.request_stop();
                failure.get_or_insert_with(|| anyhow::anyhow!("Worker thread panicked"));
            }
        }
    }

    if let Some(e) = failure {
        return Err(e);
    }

    let elapsed = start.elapsed();
    let outcome = match ctx.solution() {
        Some(square) => SearchOutcome::Found(square),
        None if ctx.should_stop() => SearchOutcome::Interrupted,
        None => SearchOutcome::Exhausted,
    };

    Ok(SearchReport {
        tries: ctx.tries(),
        elapsed,
        outcome,
        workers,
    })
}
