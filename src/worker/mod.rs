//! Worker thread implementation
//!
//! A [`Worker`] is the unit of execution of the search. Each worker runs on
//! its own thread, owns its own value generator, and repeats trials until the
//! shared stop flag is raised (by itself, by another worker, or by the
//! interrupt handler) or its optional trial budget runs out.
//!
//! # Trial
//!
//! 1. Count the trial in the shared counter
//! 2. Populate the worker's grid with distinct values
//! 3. Square a copy of it
//! 4. If the squared copy is magic, claim the solution and stop
//!
//! # Example
//!
//! ```
//! use magicsquare::generator::sequence::SequenceGenerator;
//! use magicsquare::search::SearchContext;
//! use magicsquare::worker::Worker;
//!
//! // Every 1x1 grid is magic, so the first trial succeeds
//! let ctx = SearchContext::<1>::new();
//! let mut worker = Worker::with_generator(0, SequenceGenerator::new([7]), None);
//! let stats = worker.run(&ctx);
//!
//! assert!(stats.found);
//! assert_eq!(stats.trials, 1);
//! assert_eq!(ctx.solution().map(|s| s.get(0, 0)), Some(7));
//! ```

use crate::config::SearchConfig;
use crate::generator::uniform::UniformGenerator;
use crate::generator::ValueGenerator;
use crate::output::text;
use crate::search::SearchContext;
use crate::square::Square;
use crate::util::time::{calculate_rate, format_rate};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics returned by a worker when its loop ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerStats {
    /// Worker ID
    pub id: usize,
    /// Trials this worker performed
    pub trials: u64,
    /// Whether this worker's solution was the one recorded
    pub found: bool,
    /// Time spent in the loop
    pub duration: Duration,
}

/// Search worker, generic over its value source
///
/// # Thread Safety
///
/// A worker owns its generator and grid. The only state it shares with other
/// workers is the [`SearchContext`] passed to [`run`](Worker::run).
pub struct Worker<G> {
    /// Worker ID (for identification in logs)
    id: usize,

    /// Source of candidate cell values
    generator: G,

    /// Trials allowed before giving up; `None` runs until stopped
    max_trials: Option<u64>,
}

impl Worker<UniformGenerator> {
    /// Create a worker drawing uniform values from an entropy-seeded generator
    ///
    /// # Panics
    ///
    /// Panics if the configured range is empty; validate the configuration first.
    pub fn new(id: usize, config: &SearchConfig) -> Self {
        let generator = UniformGenerator::new(config.min_value, config.max_value);
        Self::with_generator(id, generator, config.max_trials)
    }
}

impl<G: ValueGenerator> Worker<G> {
    /// Create a worker with an explicit generator
    pub fn with_generator(id: usize, generator: G, max_trials: Option<u64>) -> Self {
        Self {
            id,
            generator,
            max_trials,
        }
    }

    /// Worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Run trials until the stop flag is raised or the trial budget is spent
    ///
    /// The stop flag is checked before every trial, so a worker started with
    /// the flag already raised performs no trial at all.
    pub fn run<const N: usize>(&mut self, ctx: &SearchContext<N>) -> WorkerStats {
        let start = Instant::now();
        let mut stats = WorkerStats {
            id: self.id,
            ..WorkerStats::default()
        };
        let mut square = Square::<N>::empty();

        debug!(worker = self.id, "worker started");

        while !ctx.should_stop() {
            if self.max_trials.is_some_and(|max| stats.trials >= max) {
                debug!(worker = self.id, trials = stats.trials, "trial budget spent");
                break;
            }

            ctx.record_trial();
            stats.trials += 1;

            square.populate(&mut self.generator);
            let squared = square.squared();

            if !squared.is_magic() {
                continue;
            }

            if ctx.claim_solution(square) {
                stats.found = true;
                text::print_found(&square);
                info!(
                    worker = self.id,
                    trials = stats.trials,
                    sum = ?squared.magic_sum(),
                    "magic square found"
                );
            } else {
                debug!(worker = self.id, square = %square, "late solution discarded");
            }
            break;
        }

        stats.duration = start.elapsed();
        debug!(
            worker = self.id,
            trials = stats.trials,
            rate = %format_rate(calculate_rate(stats.trials, stats.duration)),
            "worker finished"
        );

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sequence::SequenceGenerator;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    /// Euler's 4x4 magic square of squares, row-major roots
    const EULER: [u32; 16] = [68, 29, 41, 37, 17, 31, 79, 32, 59, 28, 23, 61, 11, 77, 8, 49];

    #[test]
    fn test_worker_creation() {
        let config = SearchConfig::new(1);
        let worker = Worker::new(3, &config);
        assert_eq!(worker.id(), 3);
        assert_eq!(worker.max_trials, None);
    }

    #[test]
    fn test_prestopped_performs_no_trials() {
        let ctx = SearchContext::<3>::new();
        ctx.request_stop();

        let mut worker = Worker::new(0, &SearchConfig::new(1));
        let stats = worker.run(&ctx);

        assert_eq!(stats.trials, 0);
        assert!(!stats.found);
        assert_eq!(ctx.tries(), 0);
    }

    #[test]
    fn test_trial_budget() {
        let ctx = SearchContext::<3>::new();
        let config = SearchConfig::new(1).with_max_trials(250);

        let stats = Worker::new(0, &config).run(&ctx);

        assert_eq!(stats.trials, 250);
        assert_eq!(ctx.tries(), 250);
        assert!(!ctx.should_stop());
        assert_eq!(ctx.solution(), None);
    }

    #[test]
    fn test_finds_scripted_solution() {
        // First trial draws 1..=16 in order (not magic once squared), the
        // second draws Euler's square
        let mut script: Vec<u32> = (1..=16).collect();
        script.extend_from_slice(&EULER);

        let ctx = SearchContext::<4>::new();
        let mut worker = Worker::with_generator(0, SequenceGenerator::new(script), Some(10));
        let stats = worker.run(&ctx);

        assert!(stats.found);
        assert_eq!(stats.trials, 2);
        assert_eq!(ctx.tries(), 2);
        assert!(ctx.should_stop());

        let solution = ctx.solution().unwrap();
        assert_eq!(
            solution.to_string(),
            "[[68,29,41,37],[17,31,79,32],[59,28,23,61],[11,77,8,49]]"
        );
        assert_eq!(solution.squared().magic_sum(), Some(8515));
    }

    #[test]
    fn test_late_solution_discarded() {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = SearchContext::<1>::with_stop_flag(Arc::clone(&flag));
        assert!(ctx.claim_solution(Square::from_rows([[1]])));

        // Lower the flag again so the worker runs into a second discovery
        flag.store(false, Ordering::Relaxed);
        let stats = Worker::with_generator(1, SequenceGenerator::new([2]), None).run(&ctx);

        assert_eq!(stats.trials, 1);
        assert!(!stats.found);
        assert_eq!(ctx.solution(), Some(Square::from_rows([[1]])));
    }

    #[test]
    fn test_concurrent_workers_count_every_trial() {
        let ctx = Arc::new(SearchContext::<3>::new());
        let config = SearchConfig::new(4).with_max_trials(2_000);

        let handles: Vec<_> = (0..4)
            .map(|id| {
                let ctx = Arc::clone(&ctx);
                let config = config.clone();
                thread::spawn(move || Worker::new(id, &config).run(&*ctx))
            })
            .collect();

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap().trials).sum();

        assert_eq!(total, 8_000);
        assert_eq!(ctx.tries(), 8_000);
    }

    #[test]
    fn test_external_stop_ends_loop() {
        let ctx = Arc::new(SearchContext::<3>::new());

        let runner = {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || Worker::new(0, &SearchConfig::new(1)).run(&*ctx))
        };

        while ctx.tries() < 100 {
            thread::yield_now();
        }
        ctx.request_stop();

        let stats = runner.join().unwrap();
        assert!(stats.trials >= 100);
        assert_eq!(stats.trials, ctx.tries());
        assert!(!stats.found);
    }
}
