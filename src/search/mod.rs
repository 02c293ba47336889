//! Shared search state
//!
//! Workers share exactly three things, all held by a [`SearchContext`]:
//!
//! - the trial counter, incremented once per trial
//! - the stop flag, raised by the winning worker or by the interrupt handler
//! - the winner slot, holding the first solution found
//!
//! Everything else (grids, random generators) is owned by a single worker.
//! The context is created by the caller and handed to every worker through an
//! `Arc`; there is no process-wide search state.

use crate::square::Square;
use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// State shared by all workers of one search
#[derive(Debug)]
pub struct SearchContext<const N: usize> {
    /// Trials started by all workers. Padded to its own cache line since every
    /// worker writes it on every trial.
    tries: CachePadded<AtomicU64>,

    /// Once true, never false. `Arc` so the interrupt handler can hold it too.
    stop: Arc<AtomicBool>,

    /// First solution claimed, as drawn (before squaring)
    winner: OnceLock<Square<N>>,
}

impl<const N: usize> SearchContext<N> {
    /// Fresh context: zero trials, stop flag down, no solution
    pub fn new() -> Self {
        Self::with_stop_flag(Arc::new(AtomicBool::new(false)))
    }

    /// Fresh context observing an existing stop flag
    ///
    /// Lets the interrupt handler be installed before the context exists.
    pub fn with_stop_flag(stop: Arc<AtomicBool>) -> Self {
        Self {
            tries: CachePadded::new(AtomicU64::new(0)),
            stop,
            winner: OnceLock::new(),
        }
    }

    /// Count one trial, returning the new total
    #[inline]
    pub fn record_trial(&self) -> u64 {
        self.tries.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Trials counted so far
    pub fn tries(&self) -> u64 {
        self.tries.load(Ordering::Relaxed)
    }

    /// Whether workers should stop searching
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Raise the stop flag
    ///
    /// Returns true only for the call that actually moved the flag from false
    /// to true.
    pub fn request_stop(&self) -> bool {
        !self.stop.swap(true, Ordering::Relaxed)
    }

    /// Handle on the stop flag, for the interrupt handler
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Try to record `square` as the solution and stop the search
    ///
    /// The first claim wins. Returns false if another worker already claimed
    /// a solution, in which case `square` is discarded.
    pub fn claim_solution(&self, square: Square<N>) -> bool {
        if self.winner.set(square).is_err() {
            return false;
        }
        self.request_stop();
        true
    }

    /// The claimed solution, if any
    pub fn solution(&self) -> Option<Square<N>> {
        self.winner.get().copied()
    }
}

impl<const N: usize> Default for SearchContext<N> {
    fn default() -> Self {
        Self::new()
    }
}
