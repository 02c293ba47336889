//! Magic square - parallel random search for a 3x3 magic square of squares
//!
//! Looks for nine distinct integers in `[MIN_VALUE, MAX_VALUE]` whose squares,
//! laid out in a 3x3 grid, give the same sum on every row, column and both
//! diagonals. One worker thread per processing unit draws random grids until
//! a worker finds one or the process is interrupted.
//!
//! # Architecture
//!
//! - **Grids**: `square` populates, squares and checks fixed-size grids
//! - **Generators**: `generator` supplies candidate cell values per worker
//! - **Shared state**: `search` holds the trial counter, stop flag and winner
//! - **Workers**: `worker` runs the trial loop on one thread
//! - **Coordination**: `coordinator` spawns, joins and reports
//! - **Interrupts**: `signal` turns SIGINT/SIGTERM into a graceful stop

pub mod config;
pub mod coordinator;
pub mod generator;
pub mod output;
pub mod search;
pub mod signal;
pub mod square;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::SearchConfig;
pub use search::SearchContext;
pub use square::Square;

/// Result type used throughout the crate
pub type Result<T> = anyhow::Result<T>;
