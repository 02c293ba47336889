//! Processing unit discovery
//!
//! The search runs one worker per processing unit the process may use.

use tracing::debug;

/// Number of workers to run: one per processing unit available to the process
///
/// Asks the standard library first (it honours CPU affinity masks and cgroup
/// quotas), then falls back to the `num_cpus` crate. Never returns less than 1.
pub fn cpu_count() -> usize {
    let count = match std::thread::available_parallelism() {
        Ok(count) => count.get(),
        Err(e) => {
            debug!(error = %e, "available_parallelism failed, falling back to num_cpus");
            num_cpus::get()
        }
    };

    at_least_one(count)
}

fn at_least_one(count: usize) -> usize {
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_count_positive() {
        assert!(cpu_count() >= 1);
    }

    #[test]
    fn test_zero_reported_falls_back_to_one() {
        assert_eq!(at_least_one(0), 1);
        assert_eq!(at_least_one(16), 16);
    }
}
