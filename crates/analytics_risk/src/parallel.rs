//! Rayon fan-out for the combination grids.
//!
//! Each grid cell is an independent regression, so cells are mapped with
//! `par_iter` once the grid is large enough. `collect` on an indexed parallel
//! iterator keeps input order, so results are identical to a sequential run.

use rayon::prelude::*;

/// Minimum number of grid cells before work is spread over threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Allow rayon at all
    pub enabled: bool,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(enabled: bool, parallel_threshold: usize) -> Self {
        Self {
            enabled,
            parallel_threshold,
        }
    }

    /// Always run on the calling thread.
    pub fn sequential() -> Self {
        Self::new(false, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        self.enabled && n_items >= self.parallel_threshold
    }

    /// Map `items` in input order, in parallel when worthwhile.
    pub fn map<T, R, F>(&self, items: &[T], mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.should_parallelize(items.len()) {
            items.par_iter().map(mapper).collect()
        } else {
            items.iter().map(mapper).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::default();
        assert!(!config.should_parallelize(10));
        assert!(config.should_parallelize(32));
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_map_preserves_order() {
        let items: Vec<i32> = (0..1000).collect();
        let par = ParallelConfig::new(true, 1).map(&items, |&x| x * 3);
        let seq = ParallelConfig::sequential().map(&items, |&x| x * 3);
        assert_eq!(par, seq);
        assert_eq!(par[500], 1500);
    }
}
