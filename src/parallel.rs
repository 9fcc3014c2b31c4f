//! Thread pool construction for parallel demonstrations.
//!
//! Parallel tests run inside their own [`rayon::ThreadPool`] via
//! [`rayon::ThreadPool::install`] rather than configuring the global pool,
//! so thread counts stay deterministic per test.

use anyhow::Result;

/// Build a rayon pool with exactly `threads` worker threads.
///
/// # Errors
///
/// Returns an error if the pool cannot be spawned.
///
/// # Example
///
/// ```
/// use iterflow::parallel::fixed_pool;
/// use rayon::prelude::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let pool = fixed_pool(4)?;
/// let sum: i32 = pool.install(|| (1..=100).into_par_iter().sum());
/// assert_eq!(sum, 5050);
/// # Ok(())
/// # }
/// ```
pub fn fixed_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?)
}

/// Build a rayon pool sized to the machine, with at least two workers so
/// parallel interleaving stays possible on single-core hosts.
///
/// # Errors
///
/// Returns an error if the pool cannot be spawned.
pub fn default_pool() -> Result<rayon::ThreadPool> {
    fixed_pool(num_cpus::get().max(2))
}
