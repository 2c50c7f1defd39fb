use alloc::vec::Vec;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::packed::row_dot;
use crate::traits::{FloatScalar, PackedRef};

use super::{check_lengths, Helper};

/// Data-parallel helper on rayon.
///
/// Runs on the global rayon pool unless built with
/// [`with_threads`](ParHelper::with_threads), which gives it a private pool.
#[derive(Debug, Default)]
pub struct ParHelper {
    pool: Option<ThreadPool>,
}

impl ParHelper {
    /// Helper on the global rayon pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Helper on a private pool of `threads` workers (0 lets rayon pick).
    pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        log::debug!(target: "spdpack", "ParHelper pool with {} threads", pool.current_num_threads());
        Ok(Self { pool: Some(pool) })
    }

    /// Worker count of the pool this helper runs on.
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn run<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl<T: FloatScalar + Send + Sync> Helper<T> for ParHelper {
    fn norm2(&self, v: &[T]) -> T {
        self.run(|| {
            v.par_iter()
                .map(|&x| x * x)
                .reduce(T::zero, |a, b| a + b)
                .sqrt()
        })
    }

    fn residual<A>(&self, a: &A, x: &[T], b: &[T]) -> Vec<T>
    where
        A: PackedRef<T> + Sync + ?Sized,
    {
        let n = a.dim();
        check_lengths(n, x, b);
        self.run(|| {
            (0..n)
                .into_par_iter()
                .map(|i| b[i] - row_dot(a, i, x))
                .collect()
        })
    }
}
