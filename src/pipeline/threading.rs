use rayon::prelude::*;

use crate::foundation::error::{FxError, FxResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Row-parallelism controls for one pipeline invocation.
///
/// Every per-pixel stage writes disjoint rows and reads only fully computed inputs, so the
/// parallel path produces the same bytes as the sequential one.
pub struct Threading {
    /// Split per-row work across a dedicated thread pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// How row-wise stages are executed.
#[derive(Clone, Copy)]
pub(crate) enum Exec<'a> {
    Sequential,
    Pool(&'a rayon::ThreadPool),
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> FxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FxError::validation(
            "pipeline threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FxError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

/// Run `f(row_index, row)` over consecutive `row_len`-sized rows of `data`.
pub(crate) fn for_each_row<T, F>(exec: Exec<'_>, data: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }
    match exec {
        Exec::Sequential => data
            .chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
        Exec::Pool(pool) => pool.install(|| {
            data.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| f(y, row))
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/threading.rs"]
mod tests;
