use rayon::prelude::*;
use thiserror::Error;

use pxsort_image::{Image, ImageError};

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// Source and destination hold a different number of rows.
    #[error("source has {0} rows but destination has {1}")]
    RowCountMismatch(usize, usize),
}

impl From<ParallelError> for ImageError {
    fn from(err: ParallelError) -> Self {
        ImageError::ParallelError(err.to_string())
    }
}

/// Controls how rows are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool and hand out one row per task.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to every pair of source and destination rows.
///
/// `src` and `dst` are split into rows of `src_stride` and `dst_stride`
/// values. Each call of `f` owns its destination row exclusively, so no
/// synchronization is needed beyond the final join.
///
/// # Errors
///
/// Fails if the two buffers hold a different number of rows, or if a
/// [`ExecutionStrategy::Fixed`] pool cannot be built.
pub fn execute_rows<T1, T2, F>(
    src: &[T1],
    src_stride: usize,
    dst: &mut [T2],
    dst_stride: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T1: Sync,
    T2: Send,
    F: Fn(&[T1], &mut [T2]) + Send + Sync,
{
    if let ExecutionStrategy::Fixed(0) = strategy {
        return Err(ParallelError::InvalidThreadCount(0));
    }

    // zero-width rows carry no pixels
    if src_stride == 0 || dst_stride == 0 {
        return Ok(());
    }

    let src_rows = src.len() / src_stride;
    let dst_rows = dst.len() / dst_stride;
    if src_rows != dst_rows {
        return Err(ParallelError::RowCountMismatch(src_rows, dst_rows));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            src.chunks_exact(src_stride)
                .zip(dst.chunks_exact_mut(dst_stride))
                .for_each(|(src_row, dst_row)| f(src_row, dst_row));
        }
        ExecutionStrategy::ParallelRows => {
            par_rows(src, src_stride, dst, dst_stride, &f);
        }
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| par_rows(src, src_stride, dst, dst_stride, &f));
        }
    }

    Ok(())
}

fn par_rows<T1, T2, F>(src: &[T1], src_stride: usize, dst: &mut [T2], dst_stride: usize, f: &F)
where
    T1: Sync,
    T2: Send,
    F: Fn(&[T1], &mut [T2]) + Send + Sync,
{
    src.par_chunks_exact(src_stride)
        .zip(dst.par_chunks_exact_mut(dst_stride))
        .for_each(|(src_row, dst_row)| f(src_row, dst_row));
}

/// Apply a function to each row of the image with the given strategy.
///
/// The closure receives the channel values of one source row and the
/// matching destination row.
///
/// Precondition: the input and output images must have the same size.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) -> Result<(), ImageError>
where
    T1: Sync,
    T2: Send,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let src_stride = src.row_stride();
    let dst_stride = dst.row_stride();
    execute_rows(
        src.as_slice(),
        src_stride,
        dst.as_slice_mut(),
        dst_stride,
        strategy,
        f,
    )?;

    Ok(())
}
