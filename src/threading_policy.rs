/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::{FilterError, ImageSize};
use rayon::ThreadPool;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum ThreadingPolicy {
    #[default]
    Single,
    Fixed(usize),
    Adaptive,
}

impl ThreadingPolicy {
    pub fn get_threads_count(&self, for_size: ImageSize) -> Result<usize, FilterError> {
        match self {
            ThreadingPolicy::Single => Ok(1),
            ThreadingPolicy::Fixed(0) => Err(FilterError::ZeroThreadCount),
            ThreadingPolicy::Fixed(thread_count) => check_pool_limit(*thread_count),
            ThreadingPolicy::Adaptive => {
                let box_size = 256 * 256;
                let new_box_size = for_size.height.saturating_mul(for_size.width);
                Ok((new_box_size / box_size).clamp(1, 16))
            }
        }
    }
}

fn check_pool_limit(requested: usize) -> Result<usize, FilterError> {
    let limit = rayon::max_num_threads();
    if requested > limit {
        return Err(FilterError::TooManyThreads { requested, limit });
    }
    Ok(requested)
}

/// Dedicated pool for one call, `None` when the only worker is the calling thread.
pub(crate) fn get_pool(threads_count: usize) -> Result<Option<ThreadPool>, FilterError> {
    if threads_count == 0 {
        return Err(FilterError::ZeroThreadCount);
    }
    if threads_count == 1 {
        return Ok(None);
    }
    check_pool_limit(threads_count)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads_count)
        .thread_name(|index| format!("pic-filter-{index}"))
        .build()
        .map_err(|e| FilterError::ThreadPoolCreation(e.to_string()))?;
    // Every worker has to reach the rendezvous, a smaller pool would never pass it
    if pool.current_num_threads() != threads_count {
        return Err(FilterError::TooManyThreads {
            requested: threads_count,
            limit: pool.current_num_threads(),
        });
    }
    Ok(Some(pool))
}
