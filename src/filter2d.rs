/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::min_max::PhaseRendezvous;
use crate::queue_work::queue_work;
use crate::sequential::filter_sequential;
use crate::sharding::sharded_work;
use crate::threading_policy::get_pool;
use crate::unsafe_slice::UnsafeSlice;
use crate::work_context::WorkContext;
use crate::work_queue::TileQueue;
use crate::{
    Filter, FilterError, FilterSample, ImageSize, ImageStore, ImageStoreMut, ParallelMethod,
    ThreadingPolicy,
};
use log::debug;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Tile side used by [ParallelMethod::WorkQueue] unless configured otherwise
pub const DEFAULT_WORK_CHUNK: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Applies a square filter and rescales the result into `[0, 255]`
pub struct Filter2d {
    pub(crate) filter: Filter,
    pub(crate) method: ParallelMethod,
    pub(crate) threading_policy: ThreadingPolicy,
    pub(crate) work_chunk: usize,
}

impl Filter2d {
    /// Creates new instance running the sequential method on the calling thread
    pub fn new(filter: impl Into<Filter>) -> Self {
        Filter2d {
            filter: filter.into(),
            method: ParallelMethod::Sequential,
            threading_policy: ThreadingPolicy::Single,
            work_chunk: DEFAULT_WORK_CHUNK,
        }
    }

    pub fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    pub fn set_parallel_method(&mut self, method: ParallelMethod) {
        self.method = method;
    }

    /// Tile side of the work queue method, must be positive
    pub fn set_work_chunk(&mut self, work_chunk: usize) {
        self.work_chunk = work_chunk;
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Filters `source` into `destination`.
    ///
    /// Configuration is validated before any worker starts. The call returns only after
    /// every worker has been joined and `destination` is fully normalized.
    pub fn apply<T: FilterSample>(
        &self,
        source: &ImageStore<T>,
        destination: &mut ImageStoreMut<T>,
    ) -> Result<(), FilterError> {
        let size = validate(source, destination)?;
        let workers = self.threading_policy.get_threads_count(size)?;

        if self.method == ParallelMethod::Sequential {
            debug!("sequential filter on {}x{}", size.width, size.height);
            filter_sequential(&self.filter, source, destination.buffer.borrow_mut());
            return Ok(());
        }

        let tiles = if self.method == ParallelMethod::WorkQueue {
            if self.work_chunk == 0 {
                return Err(FilterError::InvalidWorkChunk(self.work_chunk));
            }
            let queue = TileQueue::new(size, self.work_chunk)?;
            debug!("{} tiles of {} px", queue.len(), self.work_chunk);
            Some(queue)
        } else {
            None
        };
        let pool = get_pool(workers)?;
        debug!(
            "{:?} on {}x{} with {} workers",
            self.method, size.width, size.height, workers
        );

        let context = WorkContext {
            filter: &self.filter,
            original: *source,
            output: UnsafeSlice::new(destination.buffer.borrow_mut()),
            workers,
            rendezvous: PhaseRendezvous::new(workers),
            tiles,
        };
        let method = self.method;
        let run_worker = |id: usize| {
            let task = context.task(id);
            if method.is_sharded() {
                sharded_work(task, method);
            } else {
                queue_work(task);
            }
        };

        let joined = match &pool {
            None => catch_unwind(AssertUnwindSafe(|| run_worker(0))),
            Some(pool) => catch_unwind(AssertUnwindSafe(|| {
                pool.broadcast(|ctx| run_worker(ctx.index()));
            })),
        };
        joined.map_err(|_| FilterError::WorkerPanicked)
    }
}

fn validate<T: FilterSample>(
    source: &ImageStore<T>,
    destination: &ImageStoreMut<T>,
) -> Result<ImageSize, FilterError> {
    let size = source.get_size();
    if size != destination.get_size() {
        return Err(FilterError::SizeMismatch(
            (size.width, size.height),
            (destination.width, destination.height),
        ));
    }
    let pixels = size.pixels()?;
    for len in [source.buffer.len(), destination.buffer.borrow().len()] {
        if len != pixels {
            return Err(FilterError::BufferMismatch(
                crate::filter_error::FilterBufferMismatch {
                    expected: pixels,
                    width: size.width,
                    height: size.height,
                    slice_len: len,
                },
            ));
        }
    }
    Ok(size)
}

/// Sequentially filters `original` into `target`, both `width * height` row-major.
pub fn apply_filter2d<T: FilterSample>(
    filter: &Filter,
    original: &[T],
    target: &mut [T],
    width: usize,
    height: usize,
) -> Result<(), FilterError> {
    let source = ImageStore::from_slice(original, width, height)?;
    let mut destination = ImageStoreMut::from_slice(target, width, height)?;
    Filter2d::new(filter.clone()).apply(&source, &mut destination)
}

/// Filters `original` into `target` with `num_threads` workers using `method`.
///
/// `work_chunk` is only read by [ParallelMethod::WorkQueue].
pub fn apply_filter2d_threaded<T: FilterSample>(
    filter: &Filter,
    original: &[T],
    target: &mut [T],
    width: usize,
    height: usize,
    num_threads: usize,
    method: ParallelMethod,
    work_chunk: usize,
) -> Result<(), FilterError> {
    let source = ImageStore::from_slice(original, width, height)?;
    let mut destination = ImageStoreMut::from_slice(target, width, height)?;
    let mut filter2d = Filter2d::new(filter.clone());
    filter2d.set_parallel_method(method);
    filter2d.set_threading_policy(ThreadingPolicy::Fixed(num_threads));
    filter2d.set_work_chunk(work_chunk);
    filter2d.apply(&source, &mut destination)
}
