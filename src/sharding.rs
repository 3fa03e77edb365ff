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
use crate::min_max::MinMax;
use crate::partition::{Tile, Traversal, shard_bounds};
use crate::work_context::WorkerTask;
use crate::{FilterSample, ImageSize, ParallelMethod};
use log::trace;

/// Region and walk order statically owned by worker `id` under a sharded method.
pub(crate) fn shard_layout(
    method: ParallelMethod,
    id: usize,
    workers: usize,
    size: ImageSize,
) -> Option<(Tile, Traversal)> {
    match method {
        ParallelMethod::ShardedRows => Some((
            Tile::new(shard_bounds(id, workers, size.height), 0..size.width),
            Traversal::RowMajor,
        )),
        ParallelMethod::ShardedColumnsColumnMajor => Some((
            Tile::new(0..size.height, shard_bounds(id, workers, size.width)),
            Traversal::ColumnMajor,
        )),
        ParallelMethod::ShardedColumnsRowMajor => Some((
            Tile::new(0..size.height, shard_bounds(id, workers, size.width)),
            Traversal::RowMajor,
        )),
        ParallelMethod::Sequential | ParallelMethod::WorkQueue => None,
    }
}

/// Worker body shared by the three static methods.
///
/// The worker convolves its own shard, meets the pool at the rendezvous and then
/// normalizes the very same shard, so the barrier is the only synchronization needed.
pub(crate) fn sharded_work<T: FilterSample>(task: WorkerTask<'_, '_, T>, method: ParallelMethod) {
    let common = task.common;
    let Some((shard, traversal)) =
        shard_layout(method, task.id, common.workers, common.original.get_size())
    else {
        // Still has to meet the pool, otherwise everyone else waits forever
        common.rendezvous.arrive(MinMax::new());
        return;
    };
    trace!("worker {} owns {:?} ({:?})", task.id, shard, traversal);

    let Some(bounds) = task.convolve_then_meet(|local| {
        // Shards of distinct workers are disjoint
        unsafe { task.convolve_region(shard, traversal, local) }
    }) else {
        return;
    };

    unsafe { task.normalize_region(shard, traversal, &bounds) };
}
