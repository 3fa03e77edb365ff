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
use crate::convolve::convolve_pixel;
use crate::min_max::{MinMax, PhaseRendezvous};
use crate::partition::{Tile, Traversal};
use crate::unsafe_slice::UnsafeSlice;
use crate::work_queue::TileQueue;
use crate::{Filter, FilterSample, ImageStore};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

/// State shared read-only by every worker of one call.
pub(crate) struct WorkContext<'a, T: FilterSample> {
    pub(crate) filter: &'a Filter,
    pub(crate) original: ImageStore<'a, T>,
    pub(crate) output: UnsafeSlice<'a, T>,
    pub(crate) workers: usize,
    pub(crate) rendezvous: PhaseRendezvous<T>,
    pub(crate) tiles: Option<TileQueue>,
}

/// One worker's identity within a call.
#[derive(Copy, Clone)]
pub(crate) struct WorkerTask<'c, 'a, T: FilterSample> {
    pub(crate) id: usize,
    pub(crate) common: &'c WorkContext<'a, T>,
}

impl<'a, T: FilterSample> WorkContext<'a, T> {
    pub(crate) fn task(&self, id: usize) -> WorkerTask<'_, 'a, T> {
        debug_assert!(id < self.workers);
        WorkerTask { id, common: self }
    }
}

impl<T: FilterSample> WorkerTask<'_, '_, T> {
    /// Runs this worker's convolution pass and meets the pool.
    ///
    /// Returns the global bounds, or `None` when some worker failed its pass. A panic in
    /// `pass` still releases the pool before it is propagated.
    pub(crate) fn convolve_then_meet(
        &self,
        pass: impl FnOnce(&mut MinMax<T>),
    ) -> Option<MinMax<T>> {
        let rendezvous = &self.common.rendezvous;
        let mut local = MinMax::new();
        match catch_unwind(AssertUnwindSafe(|| pass(&mut local))) {
            Ok(()) => rendezvous.arrive(local),
            Err(payload) => {
                rendezvous.abandon();
                resume_unwind(payload)
            }
        }
    }

    /// Filters every cell of `tile` into the output and records the produced values.
    ///
    /// SAFETY: for the duration of the call no other worker touches the cells of `tile`.
    pub(crate) unsafe fn convolve_region(
        &self,
        tile: Tile,
        traversal: Traversal,
        local: &mut MinMax<T>,
    ) {
        let common = self.common;
        let width = common.original.width;
        tile.for_each_pixel(traversal, |row, column| {
            let value = convolve_pixel(common.filter, &common.original, row, column);
            unsafe { common.output.write(row * width + column, value) };
            local.observe(value);
        });
    }

    /// Rescales every cell of `tile` in place.
    ///
    /// SAFETY: for the duration of the call no other worker touches the cells of `tile`,
    /// and every write of the convolution phase happened-before this call.
    pub(crate) unsafe fn normalize_region(
        &self,
        tile: Tile,
        traversal: Traversal,
        bounds: &MinMax<T>,
    ) {
        let output = self.common.output;
        let width = self.common.original.width;
        tile.for_each_pixel(traversal, |row, column| {
            let index = row * width + column;
            unsafe { output.write(index, bounds.normalize(output.read(index))) };
        });
    }
}
