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
use crate::partition::Traversal;
use crate::work_context::WorkerTask;
use crate::work_queue::Phase;
use crate::FilterSample;
use log::trace;

/// Worker body of the work queue method.
///
/// Tiles are claimed one by one from the convolution pass, then again from the
/// normalization pass after the rendezvous. A worker normalizes whatever it claims,
/// which is fine because normalization only depends on the final bounds.
pub(crate) fn queue_work<T: FilterSample>(task: WorkerTask<'_, '_, T>) {
    let common = task.common;
    let Some(queue) = common.tiles.as_ref() else {
        common.rendezvous.arrive(MinMax::new());
        return;
    };

    let mut convolved = 0usize;
    let Some(bounds) = task.convolve_then_meet(|local| {
        while let Some(tile) = queue.claim(Phase::Convolve) {
            // A claimed tile belongs to this worker alone for the pass
            unsafe { task.convolve_region(tile, Traversal::RowMajor, local) };
            convolved += 1;
        }
    }) else {
        return;
    };

    let mut normalized = 0usize;
    while let Some(tile) = queue.claim(Phase::Normalize) {
        unsafe { task.normalize_region(tile, Traversal::RowMajor, &bounds) };
        normalized += 1;
    }
    trace!(
        "worker {} convolved {} and normalized {} of {} tiles",
        task.id,
        convolved,
        normalized,
        queue.len()
    );
}
