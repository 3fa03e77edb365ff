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
use crate::FilterSample;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Barrier, Mutex, PoisonError};

/// Running minimum and maximum of filtered samples.
///
/// Starts from the `{T::MAX, T::MIN}` sentinel so that the first observed sample
/// replaces both bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T: FilterSample> Default for MinMax<T> {
    fn default() -> Self {
        MinMax::new()
    }
}

impl<T: FilterSample> MinMax<T> {
    pub fn new() -> Self {
        MinMax {
            min: T::max_value(),
            max: T::min_value(),
        }
    }

    #[inline(always)]
    pub fn observe(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    #[inline]
    pub fn merge(self, other: MinMax<T>) -> MinMax<T> {
        MinMax {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// No sample has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[inline(always)]
    pub fn normalize(&self, value: T) -> T {
        value.normalize(self.min, self.max)
    }
}

/// Phase boundary of one threaded call.
///
/// Every worker folds its local bounds into the global accumulator and then blocks until
/// the whole pool has done the same. The global bounds are only handed out after that
/// point, so a partially reduced value can never be observed. A worker that failed its
/// convolution pass still meets the pool through [PhaseRendezvous::abandon], after which
/// nobody receives bounds.
pub(crate) struct PhaseRendezvous<T> {
    barrier: Barrier,
    global: Mutex<MinMax<T>>,
    failed: AtomicBool,
}

impl<T: FilterSample> PhaseRendezvous<T> {
    pub(crate) fn new(workers: usize) -> Self {
        PhaseRendezvous {
            barrier: Barrier::new(workers),
            global: Mutex::new(MinMax::new()),
            failed: AtomicBool::new(false),
        }
    }

    fn fold(&self, local: MinMax<T>) {
        // A poisoned lock still holds consistent bounds, merge is a single assignment
        let mut global = self.global.lock().unwrap_or_else(PoisonError::into_inner);
        *global = global.merge(local);
    }

    /// Folds `local`, waits for the rest of the pool and returns the final bounds.
    ///
    /// Returns `None` when any worker abandoned the convolution pass.
    pub(crate) fn arrive(&self, local: MinMax<T>) -> Option<MinMax<T>> {
        self.fold(local);
        self.barrier.wait();
        if self.failed.load(Ordering::Acquire) {
            return None;
        }
        Some(*self.global.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Meets the pool without contributing bounds and fails the pass for everyone.
    pub(crate) fn abandon(&self) {
        self.failed.store(true, Ordering::Release);
        self.barrier.wait();
    }
}
