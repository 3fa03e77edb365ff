/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use std::cell::UnsafeCell;
use std::marker::PhantomData;

/// Output plane shared by every worker of a call.
///
/// Workers write disjoint cells: a shard or a claimed tile is owned by exactly one
/// worker in each phase. That ownership is what makes unsynchronized access sound.
#[derive(Copy, Clone)]
pub(crate) struct UnsafeSlice<'a, T> {
    slice: &'a [UnsafeCell<T>],
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send + Sync> Send for UnsafeSlice<'_, T> {}

unsafe impl<T: Send + Sync> Sync for UnsafeSlice<'_, T> {}

impl<'a, T: Copy> UnsafeSlice<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        let ptr = slice as *mut [T] as *const [UnsafeCell<T>];
        Self {
            slice: unsafe { &*ptr },
            _marker: PhantomData,
        }
    }

    /// SAFETY: no other thread may access index `i` concurrently.
    #[inline(always)]
    pub(crate) unsafe fn write(&self, i: usize, value: T) {
        unsafe { *self.slice[i].get() = value };
    }

    /// SAFETY: no other thread may write index `i` concurrently.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, i: usize) -> T {
        unsafe { *self.slice[i].get() }
    }

    #[allow(dead_code)]
    pub(crate) fn len(&self) -> usize {
        self.slice.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_writes_from_threads() {
        let mut data = vec![0i32; 64];
        let view = UnsafeSlice::new(&mut data);
        std::thread::scope(|s| {
            for worker in 0..4usize {
                s.spawn(move || {
                    for i in (worker..64).step_by(4) {
                        unsafe { view.write(i, worker as i32 + 1) };
                    }
                });
            }
        });
        assert_eq!(view.len(), 64);
        for (i, v) in data.iter().enumerate() {
            assert_eq!(*v, (i % 4) as i32 + 1);
        }
    }
}
