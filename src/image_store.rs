/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::filter_error::{FilterBufferMismatch, FilterError, try_vec};
use crate::{FilterSample, ImageSize};
use std::fmt::Debug;

/// Immutable single plane image, row-major, `width * height` samples.
#[derive(Debug, Clone, Copy)]
pub struct ImageStore<'a, T>
where
    T: FilterSample,
{
    pub(crate) buffer: &'a [T],
    pub width: usize,
    pub height: usize,
}

/// Mutable single plane image receiving filtered samples.
#[derive(Debug)]
pub struct ImageStoreMut<'a, T>
where
    T: FilterSample,
{
    pub(crate) buffer: BufferStore<'a, T>,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug)]
pub(crate) enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    pub(crate) fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

fn check_buffer(len: usize, width: usize, height: usize) -> Result<(), FilterError> {
    let expected = ImageSize::new(width, height).pixels()?;
    if expected != len {
        return Err(FilterError::BufferMismatch(FilterBufferMismatch {
            expected,
            width,
            height,
            slice_len: len,
        }));
    }
    Ok(())
}

impl<'a, T> ImageStore<'a, T>
where
    T: FilterSample,
{
    pub fn from_slice(
        slice_ref: &'a [T],
        width: usize,
        height: usize,
    ) -> Result<ImageStore<'a, T>, FilterError> {
        check_buffer(slice_ref.len(), width, height)?;
        Ok(ImageStore {
            buffer: slice_ref,
            width,
            height,
        })
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[T] {
        self.buffer
    }
}

impl<T> ImageStoreMut<'static, T>
where
    T: FilterSample,
{
    pub fn new(buffer: Vec<T>, width: usize, height: usize) -> Result<Self, FilterError> {
        check_buffer(buffer.len(), width, height)?;
        Ok(ImageStoreMut {
            buffer: BufferStore::Owned(buffer),
            width,
            height,
        })
    }

    /// Allocates a zeroed destination of the given size.
    pub fn alloc(width: usize, height: usize) -> Result<Self, FilterError> {
        let pixels = ImageSize::new(width, height).pixels()?;
        let buffer = try_vec![T::default(); pixels];
        Ok(ImageStoreMut {
            buffer: BufferStore::Owned(buffer),
            width,
            height,
        })
    }
}

impl<'a, T> ImageStoreMut<'a, T>
where
    T: FilterSample,
{
    pub fn from_slice(
        slice_ref: &'a mut [T],
        width: usize,
        height: usize,
    ) -> Result<ImageStoreMut<'a, T>, FilterError> {
        check_buffer(slice_ref.len(), width, height)?;
        Ok(ImageStoreMut {
            buffer: BufferStore::Borrowed(slice_ref),
            width,
            height,
        })
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[T] {
        self.buffer.borrow()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [T] {
        self.buffer.borrow_mut()
    }

    pub fn to_immutable(&self) -> ImageStore<'_, T> {
        ImageStore {
            buffer: self.buffer.borrow(),
            width: self.width,
            height: self.height,
        }
    }
}
