/*
 * // Copyright (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

use crate::FilterError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> ImageSize {
        ImageSize { width, height }
    }

    /// Number of pixels, rejecting empty and overflowing sizes.
    pub fn pixels(&self) -> Result<usize, FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::ZeroImageDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FilterError::ImageIsTooLarge)
    }
}
