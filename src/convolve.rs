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
use crate::{Filter, FilterSample, ImageStore};

/// Computes one filtered sample centered on `(row, column)`.
///
/// Kernel cell `(kr, kc)` reads `(row - d/2 + kr, column - d/2 + kc)`. Neighbors outside
/// of the image drop both the sample and its weight, the remaining weights are not
/// renormalized.
#[inline]
pub(crate) fn convolve_pixel<T: FilterSample>(
    filter: &Filter,
    original: &ImageStore<T>,
    row: usize,
    column: usize,
) -> T {
    let dimension = filter.dimension();
    let half = dimension / 2;
    let weights = filter.weights();
    let src = original.buffer;
    let width = original.width;

    // Clip the kernel window against the image once instead of per tap
    let kr_start = half.saturating_sub(row);
    let kr_end = dimension.min(original.height + half - row);
    let kc_start = half.saturating_sub(column);
    let kc_end = dimension.min(width + half - column);

    let mut pixel = T::default();
    for kr in kr_start..kr_end {
        let src_row = &src[(row + kr - half) * width..];
        let weight_row = &weights[kr * dimension..(kr + 1) * dimension];
        for kc in kc_start..kc_end {
            let weight = weight_row[kc];
            if weight == 0 {
                continue;
            }
            let sample = src_row[column + kc - half];
            pixel = pixel.wrapping_add(&sample.wrapping_mul(&T::from(weight)));
        }
    }
    pixel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(filter: &Filter, src: &[i32], width: usize, height: usize, r: i64, c: i64) -> i32 {
        let d = filter.dimension() as i64;
        let mut acc = 0i32;
        for kr in 0..d {
            for kc in 0..d {
                let y = r - d / 2 + kr;
                let x = c - d / 2 + kc;
                if y >= 0 && x >= 0 && y < height as i64 && x < width as i64 {
                    acc += src[(y * width as i64 + x) as usize]
                        * filter.weights()[(kr * d + kc) as usize] as i32;
                }
            }
        }
        acc
    }

    #[test]
    fn laplacian_corner_uses_three_terms() {
        let src = [1i32, 2, 3, 4, 5, 6, 7, 8, 9];
        let store = ImageStore::from_slice(&src, 3, 3).unwrap();
        let filter = Filter::laplacian_3x3();
        // -4 * 1 + 2 + 4
        assert_eq!(convolve_pixel(&filter, &store, 0, 0), 2);
        // -4 * 9 + 6 + 8
        assert_eq!(convolve_pixel(&filter, &store, 2, 2), -22);
        // center sees all four neighbors
        assert_eq!(convolve_pixel(&filter, &store, 1, 1), 0);
    }

    #[test]
    fn identity_copies_source() {
        let src = [5i16, -3, 8, 0];
        let store = ImageStore::from_slice(&src, 2, 2).unwrap();
        let filter = Filter::identity();
        for (i, expected) in src.iter().enumerate() {
            assert_eq!(convolve_pixel(&filter, &store, i / 2, i % 2), *expected);
        }
    }

    #[test]
    fn matches_unclipped_reference_everywhere() {
        let (width, height) = (7usize, 4usize);
        let src = (0..width * height)
            .map(|i| ((i * 37 + 11) % 23) as i32 - 9)
            .collect::<Vec<_>>();
        let store = ImageStore::from_slice(&src, width, height).unwrap();
        for filter in [
            Filter::laplacian_3x3(),
            Filter::laplacian_5x5(),
            Filter::laplacian_of_gaussian_9x9(),
        ] {
            for r in 0..height {
                for c in 0..width {
                    assert_eq!(
                        convolve_pixel(&filter, &store, r, c),
                        naive(&filter, &src, width, height, r as i64, c as i64),
                        "{:?} at ({r}, {c})",
                        filter.dimension()
                    );
                }
            }
        }
    }
}
