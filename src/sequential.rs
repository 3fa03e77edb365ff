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
use crate::min_max::MinMax;
use crate::{Filter, FilterSample, ImageStore};

/// Single threaded reference: convolve row-major while tracking bounds, then rescale.
///
/// `target` must hold exactly `original.width * original.height` samples.
pub(crate) fn filter_sequential<T: FilterSample>(
    filter: &Filter,
    original: &ImageStore<T>,
    target: &mut [T],
) {
    let width = original.width;
    let mut bounds = MinMax::new();
    for (row, dst_row) in target.chunks_exact_mut(width).enumerate() {
        for (column, dst) in dst_row.iter_mut().enumerate() {
            let value = convolve_pixel(filter, original, row, column);
            *dst = value;
            bounds.observe(value);
        }
    }

    for dst in target.iter_mut() {
        *dst = bounds.normalize(*dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_passes_through() {
        let src = vec![42i32; 12];
        let store = ImageStore::from_slice(&src, 4, 3).unwrap();
        let mut dst = vec![0i32; 12];
        filter_sequential(&Filter::identity(), &store, &mut dst);
        assert_eq!(dst, src);
    }

    #[test]
    fn extremes_map_to_full_range() {
        let src = (0..20).map(|i| (i * 7 % 11) as i32).collect::<Vec<_>>();
        let store = ImageStore::from_slice(&src, 5, 4).unwrap();
        let mut raw = vec![0i32; 20];
        for r in 0..4 {
            for c in 0..5 {
                raw[r * 5 + c] = convolve_pixel(&Filter::laplacian_3x3(), &store, r, c);
            }
        }
        let min_at = (0..20).min_by_key(|&i| raw[i]).unwrap();
        let max_at = (0..20).max_by_key(|&i| raw[i]).unwrap();

        let mut dst = vec![0i32; 20];
        filter_sequential(&Filter::laplacian_3x3(), &store, &mut dst);
        assert!(dst.iter().all(|v| (0..=255).contains(v)));
        assert_eq!(dst[min_at], 0);
        assert_eq!(dst[max_at], 255);
    }

    #[test]
    fn laplacian_on_3x3() {
        let src = [1i32, 2, 3, 4, 5, 6, 7, 8, 9];
        let store = ImageStore::from_slice(&src, 3, 3).unwrap();
        let mut dst = [0i32; 9];
        filter_sequential(&Filter::laplacian_3x3(), &store, &mut dst);
        // raw: [2, 1, -4, -3, 0, -7, -16, -11, -22]
        let expected = [2, 1, -4, -3, 0, -7, -16, -11, -22]
            .map(|v: i32| ((v + 22) * 255) / 24);
        assert_eq!(dst, expected);
    }
}
