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
use num_traits::{AsPrimitive, Bounded, WrappingAdd, WrappingMul};
use std::fmt::Debug;

/// Integer pixel type the filter engines operate on.
///
/// Convolution accumulates in the pixel type itself with wrapping arithmetic.
pub trait FilterSample:
    Copy
    + Clone
    + Debug
    + Default
    + Send
    + Sync
    + Ord
    + Bounded
    + WrappingAdd
    + WrappingMul
    + From<i8>
    + AsPrimitive<i128>
    + 'static
{
    /// Rescales `self` from `[smallest, largest]` into `[0, 255]`.
    ///
    /// Returns `self` untouched when the range is flat.
    fn normalize(self, smallest: Self, largest: Self) -> Self;
}

macro_rules! impl_filter_sample {
    ($($t:ty),*) => {
        $(
            impl FilterSample for $t {
                #[inline(always)]
                fn normalize(self, smallest: Self, largest: Self) -> Self {
                    if smallest == largest {
                        return self;
                    }
                    let value: i128 = self.as_();
                    let lo: i128 = smallest.as_();
                    let hi: i128 = largest.as_();
                    (((value - lo) * 255) / (hi - lo)) as $t
                }
            }
        )*
    };
}

impl_filter_sample!(i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_extremes() {
        assert_eq!((-40i32).normalize(-40, 60), 0);
        assert_eq!(60i32.normalize(-40, 60), 255);
        assert_eq!(10i32.normalize(-40, 60), 127);
    }

    #[test]
    fn normalize_flat_range_passes_through() {
        assert_eq!(1000i32.normalize(1000, 1000), 1000);
        assert_eq!((-7i16).normalize(-7, -7), -7);
    }

    #[test]
    fn normalize_does_not_overflow_wide_ranges() {
        assert_eq!(i32::MAX.normalize(i32::MIN, i32::MAX), 255);
        assert_eq!(i64::MIN.normalize(i64::MIN, i64::MAX), 0);
        assert_eq!(i16::MAX.normalize(i16::MIN, i16::MAX), 255);
    }
}
