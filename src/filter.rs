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
use crate::FilterError;
use std::borrow::Cow;

const LAPLACIAN_3X3: [i8; 9] = [0, 1, 0, 1, -4, 1, 0, 1, 0];

const LAPLACIAN_5X5: [i8; 25] = [
    -1, -1, -1, -1, -1, //
    -1, -1, -1, -1, -1, //
    -1, -1, 24, -1, -1, //
    -1, -1, -1, -1, -1, //
    -1, -1, -1, -1, -1,
];

const LAPLACIAN_OF_GAUSSIAN_9X9: [i8; 81] = [
    0, 1, 1, 2, 2, 2, 1, 1, 0, //
    1, 2, 4, 5, 5, 5, 4, 2, 1, //
    1, 4, 5, 3, 0, 3, 5, 4, 1, //
    2, 5, 3, -12, -24, -12, 3, 5, 2, //
    2, 5, 0, -24, -40, -24, 0, 5, 2, //
    2, 5, 3, -12, -24, -12, 3, 5, 2, //
    1, 4, 5, 3, 0, 3, 5, 4, 1, //
    1, 2, 4, 5, 5, 5, 4, 2, 1, //
    0, 1, 1, 2, 2, 2, 1, 1, 0,
];

const IDENTITY: [i8; 1] = [1];

/// Square convolution kernel with odd dimension.
///
/// Weights are stored row-major. The kernel is applied centered on a pixel,
/// weights whose neighbor falls outside of the image are skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    dimension: usize,
    weights: Cow<'static, [i8]>,
}

impl Filter {
    /// Creates a filter from `dimension * dimension` row-major weights.
    pub fn new(dimension: usize, weights: Vec<i8>) -> Result<Filter, FilterError> {
        Filter::validated(dimension, Cow::Owned(weights))
    }

    fn validated(dimension: usize, weights: Cow<'static, [i8]>) -> Result<Filter, FilterError> {
        if dimension == 0 || dimension % 2 == 0 {
            return Err(FilterError::InvalidFilterDimension(dimension));
        }
        let expected = dimension
            .checked_mul(dimension)
            .ok_or(FilterError::InvalidFilterDimension(dimension))?;
        if weights.len() != expected {
            return Err(FilterError::FilterWeightsMismatch {
                expected,
                received: weights.len(),
            });
        }
        Ok(Filter { dimension, weights })
    }

    const fn builtin(dimension: usize, weights: &'static [i8]) -> Filter {
        Filter {
            dimension,
            weights: Cow::Borrowed(weights),
        }
    }

    pub const fn laplacian_3x3() -> Filter {
        Filter::builtin(3, &LAPLACIAN_3X3)
    }

    pub const fn laplacian_5x5() -> Filter {
        Filter::builtin(5, &LAPLACIAN_5X5)
    }

    pub const fn laplacian_of_gaussian_9x9() -> Filter {
        Filter::builtin(9, &LAPLACIAN_OF_GAUSSIAN_9X9)
    }

    pub const fn identity() -> Filter {
        Filter::builtin(1, &IDENTITY)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn weights(&self) -> &[i8] {
        &self.weights
    }
}

/// Filters shipped with the crate, numbered the same way the benchmark driver selects them.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum BuiltinFilter {
    Laplacian3x3 = 1,
    Laplacian5x5 = 2,
    LaplacianOfGaussian9x9 = 3,
    Identity = 4,
}

impl BuiltinFilter {
    pub const ALL: [BuiltinFilter; 4] = [
        BuiltinFilter::Laplacian3x3,
        BuiltinFilter::Laplacian5x5,
        BuiltinFilter::LaplacianOfGaussian9x9,
        BuiltinFilter::Identity,
    ];

    pub fn filter(self) -> Filter {
        match self {
            BuiltinFilter::Laplacian3x3 => Filter::laplacian_3x3(),
            BuiltinFilter::Laplacian5x5 => Filter::laplacian_5x5(),
            BuiltinFilter::LaplacianOfGaussian9x9 => Filter::laplacian_of_gaussian_9x9(),
            BuiltinFilter::Identity => Filter::identity(),
        }
    }
}

impl TryFrom<usize> for BuiltinFilter {
    type Error = FilterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        BuiltinFilter::ALL
            .into_iter()
            .find(|f| *f as usize == value)
            .ok_or(FilterError::UnknownBuiltinFilter(value))
    }
}

impl From<BuiltinFilter> for Filter {
    fn from(value: BuiltinFilter) -> Self {
        value.filter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_and_zero_dimensions() {
        assert_eq!(
            Filter::new(2, vec![0; 4]),
            Err(FilterError::InvalidFilterDimension(2))
        );
        assert_eq!(
            Filter::new(0, vec![]),
            Err(FilterError::InvalidFilterDimension(0))
        );
    }

    #[test]
    fn rejects_wrong_weight_count() {
        assert_eq!(
            Filter::new(3, vec![1; 8]),
            Err(FilterError::FilterWeightsMismatch {
                expected: 9,
                received: 8
            })
        );
    }

    #[test]
    fn builtins_are_well_formed() {
        for builtin in BuiltinFilter::ALL {
            let filter = builtin.filter();
            let rebuilt = Filter::new(filter.dimension(), filter.weights().to_vec());
            assert_eq!(rebuilt.as_ref(), Ok(&filter));
        }
        // Laplacian kernels sum to zero
        assert_eq!(
            Filter::laplacian_5x5()
                .weights()
                .iter()
                .map(|&w| w as i32)
                .sum::<i32>(),
            0
        );
    }

    #[test]
    fn builtin_selector_numbers() {
        assert_eq!(
            BuiltinFilter::try_from(3),
            Ok(BuiltinFilter::LaplacianOfGaussian9x9)
        );
        assert_eq!(
            BuiltinFilter::try_from(5),
            Err(FilterError::UnknownBuiltinFilter(5))
        );
    }
}
