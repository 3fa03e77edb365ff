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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FilterBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    ZeroImageDimensions,
    ImageIsTooLarge,
    BufferMismatch(FilterBufferMismatch),
    /// Source and destination sizes as `(width, height)`
    SizeMismatch((usize, usize), (usize, usize)),
    InvalidFilterDimension(usize),
    FilterWeightsMismatch { expected: usize, received: usize },
    ZeroThreadCount,
    /// Requested worker count and the most threads one pool can hold
    TooManyThreads { requested: usize, limit: usize },
    InvalidWorkChunk(usize),
    UnknownParallelMethod(usize),
    UnknownBuiltinFilter(usize),
    OutOfMemory(usize),
    ThreadPoolCreation(String),
    WorkerPanicked,
}

impl FilterError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            FilterError::ZeroImageDimensions => 1,
            FilterError::ImageIsTooLarge => 2,
            FilterError::BufferMismatch(_) => 3,
            FilterError::SizeMismatch(_, _) => 4,
            FilterError::InvalidFilterDimension(_) => 5,
            FilterError::FilterWeightsMismatch { .. } => 6,
            FilterError::ZeroThreadCount => 7,
            FilterError::InvalidWorkChunk(_) => 8,
            FilterError::UnknownParallelMethod(_) => 9,
            FilterError::UnknownBuiltinFilter(_) => 10,
            FilterError::OutOfMemory(_) => 11,
            FilterError::ThreadPoolCreation(_) => 12,
            FilterError::WorkerPanicked => 13,
            FilterError::TooManyThreads { .. } => 14,
        }
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            FilterError::ImageIsTooLarge => f.write_str("Image larger than memory capabilities"),
            FilterError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [w({})*h({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.slice_len,
            )),
            FilterError::SizeMismatch(src, dst) => f.write_fmt(format_args!(
                "Destination must match source size {}x{}, but received {}x{}",
                src.0, src.1, dst.0, dst.1
            )),
            FilterError::InvalidFilterDimension(dimension) => f.write_fmt(format_args!(
                "Filter dimension must be odd and positive, but received {dimension}"
            )),
            FilterError::FilterWeightsMismatch { expected, received } => f.write_fmt(
                format_args!("Filter expects {expected} weights but received {received}"),
            ),
            FilterError::ZeroThreadCount => f.write_str("Thread count must be at least 1"),
            FilterError::TooManyThreads { requested, limit } => f.write_fmt(format_args!(
                "Requested {requested} threads but a pool holds at most {limit}"
            )),
            FilterError::InvalidWorkChunk(chunk) => f.write_fmt(format_args!(
                "Work chunk must be positive, but received {chunk}"
            )),
            FilterError::UnknownParallelMethod(method) => {
                f.write_fmt(format_args!("Unknown parallel method {method}"))
            }
            FilterError::UnknownBuiltinFilter(filter) => {
                f.write_fmt(format_args!("Unknown builtin filter {filter}"))
            }
            FilterError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} elements"
            )),
            FilterError::ThreadPoolCreation(reason) => {
                f.write_fmt(format_args!("Failed to start worker pool: {reason}"))
            }
            FilterError::WorkerPanicked => f.write_str("A worker panicked before finishing"),
        }
    }
}

impl Error for FilterError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::filter_error::FilterError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            FilterError::ZeroImageDimensions,
            FilterError::ImageIsTooLarge,
            FilterError::BufferMismatch(FilterBufferMismatch {
                expected: 4,
                width: 2,
                height: 2,
                slice_len: 3,
            }),
            FilterError::SizeMismatch((1, 1), (2, 2)),
            FilterError::InvalidFilterDimension(2),
            FilterError::FilterWeightsMismatch {
                expected: 9,
                received: 8,
            },
            FilterError::ZeroThreadCount,
            FilterError::TooManyThreads {
                requested: 70_000,
                limit: 65_535,
            },
            FilterError::InvalidWorkChunk(0),
            FilterError::UnknownParallelMethod(9),
            FilterError::UnknownBuiltinFilter(9),
            FilterError::OutOfMemory(1),
            FilterError::ThreadPoolCreation(String::from("x")),
            FilterError::WorkerPanicked,
        ];
        let mut codes = errors.iter().map(|e| e.code()).collect::<Vec<_>>();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn try_vec_reports_out_of_memory() {
        fn alloc(n: usize) -> Result<Vec<u64>, FilterError> {
            Ok(try_vec![0u64; n])
        }
        assert_eq!(alloc(3).map(|v| v.len()), Ok(3));
        assert_eq!(alloc(usize::MAX), Err(FilterError::OutOfMemory(usize::MAX)));
    }

    #[test]
    fn buffer_mismatch_message() {
        let error = FilterError::BufferMismatch(FilterBufferMismatch {
            expected: 6,
            width: 3,
            height: 2,
            slice_len: 5,
        });
        assert_eq!(
            error.to_string(),
            "Image buffer len expected to be 6 [w(3)*h(2)] but received 5"
        );
    }
}
