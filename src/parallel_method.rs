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

/// How the image is split among workers.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum ParallelMethod {
    /// Single threaded reference, the threading policy is ignored
    #[default]
    Sequential = 1,
    /// Each worker owns a band of rows, walked row-major
    ShardedRows = 2,
    /// Each worker owns a band of columns, walked column-major
    ShardedColumnsColumnMajor = 3,
    /// Each worker owns a band of columns, walked row-major
    ShardedColumnsRowMajor = 4,
    /// Workers claim `work_chunk` sized tiles until none are left
    WorkQueue = 5,
}

impl ParallelMethod {
    pub const ALL: [ParallelMethod; 5] = [
        ParallelMethod::Sequential,
        ParallelMethod::ShardedRows,
        ParallelMethod::ShardedColumnsColumnMajor,
        ParallelMethod::ShardedColumnsRowMajor,
        ParallelMethod::WorkQueue,
    ];

    pub fn is_sharded(self) -> bool {
        matches!(
            self,
            ParallelMethod::ShardedRows
                | ParallelMethod::ShardedColumnsColumnMajor
                | ParallelMethod::ShardedColumnsRowMajor
        )
    }
}

impl TryFrom<usize> for ParallelMethod {
    type Error = FilterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        ParallelMethod::ALL
            .into_iter()
            .find(|m| *m as usize == value)
            .ok_or(FilterError::UnknownParallelMethod(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_numbers_round_trip() {
        for method in ParallelMethod::ALL {
            assert_eq!(ParallelMethod::try_from(method as usize), Ok(method));
        }
        assert_eq!(
            ParallelMethod::try_from(0),
            Err(FilterError::UnknownParallelMethod(0))
        );
        assert_eq!(
            ParallelMethod::try_from(6),
            Err(FilterError::UnknownParallelMethod(6))
        );
    }

    #[test]
    fn only_static_methods_are_sharded() {
        let sharded = ParallelMethod::ALL
            .into_iter()
            .filter(|m| m.is_sharded())
            .count();
        assert_eq!(sharded, 3);
        assert!(!ParallelMethod::WorkQueue.is_sharded());
    }
}
