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
use crate::partition::{Tile, tile_grid};
use crate::{FilterError, ImageSize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Which pass over the tile list a claim belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Phase {
    Convolve = 0,
    Normalize = 1,
}

/// Tile list replayed once per phase.
///
/// Tiles never change after construction, each phase owns a cursor and a tile is handed
/// to exactly one claimer per phase.
pub(crate) struct TileQueue {
    tiles: Vec<Tile>,
    cursors: [AtomicUsize; 2],
}

impl TileQueue {
    pub(crate) fn new(size: ImageSize, chunk: usize) -> Result<TileQueue, FilterError> {
        Ok(TileQueue {
            tiles: tile_grid(size, chunk)?,
            cursors: [AtomicUsize::new(0), AtomicUsize::new(0)],
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Takes the next unclaimed tile of `phase`, `None` once the phase is drained.
    #[inline]
    pub(crate) fn claim(&self, phase: Phase) -> Option<Tile> {
        let index = self.cursors[phase as usize].fetch_add(1, Ordering::Relaxed);
        self.tiles.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn phases_replay_the_same_tiles() {
        let queue = TileQueue::new(ImageSize::new(5, 4), 2).unwrap();
        assert_eq!(queue.len(), 6);
        let first = std::iter::from_fn(|| queue.claim(Phase::Convolve)).collect::<Vec<_>>();
        assert_eq!(queue.claim(Phase::Convolve), None);
        let second = std::iter::from_fn(|| queue.claim(Phase::Normalize)).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn concurrent_claims_touch_each_pixel_once() {
        let size = ImageSize::new(37, 29);
        let queue = TileQueue::new(size, 3).unwrap();
        let owners = (0..size.width * size.height)
            .map(|_| AtomicU32::new(0))
            .collect::<Vec<_>>();
        std::thread::scope(|s| {
            for _ in 0..5 {
                s.spawn(|| {
                    while let Some(tile) = queue.claim(Phase::Convolve) {
                        tile.for_each_pixel(crate::partition::Traversal::RowMajor, |r, c| {
                            owners[r * size.width + c].fetch_add(1, Ordering::Relaxed);
                        });
                    }
                });
            }
        });
        assert!(owners.iter().all(|o| o.load(Ordering::Relaxed) == 1));
    }
}
