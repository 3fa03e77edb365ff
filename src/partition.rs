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
use crate::filter_error::FilterError;
use crate::ImageSize;
use std::ops::Range;

/// Order in which a region is walked.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Row outer, column inner
    RowMajor,
    /// Column outer, row inner
    ColumnMajor,
}

/// Rectangular region `[row_start, row_end) x [column_start, column_end)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Tile {
    pub row_start: usize,
    pub row_end: usize,
    pub column_start: usize,
    pub column_end: usize,
}

impl Tile {
    pub fn new(rows: Range<usize>, columns: Range<usize>) -> Tile {
        Tile {
            row_start: rows.start,
            row_end: rows.end,
            column_start: columns.start,
            column_end: columns.end,
        }
    }

    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.row_start..self.row_end
    }

    #[inline]
    pub fn columns(&self) -> Range<usize> {
        self.column_start..self.column_end
    }

    pub fn area(&self) -> usize {
        self.rows().len() * self.columns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Calls `f(row, column)` for every cell of the tile in the requested order.
    #[inline]
    pub fn for_each_pixel(&self, traversal: Traversal, mut f: impl FnMut(usize, usize)) {
        match traversal {
            Traversal::RowMajor => {
                for row in self.rows() {
                    for column in self.columns() {
                        f(row, column);
                    }
                }
            }
            Traversal::ColumnMajor => {
                for column in self.columns() {
                    for row in self.rows() {
                        f(row, column);
                    }
                }
            }
        }
    }
}

/// Band `[id * (extent / workers), (id + 1) * (extent / workers))` owned by worker `id`.
///
/// The last worker extends its band to `extent` and absorbs the remainder.
pub(crate) fn shard_bounds(id: usize, workers: usize, extent: usize) -> Range<usize> {
    let band = extent / workers;
    let start = id * band;
    let end = if id + 1 == workers {
        extent
    } else {
        (id + 1) * band
    };
    start..end
}

/// Splits the image into `chunk x chunk` tiles, row-major, clipping the last row and
/// column of tiles against the image bounds.
pub(crate) fn tile_grid(size: ImageSize, chunk: usize) -> Result<Vec<Tile>, FilterError> {
    if chunk == 0 {
        return Err(FilterError::InvalidWorkChunk(chunk));
    }
    let tile_rows = size.height.div_ceil(chunk);
    let tile_columns = size.width.div_ceil(chunk);
    let count = tile_rows
        .checked_mul(tile_columns)
        .ok_or(FilterError::ImageIsTooLarge)?;

    let mut tiles = Vec::new();
    tiles
        .try_reserve_exact(count)
        .map_err(|_| FilterError::OutOfMemory(count))?;

    for tile_row in 0..tile_rows {
        let row_start = tile_row * chunk;
        let row_end = (row_start + chunk).min(size.height);
        for tile_column in 0..tile_columns {
            let column_start = tile_column * chunk;
            let column_end = (column_start + chunk).min(size.width);
            tiles.push(Tile::new(row_start..row_end, column_start..column_end));
        }
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(size: ImageSize, tiles: impl IntoIterator<Item = Tile>) -> Vec<u32> {
        let mut counts = vec![0u32; size.width * size.height];
        for tile in tiles {
            tile.for_each_pixel(Traversal::RowMajor, |r, c| counts[r * size.width + c] += 1);
        }
        counts
    }

    #[test]
    fn shards_cover_extent_exactly_once() {
        for extent in [1usize, 2, 7, 10, 33] {
            for workers in [1usize, 2, 3, 4, 8, 40] {
                let mut covered = vec![0u32; extent];
                for id in 0..workers {
                    for i in shard_bounds(id, workers, extent) {
                        covered[i] += 1;
                    }
                }
                assert!(covered.iter().all(|&c| c == 1), "{extent} / {workers}");
            }
        }
    }

    #[test]
    fn last_shard_absorbs_remainder() {
        assert_eq!(shard_bounds(0, 3, 10), 0..3);
        assert_eq!(shard_bounds(1, 3, 10), 3..6);
        assert_eq!(shard_bounds(2, 3, 10), 6..10);
        // more workers than rows, everything lands on the last one
        assert_eq!(shard_bounds(2, 5, 3), 0..0);
        assert_eq!(shard_bounds(4, 5, 3), 0..3);
    }

    #[test]
    fn tiles_partition_the_image() {
        for (w, h) in [(1usize, 1usize), (5, 3), (16, 16), (17, 9)] {
            for chunk in [1usize, 2, 3, 4, 8, 32] {
                let size = ImageSize::new(w, h);
                let tiles = tile_grid(size, chunk).unwrap();
                assert!(tiles.iter().all(|t| !t.is_empty()));
                assert_eq!(tiles.iter().map(Tile::area).sum::<usize>(), w * h);
                assert!(hits(size, tiles).iter().all(|&c| c == 1), "{w}x{h} / {chunk}");
            }
        }
    }

    #[test]
    fn oversized_chunk_makes_single_tile() {
        let tiles = tile_grid(ImageSize::new(6, 4), 100).unwrap();
        assert_eq!(tiles, vec![Tile::new(0..4, 0..6)]);
    }

    #[test]
    fn clipped_edge_tiles() {
        let tiles = tile_grid(ImageSize::new(5, 3), 2).unwrap();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[2], Tile::new(0..2, 4..5));
        assert_eq!(tiles[5], Tile::new(2..3, 4..5));
    }

    #[test]
    fn zero_chunk_is_rejected() {
        assert_eq!(
            tile_grid(ImageSize::new(2, 2), 0),
            Err(FilterError::InvalidWorkChunk(0))
        );
    }

    #[test]
    fn traversal_orders() {
        let tile = Tile::new(1..3, 4..6);
        let mut row_major = vec![];
        tile.for_each_pixel(Traversal::RowMajor, |r, c| row_major.push((r, c)));
        let mut column_major = vec![];
        tile.for_each_pixel(Traversal::ColumnMajor, |r, c| column_major.push((r, c)));
        assert_eq!(row_major, vec![(1, 4), (1, 5), (2, 4), (2, 5)]);
        assert_eq!(column_major, vec![(1, 4), (2, 4), (1, 5), (2, 5)]);
    }
}
