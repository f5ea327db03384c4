use crate::domain::Point;

use super::ChunkGrid;

impl ChunkGrid {
    /// Column and row of the cell containing `p`, or `None` outside the grid.
    #[inline]
    pub fn cell_coords(&self, p: Point) -> Option<(u32, u32)> {
        if !p.is_finite() || self.chunks.is_empty() {
            return None;
        }
        let col = ((p.x - self.origin_x) / self.cell_size).floor();
        let row = ((p.y - self.origin_y) / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.chunks_x as f64 || row >= self.chunks_y as f64 {
            return None;
        }
        Some((col as u32, row as u32))
    }

    /// Flat chunk index (`row * chunks_x + col`) for the cell containing `p`.
    #[inline]
    pub fn chunk_index_at(&self, p: Point) -> Option<usize> {
        self.cell_coords(p)
            .map(|(col, row)| self.chunk_idx_from_coords(col, row))
    }

    #[inline(always)]
    pub fn chunk_idx_from_coords(&self, col: u32, row: u32) -> usize {
        (row * self.chunks_x + col) as usize
    }
}
