//! Chunk System - uniform wall grid for broad-phase lookups.
//!
//! The grid covers the configured playfield box with square cells laid out
//! row-major. Each chunk lists the indices of the walls that touch it; the
//! walls themselves live in one arena owned by the grid.

use crate::domain::{Rect, Segment, TrackConfig, TrackError};

mod build;
mod indexing;

pub use build::populate_chunks;

/// One square cell of the wall grid.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub rect: Rect,
    /// Indices into the grid's wall arena, ascending
    pub walls: Vec<u32>,
}

impl Chunk {
    pub fn new(rect: Rect) -> Self {
        Self { rect, walls: Vec::new() }
    }
}

/// Manages the wall arena and its chunk partitioning.
#[derive(Clone, Debug)]
pub struct ChunkGrid {
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    chunks_x: u32,
    chunks_y: u32,
    chunks: Vec<Chunk>,
    walls: Vec<Segment>,
}

impl Default for ChunkGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl ChunkGrid {
    /// Grid with no chunks and no walls; every lookup misses.
    pub fn empty() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size: 1.0,
            chunks_x: 0,
            chunks_y: 0,
            chunks: Vec::new(),
            walls: Vec::new(),
        }
    }

    /// Lay out chunks over the playfield and assign every wall to the chunks it touches.
    ///
    /// Fails when the playfield would need more than `MAX_CHUNKS` cells.
    pub fn build(config: &TrackConfig, walls: Vec<Segment>) -> Result<Self, TrackError> {
        let cell = config.cell_size;
        let (chunks_x, chunks_y) = config.grid_dimensions()?;

        let mut chunks = Vec::with_capacity(chunks_x as usize * chunks_y as usize);
        for row in 0..chunks_y {
            for col in 0..chunks_x {
                chunks.push(Chunk::new(Rect::new(
                    config.origin_x + col as f64 * cell,
                    config.origin_y + row as f64 * cell,
                    cell,
                    cell,
                )));
            }
        }

        populate_chunks(&mut chunks, &walls);

        Ok(Self {
            origin_x: config.origin_x,
            origin_y: config.origin_y,
            cell_size: cell,
            chunks_x,
            chunks_y,
            chunks,
            walls,
        })
    }

    /// Get chunk dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    /// Get total chunk count.
    pub fn total_chunks(&self) -> usize {
        self.chunks.len()
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn chunk(&self, idx: usize) -> Option<&Chunk> {
        self.chunks.get(idx)
    }

    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    #[inline]
    pub fn wall(&self, idx: u32) -> &Segment {
        &self.walls[idx as usize]
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Number of (chunk, wall) pairs stored.
    pub fn wall_refs(&self) -> usize {
        self.chunks.iter().map(|c| c.walls.len()).sum()
    }
}
