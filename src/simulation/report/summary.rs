use serde::Serialize;

use super::TrackCore;

#[derive(Clone, Debug, Serialize)]
pub struct ChunkSummary {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub walls: Vec<u32>,
}

/// Shape of the built index, for host-side debugging overlays.
#[derive(Clone, Debug, Serialize)]
pub struct IndexSummary {
    pub built: bool,
    pub chunks_x: u32,
    pub chunks_y: u32,
    pub cell_size: f64,
    pub wall_count: usize,
    pub gate_count: usize,
    /// Non-empty chunks only
    pub chunks: Vec<ChunkSummary>,
}

pub(super) fn index_summary(track: &TrackCore) -> IndexSummary {
    let (chunks_x, chunks_y) = track.grid.dimensions();
    let chunks = track
        .grid
        .chunks()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.walls.is_empty())
        .map(|(index, c)| ChunkSummary {
            index,
            x: c.rect.min.x,
            y: c.rect.min.y,
            walls: c.walls.clone(),
        })
        .collect();

    IndexSummary {
        built: track.built,
        chunks_x,
        chunks_y,
        cell_size: track.grid.cell_size(),
        wall_count: track.grid.wall_count(),
        gate_count: track.gates.len(),
        chunks,
    }
}

pub(super) fn index_summary_json(track: &TrackCore) -> String {
    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string(&index_summary(track)).unwrap_or_default()
}
