use crate::domain::{Hitbox, Segment};
use crate::spatial::chunks::ChunkGrid;

use super::perf::count_wall_tests;

/// Narrow phase: does any hitbox edge touch a wall of the local chunk?
///
/// Only the chunk under the agent is checked. There is no fallback scan here.
pub fn hitbox_hits_wall(grid: &ChunkGrid, local: Option<usize>, hitbox: &Hitbox) -> bool {
    let Some(chunk) = local.and_then(|idx| grid.chunk(idx)) else {
        return false;
    };
    if chunk.walls.is_empty() {
        return false;
    }

    count_wall_tests(chunk.walls.len() * 4);
    let edges = hitbox.edges();
    chunk.walls.iter().any(|&w| {
        let wall = grid.wall(w);
        edges.iter().any(|edge| edge.intersects(wall))
    })
}

/// Does any hitbox edge cross `gate`?
#[inline]
pub fn hitbox_crosses(hitbox: &Hitbox, gate: &Segment) -> bool {
    hitbox.edges().iter().any(|edge| edge.intersects(gate))
}
