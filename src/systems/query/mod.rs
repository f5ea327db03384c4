//! Query System - per-step ray fan, hitbox and checkpoint tests.
//!
//! Key concepts:
//! - Rays search the agent's chunk first and fall back to a grid scan
//! - Hitbox edges are tested against the agent's chunk only
//! - At most one gate transition per step

use crate::domain::{Hitbox, Point, Segment};
use crate::spatial::chunks::ChunkGrid;

mod collision;
mod perf;
mod progress;
mod raycast;
mod types;

pub use collision::{hitbox_crosses, hitbox_hits_wall};
pub use perf::{reset_query_perf_counters, take_query_perf_counters};
pub use progress::AgentState;
pub use raycast::{cast_ray, cast_rays};
pub use types::{QueryResult, RayHit};

/// One simulation step for one agent.
///
/// Wall collision runs before the gate test, so an agent that hits a wall
/// while crossing is checked against gate 0 when `reset_on_collision` is set.
pub fn query_step(
    grid: &ChunkGrid,
    gates: &[Segment],
    reset_on_collision: bool,
    agent: &mut AgentState,
    ray_targets: &[Point],
    position: Point,
    hitbox: &Hitbox,
) -> QueryResult {
    let local = grid.chunk_index_at(position);

    let rays = cast_rays(grid, local, position, ray_targets);

    let player_hit = hitbox_hits_wall(grid, local, hitbox);
    if player_hit {
        agent.collide(reset_on_collision);
    }

    let mut checkpoint_hit = false;
    if !gates.is_empty() {
        // Cursor may be stale if the host swapped tracks under this agent.
        if agent.cursor >= gates.len() {
            agent.cursor = 0;
        }
        if hitbox_crosses(hitbox, &gates[agent.cursor]) {
            agent.advance(gates.len());
            checkpoint_hit = true;
        }
    }

    QueryResult {
        rays,
        player_hit,
        checkpoint_hit,
    }
}
