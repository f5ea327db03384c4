use crate::domain::{Hitbox, Point};
use crate::systems::query::{
    query_step, reset_query_perf_counters, take_query_perf_counters, AgentState, QueryResult,
};

use super::{PerfTimer, TrackCore};

pub(super) fn query(
    track: &mut TrackCore,
    agent: &mut AgentState,
    ray_targets: &[Point],
    position: Point,
    hitbox: &Hitbox,
) -> QueryResult {
    let perf_on = track.perf_enabled;
    if perf_on {
        track.perf_stats.reset();
        reset_query_perf_counters();
    }
    let start = if perf_on { Some(PerfTimer::start()) } else { None };

    let result = query_step(
        &track.grid,
        &track.gates,
        track.config.reset_on_collision,
        agent,
        ray_targets,
        position,
        hitbox,
    );

    if let Some(t0) = start {
        let (wall_tests, fallback_scans) = take_query_perf_counters();
        let stats = &mut track.perf_stats;
        stats.query_ms = t0.elapsed_ms();
        stats.rays = result.rays.len() as u32;
        stats.rays_hit = result.rays.iter().filter(|r| r.is_hit()).count() as u32;
        stats.wall_tests = wall_tests.min(u32::MAX as u64) as u32;
        stats.fallback_scans = fallback_scans.min(u32::MAX as u64) as u32;
        stats.player_hit = result.player_hit;
        stats.checkpoint_hit = result.checkpoint_hit;
        stats.queries_total = stats.queries_total.saturating_add(1);
    }

    result
}
