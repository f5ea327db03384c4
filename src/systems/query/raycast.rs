use crate::domain::{Point, Segment};
use crate::spatial::chunks::ChunkGrid;

use super::perf::{count_fallback_scan, count_wall_tests};
use super::types::RayHit;

/// Closest intersection of `ray` with any of `walls`, as (point, squared distance from `ray.a`).
#[inline(always)]
fn nearest_in(grid: &ChunkGrid, ray: &Segment, walls: &[u32], best: &mut Option<(Point, f64)>) {
    count_wall_tests(walls.len());
    for &w in walls {
        if let Some(p) = ray.intersect(grid.wall(w)) {
            let d2 = ray.a.distance_squared(p);
            if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
                *best = Some((p, d2));
            }
        }
    }
}

/// Cast one ray from `origin` to `target` and report the first wall it strikes.
///
/// The chunk under the origin is searched first and the search stops there if
/// any of its walls is hit, even when a nearer wall listed only by a
/// neighbouring chunk lies beyond the chunk edge. When it finds nothing, every
/// chunk the ray enters or ends in is searched instead.
pub fn cast_ray(grid: &ChunkGrid, local: Option<usize>, origin: Point, target: Point) -> RayHit {
    let ray = Segment::new(origin, target);
    let mut best: Option<(Point, f64)> = None;

    if let Some(chunk) = local.and_then(|idx| grid.chunk(idx)) {
        nearest_in(grid, &ray, &chunk.walls, &mut best);
    }

    if best.is_none() {
        count_fallback_scan();
        for chunk in grid.chunks() {
            if chunk.walls.is_empty() {
                continue;
            }
            if chunk.rect.contains(target) || chunk.rect.crosses_boundary(&ray) {
                nearest_in(grid, &ray, &chunk.walls, &mut best);
            }
        }
    }

    match best {
        Some((point, d2)) => RayHit { point, distance: d2.sqrt() },
        None => RayHit::miss(),
    }
}

/// Cast the whole ray fan from `origin`, sharing one chunk lookup.
pub fn cast_rays(grid: &ChunkGrid, local: Option<usize>, origin: Point, targets: &[Point]) -> Vec<RayHit> {
    targets
        .iter()
        .map(|&target| cast_ray(grid, local, origin, target))
        .collect()
}
