//! Track - collision queries for one loaded circuit
//!
//! TrackCore owns the wall grid and gate list and only orchestrates:
//! - Index building is in spatial/chunks
//! - Ray, hitbox and gate tests are in systems/query
//! - Lap progression lives in AgentState, owned by the caller

use crate::domain::{Hitbox, Point, Segment, TrackConfig, TrackError, TrackLayout};
use crate::spatial::chunks::ChunkGrid;
use crate::systems::query::{AgentState, QueryResult};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/load.rs"]
mod load;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "report/summary.rs"]
mod summary;
mod facade;

pub use facade::{Agent, QueryOutput, Track};
pub use perf_stats::PerfStats;
pub use summary::{ChunkSummary, IndexSummary};

use perf_timer::PerfTimer;

/// The loaded track
pub struct TrackCore {
    grid: ChunkGrid,
    gates: Vec<Segment>,
    config: TrackConfig,
    built: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for TrackCore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackCore {
    /// Empty track: no walls, no gates. Queries miss until `build` succeeds.
    pub fn new() -> Self {
        Self {
            grid: ChunkGrid::empty(),
            gates: Vec::new(),
            config: TrackConfig::default(),
            built: false,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    /// Build the wall index and gate list, replacing whatever was loaded before.
    ///
    /// On error the previous track stays in place.
    pub fn build(&mut self, layout: &TrackLayout, config: TrackConfig) -> Result<(), TrackError> {
        load::build(self, layout, config)
    }

    /// Build from a JSON track bundle (see [`crate::domain::TrackBundle`]).
    pub fn build_from_json(&mut self, json: &str) -> Result<(), TrackError> {
        load::build_from_json(self, json)
    }

    /// Run one simulation step for `agent`: ray fan, wall hit and gate crossing.
    pub fn query(
        &mut self,
        agent: &mut AgentState,
        ray_targets: &[Point],
        position: Point,
        hitbox: &Hitbox,
    ) -> QueryResult {
        step::query(self, agent, ray_targets, position, hitbox)
    }

    pub fn is_built(&self) -> bool { self.built }

    pub fn config(&self) -> &TrackConfig { &self.config }

    pub fn grid(&self) -> &ChunkGrid { &self.grid }

    pub fn gates(&self) -> &[Segment] { &self.gates }

    pub fn gate_count(&self) -> usize { self.gates.len() }

    pub fn wall_count(&self) -> usize { self.grid.wall_count() }

    /// Get total chunk count
    pub fn total_chunks(&self) -> usize { self.grid.total_chunks() }

    /// Get chunks X count
    pub fn chunks_x(&self) -> u32 { self.grid.dimensions().0 }

    /// Get chunks Y count
    pub fn chunks_y(&self) -> u32 { self.grid.dimensions().1 }

    /// Wall indices stored in chunk `idx` (empty when out of range)
    pub fn chunk_walls(&self, idx: usize) -> &[u32] {
        self.grid.chunk(idx).map(|c| c.walls.as_slice()).unwrap_or(&[])
    }

    pub fn chunk_index_at(&self, p: Point) -> Option<usize> {
        self.grid.chunk_index_at(p)
    }

    /// Enable or disable per-query perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last query perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_reset_on_collision(&mut self, reset: bool) {
        settings::set_reset_on_collision(self, reset);
    }

    pub fn index_summary(&self) -> IndexSummary {
        summary::index_summary(self)
    }

    pub fn index_summary_json(&self) -> String {
        summary::index_summary_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
