use wasm_bindgen::prelude::*;

use crate::domain::{points_from_flat, Hitbox, Point, TrackConfig, TrackError, TrackLayout};
use crate::systems::query::{AgentState, QueryResult};

use super::perf_stats::PerfStats;
use super::TrackCore;

fn to_js(e: TrackError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Lap progression for one host-side agent
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct Agent {
    state: AgentState,
}

#[wasm_bindgen]
impl Agent {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next expected checkpoint
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> u32 { self.state.cursor as u32 }

    #[wasm_bindgen(getter)]
    pub fn laps(&self) -> u32 { self.state.laps }

    #[wasm_bindgen(getter)]
    pub fn crossings(&self) -> u64 { self.state.crossings }

    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u64 { self.state.collisions }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Result of one `query` call, flattened for JS
#[wasm_bindgen]
pub struct QueryOutput {
    points: Vec<f64>,
    distances: Vec<f64>,
    player_hit: bool,
    checkpoint_hit: bool,
}

impl From<QueryResult> for QueryOutput {
    fn from(result: QueryResult) -> Self {
        let mut points = Vec::with_capacity(result.rays.len() * 2);
        let mut distances = Vec::with_capacity(result.rays.len());
        for hit in &result.rays {
            points.push(hit.point.x);
            points.push(hit.point.y);
            distances.push(hit.distance);
        }
        Self {
            points,
            distances,
            player_hit: result.player_hit,
            checkpoint_hit: result.checkpoint_hit,
        }
    }
}

#[wasm_bindgen]
impl QueryOutput {
    /// Hit points as `[x0, y0, x1, y1, ...]`; `Infinity` for clear rays
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> { self.points.clone() }

    #[wasm_bindgen(getter)]
    pub fn distances(&self) -> Vec<f64> { self.distances.clone() }

    #[wasm_bindgen(getter)]
    pub fn player_hit(&self) -> bool { self.player_hit }

    #[wasm_bindgen(getter)]
    pub fn checkpoint_hit(&self) -> bool { self.checkpoint_hit }
}

#[wasm_bindgen]
pub struct Track {
    core: TrackCore,
    agent: AgentState,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Track {
    /// Create an empty track; call `build` before querying
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: TrackCore::new(),
            agent: AgentState::new(),
        }
    }

    /// Load walls and gates from flat `[x0, y0, x1, y1, ...]` arrays.
    ///
    /// The playfield box starts at (`origin_x`, `origin_y`). Replaces any
    /// previous track and resets the built-in agent.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &mut self,
        inner: &[f64],
        outer: &[f64],
        checkpoints: &[f64],
        cell_size: f64,
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        let layout = TrackLayout::from_flat(inner, outer, checkpoints).map_err(to_js)?;
        let config = TrackConfig {
            origin_x,
            origin_y,
            cell_size,
            width,
            height,
            ..*self.core.config()
        };
        self.core.build(&layout, config).map_err(to_js)?;
        self.agent.reset();
        Ok(())
    }

    /// Load a JSON track bundle
    #[wasm_bindgen(js_name = buildFromJson)]
    pub fn build_from_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.build_from_json(&json).map_err(to_js)?;
        self.agent.reset();
        Ok(())
    }

    /// Per-tick query for the built-in agent
    pub fn query(&mut self, rays: &[f64], x: f64, y: f64, hitbox: &[f64]) -> Result<QueryOutput, JsValue> {
        let mut agent = self.agent;
        let out = self.query_state(&mut agent, rays, x, y, hitbox)?;
        self.agent = agent;
        Ok(out)
    }

    /// Per-tick query for a host-held agent
    #[wasm_bindgen(js_name = queryAgent)]
    pub fn query_agent(
        &mut self,
        agent: &mut Agent,
        rays: &[f64],
        x: f64,
        y: f64,
        hitbox: &[f64],
    ) -> Result<QueryOutput, JsValue> {
        self.query_state(&mut agent.state, rays, x, y, hitbox)
    }

    /// Next expected checkpoint of the built-in agent
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> u32 { self.agent.cursor as u32 }

    #[wasm_bindgen(getter)]
    pub fn laps(&self) -> u32 { self.agent.laps }

    pub fn reset_agent(&mut self) {
        self.agent.reset();
    }

    pub fn set_reset_on_collision(&mut self, reset: bool) {
        self.core.set_reset_on_collision(reset);
    }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> usize { self.core.wall_count() }

    #[wasm_bindgen(getter)]
    pub fn checkpoint_count(&self) -> usize { self.core.gate_count() }

    /// Get total chunk count
    pub fn total_chunks(&self) -> usize { self.core.total_chunks() }

    /// Get chunks X count (for JS overlays)
    pub fn chunks_x(&self) -> u32 { self.core.chunks_x() }

    /// Get chunks Y count
    pub fn chunks_y(&self) -> u32 { self.core.chunks_y() }

    /// Wall indices referenced by chunk `idx`
    pub fn chunk_walls(&self, idx: usize) -> Vec<u32> {
        self.core.chunk_walls(idx).to_vec()
    }

    /// Enable or disable per-query perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last query perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn index_summary_json(&self) -> String {
        self.core.index_summary_json()
    }
}

impl Track {
    fn query_state(
        &mut self,
        agent: &mut AgentState,
        rays: &[f64],
        x: f64,
        y: f64,
        hitbox: &[f64],
    ) -> Result<QueryOutput, JsValue> {
        let targets = points_from_flat("rays", rays).map_err(to_js)?;
        let hitbox = Hitbox::from_flat(hitbox).map_err(to_js)?;
        let result = self.core.query(agent, &targets, Point::new(x, y), &hitbox);
        Ok(result.into())
    }
}
