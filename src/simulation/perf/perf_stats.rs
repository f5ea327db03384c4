use wasm_bindgen::prelude::*;

/// Snapshot of the last query (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) query_ms: f64,
    pub(super) rays: u32,
    pub(super) rays_hit: u32,
    pub(super) wall_tests: u32,
    pub(super) fallback_scans: u32,
    pub(super) player_hit: bool,
    pub(super) checkpoint_hit: bool,
    pub(super) queries_total: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        let total = self.queries_total;
        *self = PerfStats::default();
        self.queries_total = total;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn query_ms(&self) -> f64 { self.query_ms }
    #[wasm_bindgen(getter)]
    pub fn rays(&self) -> u32 { self.rays }
    #[wasm_bindgen(getter)]
    pub fn rays_hit(&self) -> u32 { self.rays_hit }
    #[wasm_bindgen(getter)]
    pub fn wall_tests(&self) -> u32 { self.wall_tests }
    #[wasm_bindgen(getter)]
    pub fn fallback_scans(&self) -> u32 { self.fallback_scans }
    #[wasm_bindgen(getter)]
    pub fn player_hit(&self) -> bool { self.player_hit }
    #[wasm_bindgen(getter)]
    pub fn checkpoint_hit(&self) -> bool { self.checkpoint_hit }
    /// Queries run since perf metrics were enabled
    #[wasm_bindgen(getter)]
    pub fn queries_total(&self) -> u64 { self.queries_total }
}
