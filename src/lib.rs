//! Circuit Engine - track collision queries for racing agents
//!
//! Built once per track, queried once per simulation tick:
//! - ray fan from the agent to the nearest walls
//! - hitbox against walls
//! - hitbox against the next checkpoint gate
//!
//! Architecture:
//! - core/        - Console logging
//! - domain/      - Geometry, track input, errors
//! - spatial/     - Chunked wall index
//! - systems/     - Per-step queries
//! - simulation/  - TrackCore orchestration and the wasm facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::chunks;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel chunk build
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("circuit engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Hitbox, Point, Segment, TrackBundle, TrackConfig, TrackError, TrackLayout};
pub use simulation::{Agent, PerfStats, QueryOutput, Track, TrackCore};
pub use systems::query::{AgentState, QueryResult, RayHit};
