//! Lap progression - which gate an agent must cross next.

use serde::{Deserialize, Serialize};

/// Per-agent progression state.
///
/// Lives outside the track so several agents can share one index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    /// Index of the next expected gate
    pub cursor: usize,
    /// Completed laps (cursor wrapped back to 0)
    pub laps: u32,
    /// Gates crossed in total
    pub crossings: u64,
    /// Steps in which the hitbox touched a wall
    pub collisions: u64,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next gate, wrapping at `gate_count`. No-op without gates.
    pub fn advance(&mut self, gate_count: usize) {
        if gate_count == 0 {
            return;
        }
        self.crossings = self.crossings.saturating_add(1);
        self.cursor += 1;
        if self.cursor >= gate_count {
            self.cursor = 0;
            self.laps = self.laps.saturating_add(1);
        }
    }

    /// Wall hit: count it and, when `reset` is set, send the agent back to gate 0.
    pub fn collide(&mut self, reset: bool) {
        self.collisions = self.collisions.saturating_add(1);
        if reset {
            self.cursor = 0;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
