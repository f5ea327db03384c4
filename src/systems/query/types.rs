use crate::domain::Point;

/// Nearest wall hit along one ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Hit point, or the point at infinity when the ray is clear
    pub point: Point,
    /// Distance from the agent to `point`, `f64::INFINITY` when clear
    pub distance: f64,
}

impl RayHit {
    #[inline]
    pub fn miss() -> Self {
        Self {
            point: Point::at_infinity(),
            distance: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Everything one simulation step asks of the track
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    pub rays: Vec<RayHit>,
    /// Hitbox touched a wall this step
    pub player_hit: bool,
    /// Hitbox crossed the expected gate this step
    pub checkpoint_hit: bool,
}
