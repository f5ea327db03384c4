use thiserror::Error;

/// Which wall ring a polyline describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ring {
    Inner,
    Outer,
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ring::Inner => f.write_str("inner"),
            Ring::Outer => f.write_str("outer"),
        }
    }
}

/// Errors raised while loading a track or validating host input.
#[derive(Debug, Error)]
pub enum TrackError {
    /// A wall ring needs at least two points to close.
    #[error("{ring} wall needs at least 2 points, got {got}")]
    TooFewPoints { ring: Ring, got: usize },
    /// Gates are point pairs; a trailing point has no partner.
    #[error("checkpoint points must come in pairs, got {0} points")]
    UnpairedCheckpoint(usize),
    /// Flat `[x0, y0, x1, y1, ...]` buffer with a dangling coordinate.
    #[error("{what}: coordinate buffer has odd length {len}")]
    OddCoordinates { what: &'static str, len: usize },
    #[error("cell size must be finite and > 0, got {0}")]
    InvalidCellSize(f64),
    #[error("playfield must be finite and non-negative, got {width} x {height}")]
    InvalidPlayfield { width: f64, height: f64 },
    #[error("grid of {chunks_x} x {chunks_y} chunks exceeds {max} chunks; raise cell size")]
    GridTooLarge { chunks_x: f64, chunks_y: f64, max: u64 },
    #[error("hitbox needs exactly 4 corners, got {0}")]
    MalformedHitbox(usize),
    #[error("track bundle: {0}")]
    Bundle(#[from] serde_json::Error),
}
