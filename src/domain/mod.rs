//! Domain types: geometry primitives, track input and errors.

pub mod error;
pub mod geometry;
pub mod track;

pub use error::{Ring, TrackError};
pub use geometry::{Point, Rect, Segment};
pub use track::{points_from_flat, Hitbox, TrackBundle, TrackConfig, TrackLayout, MAX_CHUNKS};
