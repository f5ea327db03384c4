//! Spatial partitioning of static track geometry.

pub mod chunks;
