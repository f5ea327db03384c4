//! Systems - per-step work against a built track.

pub mod query;
