//! Core utilities shared by every layer.

#[macro_use]
pub mod console;
