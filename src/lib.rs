//! Terrasynth - procedural shoreline terrain and ground-cover splat maps

pub mod core;
pub mod math;
pub mod grid;
pub mod terrain;
pub mod splat;
pub mod generation;
pub mod sink;
