//! Mathematical utilities

pub mod remap;

pub use remap::{remap, Remap};
