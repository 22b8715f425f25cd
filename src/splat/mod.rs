//! Ground-cover splat (alpha) maps.

pub mod layer;
pub mod alpha;
pub mod painter;

pub use layer::{GroundLayer, LAYER_COUNT};
pub use alpha::{AlphaGrid, LayerWeights};
pub use painter::{BlendPainter, BlendSeeds};
