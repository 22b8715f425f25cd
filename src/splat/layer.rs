//! Ground-cover layers painted into the blend grid

use serde::{Deserialize, Serialize};

/// Number of ground-cover layers. Fixed; sinks rely on the ordering below.
pub const LAYER_COUNT: usize = 5;

/// Ground-cover layers, in blend-grid channel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundLayer {
    Sand = 0,
    Grass = 1,
    Moss = 2,
    Dirt = 3,
    Stone = 4,
}

impl GroundLayer {
    /// All layers in channel order.
    pub const ALL: [GroundLayer; LAYER_COUNT] = [
        GroundLayer::Sand,
        GroundLayer::Grass,
        GroundLayer::Moss,
        GroundLayer::Dirt,
        GroundLayer::Stone,
    ];

    /// Channel index in a cell's weight array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used for file names and manifests.
    pub fn name(self) -> &'static str {
        match self {
            GroundLayer::Sand => "sand",
            GroundLayer::Grass => "grass",
            GroundLayer::Moss => "moss",
            GroundLayer::Dirt => "dirt",
            GroundLayer::Stone => "stone",
        }
    }
}

impl std::fmt::Display for GroundLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
