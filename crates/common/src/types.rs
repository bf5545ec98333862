use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell in a tile grid, addressed by column `x` and row `z`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub x: usize,
    pub z: usize,
}

impl CellCoord {
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Collider description handed to a physics backend.
///
/// The world builder never inspects these; hosts that have their own collider
/// handles can use those instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box fitted to the instance scale.
    #[default]
    Box,
    /// Collide against the render mesh itself.
    Mesh,
    /// No collision.
    None,
}
