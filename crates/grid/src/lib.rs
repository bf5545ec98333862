//! Tile grids: the floor plan a maze world is compiled from.
//!
//! # Invariants
//! - A `TileGrid` is never empty and every row has the same length.
//! - Grids are immutable once constructed.

mod layout;
mod source;
mod tile;

pub use layout::DUNGEON_LAYOUT;
pub use tile::{GridError, Tile, TileGrid};

pub fn crate_info() -> &'static str {
    "mazeworld-grid v0.1.0"
}
