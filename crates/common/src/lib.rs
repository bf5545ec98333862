//! Shared plain types used across the mazeworld crates.

pub mod types;

pub use types::{CellCoord, ColliderShape};
