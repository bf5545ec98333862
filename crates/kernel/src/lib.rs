//! World Kernel: compiles a tile grid into static world geometry.
//!
//! # Invariants
//! - `build` is pure: identical inputs produce identical, order-stable output.
//! - All validation happens before any instance is emitted; there are no
//!   partial results.
//! - The kernel never touches a renderer, physics engine, audio or window.
//!   Collider shapes are passed through to the output unexamined.

pub mod builder;
pub mod instance;

pub use builder::{
    BuildError, DEFAULT_SPAWN_OFFSET, GridWorldBuilder, SpawnCellProblem, SpawnRequest, build,
};
pub use instance::{BuiltWorld, InstanceKind, PlacedInstance, SpawnTransform, WorldUnits};

pub fn crate_info() -> &'static str {
    "mazeworld-kernel v0.1.0"
}
