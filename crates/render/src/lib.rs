//! Rendering Adapter: renderer-agnostic consumers of a built world.
//!
//! # Invariants
//! - Renderers read a `BuiltWorld`; they never mutate it.
//! - Output derives only from the world and the view.
//!
//! Ships text renderers for the CLI and tests. A GPU backend implements the
//! same `Renderer` trait without changing consumers.

mod minimap;
mod renderer;

pub use minimap::MinimapRenderer;
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "mazeworld-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
