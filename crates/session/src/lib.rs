//! Session: application state passed explicitly to input listeners.
//!
//! # Invariants
//! - Pause, menu, cursor and player flags change together through
//!   `AppState::toggle_pause`; they are never set piecemeal.
//! - Per-frame updates do not run while paused.
//! - The pause listener stays active while paused so the game can be resumed.

mod movement;
mod pause;
mod session;
mod state;

pub use movement::MovementTuning;
pub use pause::PauseListener;
pub use session::Session;
pub use state::{AppState, MenuAction, PlayerState};

pub fn crate_info() -> &'static str {
    "mazeworld-session v0.1.0"
}
