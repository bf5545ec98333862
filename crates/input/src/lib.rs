//! Input: host-agnostic key events dispatched to registered listeners.
//!
//! # Invariants
//! - Listeners receive application state explicitly; there is no global state.
//! - While the application is paused only listeners that declare
//!   `active_while_paused` receive events.

pub mod key;
pub mod listener;

pub use key::{HeldKeys, InputError, InputEvent, Key};
pub use listener::{InputDispatcher, InputListener, PauseState};

pub fn crate_info() -> &'static str {
    "mazeworld-input v0.1.0"
}
