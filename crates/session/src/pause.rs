use crate::state::AppState;
use mazeworld_input::{InputEvent, InputListener, Key};

/// Toggles pause on Escape. Stays active while paused so Escape also resumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseListener;

impl InputListener<AppState> for PauseListener {
    fn name(&self) -> &str {
        "pause"
    }

    fn on_input(&mut self, event: &InputEvent, state: &mut AppState) {
        if event.is_press_of(Key::Escape) {
            state.toggle_pause();
        }
    }

    fn active_while_paused(&self) -> bool {
        true
    }
}
