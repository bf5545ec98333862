use crate::state::PlayerState;
use mazeworld_input::{HeldKeys, Key};
use serde::{Deserialize, Serialize};

/// Walk and run speeds for the first-person controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
        }
    }
}

impl MovementTuning {
    /// Run while Shift is held, walk otherwise.
    pub fn apply(&self, held: &HeldKeys, player: &mut PlayerState) {
        player.speed = if held.is_held(Key::Shift) {
            self.run_speed
        } else {
            self.walk_speed
        };
    }
}
