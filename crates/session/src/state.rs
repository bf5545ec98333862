use glam::{Quat, Vec3};
use mazeworld_input::PauseState;
use mazeworld_kernel::SpawnTransform;
use serde::{Deserialize, Serialize};

/// Player controller state the host mirrors onto its first-person controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub enabled: bool,
    pub speed: f32,
    pub reticle_visible: bool,
    pub position: Vec3,
    pub facing: Quat,
}

impl PlayerState {
    pub fn at_spawn(spawn: &SpawnTransform, speed: f32) -> Self {
        Self {
            enabled: true,
            speed,
            reticle_visible: false,
            position: spawn.position,
            facing: spawn.facing.unwrap_or(Quat::IDENTITY),
        }
    }
}

/// Buttons on the pause menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Resume,
    Quit,
}

/// Everything the input handlers and the frame update read or write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub paused: bool,
    pub menu_visible: bool,
    pub cursor_locked: bool,
    pub cursor_visible: bool,
    pub player: PlayerState,
    pub quit_requested: bool,
}

impl AppState {
    /// Running state: cursor captured, menu hidden, player active.
    pub fn new(player: PlayerState) -> Self {
        Self {
            paused: false,
            menu_visible: false,
            cursor_locked: true,
            cursor_visible: false,
            player,
            quit_requested: false,
        }
    }

    /// Flip between running and paused, updating every dependent flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.menu_visible = self.paused;
        self.cursor_locked = !self.paused;
        self.cursor_visible = self.paused;
        self.player.enabled = !self.paused;
        if !self.paused {
            self.player.reticle_visible = false;
        }
        if self.paused {
            tracing::info!("paused");
        } else {
            tracing::info!("resumed");
        }
    }

    /// Apply a pause-menu button. Returns whether it changed anything.
    pub fn apply_menu(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::Resume if self.paused => {
                self.toggle_pause();
                true
            }
            MenuAction::Resume => {
                tracing::warn!("resume selected while not paused");
                false
            }
            MenuAction::Quit => {
                tracing::info!("quit requested");
                self.quit_requested = true;
                true
            }
        }
    }
}

impl PauseState for AppState {
    fn is_paused(&self) -> bool {
        self.paused
    }
}
