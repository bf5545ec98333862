use crate::movement::MovementTuning;
use crate::pause::PauseListener;
use crate::state::{AppState, MenuAction, PlayerState};
use mazeworld_input::{HeldKeys, InputDispatcher, InputEvent, InputListener};
use mazeworld_kernel::SpawnTransform;

/// A running maze walk: application state, held keys and input listeners.
///
/// The host feeds key transitions to [`Session::handle`], menu clicks to
/// [`Session::select`] and calls [`Session::update`] once per frame, then
/// mirrors `state()` onto its controller, cursor and menu.
pub struct Session {
    state: AppState,
    held: HeldKeys,
    dispatcher: InputDispatcher<AppState>,
    tuning: MovementTuning,
}

impl Session {
    /// Start at `spawn`, walking, with the pause listener registered.
    pub fn new(spawn: &SpawnTransform, tuning: MovementTuning) -> Self {
        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(PauseListener);
        Self {
            state: AppState::new(PlayerState::at_spawn(spawn, tuning.walk_speed)),
            held: HeldKeys::new(),
            dispatcher,
            tuning,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn tuning(&self) -> MovementTuning {
        self.tuning
    }

    /// Register an additional listener after the pause listener.
    pub fn register(&mut self, listener: impl InputListener<AppState> + 'static) {
        self.dispatcher.register(listener);
    }

    /// Record the key transition and dispatch it. Returns how many listeners
    /// received the event.
    pub fn handle(&mut self, event: InputEvent) -> usize {
        self.held.apply(&event);
        self.dispatcher.dispatch(&event, &mut self.state)
    }

    pub fn select(&mut self, action: MenuAction) -> bool {
        self.state.apply_menu(action)
    }

    /// Per-frame update. Skipped while paused; returns whether it ran.
    pub fn update(&mut self) -> bool {
        if self.state.paused {
            return false;
        }
        self.tuning.apply(&self.held, &mut self.state.player);
        true
    }

    pub fn should_quit(&self) -> bool {
        self.state.quit_requested
    }
}
