use crate::key::InputEvent;

/// Application state that can report whether the simulation is paused.
pub trait PauseState {
    fn is_paused(&self) -> bool;
}

/// Something that reacts to input events by mutating application state `S`.
///
/// Listeners are registered with an [`InputDispatcher`] rather than being
/// part of a scene graph, so any type can take on the capability.
pub trait InputListener<S> {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn on_input(&mut self, event: &InputEvent, state: &mut S);

    /// Whether this listener keeps receiving events while paused.
    fn active_while_paused(&self) -> bool {
        false
    }
}

/// Fans input events out to registered listeners in registration order.
pub struct InputDispatcher<S> {
    listeners: Vec<Box<dyn InputListener<S>>>,
}

impl<S> Default for InputDispatcher<S> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<S: PauseState> InputDispatcher<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: impl InputListener<S> + 'static) {
        tracing::debug!(
            listener = listener.name(),
            while_paused = listener.active_while_paused(),
            "registered input listener"
        );
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    /// Deliver `event` and return how many listeners received it.
    ///
    /// The pause state is sampled once, before the first listener runs, so a
    /// listener that pauses the application does not hide the event from the
    /// listeners after it.
    pub fn dispatch(&mut self, event: &InputEvent, state: &mut S) -> usize {
        let paused = state.is_paused();
        let mut delivered = 0;
        for listener in &mut self.listeners {
            if paused && !listener.active_while_paused() {
                continue;
            }
            listener.on_input(event, state);
            delivered += 1;
        }
        delivered
    }
}
