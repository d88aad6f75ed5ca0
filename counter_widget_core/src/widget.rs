use log::debug;

use crate::state::CounterState;
use crate::view::View;

/// State container for the counter. The view is never stored: callers ask
/// for a fresh [`View`] after every mutation.
#[derive(Debug, Default)]
pub struct CounterWidget {
    state: CounterState,
}

impl CounterWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Bumps the counter. Returns whether the view must be rendered again,
    /// which is always the case.
    pub fn handle_increment(&mut self) -> bool {
        self.state.increment();
        debug!("counter incremented to {}", self.state.number);
        true
    }

    pub fn render(&self) -> View {
        View::from(&self.state)
    }
}
