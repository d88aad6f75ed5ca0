use crate::state::CounterState;

/// Everything the widget shows, as text. Produced by [`View::from`] and
/// nothing else, so two views of the same state are always byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Label of the clickable control.
    pub label: String,
    pub sentence: String,
    /// Pretty-printed [`CounterState`].
    pub state_dump: String,
}

impl From<&CounterState> for View {
    fn from(state: &CounterState) -> Self {
        View {
            label: state.number.to_string(),
            sentence: format!("The current number is {}.", state.number),
            state_dump: state.to_pretty_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view() {
        let view = View::from(&CounterState::new());
        assert_eq!(view.label, "0");
        assert_eq!(view.sentence, "The current number is 0.");
        assert_eq!(view.state_dump, "{\n  \"number\": 0\n}");
    }

    #[test]
    fn large_numbers_render_in_decimal() {
        let view = View::from(&CounterState { number: 1_000_000 });
        assert_eq!(view.label, "1000000");
        assert_eq!(view.sentence, "The current number is 1000000.");
        assert_eq!(view.state_dump, "{\n  \"number\": 1000000\n}");
    }
}
