use crate::actions::{AboutAction, Action};
use crate::state::AboutState;

/// Reducer for the About section counters
pub fn reduce(mut state: AboutState, action: &Action) -> AboutState {
    if let Action::About(AboutAction::CountersChanged(values)) = action {
        state.values.clone_from(values);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_replace_values() {
        let state = reduce(
            AboutState::default(),
            &Action::About(AboutAction::CountersChanged(vec![3, 2, 1])),
        );
        assert_eq!(state.value(0), 3);
        assert_eq!(state.value(2), 1);
        assert_eq!(state.value(9), 0);
    }
}
