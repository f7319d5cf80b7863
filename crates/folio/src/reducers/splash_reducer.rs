use crate::actions::{Action, GlobalAction, SplashAction};
use crate::state::SplashState;

/// Reducer for splash screen state
pub fn reduce(mut state: SplashState, action: &Action) -> SplashState {
    match action {
        Action::Splash(SplashAction::Frame(frame)) => {
            state.apply_frame(frame);
        }
        Action::Global(GlobalAction::Tick(dt)) if !state.completed => {
            // Drives the cursor blink
            state.elapsed += *dt;
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}
