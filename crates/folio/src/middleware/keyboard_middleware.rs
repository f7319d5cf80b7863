//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! Keys are handled in three layers:
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C always quits. Esc leaves a text field if one has focus and closes
//! the active view otherwise.
//!
//! ## Layer 2: Capabilities
//! While the active view declares TEXT_INPUT, printable characters are typed
//! into the focused field and Tab/Shift+Tab move between fields.
//!
//! ## Layer 3: Keymap + Gating
//! Everything else is looked up in the keymap; a command is dispatched only if
//! the active view accepts the resulting action.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("KeyboardMiddleware: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: text input
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(action) = text_input_action(&key) {
                log::debug!("KeyboardMiddleware: TEXT_INPUT - {:?}", action);
                dispatcher.dispatch(action);
                return;
            }
        }

        // Layer 3: keymap lookup + gating
        let matched = state.keymap.match_key(&key, self.pending_key.as_ref());
        self.pending_key = None;

        if let Some(first) = matched.pending {
            log::debug!(
                "KeyboardMiddleware: waiting for second key in sequence (first: {})",
                first
            );
            self.pending_key = Some(PendingKey::new(first));
            return;
        }

        for cmd_id in matched.commands {
            let action = cmd_id.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "KeyboardMiddleware: {:?} rejected by {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("KeyboardMiddleware: dispatching {:?}", cmd_id);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Translate a key into a text editing action, if it is one
fn text_input_action(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let input = match key.code {
        // Ctrl+U - Unix line kill
        KeyCode::Char('u') if ctrl => TextInputAction::ClearLine,
        KeyCode::Char(c) if !ctrl && !alt => TextInputAction::Char(c),
        // Cmd+Backspace on Mac
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            TextInputAction::ClearLine
        }
        KeyCode::Backspace => TextInputAction::Backspace,
        KeyCode::Enter => TextInputAction::Confirm,
        KeyCode::BackTab => return Some(Action::Navigate(NavigationAction::Previous)),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(Action::Navigate(NavigationAction::Previous))
        }
        KeyCode::Tab => return Some(Action::Navigate(NavigationAction::Next)),
        _ => return None,
    };
    Some(Action::TextInput(input))
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach reducers
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, PortfolioAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::state::{ContactField, Section};
    use crate::views::PortfolioView;

    fn portfolio_state() -> AppState {
        AppState {
            view_stack: vec![Box::new(PortfolioView::new())],
            ..Default::default()
        }
    }

    fn press(mw: &mut KeyboardMiddleware, state: &AppState, code: KeyCode, mods: KeyModifiers) -> Vec<Action> {
        let (dispatcher, rx) = recording_dispatcher();
        let consumed = !mw.handle(
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, mods))),
            state,
            &dispatcher,
        );
        assert!(consumed);
        drain(&rx)
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut mw = KeyboardMiddleware::new();
        let state = AppState::default(); // splash
        let actions = press(&mut mw, &state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(actions[..], [Action::Global(GlobalAction::Quit)]));
    }

    #[test]
    fn test_j_navigates_on_portfolio() {
        let mut mw = KeyboardMiddleware::new();
        let state = portfolio_state();
        let actions = press(&mut mw, &state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::Navigate(NavigationAction::Next)]
        ));
    }

    #[test]
    fn test_gg_sequence() {
        let mut mw = KeyboardMiddleware::new();
        let state = portfolio_state();
        assert!(press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE).is_empty());
        let actions = press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::Navigate(NavigationAction::ToTop)]
        ));
    }

    #[test]
    fn test_number_key_jumps() {
        let mut mw = KeyboardMiddleware::new();
        let state = portfolio_state();
        let actions = press(&mut mw, &state, KeyCode::Char('4'), KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::Portfolio(PortfolioAction::GoTo(Section::Projects))]
        ));
    }

    #[test]
    fn test_splash_rejects_section_commands() {
        let mut mw = KeyboardMiddleware::new();
        let state = AppState::default();
        assert!(press(&mut mw, &state, KeyCode::Char('j'), KeyModifiers::NONE).is_empty());
        assert!(press(&mut mw, &state, KeyCode::Enter, KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_text_input_routes_characters() {
        let mut mw = KeyboardMiddleware::new();
        let mut state = portfolio_state();
        state.portfolio.section = Section::Contact;
        state.contact.focus = Some(ContactField::Name);

        let actions = press(&mut mw, &state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::TextInput(TextInputAction::Char('j'))]
        ));

        let actions = press(&mut mw, &state, KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::Navigate(NavigationAction::Next)]
        ));

        let actions = press(&mut mw, &state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::TextInput(TextInputAction::Escape)]
        ));
    }

    #[test]
    fn test_enter_is_context_confirm_outside_text_input() {
        let mut mw = KeyboardMiddleware::new();
        let state = portfolio_state();
        let actions = press(&mut mw, &state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions[..],
            [Action::ViewContext(ContextAction::Confirm)]
        ));
    }

    #[test]
    fn test_esc_closes_without_text_input() {
        let mut mw = KeyboardMiddleware::new();
        let state = portfolio_state();
        let actions = press(&mut mw, &state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(actions[..], [Action::Global(GlobalAction::Close)]));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let mut mw = KeyboardMiddleware::new();
        let (dispatcher, rx) = recording_dispatcher();
        let state = portfolio_state();
        assert!(mw.handle(
            &Action::Portfolio(PortfolioAction::NextSection),
            &state,
            &dispatcher
        ));
        assert!(drain(&rx).is_empty());
    }
}
