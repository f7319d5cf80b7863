pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

use crate::state::Section;

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("h", "h", NavigateLeft),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("l", "l", NavigateRight),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Sections
        KeyBinding::new("pagedown", "PgDn", SectionNext),
        KeyBinding::new("pageup", "PgUp", SectionPrevious),
        KeyBinding::new("1", "1", JumpTo(Section::Home)),
        KeyBinding::new("2", "2", JumpTo(Section::About)),
        KeyBinding::new("3", "3", JumpTo(Section::Tech)),
        KeyBinding::new("4", "4", JumpTo(Section::Projects)),
        KeyBinding::new("5", "5", JumpTo(Section::Certificates)),
        KeyBinding::new("6", "6", JumpTo(Section::Contact)),
        KeyBinding::new("7", "7", JumpTo(Section::Footer)),
        // Section actions
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("tab", "Tab", FocusNext),
        KeyBinding::new("shift+tab", "Shift+Tab", FocusPrevious),
        KeyBinding::new("backtab", "Shift+Tab", FocusPrevious),
        KeyBinding::new("f", "f", CycleFilter),
        KeyBinding::new("p", "p", TogglePause),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_number_keys_jump_to_sections() {
        let keymap = default_keymap();
        let key = KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE);
        assert_eq!(
            keymap.match_key(&key, None).commands,
            vec![CommandId::JumpTo(Section::Contact)]
        );
    }

    #[test]
    fn test_every_binding_parses() {
        let keymap = default_keymap();
        assert_eq!(keymap.bindings().count(), 29);
    }
}
