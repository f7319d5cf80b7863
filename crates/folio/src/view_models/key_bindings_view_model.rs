//! Key Bindings Panel View Model
//!
//! Pre-computes presentation data for the key bindings help panel.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "j/↓", "Ctrl+C", "gg")
    pub keys: String,
    /// Description of what the binding does
    pub description: String,
}

/// A section grouping related bindings
#[derive(Debug, Clone)]
pub struct BindingSection {
    /// Category name (e.g., "Navigation", "Sections")
    pub category: String,
    pub bindings: Vec<BindingRow>,
}

/// View model for the key bindings help panel
#[derive(Debug, Clone)]
pub struct KeyBindingsPanelViewModel {
    pub title: String,
    pub sections: Vec<BindingSection>,
    /// Close hint (e.g., "?/Esc")
    pub close_hint: String,
}

impl KeyBindingsPanelViewModel {
    /// Create a view model from app state
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;
        Self {
            title: " Keyboard Bindings ".to_string(),
            sections: Self::build_sections(keymap),
            close_hint: keymap
                .compact_hint_for_command(CommandId::KeyBindingsToggleView)
                .map(|h| format!("{}/Esc", h))
                .unwrap_or_else(|| "?/Esc".to_string()),
        }
    }

    /// Number of lines the panel content needs
    pub fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|s| 2 + s.bindings.len() + 1)
            .sum()
    }

    /// Group bindings by category, keeping the keymap's order
    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        let mut sections: Vec<BindingSection> = Vec::new();

        for binding in keymap.bindings() {
            let category = binding.command.category();
            let row = BindingRow {
                keys: binding.hint.clone(),
                description: binding.command.title(),
            };

            match sections.iter_mut().find(|s| s.category == category) {
                Some(section) => section.bindings.push(row),
                None => sections.push(BindingSection {
                    category: category.to_string(),
                    bindings: vec![row],
                }),
            }
        }

        for section in &mut sections {
            section.bindings = Self::deduplicate_bindings(std::mem::take(&mut section.bindings));
        }
        sections
    }

    /// Deduplicate bindings by description, combining keys
    fn deduplicate_bindings(bindings: Vec<BindingRow>) -> Vec<BindingRow> {
        let mut result: Vec<BindingRow> = Vec::new();

        for binding in bindings {
            if let Some(existing) = result
                .iter_mut()
                .find(|b| b.description == binding.description)
            {
                if !existing.keys.split('/').any(|k| k == binding.keys) {
                    existing.keys = format!("{}/{}", existing.keys, binding.keys);
                }
            } else {
                result.push(binding);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_keymap_order() {
        let vm = KeyBindingsPanelViewModel::from_state(&AppState::default());
        let categories: Vec<&str> = vm.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Navigation", "Sections", "Section actions", "General"]
        );
        assert_eq!(vm.close_hint, "?/Esc");
    }

    #[test]
    fn test_duplicate_keys_are_combined() {
        let rows = KeyBindingsPanelViewModel::deduplicate_bindings(vec![
            BindingRow {
                keys: "j".to_string(),
                description: "Next".to_string(),
            },
            BindingRow {
                keys: "↓".to_string(),
                description: "Next".to_string(),
            },
            BindingRow {
                keys: "j".to_string(),
                description: "Next".to_string(),
            },
        ]);
        assert_eq!(
            rows,
            vec![BindingRow {
                keys: "j/↓".to_string(),
                description: "Next".to_string(),
            }]
        );
    }
}
