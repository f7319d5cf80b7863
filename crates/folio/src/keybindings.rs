//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences such as `g g`.
//!
//! - `KeyBinding`: a textual key pattern bound to a command ID
//! - `ParsedKeyPattern`: the matchable form of a pattern
//! - `Keymap`: the ordered collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second one
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+c", "g g", "pagedown"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "gg", "PgDn"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "1", "G" (case-sensitive, uppercase implies SHIFT)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Named keys: "tab", "enter", "esc", "pageup", "pagedown", arrows, "f1".."f12"
/// - Two-key sequence: "g g" (space-separated single chars)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let (first, second) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        return match (single_char(first), single_char(second)) {
            (Some(first), Some(second)) => Some(ParsedKeyPattern::Sequence { first, second }),
            _ => None,
        };
    }

    if let Some(c) = single_char(pattern) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = lower.as_str();
    while let Some((modifier, tail)) = rest.split_once('+') {
        let flag = match modifier {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => break,
        };
        modifiers |= flag;
        rest = tail;
    }

    let code = parse_key_code(rest)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s if s.starts_with('f') && s.len() > 1 => KeyCode::F(s[1..].parse().ok()?),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a two-key sequence waiting for its partner
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Result of matching one key event against the keymap
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMatch {
    /// Commands bound to the key, in keymap order
    pub commands: Vec<CommandId>,
    /// The key starts a sequence; the caller should remember it
    pub pending: Option<char>,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key binding {:?}", binding.keys);
                    None
                }
            })
            .collect();
        Self { bindings }
    }

    /// Match a key event, completing `pending` if it forms a sequence
    ///
    /// Several commands can share a key (e.g. Enter); the caller tries them in
    /// order until the active view accepts one.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| !p.is_expired()), typed) {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| match pattern {
                ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current =>
                {
                    Some(binding.command)
                }
                _ => None,
            });
            if let Some(command) = completed {
                return KeyMatch {
                    commands: vec![command],
                    pending: None,
                };
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| match pattern {
                // BackTab arrives with or without SHIFT depending on the terminal
                ParsedKeyPattern::Single {
                    code: KeyCode::BackTab,
                    ..
                } => key.code == KeyCode::BackTab,
                ParsedKeyPattern::Single { code, modifiers } => {
                    key.code == *code && key.modifiers == *modifiers
                }
                ParsedKeyPattern::Sequence { .. } => false,
            })
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        let starts_sequence = typed.filter(|c| {
            self.bindings.iter().any(
                |(_, pattern)| matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if first == c),
            )
        });

        KeyMatch {
            commands: Vec::new(),
            pending: starts_sequence,
        }
    }

    /// Get all bindings (for the key bindings panel)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for NavigateNext)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }
        (!hints.is_empty()).then(|| hints.join("/"))
    }
}
