//! Keyboard shortcuts
//!
//! Shortcuts are stored with the settings so they can be remapped by editing
//! the settings file.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ToggleDarkMode,
    CycleLanguage,
    ToggleReduceMotion,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::ToggleDarkMode,
            Action::CycleLanguage,
            Action::ToggleReduceMotion,
        ]
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Key codes usable in a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// A printable character, compared case-insensitively
    Char(char),
    Escape,
    F11,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        use iced::keyboard::key::Named;

        match (self, key) {
            (KeyCode::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars();
                match (chars.next(), chars.next()) {
                    (Some(got), None) => got.eq_ignore_ascii_case(expected),
                    _ => false,
                }
            }
            (KeyCode::Escape, Key::Named(Named::Escape)) => true,
            (KeyCode::F11, Key::Named(Named::F11)) => true,
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::F11 => "F11".to_string(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(
            Action::ToggleDarkMode,
            vec![KeyBinding::new(KeyCode::Char('d')).ctrl()],
        );
        bindings.insert(
            Action::CycleLanguage,
            vec![KeyBinding::new(KeyCode::Char('l')).ctrl()],
        );
        bindings.insert(
            Action::ToggleReduceMotion,
            vec![KeyBinding::new(KeyCode::Char('m')).ctrl()],
        );
        Self { bindings }
    }
}

impl KeyBindings {
    /// Get display string for an action's first keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }

    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key, modifiers)))
            .map(|(action, _)| *action)
    }
}
