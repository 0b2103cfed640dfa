//! Application messages

use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::features::Action;
use crate::features::landing::ButtonRole;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Landing ============
    /// Animation frame
    AnimationTick(Instant),
    /// A delayed circle start elapsed for the given mount
    CircleDue { generation: u64, index: usize },
    /// Login button pressed (no action wired)
    LoginPressed,
    /// Register button pressed (no action wired)
    RegisterPressed,
    /// Pointer entered or left a button
    ButtonHovered(Option<ButtonRole>),

    // ============ Window ============
    /// Main window opened
    WindowOpened(iced::window::Id),
    /// Window resized
    WindowResized(iced::Size),
    /// Window close requested
    RequestClose,

    // ============ Keyboard ============
    /// Key pressed
    KeyPressed(Key, Modifiers),
    /// Execute a keybinding action
    ExecuteAction(Action),
}
