//! Feature modules - screen logic separated from UI
//!
//! Features should not depend on widget types directly.

pub mod keybindings;
pub mod landing;
pub mod pulse;
pub mod settings;

pub use keybindings::{Action, KeyBindings};
pub use settings::Settings;
