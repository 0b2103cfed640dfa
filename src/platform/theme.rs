//! Platform-specific theme constants
//!
//! Provides font weights that vary by platform.

use iced::font::Weight;

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Semi-bold weight for button labels
/// - macOS: Medium
/// - Linux/Windows: Semibold
#[cfg(target_os = "macos")]
pub const SEMIBOLD_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const SEMIBOLD_WEIGHT: Weight = Weight::Semibold;
