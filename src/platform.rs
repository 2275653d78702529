//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the alternate submit shortcut (`w`)
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+W/Ctrl+W also work as fallback)
pub const SUBMIT_SHORTCUT: &str = "^S";
