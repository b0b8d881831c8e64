//! Platform-specific key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

#[cfg(target_os = "macos")]
pub const GENERATE_SHORTCUT: &str = "Cmd+G";
#[cfg(not(target_os = "macos"))]
pub const GENERATE_SHORTCUT: &str = "Ctrl+G";

#[cfg(target_os = "macos")]
pub const EXPORT_SHORTCUT: &str = "Cmd+E";
#[cfg(not(target_os = "macos"))]
pub const EXPORT_SHORTCUT: &str = "Ctrl+E";

#[cfg(target_os = "macos")]
pub const COPY_HTML_SHORTCUT: &str = "Cmd+Y";
#[cfg(not(target_os = "macos"))]
pub const COPY_HTML_SHORTCUT: &str = "Ctrl+Y";

#[cfg(target_os = "macos")]
pub const COPY_LINK_SHORTCUT: &str = "Cmd+L";
#[cfg(not(target_os = "macos"))]
pub const COPY_LINK_SHORTCUT: &str = "Ctrl+L";

/// True when `key` is the shortcut `c` with the platform modifier (or Ctrl)
pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && (key.modifiers.contains(SHORTCUT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL))
}
