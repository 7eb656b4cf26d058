//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for wizard shortcuts (next, previous, reset)
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Advance shortcut display
#[cfg(target_os = "macos")]
pub const NEXT_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Retreat shortcut display
#[cfg(target_os = "macos")]
pub const PREV_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PREV_SHORTCUT: &str = "Ctrl+P";

/// Reset shortcut display
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Whether the key carries the action modifier (Ctrl is accepted everywhere)
pub fn has_action_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(ACTION_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
