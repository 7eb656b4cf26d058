//! Error dialog for problems outside the form fields

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen.
///
/// Field failures live on the field borders; this is for the rest, such as
/// a file picker path that does not exist.
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            color: Color::Red,
            message: error_message,
            hint: Some(key_hint(&["Enter", "Esc"], "dismiss")),
            ..Default::default()
        },
    );
}
