//! Submission acknowledgement dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::submission::Acknowledgement;
use ratatui::{style::Color, Frame};

/// Render the acknowledgement shown after a successful submission
pub fn render_ack_dialog(frame: &mut Frame, ack: &Acknowledgement) {
    let body = ack.body();
    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            color: Color::Green,
            message: &body,
            hint: Some(key_hint(&["Enter"], "start a new application")),
            ..Default::default()
        },
    );
}
