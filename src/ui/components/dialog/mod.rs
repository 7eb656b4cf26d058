//! Dialog components for TUI

mod ack_dialog;
mod base;
mod error_dialog;

pub use ack_dialog::render_ack_dialog;
pub use error_dialog::render_error_dialog;
