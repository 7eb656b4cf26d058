//! Form rendering module
//!
//! One module per wizard step, sharing the field renderer:
//! - `field_renderer`: bordered inputs with inline errors
//! - `basic_info`: step 1, title / description / phone
//! - `address`: step 2, street / city / state / ZIP / country
//! - `documents`: step 3, file picker

mod address;
mod basic_info;
mod documents;
mod field_renderer;

use crate::app::App;
use crate::state::Step;
use ratatui::{layout::Rect, Frame};

/// Draw the fields of the current step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    match app.state.step() {
        Step::BasicInfo => basic_info::draw(frame, area, app),
        Step::Address => address::draw(frame, area, app),
        Step::Documents => documents::draw(frame, area, app),
    }
}
