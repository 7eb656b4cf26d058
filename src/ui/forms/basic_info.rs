//! Step 1: basic information

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Description
            Constraint::Length(3), // Phone
        ])
        .split(area);

    draw_field(frame, chunks[0], app, FieldId::Title);
    draw_field(frame, chunks[1], app, FieldId::Description);
    draw_field(frame, chunks[2], app, FieldId::Phone);
}
