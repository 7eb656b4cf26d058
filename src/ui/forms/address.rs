//! Step 2: address details

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Street on its own row, then two side-by-side pairs
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Street
            Constraint::Length(3), // City | State/Province
            Constraint::Length(3), // ZIP | Country
            Constraint::Min(0),
        ])
        .split(area);

    draw_field(frame, rows[0], app, FieldId::Street);

    let pair = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };

    let middle = pair(rows[1]);
    draw_field(frame, middle[0], app, FieldId::City);
    draw_field(frame, middle[1], app, FieldId::StateProv);

    let bottom = pair(rows[2]);
    draw_field(frame, bottom[0], app, FieldId::Zip);
    draw_field(frame, bottom[1], app, FieldId::Country);
}
