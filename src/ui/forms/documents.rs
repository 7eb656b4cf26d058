//! Step 3: document upload

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, FilePicker};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Path input
            Constraint::Length(1), // Selected file
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Accepted formats
            Constraint::Length(1), // Extension hint
            Constraint::Min(0),
        ])
        .split(area);

    draw_field(frame, chunks[0], app, FieldId::File);

    if let Some(file) = &app.state.wizard.draft.selected_file {
        let selected = Paragraph::new(Line::from(vec![
            Span::styled(" Selected: ", Style::default().fg(Color::Green)),
            Span::styled(
                file.name.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", format_size(file.size)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(selected, chunks[1]);
    }

    let formats = Paragraph::new(" Accepted formats: PDF, JPG, PNG, DOC, DOCX • Max size: 5MB")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(formats, chunks[3]);

    let extensions = Paragraph::new(format!(" Extensions: {}", FilePicker::accept_hint()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(extensions, chunks[4]);
}

/// Human-readable byte count
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(6 * 1024 * 1024), "6.0 MB");
    }
}
