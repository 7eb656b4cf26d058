//! Field rendering utilities for forms

use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one input
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
    pub error: Option<String>,
    /// Trailing hint shown while focused (e.g. selector arrows)
    pub active_hint: Option<&'a str>,
}

/// Draw the input for `field` from the current app state
pub fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: FieldId) {
    let state = &app.state;
    let display_value;
    let value = match field {
        FieldId::File => state.file_path_input.as_str(),
        _ => {
            display_value = state.wizard.draft.display_value(field);
            display_value.as_str()
        }
    };

    let active_hint = match field {
        FieldId::Country => Some("  ◀ ▶"),
        FieldId::File => Some("  Enter: select"),
        _ => None,
    };

    draw_field_view(
        frame,
        area,
        FieldView {
            label: field.label(),
            value,
            placeholder: field.placeholder(),
            is_active: state.active_field_id() == Some(field),
            is_multiline: field.is_multiline(),
            error: state.wizard.errors().message(field),
            active_hint,
        },
    );
}

/// Draw a bordered input with a required marker and an inline error
pub fn draw_field_view(frame: &mut Frame, area: Rect, view: FieldView) {
    let accent = if view.error.is_some() {
        Color::Red
    } else if view.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let cursor = Span::styled(
        if view.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if view.value.is_empty() {
        vec![Line::from(Span::styled(
            view.placeholder.unwrap_or(""),
            placeholder_style,
        ))]
    } else if view.is_multiline {
        // split('\n') rather than lines() so a trailing newline shows
        view.value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(view.value.to_string(), value_style))]
    };

    if view.is_active {
        let hint = view
            .active_hint
            .map(|h| Span::styled(h, Style::default().fg(Color::DarkGray)));
        if let Some(last) = lines.last_mut() {
            if view.value.is_empty() {
                // Cursor goes before the placeholder
                last.spans.insert(0, cursor);
            } else {
                last.spans.push(cursor);
            }
            last.spans.extend(hint);
        }
    }

    let title = Line::from(vec![
        Span::styled(format!(" {}", view.label), Style::default().fg(accent)),
        Span::styled(" *", Style::default().fg(Color::Red)),
        Span::raw(" "),
    ]);

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = view.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
