//! Layout components (header, navigation row, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PREV_SHORTCUT, RESET_SHORTCUT};
use crate::state::{FieldId, Focus, NavButton};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub stepper: Rect,
    pub form: Rect,
    pub nav: Rect,
    pub status: Rect,
}

/// Split the screen into the wizard regions
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Stepper
            Constraint::Min(0),                // Form
            Constraint::Length(BUTTON_HEIGHT), // Navigation
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        stepper: chunks[1],
        form: chunks[2],
        nav: chunks[3],
        status: chunks[4],
    }
}

/// Draw the title bar
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let reset = Line::from(vec![
        Span::styled(RESET_SHORTCUT, Style::default().fg(Color::Red)),
        Span::styled(": Reset Form ", Style::default().fg(Color::DarkGray)),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(reset.width() as u16),
        ])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        " Student Registration Form",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);
    frame.render_widget(
        Paragraph::new(reset).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Draw Previous / Next (or Submit) / Reset buttons
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Previous
            Constraint::Min(0),
            Constraint::Length(24), // Next / Submit
            Constraint::Length(16), // Reset
        ])
        .split(area);

    let step = app.state.step();
    let row_focused = app.state.is_buttons_row_active();
    let slots = [
        (NavButton::Previous, chunks[0], None),
        (NavButton::Next, chunks[2], Some(Color::Green)),
        (NavButton::Reset, chunks[3], Some(Color::Red)),
    ];

    for (button, slot, accent) in slots {
        render_button(
            frame,
            slot,
            button.label(step),
            row_focused && app.state.selected_button == button,
            button.is_enabled(step),
            accent,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" Step {}/3 ", app.state.step().index()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::styled(
        format!(" {}", focus_hints(app.state.focus())),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for whatever holds focus
fn focus_hints(focus: Focus) -> String {
    let wizard = format!("{NEXT_SHORTCUT}:next  {PREV_SHORTCUT}:back  Esc:quit");
    match focus {
        Focus::Buttons => format!("←/→:choose  Enter:press  Tab:fields  {wizard}"),
        Focus::Field(FieldId::Country) => format!("←/→:choose  Tab:next  {wizard}"),
        Focus::Field(FieldId::File) => format!("Enter:select file  Tab:next  {wizard}"),
        Focus::Field(FieldId::Description) => format!("Enter:newline  Tab:next  {wizard}"),
        Focus::Field(_) => format!("Tab:next  {wizard}"),
    }
}
