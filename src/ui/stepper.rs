//! Step progress indicator

use crate::state::Step;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width reserved for each step marker and its title
const STEP_WIDTH: u16 = 20;

/// How a step relates to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepStatus {
    Done,
    Current,
    Pending,
}

fn status_of(step: Step, current: Step) -> StepStatus {
    match step.index().cmp(&current.index()) {
        std::cmp::Ordering::Less => StepStatus::Done,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Pending,
    }
}

/// Draw numbered markers joined by connectors, current step highlighted
pub fn draw(frame: &mut Frame, area: Rect, current: Step) {
    let mut constraints = Vec::new();
    for (i, _) in Step::ALL.iter().enumerate() {
        if i > 0 {
            constraints.push(Constraint::Min(2));
        }
        constraints.push(Constraint::Length(STEP_WIDTH));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(area);

    for (i, step) in Step::ALL.iter().enumerate() {
        let status = status_of(*step, current);

        if i > 0 {
            // Connector is green once the step before it is done
            let prev_done = status_of(Step::ALL[i - 1], current) == StepStatus::Done;
            draw_connector(frame, chunks[i * 2 - 1], prev_done);
        }
        draw_marker(frame, chunks[i * 2], *step, status);
    }
}

fn draw_marker(frame: &mut Frame, area: Rect, step: Step, status: StepStatus) {
    let marker_style = match status {
        StepStatus::Current => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        StepStatus::Done => Style::default().fg(Color::Black).bg(Color::Green),
        StepStatus::Pending => Style::default().fg(Color::Gray).bg(Color::DarkGray),
    };
    let title_style = match status {
        StepStatus::Pending => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::White),
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {} ", step.index()), marker_style)),
        Line::from(Span::styled(step.title(), title_style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_connector(frame: &mut Frame, area: Rect, done: bool) {
    let color = if done { Color::Green } else { Color::DarkGray };
    let line = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(line, Style::default().fg(color))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_relative_to_current() {
        assert_eq!(status_of(Step::BasicInfo, Step::Address), StepStatus::Done);
        assert_eq!(status_of(Step::Address, Step::Address), StepStatus::Current);
        assert_eq!(status_of(Step::Documents, Step::Address), StepStatus::Pending);
    }
}
