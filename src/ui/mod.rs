//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod stepper;

use crate::app::App;
use components::{render_ack_dialog, render_error_dialog};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());
    let step = app.state.step();

    layout::draw_header(frame, screen.header);
    stepper::draw(frame, screen.stepper, step);

    // Form panel for the current step
    let form_focused = !app.state.is_buttons_row_active();
    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let form_area = block.inner(screen.form);
    frame.render_widget(block, screen.form);
    forms::draw_step(frame, form_area, app);

    layout::draw_nav(frame, screen.nav, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Modal overlays, errors first
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(ack) = &app.state.acknowledgement {
        render_ack_dialog(frame, ack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, FilePicker, SelectedFile};
    use crate::submission::{Acknowledgement, MockSubmissionSink};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::with_parts(
            AppState::default(),
            FilePicker::default(),
            Box::new(MockSubmissionSink::new()),
        )
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_first_step_layout() {
        let content = render(&test_app());
        assert!(content.contains("Student Registration Form"));
        assert!(content.contains("Basic Information"));
        assert!(content.contains("Address Details"));
        assert!(content.contains("Document Upload"));
        assert!(content.contains("Your Full Name"));
        assert!(content.contains("Next Step"));
        assert!(content.contains("Step 1/3"));
    }

    #[test]
    fn test_errors_render_on_fields() {
        let mut app = test_app();
        app.handle_key(ctrl('n')).unwrap();
        let content = render(&app);
        assert!(content.contains("Title is required"));
        assert!(content.contains("Description is required"));
        assert!(content.contains("Phone number is required"));
    }

    #[test]
    fn test_address_step_fields() {
        let mut app = test_app();
        app.state.wizard.draft.title = "Jane Doe".to_string();
        app.state.wizard.draft.description = "Applying for scholarship program".to_string();
        app.state.wizard.draft.phone = "+14155552671".to_string();
        app.handle_key(ctrl('n')).unwrap();

        let content = render(&app);
        assert!(content.contains("Street Address"));
        assert!(content.contains("State/Province"));
        assert!(content.contains("ZIP/Postal Code"));
        assert!(content.contains("Select country"));
        assert!(content.contains("Step 2/3"));
    }

    #[test]
    fn test_documents_step_shows_selection_and_submit() {
        let mut app = test_app();
        app.state.wizard.draft.title = "Jane Doe".to_string();
        app.state.wizard.draft.description = "Applying for scholarship program".to_string();
        app.state.wizard.draft.phone = "+14155552671".to_string();
        app.handle_key(ctrl('n')).unwrap();
        app.state.wizard.draft.street = "1 Main St".to_string();
        app.state.wizard.draft.city = "Pune".to_string();
        app.state.wizard.draft.state_prov = "MH".to_string();
        app.state.wizard.draft.zip = "411001".to_string();
        app.state.wizard.draft.country = Some(crate::state::Country::India);
        app.handle_key(ctrl('n')).unwrap();
        app.state.wizard.draft.select_file(SelectedFile {
            name: "marksheet.pdf".to_string(),
            size: 2048,
            mime_type: "application/pdf".to_string(),
        });

        let content = render(&app);
        assert!(content.contains("Selected: marksheet.pdf"));
        assert!(content.contains("Submit Application"));
        assert!(content.contains("Max size: 5MB"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = test_app();
        app.state.push_error("File not found: /tmp/nope.pdf".to_string());
        let content = render(&app);
        assert!(content.contains("File not found"));
        assert!(content.contains("to dismiss"));
    }

    #[test]
    fn test_acknowledgement_overlay() {
        let mut app = test_app();
        app.state.acknowledgement = Some(Acknowledgement::now());
        let content = render(&app);
        assert!(content.contains("Form submitted successfully!"));
    }
}
