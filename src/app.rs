//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::has_action_modifier;
use crate::state::{
    Advance, AppState, Country, FieldId, FilePicker, Focus, NavButton, StepValidator, Wizard,
};
use crate::submission::{SubmissionSink, TracingSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submitted records go
    sink: Box<dyn SubmissionSink>,
    /// Resolves file picker input
    picker: FilePicker,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let validator = StepValidator::new(config.phone_rules());
        tracing::info!(
            phone_region = validator.phone_rules().region_code(),
            "Registration form ready"
        );
        Self::with_parts(
            AppState::new(Wizard::new(validator)),
            FilePicker::new(config.document_dir()),
            Box::new(TracingSink),
        )
    }

    pub fn with_parts(
        state: AppState,
        picker: FilePicker,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        Self {
            state,
            sink,
            picker,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Acknowledgement dialog (modal)
        if self.state.acknowledgement.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.acknowledgement = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Wizard shortcuts (work from anywhere)
        if has_action_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('n') => self.advance(),
                KeyCode::Char('p') => self.retreat(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            _ => match self.state.focus() {
                Focus::Buttons => self.handle_buttons_key(key),
                Focus::Field(field) => self.handle_field_key(field, key),
            },
        }
        Ok(())
    }

    /// Keys while the navigation row is focused
    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_button(),
            KeyCode::Right | KeyCode::Char('l') => self.state.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press_button(self.state.selected_button),
            _ => {}
        }
    }

    /// Keys while an input is focused
    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        match (field, key.code) {
            (FieldId::Country, KeyCode::Right | KeyCode::Char(' ')) => {
                let draft = &mut self.state.wizard.draft;
                draft.country = Country::cycle_next(draft.country);
            }
            (FieldId::Country, KeyCode::Left) => {
                let draft = &mut self.state.wizard.draft;
                draft.country = Country::cycle_prev(draft.country);
            }
            (FieldId::Country, KeyCode::Backspace | KeyCode::Delete) => {
                self.state.wizard.draft.country = None;
            }
            (FieldId::Country, KeyCode::Enter) => self.state.next_focus(),
            (FieldId::Country, _) => {}
            (FieldId::File, KeyCode::Enter) => self.select_file(),
            (FieldId::Description, KeyCode::Enter) => {
                self.state.wizard.draft.description.push('\n');
            }
            (_, KeyCode::Enter) => self.state.next_focus(),
            (_, KeyCode::Char(c)) => self.state.input_char(c),
            (_, KeyCode::Backspace) => self.state.backspace(),
            _ => {}
        }
    }

    fn press_button(&mut self, button: NavButton) {
        match button {
            NavButton::Previous => self.retreat(),
            NavButton::Next => self.advance(),
            NavButton::Reset => self.reset(),
        }
    }

    /// Validate the current step and move on, or submit from the last step
    fn advance(&mut self) {
        match self.state.wizard.advance(self.sink.as_mut()) {
            Advance::Blocked => {
                let count = self.state.wizard.errors().len();
                self.status_message = Some(match count {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
                self.state.focus_first_error();
            }
            Advance::Moved(_) => self.state.reset_focus(),
            Advance::Submitted(ack) => {
                self.state.clear_inputs();
                self.state.reset_focus();
                self.state.acknowledgement = Some(ack);
            }
        }
    }

    fn retreat(&mut self) {
        if self.state.wizard.retreat() {
            self.state.reset_focus();
        }
    }

    fn reset(&mut self) {
        self.state.wizard.reset();
        self.state.clear_inputs();
        self.state.reset_focus();
        self.status_message = Some("Form reset".to_string());
    }

    /// Resolve the typed path into the selected document
    fn select_file(&mut self) {
        match self.picker.select(&self.state.file_path_input) {
            Ok(Some(file)) => {
                self.status_message = Some(format!("Selected: {}", file.name));
                self.state.wizard.draft.select_file(file);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("File selection failed: {err}");
                self.state.push_error(err.to_string());
            }
        }
    }
}
