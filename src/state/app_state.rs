//! Application state definitions

use super::draft::FieldId;
use super::step::Step;
use super::wizard::Wizard;
use crate::submission::Acknowledgement;
use std::collections::VecDeque;

/// Buttons in the navigation row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavButton {
    Previous,
    #[default]
    Next,
    Reset,
}

impl NavButton {
    pub fn next(&self) -> Self {
        match self {
            Self::Previous => Self::Next,
            Self::Next => Self::Reset,
            Self::Reset => Self::Previous,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Previous => Self::Reset,
            Self::Next => Self::Previous,
            Self::Reset => Self::Next,
        }
    }

    /// Label as rendered for the given step
    pub fn label(&self, step: Step) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next if step.is_last() => "Submit Application",
            Self::Next => "Next Step",
            Self::Reset => "Reset Form",
        }
    }

    pub fn is_enabled(&self, step: Step) -> bool {
        match self {
            Self::Previous => !step.is_first(),
            _ => true,
        }
    }
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Buttons,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub wizard: Wizard,
    /// Index into the current step's fields; one past the end is the button row
    pub active_field: usize,
    pub selected_button: NavButton,
    /// Text typed into the file picker, kept apart from the draft
    pub file_path_input: String,
    /// Acknowledgement dialog, shown after a submission
    pub acknowledgement: Option<Acknowledgement>,
    /// Pending non-field errors, shown one at a time
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            ..Default::default()
        }
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Number of focus stops on this step, button row included
    pub fn focus_count(&self) -> usize {
        self.step().fields().len() + 1
    }

    pub fn focus(&self) -> Focus {
        self.step()
            .fields()
            .get(self.active_field)
            .copied()
            .map(Focus::Field)
            .unwrap_or(Focus::Buttons)
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        match self.focus() {
            Focus::Field(field) => Some(field),
            Focus::Buttons => None,
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        matches!(self.focus(), Focus::Buttons)
    }

    pub fn next_focus(&mut self) {
        self.active_field = (self.active_field + 1) % self.focus_count();
    }

    pub fn prev_focus(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.focus_count() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Move focus to the first field, e.g. after a step change
    pub fn reset_focus(&mut self) {
        self.active_field = 0;
        self.selected_button = NavButton::default();
    }

    /// Move focus to the first field reporting an error, if any
    pub fn focus_first_error(&mut self) {
        let errors = self.wizard.errors();
        if let Some(idx) = self
            .step()
            .fields()
            .iter()
            .position(|field| errors.contains(*field))
        {
            self.active_field = idx;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.next();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.prev();
    }

    /// Route a typed character to the focused input
    pub fn input_char(&mut self, c: char) {
        match self.active_field_id() {
            Some(FieldId::File) => self.file_path_input.push(c),
            Some(field) => self.wizard.draft.input_char(field, c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field_id() {
            Some(FieldId::File) => {
                self.file_path_input.pop();
            }
            Some(field) => self.wizard.draft.backspace(field),
            None => {}
        }
    }

    /// Clear input buffers that live outside the draft
    pub fn clear_inputs(&mut self) {
        self.file_path_input.clear();
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod nav_button {
        use super::*;

        #[test]
        fn test_default_is_next() {
            assert_eq!(NavButton::default(), NavButton::Next);
        }

        #[test]
        fn test_cycles_wrap() {
            assert_eq!(NavButton::Reset.next(), NavButton::Previous);
            assert_eq!(NavButton::Previous.prev(), NavButton::Reset);
        }

        #[test]
        fn test_primary_label_depends_on_step() {
            assert_eq!(NavButton::Next.label(Step::BasicInfo), "Next Step");
            assert_eq!(NavButton::Next.label(Step::Documents), "Submit Application");
        }

        #[test]
        fn test_previous_disabled_on_first_step() {
            assert!(!NavButton::Previous.is_enabled(Step::BasicInfo));
            assert!(NavButton::Previous.is_enabled(Step::Address));
            assert!(NavButton::Reset.is_enabled(Step::BasicInfo));
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_starts_on_first_field() {
            let state = AppState::default();
            assert_eq!(state.focus(), Focus::Field(FieldId::Title));
        }

        #[test]
        fn test_next_focus_reaches_buttons_then_wraps() {
            let mut state = AppState::default();
            for _ in 0..3 {
                state.next_focus();
            }
            assert!(state.is_buttons_row_active());
            state.next_focus();
            assert_eq!(state.focus(), Focus::Field(FieldId::Title));
        }

        #[test]
        fn test_prev_focus_wraps_to_buttons() {
            let mut state = AppState::default();
            state.prev_focus();
            assert_eq!(state.focus(), Focus::Buttons);
        }

        #[test]
        fn test_focus_first_error() {
            let mut state = AppState::default();
            state.wizard.draft.title = "Jane".to_string();
            state.wizard.validate_current_step();
            state.focus_first_error();
            assert_eq!(state.focus(), Focus::Field(FieldId::Description));
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut state = AppState::default();
            state.input_char('J');
            state.next_focus();
            state.input_char('x');
            state.backspace();
            assert_eq!(state.wizard.draft.title, "J");
            assert!(state.wizard.draft.description.is_empty());
        }

        #[test]
        fn test_typing_on_buttons_row_is_ignored() {
            let mut state = AppState::default();
            state.prev_focus();
            state.input_char('x');
            assert!(state.wizard.draft.title.is_empty());
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_errors_shown_in_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
