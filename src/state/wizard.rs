//! Step-transition state machine

use super::draft::FormDraft;
use super::step::Step;
use super::validation::{ErrorMap, StepValidator};
use crate::submission::{self, Acknowledgement, SubmissionSink};

/// Outcome of [`Wizard::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; the step did not change
    Blocked,
    /// Moved forward to the given step
    Moved(Step),
    /// The last step passed and the form was submitted and reset
    Submitted(Acknowledgement),
}

/// Draft, errors and current step of the registration form
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    pub draft: FormDraft,
    errors: ErrorMap,
    step: Step,
    validator: StepValidator,
}

impl Wizard {
    pub fn new(validator: StepValidator) -> Self {
        Self {
            validator,
            ..Default::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Re-run validation for the current step, replacing all errors.
    /// Returns true when the step passes.
    pub fn validate_current_step(&mut self) -> bool {
        self.errors = self.validator.validate(self.step, &self.draft);
        self.errors.is_empty()
    }

    /// Validate and move forward, submitting on the last step
    pub fn advance(&mut self, sink: &mut dyn SubmissionSink) -> Advance {
        if !self.validate_current_step() {
            tracing::debug!(
                step = self.step.index(),
                errors = ?self.errors.entries(),
                "Step validation failed"
            );
            return Advance::Blocked;
        }

        match self.step.next() {
            Some(next) => {
                tracing::info!(from = self.step.index(), to = next.index(), "Advancing step");
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                let ack =
                    submission::submit(&self.draft, self.validator.phone_rules(), sink);
                self.reset();
                Advance::Submitted(ack)
            }
        }
    }

    /// Go back one step without validating. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                tracing::info!(from = self.step.index(), to = prev.index(), "Retreating step");
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Discard everything and return to the first step
    pub fn reset(&mut self) {
        self.draft.clear();
        self.errors.clear();
        self.step = Step::BasicInfo;
        tracing::info!("Form reset");
    }
}
