//! Submission of a completed registration
//!
//! The draft is flattened into a [`SubmissionRecord`] and handed to a
//! [`SubmissionSink`]. Nothing here can fail: the record never leaves the
//! process.

use crate::state::{FormDraft, PhoneRules};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Message shown to the user once the record has been emitted
pub const ACKNOWLEDGEMENT: &str = "Form submitted successfully!";

/// Address block of the submitted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub street: String,
    pub city: String,
    pub state_prov: String,
    pub zip: String,
    pub country: Option<String>,
}

/// Structured record handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub address: AddressRecord,
    /// File name only; contents are never read
    pub file: Option<String>,
}

impl SubmissionRecord {
    /// Flatten a draft. The phone number is emitted in E.164 form when it
    /// is valid, as typed otherwise.
    pub fn from_draft(draft: &FormDraft, phone: &PhoneRules) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            phone: phone
                .to_e164(&draft.phone)
                .unwrap_or_else(|| draft.phone.clone()),
            address: AddressRecord {
                street: draft.street.clone(),
                city: draft.city.clone(),
                state_prov: draft.state_prov.clone(),
                zip: draft.zip.clone(),
                country: draft.country.map(|c| c.code().to_string()),
            },
            file: draft.selected_file.as_ref().map(|f| f.name.clone()),
        }
    }

    pub fn to_json(&self) -> String {
        // Plain strings and options only; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// User-visible confirmation of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
    pub submitted_at: DateTime<Local>,
}

impl Acknowledgement {
    pub fn now() -> Self {
        Self {
            message: ACKNOWLEDGEMENT.to_string(),
            submitted_at: Local::now(),
        }
    }

    /// Dialog body text
    pub fn body(&self) -> String {
        format!(
            "{}\nSubmitted at {}.\nThe record was written to the log.",
            self.message,
            self.submitted_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Destination for submitted records
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn emit(&mut self, record: &SubmissionRecord);
}

/// Writes each record to the log
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn emit(&mut self, record: &SubmissionRecord) {
        tracing::info!(record = %record.to_json(), "Form submitted");
    }
}

/// Build the record, emit it, and acknowledge. The caller resets the form.
pub fn submit(
    draft: &FormDraft,
    phone: &PhoneRules,
    sink: &mut dyn SubmissionSink,
) -> Acknowledgement {
    let record = SubmissionRecord::from_draft(draft, phone);
    sink.emit(&record);
    let ack = Acknowledgement::now();
    tracing::info!(submitted_at = %ack.submitted_at.to_rfc3339(), "Submission acknowledged");
    ack
}
