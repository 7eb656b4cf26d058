//! Per-step field validation
//!
//! Each pass produces a fresh [`ErrorMap`] for the active step. Only the
//! fields shown on that step are checked; a field with several failing
//! rules keeps the message of the rule evaluated last.

use super::draft::{FieldId, FormDraft, SelectedFile};
use super::phone::PhoneRules;
use super::step::Step;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Largest accepted document, in bytes
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// MIME types accepted for the uploaded document
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

lazy_static! {
    static ref ZIP_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9\s-]{3,10}$").unwrap();
}

/// A single field failure; the display text is what the user sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Invalid phone number format")]
    PhoneInvalid,
    #[error("Street is required")]
    StreetRequired,
    #[error("City is required")]
    CityRequired,
    #[error("State/Province is required")]
    StateProvRequired,
    #[error("ZIP/Postal code is required")]
    ZipRequired,
    #[error("Invalid ZIP/Postal code format")]
    ZipInvalid,
    #[error("Country is required")]
    CountryRequired,
    #[error("Please upload a document")]
    FileRequired,
    #[error("Allowed: PDF, JPG, PNG, DOC, DOCX")]
    FileTypeNotAllowed,
    #[error("File must be under 5MB")]
    FileTooLarge,
}

/// Field name to message mapping for the current validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ErrorMap {
    /// Record a failure; a later failure on the same field replaces it
    pub fn set(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FieldId) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Message for a field, if it failed
    pub fn message(&self, field: FieldId) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// (field name, message) pairs in field order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.name(), error.to_string()))
            .collect()
    }
}

/// Checks the fields of one step
#[derive(Debug, Clone, Default)]
pub struct StepValidator {
    phone: PhoneRules,
}

impl StepValidator {
    pub fn new(phone: PhoneRules) -> Self {
        Self { phone }
    }

    pub fn phone_rules(&self) -> &PhoneRules {
        &self.phone
    }

    /// Validate the fields shown on `step`
    pub fn validate(&self, step: Step, draft: &FormDraft) -> ErrorMap {
        let mut errors = ErrorMap::default();
        match step {
            Step::BasicInfo => self.validate_basic_info(draft, &mut errors),
            Step::Address => validate_address(draft, &mut errors),
            Step::Documents => validate_document(draft.selected_file.as_ref(), &mut errors),
        }
        errors
    }

    fn validate_basic_info(&self, draft: &FormDraft, errors: &mut ErrorMap) {
        if is_blank(&draft.title) {
            errors.set(FieldId::Title, FieldError::TitleRequired);
        }

        if is_blank(&draft.description) {
            errors.set(FieldId::Description, FieldError::DescriptionRequired);
        } else if draft.description.chars().count() < MIN_DESCRIPTION_LEN {
            // Length counts the raw text, surrounding whitespace included
            errors.set(FieldId::Description, FieldError::DescriptionTooShort);
        }

        if draft.phone.is_empty() {
            errors.set(FieldId::Phone, FieldError::PhoneRequired);
        } else if !self.phone.is_valid(&draft.phone) {
            errors.set(FieldId::Phone, FieldError::PhoneInvalid);
        }
    }
}

fn validate_address(draft: &FormDraft, errors: &mut ErrorMap) {
    if is_blank(&draft.street) {
        errors.set(FieldId::Street, FieldError::StreetRequired);
    }
    if is_blank(&draft.city) {
        errors.set(FieldId::City, FieldError::CityRequired);
    }
    if is_blank(&draft.state_prov) {
        errors.set(FieldId::StateProv, FieldError::StateProvRequired);
    }

    if is_blank(&draft.zip) {
        errors.set(FieldId::Zip, FieldError::ZipRequired);
    } else if !is_valid_zip(&draft.zip) {
        errors.set(FieldId::Zip, FieldError::ZipInvalid);
    }

    if draft.country.is_none() {
        errors.set(FieldId::Country, FieldError::CountryRequired);
    }
}

fn validate_document(file: Option<&SelectedFile>, errors: &mut ErrorMap) {
    let Some(file) = file else {
        errors.set(FieldId::File, FieldError::FileRequired);
        return;
    };

    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        errors.set(FieldId::File, FieldError::FileTypeNotAllowed);
    }
    // Size is checked last so it wins when both fail
    if file.size > MAX_FILE_SIZE {
        errors.set(FieldId::File, FieldError::FileTooLarge);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether `zip` has the shape of a postal code
pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_PATTERN.is_match(zip)
}
