//! The in-progress registration draft

use serde::Serialize;
use std::fmt;

/// Every input on the form, named the way the submitted record names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Title,
    Description,
    Phone,
    Street,
    City,
    StateProv,
    Zip,
    Country,
    File,
}

impl FieldId {
    /// Key used in the error map and the submitted record
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::City => "city",
            Self::StateProv => "stateProv",
            Self::Zip => "zip",
            Self::Country => "country",
            Self::File => "file",
        }
    }

    /// Label shown above the control
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Phone => "Phone Number",
            Self::Street => "Street Address",
            Self::City => "City",
            Self::StateProv => "State/Province",
            Self::Zip => "ZIP/Postal Code",
            Self::Country => "Country",
            Self::File => "Upload Document",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Title => Some("Your Full Name"),
            Self::Description => Some("Tell us something about yourself..."),
            Self::Phone => Some("+91 98765 43210"),
            Self::Country => Some("Select country"),
            Self::File => Some("Path to .pdf .jpg .jpeg .png .doc .docx"),
            _ => None,
        }
    }

    /// Maximum number of characters the control accepts
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Self::Zip => Some(10),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Countries offered by the country selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Country {
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "GB")]
    UnitedKingdom,
    #[serde(rename = "AU")]
    Australia,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::India,
        Country::UnitedStates,
        Country::Canada,
        Country::UnitedKingdom,
        Country::Australia,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::UnitedStates => "US",
            Self::Canada => "CA",
            Self::UnitedKingdom => "GB",
            Self::Australia => "AU",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::UnitedStates => "United States",
            Self::Canada => "Canada",
            Self::UnitedKingdom => "United Kingdom",
            Self::Australia => "Australia",
        }
    }

    /// Step forward through the selector options, passing through "unset"
    pub fn cycle_next(current: Option<Country>) -> Option<Country> {
        match current {
            None => Some(Self::ALL[0]),
            Some(c) => {
                let idx = Self::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }

    /// Step backward through the selector options, passing through "unset"
    pub fn cycle_prev(current: Option<Country>) -> Option<Country> {
        match current {
            None => Self::ALL.last().copied(),
            Some(c) => {
                let idx = Self::ALL.iter().position(|x| *x == c).unwrap_or(0);
                if idx == 0 {
                    None
                } else {
                    Some(Self::ALL[idx - 1])
                }
            }
        }
    }
}

/// A document chosen through the file picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// All values entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state_prov: String,
    pub zip: String,
    pub country: Option<Country>,
    pub selected_file: Option<SelectedFile>,
}

impl FormDraft {
    /// Mutable access to a free-text field; `None` for the selector and the picker
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Title => Some(&mut self.title),
            FieldId::Description => Some(&mut self.description),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Street => Some(&mut self.street),
            FieldId::City => Some(&mut self.city),
            FieldId::StateProv => Some(&mut self.state_prov),
            FieldId::Zip => Some(&mut self.zip),
            FieldId::Country | FieldId::File => None,
        }
    }

    /// Current value as it should be displayed
    pub fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::Title => self.title.clone(),
            FieldId::Description => self.description.clone(),
            FieldId::Phone => self.phone.clone(),
            FieldId::Street => self.street.clone(),
            FieldId::City => self.city.clone(),
            FieldId::StateProv => self.state_prov.clone(),
            FieldId::Zip => self.zip.clone(),
            FieldId::Country => self
                .country
                .map(|c| format!("{} ({})", c.display_name(), c.code()))
                .unwrap_or_default(),
            FieldId::File => self
                .selected_file
                .as_ref()
                .map(|f| f.name.clone())
                .unwrap_or_default(),
        }
    }

    /// Push a typed character into a text field, honouring the phone
    /// widget's character set and per-field length limits
    pub fn input_char(&mut self, field: FieldId, c: char) {
        if field == FieldId::Phone && !is_phone_char(c) {
            return;
        }
        let max_len = field.max_len();
        if let Some(value) = self.text_mut(field) {
            if max_len.is_some_and(|max| value.chars().count() >= max) {
                return;
            }
            value.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn backspace(&mut self, field: FieldId) {
        if let Some(value) = self.text_mut(field) {
            value.pop();
        }
    }

    /// Replace the current document; a later selection wins
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')')
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_names_match_record_keys() {
            assert_eq!(FieldId::StateProv.name(), "stateProv");
            assert_eq!(FieldId::File.name(), "file");
            assert_eq!(FieldId::Zip.to_string(), "zip");
        }

        #[test]
        fn test_only_zip_is_length_limited() {
            assert_eq!(FieldId::Zip.max_len(), Some(10));
            assert_eq!(FieldId::Title.max_len(), None);
        }

        #[test]
        fn test_description_is_multiline() {
            assert!(FieldId::Description.is_multiline());
            assert!(!FieldId::Title.is_multiline());
        }
    }

    mod country {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_next_walks_all_options_then_unset() {
            let mut current = None;
            let mut seen = Vec::new();
            for _ in 0..6 {
                current = Country::cycle_next(current);
                seen.push(current.map(|c| c.code()));
            }
            assert_eq!(
                seen,
                vec![
                    Some("IN"),
                    Some("US"),
                    Some("CA"),
                    Some("GB"),
                    Some("AU"),
                    None
                ]
            );
        }

        #[test]
        fn test_cycle_prev_from_unset_goes_to_last() {
            assert_eq!(Country::cycle_prev(None), Some(Country::Australia));
            assert_eq!(Country::cycle_prev(Some(Country::India)), None);
            assert_eq!(
                Country::cycle_prev(Some(Country::Canada)),
                Some(Country::UnitedStates)
            );
        }

        #[test]
        fn test_serializes_as_code() {
            let json = serde_json::to_string(&Country::UnitedKingdom).unwrap();
            assert_eq!(json, "\"GB\"");
        }
    }

    mod form_draft {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let draft = FormDraft::default();
            assert!(draft.title.is_empty());
            assert!(draft.country.is_none());
            assert!(draft.selected_file.is_none());
        }

        #[test]
        fn test_input_char_appends_to_field() {
            let mut draft = FormDraft::default();
            draft.input_char(FieldId::City, 'P');
            draft.input_char(FieldId::City, 'a');
            assert_eq!(draft.city, "Pa");
        }

        #[test]
        fn test_zip_input_stops_at_ten_chars() {
            let mut draft = FormDraft::default();
            for c in "ABCDE-12345".chars() {
                draft.input_char(FieldId::Zip, c);
            }
            assert_eq!(draft.zip, "ABCDE-1234");
        }

        #[test]
        fn test_phone_rejects_letters() {
            let mut draft = FormDraft::default();
            for c in "+1 (415) abc 555".chars() {
                draft.input_char(FieldId::Phone, c);
            }
            assert_eq!(draft.phone, "+1 (415)  555");
        }

        #[test]
        fn test_input_char_ignores_non_text_fields() {
            let mut draft = FormDraft::default();
            draft.input_char(FieldId::Country, 'x');
            draft.input_char(FieldId::File, 'x');
            assert_eq!(draft, FormDraft::default());
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut draft = FormDraft {
                street: "Main".to_string(),
                ..Default::default()
            };
            draft.backspace(FieldId::Street);
            assert_eq!(draft.street, "Mai");
        }

        #[test]
        fn test_select_file_replaces_previous() {
            let mut draft = FormDraft::default();
            draft.select_file(SelectedFile {
                name: "a.pdf".to_string(),
                size: 1,
                mime_type: "application/pdf".to_string(),
            });
            draft.select_file(SelectedFile {
                name: "b.png".to_string(),
                size: 2,
                mime_type: "image/png".to_string(),
            });
            assert_eq!(draft.display_value(FieldId::File), "b.png");
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut draft = FormDraft {
                title: "Jane".to_string(),
                country: Some(Country::India),
                ..Default::default()
            };
            draft.clear();
            assert_eq!(draft, FormDraft::default());
        }

        #[test]
        fn test_country_display_value() {
            let draft = FormDraft {
                country: Some(Country::Canada),
                ..Default::default()
            };
            assert_eq!(draft.display_value(FieldId::Country), "Canada (CA)");
        }
    }
}
