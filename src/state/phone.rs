//! International phone-number rules

use phonenumber::{country, Mode};
use std::str::FromStr;

/// Region assumed for numbers entered without a leading `+`
pub const DEFAULT_PHONE_REGION: &str = "IN";

/// Parses and validates phone numbers against libphonenumber metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    region_code: String,
}

impl PhoneRules {
    /// Build rules for a two-letter region code. Returns `None` for codes the
    /// metadata does not know.
    pub fn for_region(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        country::Id::from_str(&code).ok()?;
        Some(Self { region_code: code })
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    fn region(&self) -> Option<country::Id> {
        country::Id::from_str(&self.region_code).ok()
    }

    /// Whether `input` is a dialable number according to the metadata
    pub fn is_valid(&self, input: &str) -> bool {
        phonenumber::parse(self.region(), input)
            .map(|number| phonenumber::is_valid(&number))
            .unwrap_or(false)
    }

    /// E.164 form of `input`, only when it is a valid number
    pub fn to_e164(&self, input: &str) -> Option<String> {
        phonenumber::parse(self.region(), input)
            .ok()
            .filter(phonenumber::is_valid)
            .map(|number| number.format().mode(Mode::E164).to_string())
    }
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            region_code: DEFAULT_PHONE_REGION.to_string(),
        }
    }
}
