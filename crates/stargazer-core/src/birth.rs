//! Birth detail types.
//!
//! `BirthForm` is what the user typed, possibly incomplete. `BirthDetails`
//! can only be obtained by validating a form, so holders of one know every
//! field is present.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Raw birth-details form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthForm {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub time_of_birth: Option<NaiveTime>,
    pub place_of_birth: String,
}

/// Complete, validated birth details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDetails {
    name: String,
    date_of_birth: NaiveDate,
    time_of_birth: NaiveTime,
    place_of_birth: String,
}

impl BirthForm {
    /// Validates the form.
    ///
    /// Returns `None` when any of the four fields is missing or empty.
    /// Text fields are kept exactly as entered, whitespace included.
    pub fn validate(&self) -> Option<BirthDetails> {
        if is_missing(&self.name) || is_missing(&self.place_of_birth) {
            return None;
        }

        Some(BirthDetails {
            name: self.name.clone(),
            date_of_birth: self.date_of_birth?,
            time_of_birth: self.time_of_birth?,
            place_of_birth: self.place_of_birth.clone(),
        })
    }
}

impl BirthDetails {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn time_of_birth(&self) -> NaiveTime {
        self.time_of_birth
    }

    pub fn place_of_birth(&self) -> &str {
        &self.place_of_birth
    }
}

/// A text field counts as missing only when it holds no characters.
/// Whitespace is input like any other.
pub fn is_missing(value: &str) -> bool {
    value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BirthForm {
        BirthForm {
            name: "Ada".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            time_of_birth: NaiveTime::from_hms_opt(6, 30, 0),
            place_of_birth: "London".to_string(),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let details = complete_form().validate().expect("form should be valid");
        assert_eq!(details.name(), "Ada");
        assert_eq!(details.place_of_birth(), "London");
        assert_eq!(details.date_of_birth(), NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
    }

    #[test]
    fn test_each_missing_field_rejects() {
        let mut form = complete_form();
        form.name = String::new();
        assert!(form.validate().is_none());

        let mut form = complete_form();
        form.date_of_birth = None;
        assert!(form.validate().is_none());

        let mut form = complete_form();
        form.time_of_birth = None;
        assert!(form.validate().is_none());

        let mut form = complete_form();
        form.place_of_birth = String::new();
        assert!(form.validate().is_none());
    }

    #[test]
    fn test_whitespace_counts_as_input() {
        let mut form = complete_form();
        form.name = " ".to_string();
        form.place_of_birth = "   ".to_string();

        let details = form.validate().expect("whitespace fields are filled in");
        assert_eq!(details.name(), " ");
        assert_eq!(details.place_of_birth(), "   ");
        assert!(is_missing(""));
        assert!(!is_missing(" "));
    }

    #[test]
    fn test_text_fields_kept_verbatim() {
        let mut form = complete_form();
        form.name = "  Ada <Lovelace> ".to_string();
        let details = form.validate().unwrap();
        assert_eq!(details.name(), "  Ada <Lovelace> ");
    }
}
