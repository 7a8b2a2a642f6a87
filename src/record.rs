//! The teacher record: every field of the fixation form
//!
//! Text fields are plain strings ("" = not yet filled), dates are
//! `Option<NaiveDate>` held as `DD-MM-YYYY` strings at rest, and the
//! three salary fields are decimal strings so the derived chain can
//! also hold the "N/A" ceiling sentinel.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::SalaryAmount;

/// Canonical date format for persistence and printing
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Ceiling sentinel stored in `new_salary_with_increment` when the
/// current salary sits at the last index of its ladder
pub const AT_CEILING: &str = "N/A";

/// One fixation form, flat as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherRecord {
    pub pran: String,
    pub competency_application_number: String,

    // Office details
    pub office: String,
    pub district_education_officer: String,
    pub district: String,

    // Teacher information
    pub teacher_name: String,
    pub school_name: String,
    pub block: String,
    pub udise_code: String,
    pub class_name: String,
    pub subject: String,
    pub appointment_category: String,
    #[serde(with = "date_string")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub date_of_joining_as_specific_teacher: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub date_of_training: Option<NaiveDate>,

    // Salary and bank details
    pub efficiency_type: String,
    #[serde(with = "date_string")]
    pub date_of_passing_efficiency: Option<NaiveDate>,
    pub bank_name: String,
    pub bank_account_number: String,
    pub ifsc_code: String,

    // Other details
    #[serde(with = "date_string")]
    pub date_of_first_joining_as_local_body_teacher: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub date_of_receiving_trained_pay_scale: Option<NaiveDate>,
    pub service_break: String,

    // Salary chain: december salary is user input, the rest derived
    pub december_2024_salary: String,
    pub new_salary_with_increment: String,
    pub pay_matrix_salary: String,
    #[serde(with = "date_string")]
    pub date_of_joining_for_new_salary: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub next_increment_date: Option<NaiveDate>,
}

impl TeacherRecord {
    /// Submit-time schema validation: required fields present, dates
    /// chosen. The only layer allowed to reject; derivation steps
    /// upstream never do.
    pub fn validate(&self) -> Result<(), Error> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::SchemaInvalid(errors))
        }
    }

    /// Field name -> message for every schema violation
    pub fn validation_errors(&self) -> BTreeMap<String, String> {
        const REQUIRED_TEXT: &str = "यह फ़ील्ड आवश्यक है";
        const REQUIRED_DATE: &str = "कृपया एक तारीख चुनें।";

        let mut errors = BTreeMap::new();

        let required_strings = [
            ("office", &self.office),
            ("district_education_officer", &self.district_education_officer),
            ("district", &self.district),
            ("teacher_name", &self.teacher_name),
            ("school_name", &self.school_name),
            ("udise_code", &self.udise_code),
            ("class_name", &self.class_name),
            ("subject", &self.subject),
            ("appointment_category", &self.appointment_category),
            ("efficiency_type", &self.efficiency_type),
            ("bank_name", &self.bank_name),
        ];
        for (field, value) in required_strings {
            if value.trim().is_empty() {
                errors.insert(field.to_string(), REQUIRED_TEXT.to_string());
            }
        }

        let required_dates = [
            ("date_of_birth", self.date_of_birth),
            (
                "date_of_joining_as_specific_teacher",
                self.date_of_joining_as_specific_teacher,
            ),
            ("date_of_training", self.date_of_training),
            (
                "date_of_first_joining_as_local_body_teacher",
                self.date_of_first_joining_as_local_body_teacher,
            ),
            (
                "date_of_receiving_trained_pay_scale",
                self.date_of_receiving_trained_pay_scale,
            ),
        ];
        for (field, value) in required_dates {
            if value.is_none() {
                errors.insert(field.to_string(), REQUIRED_DATE.to_string());
            }
        }

        errors
    }
}

/// Parse a salary field ("" and "N/A" are absent, digits are a value)
pub fn parse_salary(field: &str) -> Option<SalaryAmount> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed == AT_CEILING {
        return None;
    }
    trimmed.parse().ok()
}

/// Format a date the way the form and the slip show it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `DD-MM-YYYY` form string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Serde adapter holding `Option<NaiveDate>` as a `DD-MM-YYYY` string,
/// with "" for absent
mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
