//! AI plausibility check collaborator
//!
//! The remote model sees the fully-assembled record as a labeled field
//! list and answers valid / invalid-with-messages. At most one attempt
//! per validation request, errors surfaced verbatim, no retry, and the
//! outcome never touches the derived salary fields. The concrete
//! remote transport lives outside this crate; `AcceptAll` stands in
//! for it in tests and offline use.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::Error;
use crate::record::{format_date, TeacherRecord};

/// Result of one plausibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    /// Field name -> human-readable message, surfaced verbatim
    Invalid(BTreeMap<String, String>),
}

/// Plausibility-check collaborator contract
pub trait PlausibilityCheck {
    fn check(&self, record: &TeacherRecord) -> Result<CheckOutcome, Error>;
}

/// Permissive checker for tests and offline runs
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PlausibilityCheck for AcceptAll {
    fn check(&self, _record: &TeacherRecord) -> Result<CheckOutcome, Error> {
        Ok(CheckOutcome::Valid)
    }
}

/// The formatted field list a remote checker consumes
pub fn build_prompt(record: &TeacherRecord) -> String {
    fn fmt_date(date: Option<NaiveDate>) -> String {
        date.map(format_date).unwrap_or_default()
    }

    let mut out = String::from(
        "You are a data validator for teacher salary fixation forms. \
         Review the following data and determine if it is valid.\n\n",
    );

    out.push_str("Office Details:\n");
    out.push_str(&format!("Office: {}\n", record.office));
    out.push_str(&format!(
        "District Education Officer: {}\n",
        record.district_education_officer
    ));
    out.push_str(&format!("District: {}\n\n", record.district));

    out.push_str("Teacher Information:\n");
    out.push_str(&format!("Teacher Name: {}\n", record.teacher_name));
    out.push_str(&format!("School Name: {}\n", record.school_name));
    out.push_str(&format!("U-DISE Code: {}\n", record.udise_code));
    out.push_str(&format!("Class: {}\n", record.class_name));
    out.push_str(&format!("Subject: {}\n", record.subject));
    out.push_str(&format!(
        "Appointment Category: {}\n",
        record.appointment_category
    ));
    out.push_str(&format!("Date of Birth: {}\n\n", fmt_date(record.date_of_birth)));

    out.push_str("Salary Details:\n");
    out.push_str(&format!(
        "Date of Joining as Specific Teacher: {}\n",
        fmt_date(record.date_of_joining_as_specific_teacher)
    ));
    out.push_str(&format!(
        "Date of Training: {}\n",
        fmt_date(record.date_of_training)
    ));
    out.push_str(&format!("Efficiency Type: {}\n", record.efficiency_type));
    out.push_str(&format!("Bank Name: {}\n\n", record.bank_name));

    out.push_str("Other Details:\n");
    out.push_str(&format!(
        "Date of First Joining as Local Body Teacher: {}\n",
        fmt_date(record.date_of_first_joining_as_local_body_teacher)
    ));
    out.push_str(&format!(
        "Date of Receiving Trained Pay Scale: {}\n",
        fmt_date(record.date_of_receiving_trained_pay_scale)
    ));

    out.push_str(
        "\nRespond with a JSON object: {\"is_valid\": true} when the data \
         is valid, otherwise {\"is_valid\": false, \"validation_errors\": \
         {field: message, ...}}.\n",
    );
    out
}
