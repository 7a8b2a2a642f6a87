//! Reactive form session
//!
//! One logical writer mutates the working record field by field; every
//! change re-runs the whole derived chain from current values. The
//! field count is small, so there is no caching or diffing: recompute
//! is idempotent and always correct for the latest inputs.
//!
//! Dependency chain:
//!   udise_code                  -> school_name, block
//!   date_of_training            -> date_of_receiving_trained_pay_scale
//!   joining date                -> date_of_joining_for_new_salary,
//!                                  next_increment_date
//!   (december salary, class)    -> new_salary_with_increment
//!   new_salary_with_increment   -> pay_matrix_salary

use chrono::NaiveDate;
use log::debug;

use crate::engine::{ClassBand, DerivationEngine, IncrementOutcome};
use crate::record::{parse_salary, TeacherRecord, AT_CEILING};
use crate::schools::SchoolDirectory;

/// A "field changed" event for the inputs the derived chain depends on
#[derive(Debug, Clone)]
pub enum FieldChange {
    UdiseCode(String),
    ClassName(String),
    December2024Salary(String),
    JoiningDate(Option<NaiveDate>),
    TrainingDate(Option<NaiveDate>),
}

/// The working form: one record plus the tables that feed derivation
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    engine: DerivationEngine,
    schools: SchoolDirectory,
    record: TeacherRecord,
}

impl FormSession {
    pub fn new(engine: DerivationEngine, schools: SchoolDirectory) -> Self {
        Self {
            engine,
            schools,
            record: TeacherRecord::default(),
        }
    }

    /// Resume a session over an existing record (recomputes immediately
    /// so stale derived fields cannot survive the load)
    pub fn with_record(engine: DerivationEngine, schools: SchoolDirectory, record: TeacherRecord) -> Self {
        let mut session = Self {
            engine,
            schools,
            record,
        };
        session.recompute();
        session
    }

    pub fn record(&self) -> &TeacherRecord {
        &self.record
    }

    pub fn into_record(self) -> TeacherRecord {
        self.record
    }

    pub fn engine(&self) -> &DerivationEngine {
        &self.engine
    }

    /// Apply one input change, then recompute the derived chain
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::UdiseCode(code) => self.record.udise_code = code,
            FieldChange::ClassName(class) => self.record.class_name = class,
            FieldChange::December2024Salary(salary) => {
                self.record.december_2024_salary = salary
            }
            FieldChange::JoiningDate(date) => {
                self.record.date_of_joining_as_specific_teacher = date
            }
            FieldChange::TrainingDate(date) => self.record.date_of_training = date,
        }
        self.recompute();
    }

    /// Mutate any record field(s) directly, then recompute
    pub fn update<F: FnOnce(&mut TeacherRecord)>(&mut self, mutate: F) {
        mutate(&mut self.record);
        self.recompute();
    }

    /// Recompute every derived field from the current inputs
    pub fn recompute(&mut self) {
        self.fill_school_fields();
        self.fill_auto_dates();
        self.derive_salary_chain();
    }

    fn fill_school_fields(&mut self) {
        // A matching U-DISE code always wins over manual edits
        if let Some(info) = self.schools.lookup(&self.record.udise_code) {
            self.record.school_name = info.name.clone();
            self.record.block = info.block.clone();
        }
    }

    fn fill_auto_dates(&mut self) {
        if let Some(training) = self.record.date_of_training {
            self.record.date_of_receiving_trained_pay_scale = Some(training);
        }

        match self.record.date_of_joining_as_specific_teacher {
            Some(joining) => {
                self.record.date_of_joining_for_new_salary = Some(joining);
                self.record.next_increment_date =
                    Some(self.engine.derive_next_increment_date(joining));
            }
            None => {
                self.record.date_of_joining_for_new_salary = None;
                self.record.next_increment_date = None;
            }
        }
    }

    fn derive_salary_chain(&mut self) {
        let class_band: Option<ClassBand> = self.record.class_name.parse().ok();

        // Step 1: one notional increment on the local-body ladder
        self.record.new_salary_with_increment =
            match (parse_salary(&self.record.december_2024_salary), class_band) {
                (Some(salary), Some(band)) => {
                    match self
                        .engine
                        .derive_incremented_salary(salary, band.grade_pay())
                    {
                        IncrementOutcome::Incremented(next) => next.to_string(),
                        IncrementOutcome::AtCeiling => AT_CEILING.to_string(),
                        IncrementOutcome::NotFound => String::new(),
                    }
                }
                _ => String::new(),
            };

        // Step 2: fitment into the specific-teacher scale
        let fitment_level = self.engine.map_class_to_fitment_level(class_band);
        self.record.pay_matrix_salary = match (
            parse_salary(&self.record.new_salary_with_increment),
            fitment_level,
        ) {
            (Some(incremented), Some(level)) => self
                .engine
                .derive_fitted_salary(incremented, level)
                .map(|fitted| fitted.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        debug!(
            "derived chain: december={:?} incremented={:?} fitted={:?}",
            self.record.december_2024_salary,
            self.record.new_salary_with_increment,
            self.record.pay_matrix_salary
        );
    }
}
