//! Salary derivation engine
//!
//! Pure functions over the record's current field values. Every step
//! degrades to "absent" on missing input or a table miss; none of them
//! return errors or panic. The form session re-runs the whole chain on
//! each field change, so the functions here must be idempotent.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::matrices::{FitmentMatrix, PayMatrix};
use crate::{FitmentLevel, PayIndex, PayLevel, SalaryAmount};

/// Class band a teacher is appointed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassBand {
    /// Grades 1-5
    C1To5,
    /// Grades 6-8
    C6To8,
    /// Grades 9-10
    C9To10,
    /// Grades 11-12
    C11To12,
}

impl ClassBand {
    /// Grade-pay tier whose ladder carries this class band's salaries
    pub fn grade_pay(self) -> PayLevel {
        match self {
            ClassBand::C1To5 => 2000,
            ClassBand::C6To8 => 2400,
            ClassBand::C9To10 | ClassBand::C11To12 => 2800,
        }
    }

    /// Fitment level for this class band under the specific-teacher
    /// scale. A fixed policy table, not an offset on the grade pay.
    pub fn fitment_level(self) -> FitmentLevel {
        match self {
            ClassBand::C1To5 => 2,
            ClassBand::C6To8 => 3,
            ClassBand::C9To10 => 5,
            ClassBand::C11To12 => 6,
        }
    }
}

impl FromStr for ClassBand {
    type Err = ();

    /// Parses the form strings ("1-5", "6-8", "9-10", "11-12").
    /// Anything else is unmapped: fitment is disabled, not an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-5" => Ok(ClassBand::C1To5),
            "6-8" => Ok(ClassBand::C6To8),
            "9-10" => Ok(ClassBand::C9To10),
            "11-12" => Ok(ClassBand::C11To12),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ClassBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassBand::C1To5 => "1-5",
            ClassBand::C6To8 => "6-8",
            ClassBand::C9To10 => "9-10",
            ClassBand::C11To12 => "11-12",
        };
        f.write_str(s)
    }
}

/// Result of applying one notional increment on the pay matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// Salary at the next index on the same ladder
    Incremented(SalaryAmount),
    /// Current salary sits at the last index; rendered as "N/A"
    AtCeiling,
    /// Level unknown or salary not on the ladder; dependent fields clear
    NotFound,
}

/// The derivation engine: the two matrices plus the pure operations
/// the form session invokes on each upstream field change
#[derive(Debug, Clone, Default)]
pub struct DerivationEngine {
    pay: PayMatrix,
    fitment: FitmentMatrix,
}

impl DerivationEngine {
    pub fn new(pay: PayMatrix, fitment: FitmentMatrix) -> Self {
        Self { pay, fitment }
    }

    pub fn pay_matrix(&self) -> &PayMatrix {
        &self.pay
    }

    pub fn fitment_matrix(&self) -> &FitmentMatrix {
        &self.fitment
    }

    /// Current salary from an explicit (level, index) pair. Preferred
    /// over salary search when both are known.
    pub fn derive_from_level_index(
        &self,
        level: PayLevel,
        index: PayIndex,
    ) -> Option<SalaryAmount> {
        self.pay.lookup_by_index(level, index)
    }

    /// One notional increment: find the current salary on the level's
    /// ladder, return the value one index up
    pub fn derive_incremented_salary(
        &self,
        current_salary: SalaryAmount,
        level: PayLevel,
    ) -> IncrementOutcome {
        let Some(index) = self.pay.find_index_by_salary(level, current_salary) else {
            return IncrementOutcome::NotFound;
        };
        match self.pay.lookup_by_index(level, index + 1) {
            Some(next) => IncrementOutcome::Incremented(next),
            None => IncrementOutcome::AtCeiling,
        }
    }

    /// Fitment level for a class band; `None` short-circuits the
    /// downstream fitment steps to empty
    pub fn map_class_to_fitment_level(&self, class_band: Option<ClassBand>) -> Option<FitmentLevel> {
        class_band.map(ClassBand::fitment_level)
    }

    /// Fitted salary: smallest cell of the fitment level at or above the
    /// incremented salary, saturating at the level's ceiling
    pub fn derive_fitted_salary(
        &self,
        incremented_salary: SalaryAmount,
        fitment_level: FitmentLevel,
    ) -> Option<SalaryAmount> {
        self.fitment.fit(fitment_level, incremented_salary)
    }

    /// Next increment date under the January-1 / July-1 rule:
    /// - joined exactly Jan 1 of year Y -> Jul 1, Y
    /// - joined Jan 2 .. Jul 1 inclusive -> Jan 1, Y+1
    /// - joined after Jul 1 -> Jul 1, Y+1
    pub fn derive_next_increment_date(&self, joining_date: NaiveDate) -> NaiveDate {
        next_increment_date(joining_date)
    }
}

/// The increment-date calendar rule, usable without an engine
pub fn next_increment_date(joining_date: NaiveDate) -> NaiveDate {
    let year = joining_date.year();
    let jan_1 = ymd(year, 1, 1);
    let jul_1 = ymd(year, 7, 1);

    if joining_date == jan_1 {
        jul_1
    } else if joining_date <= jul_1 {
        ymd(year + 1, 1, 1)
    } else {
        ymd(year + 1, 7, 1)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Jan 1 and Jul 1 exist in every year
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn engine() -> DerivationEngine {
        let mut pay = BTreeMap::new();
        pay.insert(2, vec![2000, 2100, 2200]);
        let mut fitment = BTreeMap::new();
        fitment.insert(3, vec![2200, 2350, 2500]);
        DerivationEngine::new(
            PayMatrix::from_loaded(pay),
            FitmentMatrix::from_loaded(fitment),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derive_from_level_index() {
        let eng = engine();

        assert_eq!(eng.derive_from_level_index(2, 1), Some(2100));
        assert_eq!(eng.derive_from_level_index(2, 9), None);
        assert_eq!(eng.derive_from_level_index(7, 0), None);
    }

    #[test]
    fn test_increment_steps_one_index() {
        let eng = engine();

        assert_eq!(
            eng.derive_incremented_salary(2000, 2),
            IncrementOutcome::Incremented(2100)
        );
        assert_eq!(
            eng.derive_incremented_salary(2100, 2),
            IncrementOutcome::Incremented(2200)
        );
    }

    #[test]
    fn test_increment_at_ceiling() {
        let eng = engine();

        assert_eq!(
            eng.derive_incremented_salary(2200, 2),
            IncrementOutcome::AtCeiling
        );
    }

    #[test]
    fn test_increment_not_found() {
        let eng = engine();

        // salary off the ladder
        assert_eq!(
            eng.derive_incremented_salary(2050, 2),
            IncrementOutcome::NotFound
        );
        // unknown level
        assert_eq!(
            eng.derive_incremented_salary(2000, 9),
            IncrementOutcome::NotFound
        );
    }

    #[test]
    fn test_class_band_mapping() {
        assert_eq!("6-8".parse::<ClassBand>(), Ok(ClassBand::C6To8));
        assert_eq!(ClassBand::C6To8.fitment_level(), 3);
        assert_eq!(ClassBand::C6To8.grade_pay(), 2400);
        assert_eq!(ClassBand::C11To12.fitment_level(), 6);
        assert_eq!(ClassBand::C11To12.grade_pay(), 2800);

        // unknown band stays unmapped
        assert!("13-14".parse::<ClassBand>().is_err());
    }

    #[test]
    fn test_fitted_salary() {
        let eng = engine();

        // smallest cell >= 2300
        assert_eq!(eng.derive_fitted_salary(2300, 3), Some(2350));
        // exceeds every cell: saturate at the ceiling
        assert_eq!(eng.derive_fitted_salary(9999, 3), Some(2500));
        // unknown fitment level
        assert_eq!(eng.derive_fitted_salary(2300, 9), None);
    }

    #[test]
    fn test_next_increment_date_rule() {
        // Jan 1 -> Jul 1 same year
        assert_eq!(next_increment_date(date(2025, 1, 1)), date(2025, 7, 1));
        // Jan 2 .. Jul 1 inclusive -> Jan 1 next year
        assert_eq!(next_increment_date(date(2025, 1, 2)), date(2026, 1, 1));
        assert_eq!(next_increment_date(date(2025, 4, 15)), date(2026, 1, 1));
        assert_eq!(next_increment_date(date(2025, 7, 1)), date(2026, 1, 1));
        // after Jul 1 -> Jul 1 next year
        assert_eq!(next_increment_date(date(2025, 7, 2)), date(2026, 7, 1));
        assert_eq!(next_increment_date(date(2025, 8, 15)), date(2026, 7, 1));
        assert_eq!(next_increment_date(date(2025, 12, 31)), date(2026, 7, 1));
    }
}
