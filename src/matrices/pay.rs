//! Local-body teacher pay matrix
//!
//! One ascending salary ladder per grade-pay tier. Index N+1 is one
//! annual increment above index N.

use std::collections::BTreeMap;

use crate::{PayIndex, PayLevel, SalaryAmount};

/// Pay matrix: grade-pay level -> ascending ladder of base salaries
#[derive(Debug, Clone)]
pub struct PayMatrix {
    /// Ladders keyed by grade pay, kept in a BTreeMap so searches by
    /// salary value visit levels in ascending order
    levels: BTreeMap<PayLevel, Vec<SalaryAmount>>,
}

impl Default for PayMatrix {
    fn default() -> Self {
        // Published local-body teacher ladders by grade pay.
        // Each step is the ~3% annual increment, rounded to the next ten.
        let mut levels = BTreeMap::new();
        levels.insert(
            2000,
            vec![
                8460, 8720, 8990, 9260, 9540, 9830, 10130, 10440, 10760,
                11090, 11430, 11780, 12140, 12510, 12890, 13280, 13680,
                14100, 14530, 14970,
            ],
        );
        levels.insert(
            2400,
            vec![
                9300, 9580, 9870, 10170, 10480, 10800, 11130, 11470, 11820,
                12180, 12550, 12930, 13320, 13720, 14140, 14570, 15010,
                15470, 15940, 16420,
            ],
        );
        levels.insert(
            2800,
            vec![
                10230, 10540, 10860, 11190, 11530, 11880, 12240, 12610,
                12990, 13380, 13790, 14210, 14640, 15080, 15540, 16010,
                16490, 16990, 17500, 18030,
            ],
        );
        Self { levels }
    }
}

impl PayMatrix {
    /// Create from loaded table data (level -> ascending ladder)
    pub fn from_loaded(levels: BTreeMap<PayLevel, Vec<SalaryAmount>>) -> Self {
        Self { levels }
    }

    /// Salary at (level, index), `None` if either is unknown
    pub fn lookup_by_index(&self, level: PayLevel, index: PayIndex) -> Option<SalaryAmount> {
        self.levels.get(&level)?.get(index).copied()
    }

    /// First index within `level` holding exactly `salary`, scanning in
    /// ascending index order. `None` when the level is unknown or the
    /// salary is not on the ladder.
    pub fn find_index_by_salary(&self, level: PayLevel, salary: SalaryAmount) -> Option<PayIndex> {
        self.levels
            .get(&level)?
            .iter()
            .position(|&s| s == salary)
    }

    /// First (level, index) holding exactly `salary`, lowest level first
    /// then lowest index. Stable tie-break when ladders share values.
    pub fn find_by_salary(&self, salary: SalaryAmount) -> Option<(PayLevel, PayIndex)> {
        for (&level, ladder) in &self.levels {
            if let Some(index) = ladder.iter().position(|&s| s == salary) {
                return Some((level, index));
            }
        }
        None
    }

    /// Number of increment steps on a level's ladder (0 for unknown levels)
    pub fn ladder_len(&self, level: PayLevel) -> usize {
        self.levels.get(&level).map_or(0, Vec::len)
    }

    /// Grade-pay levels present in the matrix, ascending
    pub fn levels(&self) -> impl Iterator<Item = PayLevel> + '_ {
        self.levels.keys().copied()
    }
}
