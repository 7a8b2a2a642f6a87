//! Specific-teacher fitment matrix
//!
//! Maps a fitment level to the ascending cells of the specific-teacher
//! pay scale. Fitment picks the smallest cell at or above the target
//! salary, saturating at the level's ceiling.

use std::collections::BTreeMap;

use crate::{FitmentLevel, PayIndex, SalaryAmount};

/// Fitment matrix: fitment level -> ascending cells of the new scale
#[derive(Debug, Clone)]
pub struct FitmentMatrix {
    levels: BTreeMap<FitmentLevel, Vec<SalaryAmount>>,
}

impl Default for FitmentMatrix {
    fn default() -> Self {
        // Specific-teacher pay-matrix cells by fitment level.
        // Entry salaries 25000 / 28000 / 31000 / 32000 per the scheme,
        // then ~3% steps rounded to the next ten.
        let mut levels = BTreeMap::new();
        levels.insert(
            2,
            vec![
                25000, 25750, 26520, 27320, 28140, 28980, 29850, 30750,
                31670, 32620, 33600, 34610, 35650, 36720, 37820, 38950,
                40120, 41320, 42560, 43840,
            ],
        );
        levels.insert(
            3,
            vec![
                28000, 28840, 29710, 30600, 31520, 32470, 33440, 34440,
                35470, 36530, 37630, 38760, 39920, 41120, 42350, 43620,
                44930, 46280, 47670, 49100,
            ],
        );
        levels.insert(
            5,
            vec![
                31000, 31930, 32890, 33880, 34900, 35950, 37030, 38140,
                39280, 40460, 41670, 42920, 44210, 45540, 46910, 48320,
                49770, 51260, 52800, 54380,
            ],
        );
        levels.insert(
            6,
            vec![
                32000, 32960, 33950, 34970, 36020, 37100, 38210, 39360,
                40540, 41760, 43010, 44300, 45630, 47000, 48410, 49860,
                51360, 52900, 54490, 56120,
            ],
        );
        Self { levels }
    }
}

impl FitmentMatrix {
    /// Create from loaded table data (level -> ascending cells)
    pub fn from_loaded(levels: BTreeMap<FitmentLevel, Vec<SalaryAmount>>) -> Self {
        Self { levels }
    }

    /// Cell at (level, index), `None` if either is unknown
    pub fn lookup_by_index(&self, level: FitmentLevel, index: PayIndex) -> Option<SalaryAmount> {
        self.levels.get(&level)?.get(index).copied()
    }

    /// Smallest cell in `level` at or above `target`. Cells ascend, so
    /// the first qualifying hit in index order is the minimum. When the
    /// target exceeds every cell the level's maximum is returned
    /// (saturation, not an error). `None` only for unknown levels.
    pub fn fit(&self, level: FitmentLevel, target: SalaryAmount) -> Option<SalaryAmount> {
        let cells = self.levels.get(&level)?;
        cells
            .iter()
            .copied()
            .find(|&cell| cell >= target)
            .or_else(|| cells.iter().copied().max())
    }

    /// Fitment levels present in the matrix, ascending
    pub fn levels(&self) -> impl Iterator<Item = FitmentLevel> + '_ {
        self.levels.keys().copied()
    }

    /// Number of cells at a level (0 for unknown levels)
    pub fn level_len(&self, level: FitmentLevel) -> usize {
        self.levels.get(&level).map_or(0, Vec::len)
    }
}
