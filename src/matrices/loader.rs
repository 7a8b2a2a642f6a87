//! CSV loading for the pay and fitment matrices
//!
//! Row format: `level,index,salary`. Indices within a level must be
//! contiguous from 0 and salaries strictly ascending; anything else is
//! rejected at load time rather than surfacing mid-derivation.

use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::{FitmentLevel, FitmentMatrix, PayLevel, PayMatrix, SalaryAmount};

#[derive(Debug, Deserialize)]
struct MatrixRow {
    level: u32,
    index: usize,
    salary: SalaryAmount,
}

/// Load a pay matrix from a `level,index,salary` CSV file
pub fn load_pay_matrix<P: AsRef<Path>>(path: P) -> Result<PayMatrix, Error> {
    let ladders = load_ladders(path.as_ref())?;
    let mut levels = BTreeMap::new();
    for (level, ladder) in ladders {
        let level = PayLevel::try_from(level)
            .map_err(|_| Error::MatrixData(format!("pay level {} out of range", level)))?;
        levels.insert(level, ladder);
    }
    info!("loaded pay matrix with {} level(s)", levels.len());
    Ok(PayMatrix::from_loaded(levels))
}

/// Load a fitment matrix from a `level,index,salary` CSV file
pub fn load_fitment_matrix<P: AsRef<Path>>(path: P) -> Result<FitmentMatrix, Error> {
    let ladders = load_ladders(path.as_ref())?;
    let mut levels = BTreeMap::new();
    for (level, ladder) in ladders {
        let level = FitmentLevel::try_from(level)
            .map_err(|_| Error::MatrixData(format!("fitment level {} out of range", level)))?;
        levels.insert(level, ladder);
    }
    info!("loaded fitment matrix with {} level(s)", levels.len());
    Ok(FitmentMatrix::from_loaded(levels))
}

fn load_ladders(path: &Path) -> Result<BTreeMap<u32, Vec<SalaryAmount>>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows: Vec<MatrixRow> = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    rows.sort_by_key(|r| (r.level, r.index));

    let mut ladders: BTreeMap<u32, Vec<SalaryAmount>> = BTreeMap::new();
    for row in rows {
        let ladder = ladders.entry(row.level).or_default();
        if row.index != ladder.len() {
            return Err(Error::MatrixData(format!(
                "level {}: expected index {}, got {}",
                row.level,
                ladder.len(),
                row.index
            )));
        }
        if let Some(&prev) = ladder.last() {
            if row.salary <= prev {
                return Err(Error::MatrixData(format!(
                    "level {} index {}: salary {} not above previous {}",
                    row.level, row.index, row.salary, prev
                )));
            }
        }
        ladder.push(row.salary);
    }

    if ladders.is_empty() {
        return Err(Error::MatrixData(format!(
            "no rows in {}",
            path.display()
        )));
    }
    Ok(ladders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_pay_matrix() {
        let path = write_temp(
            "sf_loader_ok.csv",
            "level,index,salary\n2000,0,8460\n2000,1,8720\n2400,0,9300\n",
        );
        let pm = load_pay_matrix(&path).unwrap();

        assert_eq!(pm.lookup_by_index(2000, 1), Some(8720));
        assert_eq!(pm.lookup_by_index(2400, 0), Some(9300));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_non_ascending() {
        let path = write_temp(
            "sf_loader_desc.csv",
            "level,index,salary\n2000,0,8460\n2000,1,8400\n",
        );
        assert!(matches!(
            load_pay_matrix(&path),
            Err(Error::MatrixData(_))
        ));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_index_gap() {
        let path = write_temp(
            "sf_loader_gap.csv",
            "level,index,salary\n2000,0,8460\n2000,2,8990\n",
        );
        assert!(matches!(
            load_pay_matrix(&path),
            Err(Error::MatrixData(_))
        ));
        std::fs::remove_file(path).ok();
    }
}
