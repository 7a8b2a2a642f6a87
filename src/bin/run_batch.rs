//! Derive salaries for a whole block of teachers from CSV
//!
//! Input columns: teacher_name,class,december_2024_salary,joining_date
//! (dates as DD-MM-YYYY). Writes one output row per teacher with the
//! incremented salary, fitted salary, and next increment date, then
//! prints summary stats.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use salary_fixation::engine::{ClassBand, DerivationEngine, IncrementOutcome};
use salary_fixation::matrices::loader;
use salary_fixation::matrices::{FitmentMatrix, PayMatrix};
use salary_fixation::record::{format_date, parse_date, AT_CEILING};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(about = "Batch salary derivation for a block of teachers")]
struct Args {
    /// Input CSV: teacher_name,class,december_2024_salary,joining_date
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// Pay matrix CSV; built-in ladders when omitted
    #[arg(long)]
    pay_matrix: Option<PathBuf>,

    /// Fitment matrix CSV; built-in cells when omitted
    #[arg(long)]
    fitment_matrix: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct InputRow {
    teacher_name: String,
    class: String,
    december_2024_salary: String,
    joining_date: String,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    teacher_name: String,
    class: String,
    december_2024_salary: String,
    new_salary_with_increment: String,
    pay_matrix_salary: String,
    next_increment_date: String,
}

fn derive_row(engine: &DerivationEngine, row: &InputRow) -> OutputRow {
    let class_band: Option<ClassBand> = row.class.parse().ok();
    let salary: Option<u32> = row.december_2024_salary.trim().parse().ok();

    let incremented = match (salary, class_band) {
        (Some(salary), Some(band)) => {
            match engine.derive_incremented_salary(salary, band.grade_pay()) {
                IncrementOutcome::Incremented(next) => next.to_string(),
                IncrementOutcome::AtCeiling => AT_CEILING.to_string(),
                IncrementOutcome::NotFound => String::new(),
            }
        }
        _ => String::new(),
    };

    let fitted = match (incremented.parse::<u32>().ok(), class_band) {
        (Some(amount), Some(band)) => engine
            .derive_fitted_salary(amount, band.fitment_level())
            .map(|f| f.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    let next_increment = parse_date(&row.joining_date)
        .map(|d| format_date(engine.derive_next_increment_date(d)))
        .unwrap_or_default();

    OutputRow {
        teacher_name: row.teacher_name.clone(),
        class: row.class.clone(),
        december_2024_salary: row.december_2024_salary.clone(),
        new_salary_with_increment: incremented,
        pay_matrix_salary: fitted,
        next_increment_date: next_increment,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let pay = match &args.pay_matrix {
        Some(path) => loader::load_pay_matrix(path)?,
        None => PayMatrix::default(),
    };
    let fitment = match &args.fitment_matrix {
        Some(path) => loader::load_fitment_matrix(path)?,
        None => FitmentMatrix::default(),
    };
    let engine = DerivationEngine::new(pay, fitment);

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let rows: Vec<InputRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("parsing input rows")?;
    println!("Loaded {} teacher(s) in {:?}", rows.len(), start.elapsed());

    let derive_start = Instant::now();
    let outputs: Vec<OutputRow> = rows.par_iter().map(|row| derive_row(&engine, row)).collect();
    println!("Derivation complete in {:?}", derive_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    for row in &outputs {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    let fitted = outputs.iter().filter(|r| !r.pay_matrix_salary.is_empty()).count();
    let at_ceiling = outputs
        .iter()
        .filter(|r| r.new_salary_with_increment == AT_CEILING)
        .count();
    let unmatched = outputs
        .iter()
        .filter(|r| r.new_salary_with_increment.is_empty())
        .count();

    println!("\nBlock Summary:");
    println!("  Teachers:   {}", outputs.len());
    println!("  Fitted:     {}", fitted);
    println!("  At ceiling: {}", at_ceiling);
    println!("  Unmatched:  {}", unmatched);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
