//! Derive and print one salary fixation slip
//!
//! Reads a teacher record as JSON (file or stdin), runs the derivation
//! chain and schema validation, prints the slip, and optionally stores
//! the record as a JSON document.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use salary_fixation::check::{AcceptAll, CheckOutcome, PlausibilityCheck};
use salary_fixation::engine::DerivationEngine;
use salary_fixation::matrices::loader;
use salary_fixation::matrices::{FitmentMatrix, PayMatrix};
use salary_fixation::store::{JsonFileStore, SlipStore};
use salary_fixation::{slip, FormSession, SchoolDirectory, TeacherRecord};

#[derive(Parser, Debug)]
#[command(about = "Derive and print a specific-teacher salary fixation slip")]
struct Args {
    /// Record JSON file ("-" or omitted reads stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pay matrix CSV (level,index,salary); built-in ladders when omitted
    #[arg(long)]
    pay_matrix: Option<PathBuf>,

    /// Fitment matrix CSV (level,index,salary); built-in cells when omitted
    #[arg(long)]
    fitment_matrix: Option<PathBuf>,

    /// School directory CSV (udise_code,name,block); built-in when omitted
    #[arg(long)]
    schools: Option<PathBuf>,

    /// Store the record under this directory after validation
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Skip schema validation (derive and print only)
    #[arg(long)]
    no_validate: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let json = match &args.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    let record: TeacherRecord = serde_json::from_str(&json).context("parsing record JSON")?;

    let pay = match &args.pay_matrix {
        Some(path) => loader::load_pay_matrix(path)?,
        None => PayMatrix::default(),
    };
    let fitment = match &args.fitment_matrix {
        Some(path) => loader::load_fitment_matrix(path)?,
        None => FitmentMatrix::default(),
    };
    let schools = match &args.schools {
        Some(path) => SchoolDirectory::load(path)?,
        None => SchoolDirectory::default(),
    };

    let session = FormSession::with_record(DerivationEngine::new(pay, fitment), schools, record);
    let record = session.into_record();

    if !args.no_validate {
        if let Err(err) = record.validate() {
            if let salary_fixation::Error::SchemaInvalid(fields) = &err {
                for (field, message) in fields {
                    eprintln!("{}: {}", field, message);
                }
            }
            bail!("record failed validation");
        }

        match AcceptAll.check(&record)? {
            CheckOutcome::Valid => {}
            CheckOutcome::Invalid(errors) => {
                for (field, message) in &errors {
                    eprintln!("{}: {}", field, message);
                }
                bail!("record failed the plausibility check");
            }
        }
    }

    print!("{}", slip::render(&record));

    if let Some(dir) = &args.save_dir {
        let store = JsonFileStore::open(dir)?;
        let id = store.create(&record)?;
        eprintln!("saved slip {}", id);
    }

    Ok(())
}
