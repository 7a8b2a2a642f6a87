//! Salary fixation system for specific teachers
//!
//! Derives the new base salary of a local-body teacher absorbed as a
//! "specific teacher": one notional increment on the pay-matrix ladder,
//! fitment into the specific-teacher scale, and the next increment date
//! under the January-1 / July-1 rule.

pub mod check;
pub mod engine;
pub mod error;
pub mod matrices;
pub mod record;
pub mod schools;
pub mod session;
pub mod slip;
pub mod store;

pub use check::{CheckOutcome, PlausibilityCheck};
pub use engine::{ClassBand, DerivationEngine, IncrementOutcome};
pub use error::Error;
pub use matrices::{FitmentMatrix, PayMatrix};
pub use record::TeacherRecord;
pub use schools::SchoolDirectory;
pub use session::{FieldChange, FormSession};
pub use store::{MemoryStore, SlipId, SlipStore, StoredSlip};

/// Grade-pay tier in the local-body pay scale (2000 / 2400 / 2800)
pub type PayLevel = u16;

/// Position within a pay level's salary ladder
pub type PayIndex = usize;

/// Base salary in whole rupees
pub type SalaryAmount = u32;

/// Level in the specific-teacher fitment matrix (own numbering space)
pub type FitmentLevel = u8;
