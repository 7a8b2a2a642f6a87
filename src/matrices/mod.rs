//! Pay-matrix and fitment-matrix lookup tables
//!
//! Both tables are constant data loaded once at startup and never
//! mutated. Unknown levels or indices yield `None`; callers clear
//! their dependent fields and carry on.

mod fitment;
mod pay;
pub mod loader;

pub use fitment::FitmentMatrix;
pub use pay::PayMatrix;
