//! Shared domain types.

pub mod assumptions;
pub mod inputs;
pub mod types;

pub use assumptions::Assumptions;
pub use inputs::Inputs;
pub use types::{Category, Evaluation, Formula, SweepPoint, SweepSeries};
