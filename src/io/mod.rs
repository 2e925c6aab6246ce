//! Input/output helpers.
//!
//! - evaluation/sweep exports (JSON/CSV) (`export`)

pub mod export;

pub use export::*;
