//! `cfa-calc` library crate.
//!
//! The binary (`cfa`) is a thin wrapper around this library so that:
//!
//! - the evaluation engine is testable without spawning processes
//! - modules are reusable (e.g., future GUI/notebook front-ends)
//! - code stays easy to navigate as the formula catalog grows
//!
//! The crate is a pure, stateless function library: a fixed catalog of CFA
//! Level II formulas, an evaluation engine that turns `(formula, inputs)`
//! into a calculation trace + result + interpretation, and sensitivity
//! sweeps for the handful of formulas worth charting.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
