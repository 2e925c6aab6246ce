//! Numeric helpers shared by the option-pricing evaluators.

pub mod normal;

pub use normal::{erf, normal_cdf};
