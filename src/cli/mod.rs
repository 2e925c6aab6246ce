//! Command-line parsing for the CFA formula calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the catalog/evaluation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Category, Formula, Inputs};
use crate::error::AppError;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cfa", version, about = "CFA Level II Formula Calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the formula catalog, optionally restricted to one category.
    List(ListArgs),
    /// Show the detail card for one formula.
    Show(FormulaArgs),
    /// Evaluate a formula and print calculation/result/interpretation.
    Eval(EvalArgs),
    /// Print the sensitivity sweep for a formula as a table and chart.
    Sweep(SweepArgs),
    /// Interactively pick a category and formula, then evaluate it.
    Pick,
}

/// Options for `cfa list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Restrict the listing to one category.
    #[arg(short = 'c', long, value_enum)]
    pub category: Option<Category>,
}

/// A (category, formula) pair as positional arguments.
#[derive(Debug, Parser, Clone)]
pub struct FormulaArgs {
    /// Formula category.
    #[arg(value_enum)]
    pub category: Category,

    /// Formula within the category.
    #[arg(value_enum)]
    pub formula: Formula,
}

/// Options for `cfa eval`.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    #[command(flatten)]
    pub target: FormulaArgs,

    /// Override an input, e.g. `--set ytm=5.5` (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Print the evaluation as JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,

    /// Export the evaluation (with catalog metadata) to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for `cfa sweep`.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    #[command(flatten)]
    pub target: FormulaArgs,

    /// Override an input, e.g. `--set trackingError=4` (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Print the sweep as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Export the sweep to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export the sweep to a CSV file.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Render an ASCII chart after the table (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Apply `NAME=VALUE` overrides to an input record.
pub fn apply_overrides(inputs: &mut Inputs, overrides: &[String]) -> Result<(), AppError> {
    for spec in overrides {
        let Some((name, value)) = spec.split_once('=') else {
            return Err(AppError::new(
                2,
                format!("Invalid --set '{spec}': expected NAME=VALUE."),
            ));
        };
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| AppError::new(2, format!("Invalid --set '{spec}': {e}.")))?;
        inputs.set(name.trim(), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overrides_sets_fields() {
        let mut inputs = Inputs::default();
        apply_overrides(&mut inputs, &["ytm=5.5".to_string(), "beta=0.9".to_string()]).unwrap();
        assert_eq!(inputs.ytm, 5.5);
        assert_eq!(inputs.beta, 0.9);
    }

    #[test]
    fn apply_overrides_rejects_malformed_specs() {
        let mut inputs = Inputs::default();
        assert!(apply_overrides(&mut inputs, &["ytm".to_string()]).is_err());
        assert!(apply_overrides(&mut inputs, &["ytm=abc".to_string()]).is_err());
        assert!(apply_overrides(&mut inputs, &["noSuchField=1".to_string()]).is_err());
    }

    #[test]
    fn cli_parses_eval_with_overrides() {
        let cli = Cli::try_parse_from([
            "cfa",
            "eval",
            "fixed-income",
            "bond-pricing",
            "--set",
            "ytm=6",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Eval(args) => {
                assert_eq!(args.target.category, Category::FixedIncome);
                assert_eq!(args.target.formula, Formula::BondPricing);
                assert_eq!(args.set, vec!["ytm=6".to_string()]);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_bare_pick() {
        let cli = Cli::try_parse_from(["cfa", "pick"]).unwrap();
        assert!(matches!(cli.command, Command::Pick));
    }
}
