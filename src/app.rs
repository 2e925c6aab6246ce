//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds inputs and runs the evaluation engine
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EvalArgs, FormulaArgs, ListArgs, SweepArgs};
use crate::domain::Inputs;
use crate::engine::Engine;
use crate::error::AppError;

/// Entry point for the `cfa` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `cfa` to behave like `cfa pick`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::List(args) => handle_list(args),
        Command::Show(args) => handle_show(args),
        Command::Eval(args) => handle_eval(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Pick => handle_pick(),
    }
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let entries: Vec<_> = match args.category {
        Some(category) => crate::catalog::entries_for(category).collect(),
        None => crate::catalog::entries().iter().collect(),
    };
    print!("{}", crate::report::format_catalog(&entries));
    Ok(())
}

fn handle_show(args: FormulaArgs) -> Result<(), AppError> {
    let entry = crate::catalog::lookup(args.category, args.formula)?;
    print!("{}", crate::report::format_entry(entry));
    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let entry = crate::catalog::lookup(args.target.category, args.target.formula)?;

    let mut inputs = Inputs::default();
    crate::cli::apply_overrides(&mut inputs, &args.set)?;

    let engine = Engine::default();
    let evaluation = engine.evaluate(args.target.category, args.target.formula, &inputs)?;

    if args.json {
        let json = serde_json::to_string_pretty(&evaluation)
            .map_err(|e| AppError::new(2, format!("Failed to serialize evaluation: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_evaluation(entry, &evaluation));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_evaluation_json(path, entry, &evaluation)?;
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let entry = crate::catalog::lookup(args.target.category, args.target.formula)?;

    let mut inputs = Inputs::default();
    crate::cli::apply_overrides(&mut inputs, &args.set)?;

    let engine = Engine::default();
    let series = engine
        .sweep(args.target.category, args.target.formula, &inputs)?
        .ok_or_else(|| {
            AppError::new(
                2,
                format!("{} defines no sensitivity sweep. See `cfa list`.", entry.name),
            )
        })?;

    if args.json {
        let json = serde_json::to_string_pretty(&series)
            .map_err(|e| AppError::new(2, format!("Failed to serialize sweep: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_sweep_table(&series));
        if args.plot && !args.no_plot {
            println!();
            print!(
                "{}",
                crate::plot::render_sweep_plot(&series, args.width, args.height)
            );
        }
    }

    if let Some(path) = &args.export {
        crate::io::export::write_sweep_json(path, &series)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::export::write_sweep_csv(path, &series)?;
    }

    Ok(())
}

fn handle_pick() -> Result<(), AppError> {
    let (category, formula) = crate::cli::picker::prompt_for_formula()?;
    let entry = crate::catalog::lookup(category, formula)?;

    let inputs = Inputs::default();
    let engine = Engine::default();
    let evaluation = engine.evaluate(category, formula, &inputs)?;

    println!();
    print!("{}", crate::report::format_entry(entry));
    println!();
    print!("{}", crate::report::format_evaluation(entry, &evaluation));

    if let Some(series) = engine.sweep(category, formula, &inputs)? {
        println!();
        print!("{}", crate::plot::render_sweep_plot(&series, 100, 25));
    }

    Ok(())
}

/// Rewrite argv so `cfa` defaults to `cfa pick`.
///
/// Rules:
/// - `cfa`                     -> `cfa pick`
/// - `cfa --help/--version/-h` -> unchanged (show top-level help/version)
/// - `cfa <subcommand> ...`    -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("pick".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    // Subcommands and anything else (including stray flags) pass through so
    // clap can produce its usual errors and suggestions.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_pick() {
        assert_eq!(rewrite_args(args(&["cfa"])), args(&["cfa", "pick"]));
    }

    #[test]
    fn help_and_subcommands_pass_through() {
        assert_eq!(rewrite_args(args(&["cfa", "--help"])), args(&["cfa", "--help"]));
        assert_eq!(
            rewrite_args(args(&["cfa", "list"])),
            args(&["cfa", "list"])
        );
        assert_eq!(
            rewrite_args(args(&["cfa", "eval", "equity", "gordon-growth-model"])),
            args(&["cfa", "eval", "equity", "gordon-growth-model"])
        );
    }
}
