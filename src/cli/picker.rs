//! Interactive formula picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `cfa` and choose a formula" UX

use std::io::{self, Write};

use crate::catalog;
use crate::domain::{Category, Formula};
use crate::error::AppError;

/// Prompt the user for a category, then a formula within it.
///
/// Behavior:
/// - list categories (then formulas) with numbers
/// - accept a number from the list
/// - `q` cancels
pub fn prompt_for_formula() -> Result<(Category, Formula), AppError> {
    println!("Categories:");
    for (idx, category) in Category::ALL.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, category.display_name());
    }
    let choice = prompt_choice("Select a category", Category::ALL.len())?;
    let category = Category::ALL[choice - 1];

    let entries: Vec<_> = catalog::entries_for(category).collect();
    println!("\n{} formulas:", category.display_name());
    for (idx, entry) in entries.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, entry.name);
    }
    let choice = prompt_choice("Select a formula", entries.len())?;

    Ok((category, entries[choice - 1].formula))
}

/// Read a 1-based selection from stdin, retrying on bad input.
fn prompt_choice(label: &str, max: usize) -> Result<usize, AppError> {
    loop {
        print!("{label} by number (1-{max}, q to quit): ");
        io::stdout()
            .flush()
            .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::new(
                2,
                "No input received. Use `cfa list` and `cfa eval <category> <formula>` instead.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::new(2, "Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=max).contains(&choice) {
                return Ok(choice);
            }
        }
        println!("Invalid choice: {input}. Enter a number between 1 and {max}.");
    }
}
