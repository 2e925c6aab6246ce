//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the catalog/engine code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::catalog::CatalogEntry;
use crate::domain::{Category, Evaluation, SweepSeries};

/// Format the catalog listing, optionally restricted to one category.
pub fn format_catalog(entries: &[&CatalogEntry]) -> String {
    let mut out = String::new();
    let mut current: Option<Category> = None;

    for entry in entries {
        if current != Some(entry.category) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("=== {} ===\n", entry.category.display_name()));
            current = Some(entry.category);
        }
        out.push_str(&format!(
            "  {:<26} {}\n",
            format!("{:?}", entry.formula),
            entry.name
        ));
    }

    out
}

/// Format the detail card for one formula.
pub fn format_entry(entry: &CatalogEntry) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} / {} ===\n",
        entry.category.display_name(),
        entry.name
    ));
    out.push_str(&format!("Formula    : {}\n", entry.expression));
    out.push_str(&format!("Concept    : {}\n", entry.concept));
    out.push_str(&format!("Numerator  : {}\n", entry.numerator));
    out.push_str(&format!("Denominator: {}\n", entry.denominator));
    out.push_str(&format!("Key insight: {}\n", entry.key_insight));

    out
}

/// Format an evaluation result under its catalog entry.
pub fn format_evaluation(entry: &CatalogEntry, evaluation: &Evaluation) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", entry.name));
    out.push_str(&format!("Calculation   : {}\n", evaluation.calculation));
    out.push_str(&format!("Result        : {}\n", evaluation.result));
    out.push_str(&format!("Interpretation: {}\n", evaluation.interpretation));

    out
}

/// Format a sweep as an aligned table (x column, one column per series).
pub fn format_sweep_table(series: &SweepSeries) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<20}", series.x_label));
    for label in &series.y_labels {
        out.push_str(&format!(" {label:>20}"));
    }
    out.push('\n');

    out.push_str(&format!("{:-<20}", ""));
    for _ in &series.y_labels {
        out.push_str(&format!(" {:->20}", ""));
    }
    out.push('\n');

    for point in &series.points {
        out.push_str(&format!("{:<20}", trim_float(point.x)));
        for &y in &point.y {
            out.push_str(&format!(" {:>20}", trim_float(y)));
        }
        out.push('\n');
    }

    out
}

/// Print a float the way `Display` does (`4.0 -> "4"`, `0.75 -> "0.75"`).
fn trim_float(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::domain::{Formula, SweepPoint};

    #[test]
    fn catalog_listing_groups_by_category() {
        let entries: Vec<_> = catalog::entries().iter().collect();
        let out = format_catalog(&entries);
        assert!(out.starts_with("=== Quantitative Methods ===\n"));
        assert!(out.contains("=== Portfolio Management ===\n"));
        assert!(out.contains("Gordon Growth Model"));
        // 36 formula lines + 9 headers + 8 blank separators
        assert_eq!(out.lines().count(), 36 + 9 + 8);
    }

    #[test]
    fn entry_card_contains_all_fields() {
        let entry =
            catalog::lookup(Category::Equity, Formula::GordonGrowthModel).unwrap();
        let out = format_entry(entry);
        assert!(out.contains(entry.expression));
        assert!(out.contains(entry.key_insight));
    }

    #[test]
    fn sweep_table_has_header_rule_and_rows() {
        let series = SweepSeries {
            x_label: "yield",
            y_labels: vec!["price", "parValue"],
            points: vec![
                SweepPoint { x: 1.0, y: vec![1380.62, 1000.0] },
                SweepPoint { x: 1.25, y: vec![1352.5, 1000.0] },
            ],
        };
        let out = format_sweep_table(&series);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("yield"));
        assert!(lines[0].contains("parValue"));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
        assert!(lines[2].starts_with('1'));
        assert!(lines[3].contains("1.25"));
        // Floats print without trailing zeros.
        assert!(lines[2].contains("1000"));
        assert!(!lines[2].contains("1000.0"));
    }
}
