//! Core value types: category/formula keys, evaluation output, sweep series.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the engine and CLI
//! - exported to JSON for external charting front-ends
//!
//! `Category` and `Formula` are closed enumerations (9 categories, 36
//! formulas). Dispatching over them gives exhaustiveness checking at compile
//! time, so a formula without an evaluator cannot slip through.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Top-level CFA Level II topic area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Quantitative,
    Economics,
    Financial,
    Corporate,
    Equity,
    FixedIncome,
    Derivatives,
    Alternatives,
    Portfolio,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 9] = [
        Category::Quantitative,
        Category::Economics,
        Category::Financial,
        Category::Corporate,
        Category::Equity,
        Category::FixedIncome,
        Category::Derivatives,
        Category::Alternatives,
        Category::Portfolio,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Quantitative => "Quantitative Methods",
            Category::Economics => "Economics",
            Category::Financial => "Financial Statement Analysis",
            Category::Corporate => "Corporate Finance",
            Category::Equity => "Equity Valuation",
            Category::FixedIncome => "Fixed Income",
            Category::Derivatives => "Derivatives",
            Category::Alternatives => "Alternative Investments",
            Category::Portfolio => "Portfolio Management",
        }
    }
}

/// One formula in the fixed catalog.
///
/// Serde names follow the input-form field conventions (camelCase),
/// so exported JSON stays compatible with existing charting front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Formula {
    // Quantitative Methods
    MultipleRegression,
    RSquaredAdjusted,
    HypothesisTesting,
    FStatistic,
    // Economics
    Ppp,
    CoveredInterestParity,
    UncoveredInterestParity,
    ForwardRateValuation,
    // Financial Statement Analysis
    RoeDuPont,
    SustainableGrowthRate,
    EarningsQuality,
    WorkingCapitalTurnover,
    // Corporate Finance
    DividendPayout,
    Wacc,
    Capm,
    Modigliani,
    // Equity Valuation
    GordonGrowthModel,
    #[serde(rename = "justifiedPE")]
    JustifiedPe,
    Pvgo,
    ResidualIncome,
    // Fixed Income
    BondPricing,
    ModifiedDuration,
    Convexity,
    CreditSpread,
    // Derivatives
    BlackScholesCall,
    BlackScholesPut,
    DeltaHedge,
    ImpliedVolatility,
    // Alternative Investments
    ReitValuation,
    FfoMultiple,
    CommodityReturn,
    HedgeFundAlpha,
    // Portfolio Management
    InformationRatio,
    TreynorRatio,
    JensenAlpha,
    Var,
}

impl Formula {
    /// The category this formula belongs to.
    ///
    /// The pairing is fixed; `catalog::lookup` uses it to reject mismatched
    /// (category, formula) keys.
    pub fn category(self) -> Category {
        use Formula::*;
        match self {
            MultipleRegression | RSquaredAdjusted | HypothesisTesting | FStatistic => {
                Category::Quantitative
            }
            Ppp | CoveredInterestParity | UncoveredInterestParity | ForwardRateValuation => {
                Category::Economics
            }
            RoeDuPont | SustainableGrowthRate | EarningsQuality | WorkingCapitalTurnover => {
                Category::Financial
            }
            DividendPayout | Wacc | Capm | Modigliani => Category::Corporate,
            GordonGrowthModel | JustifiedPe | Pvgo | ResidualIncome => Category::Equity,
            BondPricing | ModifiedDuration | Convexity | CreditSpread => Category::FixedIncome,
            BlackScholesCall | BlackScholesPut | DeltaHedge | ImpliedVolatility => {
                Category::Derivatives
            }
            ReitValuation | FfoMultiple | CommodityReturn | HedgeFundAlpha => {
                Category::Alternatives
            }
            InformationRatio | TreynorRatio | JensenAlpha | Var => Category::Portfolio,
        }
    }
}

/// Output of a single formula evaluation.
///
/// Produced fresh on every call; there is no caching and no identity beyond
/// the returned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Human-readable substituted formula, e.g. `V₀ = 2.16 / 0.0400`.
    pub calculation: String,
    /// Formatted numeric or categorical outcome, e.g. `54.00` or `Reject H₀`.
    pub result: String,
    /// Narrative sentence referencing the computed values.
    pub interpretation: String,
}

/// One step of a parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Value of the swept input at this step.
    pub x: f64,
    /// One value per series in `SweepSeries::y_labels`, in the same order.
    pub y: Vec<f64>,
}

/// A materialized sensitivity series for charting.
///
/// Only 6 of the 36 formulas define one; the engine returns `None` for the
/// rest. Points are strictly ordered by `x` and the length is deterministic
/// given the fixed range/step constants in `engine::sweep`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepSeries {
    /// Label of the swept input (x axis).
    pub x_label: &'static str,
    /// Labels of the computed series (y axes), e.g. `["adjustedR2", "unadjustedR2"]`.
    pub y_labels: Vec<&'static str>,
    pub points: Vec<SweepPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_four_formulas() {
        for category in Category::ALL {
            let n = Formula::value_variants()
                .iter()
                .filter(|f| f.category() == category)
                .count();
            assert_eq!(n, 4, "category {category:?} should have 4 formulas");
        }
    }

    #[test]
    fn formula_serde_names_are_camel_case() {
        let json = serde_json::to_string(&Formula::RoeDuPont).unwrap();
        assert_eq!(json, "\"roeDuPont\"");
        let json = serde_json::to_string(&Formula::JustifiedPe).unwrap();
        assert_eq!(json, "\"justifiedPE\"");
        let json = serde_json::to_string(&Category::FixedIncome).unwrap();
        assert_eq!(json, "\"fixedIncome\"");
    }
}
