//! The formula catalog: static descriptive metadata for every formula.
//!
//! The catalog is a process-lifetime constant: created at compile time, never
//! mutated, thread-safe by construction. It carries no computation: the
//! engine owns the math; the catalog owns the teaching copy (display name,
//! symbolic expression, concept summary, numerator/denominator labels, key
//! insight).

use serde::Serialize;

use crate::domain::{Category, Formula};
use crate::error::EvalError;

/// Static descriptive record for one formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub category: Category,
    pub formula: Formula,
    /// Display name, e.g. "Gordon Growth Model".
    pub name: &'static str,
    /// Symbolic formula string, e.g. `V₀ = D₁/(r - g)`.
    pub expression: &'static str,
    pub concept: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static str,
    pub key_insight: &'static str,
}

/// Look up the catalog entry for a (category, formula) pair.
///
/// Fails with `UnknownFormula` when the pair is not in the fixed registry,
/// i.e. when the formula exists but is filed under a different category.
pub fn lookup(category: Category, formula: Formula) -> Result<&'static CatalogEntry, EvalError> {
    if formula.category() != category {
        return Err(EvalError::UnknownFormula { category, formula });
    }
    let entry = ENTRIES
        .iter()
        .find(|e| e.formula == formula)
        .expect("every Formula variant has a catalog entry");
    Ok(entry)
}

/// The full catalog in fixed display order (category order, then formula order).
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

/// All formulas belonging to one category, in catalog order.
pub fn entries_for(category: Category) -> impl Iterator<Item = &'static CatalogEntry> {
    ENTRIES.iter().filter(move |e| e.category == category)
}

static ENTRIES: &[CatalogEntry] = &[
    // --- Quantitative Methods ---
    CatalogEntry {
        category: Category::Quantitative,
        formula: Formula::MultipleRegression,
        name: "Multiple Regression Model",
        expression: "Y = b₀ + b₁X₁ + b₂X₂ + ... + bₖXₖ + ε",
        concept: "Explains dependent variable using multiple independent variables",
        numerator: "Predicted Y Value",
        denominator: "Linear combination of independent variables",
        key_insight: "Each coefficient represents the marginal effect of that variable holding others constant",
    },
    CatalogEntry {
        category: Category::Quantitative,
        formula: Formula::RSquaredAdjusted,
        name: "Adjusted R-Squared",
        expression: "Adjusted R² = 1 - [(1-R²)(n-1)/(n-k-1)]",
        concept: "Measures model fit while penalizing for additional variables",
        numerator: "1 - Adjusted Sum of Squared Errors",
        denominator: "Adjusted Total Sum of Squares",
        key_insight: "Unlike R², this can decrease when adding irrelevant variables",
    },
    CatalogEntry {
        category: Category::Quantitative,
        formula: Formula::HypothesisTesting,
        name: "T-Test for Significance",
        expression: "t = (b̂ⱼ - Bⱼ)/SE(b̂ⱼ)",
        concept: "Tests whether a regression coefficient is statistically significant",
        numerator: "Difference between estimated and hypothesized coefficient",
        denominator: "Standard error of the coefficient estimate",
        key_insight: "Larger t-statistics indicate more significant relationships",
    },
    CatalogEntry {
        category: Category::Quantitative,
        formula: Formula::FStatistic,
        name: "F-Test for Joint Significance",
        expression: "F = [(RSS_R - RSS_U)/k] / [RSS_U/(n-k-1)]",
        concept: "Tests whether multiple coefficients are jointly significant",
        numerator: "Improvement in fit from adding variables (scaled by degrees of freedom)",
        denominator: "Unexplained variation per degree of freedom",
        key_insight: "Tests if the model as a whole is statistically significant",
    },
    // --- Economics ---
    CatalogEntry {
        category: Category::Economics,
        formula: Formula::Ppp,
        name: "Purchasing Power Parity",
        expression: "S₁/S₀ = (1 + πf)/(1 + πd)",
        concept: "Exchange rate changes should reflect inflation differentials",
        numerator: "Foreign inflation adjustment (1 + foreign inflation)",
        denominator: "Domestic inflation adjustment (1 + domestic inflation)",
        key_insight: "Higher inflation country should see currency depreciation",
    },
    CatalogEntry {
        category: Category::Economics,
        formula: Formula::CoveredInterestParity,
        name: "Covered Interest Rate Parity",
        expression: "F/S = (1 + rf)/(1 + rd)",
        concept: "Forward rate reflects interest rate differentials to prevent arbitrage",
        numerator: "Foreign interest rate adjustment (1 + foreign rate)",
        denominator: "Domestic interest rate adjustment (1 + domestic rate)",
        key_insight: "Higher interest rate currency trades at forward discount",
    },
    CatalogEntry {
        category: Category::Economics,
        formula: Formula::UncoveredInterestParity,
        name: "Uncovered Interest Rate Parity",
        expression: "E(S₁)/S₀ = (1 + rf)/(1 + rd)",
        concept: "Expected exchange rate changes should offset interest rate differentials",
        numerator: "Expected future spot rate",
        denominator: "Current spot rate times interest rate differential",
        key_insight: "Often violated due to risk premiums and market imperfections",
    },
    CatalogEntry {
        category: Category::Economics,
        formula: Formula::ForwardRateValuation,
        name: "Forward Contract Valuation",
        expression: "Vt = (Ft - F₀) × Contract Size / (1 + r)^(T-t)",
        concept: "Value of forward contract as market rates change",
        numerator: "Difference between current forward rate and contract rate",
        denominator: "Discount factor for remaining time to maturity",
        key_insight: "Positive when current forward rate exceeds contract rate",
    },
    // --- Financial Statement Analysis ---
    CatalogEntry {
        category: Category::Financial,
        formula: Formula::RoeDuPont,
        name: "ROE DuPont Analysis",
        expression: "ROE = (Net Income/Sales) × (Sales/Assets) × (Assets/Equity)",
        concept: "Decomposes ROE into profitability, efficiency, and leverage components",
        numerator: "Net Profit Margin × Asset Turnover × Financial Leverage",
        denominator: "Each component represents a different aspect of performance",
        key_insight: "Identifies whether ROE comes from operations or financial leverage",
    },
    CatalogEntry {
        category: Category::Financial,
        formula: Formula::SustainableGrowthRate,
        name: "Sustainable Growth Rate",
        expression: "g = ROE × Retention Ratio",
        concept: "Maximum growth rate without external equity financing",
        numerator: "Return on Equity",
        denominator: "Portion of earnings retained (not paid as dividends)",
        key_insight: "Higher ROE and retention ratio enable faster sustainable growth",
    },
    CatalogEntry {
        category: Category::Financial,
        formula: Formula::EarningsQuality,
        name: "Cash Flow to Net Income",
        expression: "Quality Ratio = Cash Flow from Operations / Net Income",
        concept: "Measures how much of earnings are backed by actual cash flows",
        numerator: "Cash Flow from Operations",
        denominator: "Net Income",
        key_insight: "Ratios significantly above 1 indicate high earnings quality",
    },
    CatalogEntry {
        category: Category::Financial,
        formula: Formula::WorkingCapitalTurnover,
        name: "Working Capital Turnover",
        expression: "WC Turnover = Revenue / Average Working Capital",
        concept: "Efficiency of working capital utilization",
        numerator: "Annual Revenue",
        denominator: "Average Working Capital (Current Assets - Current Liabilities)",
        key_insight: "Higher turnover indicates more efficient working capital management",
    },
    // --- Corporate Finance ---
    CatalogEntry {
        category: Category::Corporate,
        formula: Formula::DividendPayout,
        name: "Dividend Payout Ratio",
        expression: "Payout Ratio = Dividends per Share / Earnings per Share",
        concept: "Proportion of earnings paid out as dividends",
        numerator: "Dividends per Share",
        denominator: "Earnings per Share",
        key_insight: "Higher ratios indicate more income-focused, less growth-oriented policy",
    },
    CatalogEntry {
        category: Category::Corporate,
        formula: Formula::Wacc,
        name: "Weighted Average Cost of Capital",
        expression: "WACC = (E/V)×re + (D/V)×rd×(1-T)",
        concept: "Blended cost of equity and debt financing",
        numerator: "Weighted cost of equity + After-tax weighted cost of debt",
        denominator: "Total firm value (equity + debt)",
        key_insight: "Tax shield makes debt cheaper, but financial risk increases cost of equity",
    },
    CatalogEntry {
        category: Category::Corporate,
        formula: Formula::Capm,
        name: "Capital Asset Pricing Model",
        expression: "re = rf + β(rm - rf)",
        concept: "Cost of equity based on systematic risk",
        numerator: "Risk-free rate + Risk premium",
        denominator: "Beta measures sensitivity to market movements",
        key_insight: "Only systematic risk is compensated in well-diversified portfolios",
    },
    CatalogEntry {
        category: Category::Corporate,
        formula: Formula::Modigliani,
        name: "MM Cost of Equity with Leverage",
        expression: "re = r₀ + (r₀ - rd)(D/E)",
        concept: "How leverage affects cost of equity under MM assumptions",
        numerator: "Unlevered cost + Risk premium from financial leverage",
        denominator: "Debt-to-equity ratio determines the risk premium",
        key_insight: "Cost of equity increases linearly with leverage",
    },
    // --- Equity Valuation ---
    CatalogEntry {
        category: Category::Equity,
        formula: Formula::GordonGrowthModel,
        name: "Gordon Growth Model",
        expression: "V₀ = D₁/(r - g)",
        concept: "Values stock based on constant dividend growth assumption",
        numerator: "Next period dividend (D₁)",
        denominator: "Required return minus growth rate",
        key_insight: "Very sensitive to assumptions about r and g; g must be < r",
    },
    CatalogEntry {
        category: Category::Equity,
        formula: Formula::JustifiedPe,
        name: "Justified P/E Ratio",
        expression: "P/E = (1-b)(1+g)/(r-g)",
        concept: "Theoretical P/E based on dividend policy and growth",
        numerator: "Payout ratio × Growth adjustment",
        denominator: "Required return minus growth rate",
        key_insight: "Higher growth and payout ratios justify higher P/E multiples",
    },
    CatalogEntry {
        category: Category::Equity,
        formula: Formula::Pvgo,
        name: "Present Value of Growth Opportunities",
        expression: "PVGO = P₀ - E₁/r",
        concept: "Value attributable to future growth versus current earnings",
        numerator: "Current stock price minus no-growth value",
        denominator: "No-growth value = E₁/r (perpetuity of current earnings)",
        key_insight: "High PVGO indicates market expects significant future growth",
    },
    CatalogEntry {
        category: Category::Equity,
        formula: Formula::ResidualIncome,
        name: "Residual Income Model",
        expression: "RI = E - (r × B₋₁)",
        concept: "Economic profit after charging for cost of equity capital",
        numerator: "Net Income minus equity charge",
        denominator: "Equity charge = required return × beginning book value",
        key_insight: "Positive RI indicates value creation above cost of equity",
    },
    // --- Fixed Income ---
    CatalogEntry {
        category: Category::FixedIncome,
        formula: Formula::BondPricing,
        name: "Bond Pricing Formula",
        expression: "P = Σ[C/(1+r)ᵗ] + FV/(1+r)ⁿ",
        concept: "Present value of all future cash flows from bond",
        numerator: "Sum of discounted coupon payments plus discounted face value",
        denominator: "Discount factors based on yield to maturity",
        key_insight: "Bond price moves inversely with yield changes",
    },
    CatalogEntry {
        category: Category::FixedIncome,
        formula: Formula::ModifiedDuration,
        name: "Modified Duration",
        expression: "ModDur = MacDur / (1 + YTM/m)",
        concept: "Price sensitivity to yield changes",
        numerator: "Macaulay Duration",
        denominator: "1 + yield per compounding period",
        key_insight: "1% yield change causes approximately ModDur% price change",
    },
    CatalogEntry {
        category: Category::FixedIncome,
        formula: Formula::Convexity,
        name: "Convexity Adjustment",
        expression: "%ΔP ≈ -ModDur×Δy + ½×Convexity×(Δy)²",
        concept: "Improved price change estimate accounting for curvature",
        numerator: "Linear duration effect plus convexity adjustment",
        denominator: "Convexity term becomes significant for large yield changes",
        key_insight: "Convexity is beneficial - provides upside when yields fall",
    },
    CatalogEntry {
        category: Category::FixedIncome,
        formula: Formula::CreditSpread,
        name: "Credit Spread",
        expression: "Credit Spread = YTM_Corporate - YTM_Treasury",
        concept: "Additional yield demanded for default risk",
        numerator: "Corporate bond yield to maturity",
        denominator: "Risk-free Treasury yield of similar maturity",
        key_insight: "Spreads widen during economic stress as default risk increases",
    },
    // --- Derivatives ---
    CatalogEntry {
        category: Category::Derivatives,
        formula: Formula::BlackScholesCall,
        name: "Black-Scholes Call Option",
        expression: "C = S₀N(d₁) - Xe^(-rT)N(d₂)",
        concept: "Theoretical value of European call option",
        numerator: "Expected benefit from stock ownership minus strike payment",
        denominator: "Risk-neutral probabilities N(d₁) and N(d₂)",
        key_insight: "Higher volatility increases option value due to asymmetric payoff",
    },
    CatalogEntry {
        category: Category::Derivatives,
        formula: Formula::BlackScholesPut,
        name: "Black-Scholes Put Option",
        expression: "P = Xe^(-rT)N(-d₂) - S₀N(-d₁)",
        concept: "Theoretical value of European put option",
        numerator: "Expected strike receipt minus stock cost",
        denominator: "Risk-neutral probabilities for put payoff scenarios",
        key_insight: "Put-call parity: C - P = S₀ - Xe^(-rT)",
    },
    CatalogEntry {
        category: Category::Derivatives,
        formula: Formula::DeltaHedge,
        name: "Delta Hedging",
        expression: "Hedge Ratio = ∂V/∂S = Delta",
        concept: "Number of shares needed to hedge option position",
        numerator: "Change in option value",
        denominator: "Change in underlying stock price",
        key_insight: "Delta changes as stock price moves, requiring dynamic hedging",
    },
    CatalogEntry {
        category: Category::Derivatives,
        formula: Formula::ImpliedVolatility,
        name: "Implied Volatility",
        expression: "Market Price = BS(S,K,T,r,σ_implied)",
        concept: "Volatility that makes theoretical price equal market price",
        numerator: "Market option price",
        denominator: "Black-Scholes formula solved for volatility",
        key_insight: "IV often differs from historical volatility due to supply/demand",
    },
    // --- Alternative Investments ---
    CatalogEntry {
        category: Category::Alternatives,
        formula: Formula::ReitValuation,
        name: "REIT Net Asset Value",
        expression: "NAV = (Market Value of Assets - Liabilities) / Shares Outstanding",
        concept: "Per-share value of underlying real estate assets",
        numerator: "Market value of real estate portfolio minus debt",
        denominator: "Number of shares outstanding",
        key_insight: "REIT may trade at premium/discount to NAV due to management quality",
    },
    CatalogEntry {
        category: Category::Alternatives,
        formula: Formula::FfoMultiple,
        name: "Funds From Operations",
        expression: "FFO = Net Income + Depreciation - Gains on Sales",
        concept: "REIT earnings excluding non-cash depreciation",
        numerator: "Net income plus back depreciation",
        denominator: "Adjusted for non-recurring gains from property sales",
        key_insight: "FFO better reflects REIT operating performance than net income",
    },
    CatalogEntry {
        category: Category::Alternatives,
        formula: Formula::CommodityReturn,
        name: "Commodity Futures Return",
        expression: "Total Return = Spot Return + Collateral Return + Roll Return",
        concept: "Components of commodity futures investment returns",
        numerator: "Change in spot price plus financing plus roll effects",
        denominator: "Spot return from price changes, roll return from curve shape",
        key_insight: "Contango creates negative roll return; backwardation positive",
    },
    CatalogEntry {
        category: Category::Alternatives,
        formula: Formula::HedgeFundAlpha,
        name: "Hedge Fund Alpha",
        expression: "α = Rp - [Rf + β₁(F₁) + β₂(F₂) + ... + βn(Fn)]",
        concept: "Risk-adjusted excess return from hedge fund strategy",
        numerator: "Portfolio return minus factor-based expected return",
        denominator: "Multi-factor model capturing systematic risk exposures",
        key_insight: "True alpha represents manager skill after adjusting for risk factors",
    },
    // --- Portfolio Management ---
    CatalogEntry {
        category: Category::Portfolio,
        formula: Formula::InformationRatio,
        name: "Information Ratio",
        expression: "IR = (Rp - Rb) / σ(Rp - Rb)",
        concept: "Risk-adjusted measure of active management skill",
        numerator: "Active return (portfolio return minus benchmark)",
        denominator: "Tracking error (standard deviation of active returns)",
        key_insight: "Higher IR indicates better risk-adjusted active performance",
    },
    CatalogEntry {
        category: Category::Portfolio,
        formula: Formula::TreynorRatio,
        name: "Treynor Ratio",
        expression: "Treynor = (Rp - Rf) / βp",
        concept: "Excess return per unit of systematic risk",
        numerator: "Portfolio excess return over risk-free rate",
        denominator: "Portfolio beta (systematic risk)",
        key_insight: "Useful for comparing portfolios with different diversification levels",
    },
    CatalogEntry {
        category: Category::Portfolio,
        formula: Formula::JensenAlpha,
        name: "Jensen's Alpha",
        expression: "α = Rp - [Rf + βp(Rm - Rf)]",
        concept: "CAPM-based measure of risk-adjusted excess return",
        numerator: "Actual portfolio return minus CAPM expected return",
        denominator: "CAPM expected return based on beta and market premium",
        key_insight: "Positive alpha indicates outperformance after adjusting for systematic risk",
    },
    CatalogEntry {
        category: Category::Portfolio,
        formula: Formula::Var,
        name: "Value at Risk (Parametric)",
        expression: "VaR = μ - z × σ",
        concept: "Maximum expected loss at given confidence level",
        numerator: "Expected return minus confidence interval adjustment",
        denominator: "Z-score times portfolio standard deviation",
        key_insight: "5% VaR means 5% chance of losing more than VaR amount",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn catalog_covers_every_formula_exactly_once() {
        for &formula in Formula::value_variants() {
            let n = ENTRIES.iter().filter(|e| e.formula == formula).count();
            assert_eq!(n, 1, "formula {formula:?} should appear exactly once");
        }
        assert_eq!(ENTRIES.len(), 36);
    }

    #[test]
    fn entry_categories_match_formula_categories() {
        for entry in ENTRIES {
            assert_eq!(
                entry.category,
                entry.formula.category(),
                "entry {} filed under the wrong category",
                entry.name
            );
        }
    }

    #[test]
    fn lookup_rejects_mismatched_pair() {
        let err = lookup(Category::Economics, Formula::BondPricing).unwrap_err();
        assert!(matches!(err, EvalError::UnknownFormula { .. }));
        assert!(lookup(Category::FixedIncome, Formula::BondPricing).is_ok());
    }

    #[test]
    fn entries_for_category_in_order() {
        let quant: Vec<_> = entries_for(Category::Quantitative)
            .map(|e| e.formula)
            .collect();
        assert_eq!(
            quant,
            vec![
                Formula::MultipleRegression,
                Formula::RSquaredAdjusted,
                Formula::HypothesisTesting,
                Formula::FStatistic,
            ]
        );
    }
}
