//! Illustrative assumption constants.
//!
//! Several formulas in the catalog lean on fixed teaching figures rather than
//! user inputs: the assumed market return in WACC and Jensen's alpha, the
//! placeholder Macaulay duration and convexity in the fixed-income examples,
//! the REIT balance-sheet figures, and so on. They are gathered here as named
//! fields injected at engine construction instead of literals buried in
//! evaluator bodies, so a caller can override any of them without touching
//! evaluator logic.

use serde::{Deserialize, Serialize};

/// Fixed teaching assumptions used by the evaluation engine.
///
/// Defaults are the published figures of the worked examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assumptions {
    /// Assumed broad-market return (%), used by WACC's cost of equity and
    /// Jensen's alpha.
    pub market_return: f64,
    /// Assumed market risk premium (%), used by CAPM.
    pub market_risk_premium: f64,
    /// Unlevered cost of capital (%) for the MM leverage example.
    pub unlevered_cost: f64,
    /// Treasury yield (%) the credit-spread example nets against.
    pub treasury_yield: f64,

    /// Placeholder Macaulay duration for a ~10-year coupon bond.
    pub macaulay_duration: f64,
    /// Placeholder convexity for the same bond.
    pub bond_convexity: f64,
    /// Yield shock (decimal) used in the duration/convexity price-change example.
    pub yield_shock: f64,

    /// Illustrative implied-volatility quote (%). The implied-vol formula is
    /// a fixed teaching example, not a numerical root-find.
    pub implied_vol_quote: f64,
    /// Market option price quoted alongside the implied-vol example.
    pub option_market_price: f64,

    // REIT examples
    pub reit_assets: f64,
    pub reit_liabilities: f64,
    pub reit_shares_outstanding: f64,
    pub reit_net_income: f64,
    pub reit_depreciation: f64,
    pub reit_gains_on_sales: f64,

    // Commodity futures return decomposition (%)
    pub commodity_spot_return: f64,
    pub commodity_collateral_return: f64,
    pub commodity_roll_return: f64,

    // Hedge-fund two-factor alpha example (% and factor loadings)
    pub hf_portfolio_return: f64,
    pub hf_risk_free_return: f64,
    pub hf_market_beta: f64,
    pub hf_market_factor: f64,
    pub hf_size_beta: f64,
    pub hf_size_factor: f64,

    /// Z-score for parametric VaR (1.645 at 5% one-tailed confidence).
    pub var_z_score: f64,
    /// VaR tail probability used in narrative output.
    pub var_confidence: f64,

    /// When true, the t-test compares `|t|` against the critical value
    /// (two-sided convention). The default keeps the one-sided comparison
    /// of the raw signed statistic.
    pub two_sided_t_test: bool,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            market_return: 9.0,
            market_risk_premium: 6.0,
            unlevered_cost: 8.0,
            treasury_yield: 3.5,

            macaulay_duration: 7.5,
            bond_convexity: 65.0,
            yield_shock: 0.01,

            implied_vol_quote: 28.0,
            option_market_price: 8.50,

            reit_assets: 500_000_000.0,
            reit_liabilities: 200_000_000.0,
            reit_shares_outstanding: 10_000_000.0,
            reit_net_income: 50_000_000.0,
            reit_depreciation: 25_000_000.0,
            reit_gains_on_sales: 5_000_000.0,

            commodity_spot_return: 5.2,
            commodity_collateral_return: 2.8,
            commodity_roll_return: -1.5,

            hf_portfolio_return: 12.5,
            hf_risk_free_return: 2.5,
            hf_market_beta: 0.7,
            hf_market_factor: 8.0,
            hf_size_beta: 0.3,
            hf_size_factor: 3.0,

            var_z_score: 1.645,
            var_confidence: 0.05,

            two_sided_t_test: false,
        }
    }
}
