//! Alternative investment evaluators: REIT measures, commodities, hedge funds.
//!
//! These worked examples run almost entirely on the illustrative balance-sheet
//! and factor figures in [`Assumptions`] rather than on user inputs.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;

fn millions(value: f64) -> f64 {
    value / 1_000_000.0
}

pub fn reit_valuation(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    if assumptions.reit_shares_outstanding <= 0.0 {
        return Err(EvalError::invalid_input(
            "reitSharesOutstanding",
            "must be positive",
        ));
    }
    let net_assets = assumptions.reit_assets - assumptions.reit_liabilities;
    let nav = net_assets / assumptions.reit_shares_outstanding;

    let standing = if inputs.market_price > nav {
        "premium"
    } else {
        "discount"
    };
    let gap = (inputs.market_price - nav) / nav * 100.0;
    Ok(Evaluation {
        calculation: format!(
            "NAV = ({}M - {}M) / {}M shares",
            millions(assumptions.reit_assets),
            millions(assumptions.reit_liabilities),
            millions(assumptions.reit_shares_outstanding)
        ),
        result: format!("{nav:.2}"),
        interpretation: format!(
            "NAV of {nav:.2} per share vs market price of {} implies a {gap:.1}% {standing}.",
            inputs.market_price
        ),
    })
}

/// Funds from operations: net income plus depreciation, less gains on sales.
pub fn ffo(assumptions: &Assumptions) -> Result<Evaluation, EvalError> {
    if assumptions.reit_shares_outstanding <= 0.0 {
        return Err(EvalError::invalid_input(
            "reitSharesOutstanding",
            "must be positive",
        ));
    }
    let ffo = assumptions.reit_net_income + assumptions.reit_depreciation
        - assumptions.reit_gains_on_sales;
    let per_share = ffo / assumptions.reit_shares_outstanding;

    Ok(Evaluation {
        calculation: format!(
            "FFO = {}M + {}M - {}M = {}M",
            millions(assumptions.reit_net_income),
            millions(assumptions.reit_depreciation),
            millions(assumptions.reit_gains_on_sales),
            millions(ffo)
        ),
        result: format!("{per_share:.2} per share"),
        interpretation: format!(
            "FFO of {per_share:.2} per share adds back depreciation, the dominant non-cash charge for REITs."
        ),
    })
}

pub fn commodity_return(assumptions: &Assumptions) -> Result<Evaluation, EvalError> {
    let spot = assumptions.commodity_spot_return;
    let collateral = assumptions.commodity_collateral_return;
    let roll = assumptions.commodity_roll_return;
    let total = spot + collateral + roll;

    let curve = if roll < 0.0 {
        "negative roll yield indicating contango"
    } else {
        "positive roll yield indicating backwardation"
    };
    Ok(Evaluation {
        calculation: format!("Total Return = {spot}% + {collateral}% + ({roll}%)"),
        result: format!("{total}%"),
        interpretation: format!("Total return of {total}% with {curve} market."),
    })
}

pub fn hedge_fund_alpha(assumptions: &Assumptions) -> Result<Evaluation, EvalError> {
    let rp = assumptions.hf_portfolio_return;
    let rf = assumptions.hf_risk_free_return;
    let expected = rf
        + assumptions.hf_market_beta * assumptions.hf_market_factor
        + assumptions.hf_size_beta * assumptions.hf_size_factor;
    let alpha = rp - expected;

    Ok(Evaluation {
        calculation: format!(
            "α = {rp}% - [{rf}% + {}×{}% + {}×{}%] = {rp}% - {expected}%",
            assumptions.hf_market_beta,
            assumptions.hf_market_factor,
            assumptions.hf_size_beta,
            assumptions.hf_size_factor
        ),
        result: format!("{alpha}%"),
        interpretation: format!(
            "Alpha of {alpha}% represents skill-based return after adjusting for market and size factor exposure."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reit_nav_default_trades_at_premium() {
        // (500M - 200M) / 10M = 30.00, market at 52
        let out = reit_valuation(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "30.00");
        assert!(out.interpretation.contains("premium"));
    }

    #[test]
    fn ffo_default_per_share() {
        // (50M + 25M - 5M) / 10M shares
        let out = ffo(&Assumptions::default()).unwrap();
        assert_eq!(out.result, "7.00 per share");
        assert_eq!(out.calculation, "FFO = 50M + 25M - 5M = 70M");
    }

    #[test]
    fn commodity_default_is_contango() {
        let out = commodity_return(&Assumptions::default()).unwrap();
        assert_eq!(out.result, "6.5%");
        assert!(out.interpretation.contains("contango"));

        let mut assumptions = Assumptions::default();
        assumptions.commodity_roll_return = 1.5;
        let out = commodity_return(&assumptions).unwrap();
        assert!(out.interpretation.contains("backwardation"));
    }

    #[test]
    fn hedge_fund_alpha_default() {
        // 12.5 - (2.5 + 0.7×8 + 0.3×3) = 3.5
        let out = hedge_fund_alpha(&Assumptions::default()).unwrap();
        assert_eq!(out.result, "3.5%");
        assert_eq!(
            out.calculation,
            "α = 12.5% - [2.5% + 0.7×8% + 0.3×3%] = 12.5% - 9%"
        );
    }
}
