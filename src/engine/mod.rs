//! The formula evaluation engine.
//!
//! `Engine` maps `(category, formula, inputs)` to a structured
//! `{calculation, result, interpretation}` and, for the handful of formulas
//! worth charting, a sensitivity sweep. Dispatch is an exhaustive match over
//! the closed `Formula` enumeration, so adding a formula without an
//! evaluator is a compile error.
//!
//! Every evaluator is a deterministic pure function of its inputs and the
//! engine's fixed assumptions. Nothing is cached or shared, so concurrent
//! calls are trivially safe.

pub mod alternatives;
pub mod corporate;
pub mod derivatives;
pub mod economics;
pub mod equity;
pub mod financial;
pub mod fixed_income;
pub mod portfolio;
pub mod quantitative;
pub mod sweep;

use crate::catalog;
use crate::domain::{Assumptions, Category, Evaluation, Formula, Inputs, SweepSeries};
use crate::error::EvalError;

/// Stateless evaluation engine.
///
/// Holds only the injected teaching assumptions; construction is cheap and
/// the engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    assumptions: Assumptions,
}

impl Engine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Evaluate one formula against an input record.
    ///
    /// Fails with `UnknownFormula` when the (category, formula) pair is not
    /// registered, and `InvalidInput` when an input is outside the formula's
    /// mathematical domain (e.g. `g ≥ r` in the Gordon model).
    pub fn evaluate(
        &self,
        category: Category,
        formula: Formula,
        inputs: &Inputs,
    ) -> Result<Evaluation, EvalError> {
        catalog::lookup(category, formula)?;

        use Formula::*;
        match formula {
            MultipleRegression => quantitative::multiple_regression(inputs),
            RSquaredAdjusted => quantitative::adjusted_r_squared(inputs),
            HypothesisTesting => quantitative::t_test(&self.assumptions, inputs),
            FStatistic => quantitative::f_statistic(inputs),

            Ppp => economics::ppp(inputs),
            CoveredInterestParity => economics::covered_interest_parity(inputs),
            UncoveredInterestParity => economics::uncovered_interest_parity(inputs),
            ForwardRateValuation => economics::forward_rate_valuation(inputs),

            RoeDuPont => financial::roe_du_pont(inputs),
            SustainableGrowthRate => financial::sustainable_growth_rate(inputs),
            EarningsQuality => financial::earnings_quality(inputs),
            WorkingCapitalTurnover => financial::working_capital_turnover(inputs),

            DividendPayout => corporate::dividend_payout(inputs),
            Wacc => corporate::wacc(&self.assumptions, inputs),
            Capm => corporate::capm(&self.assumptions, inputs),
            Modigliani => corporate::modigliani(&self.assumptions, inputs),

            GordonGrowthModel => equity::gordon_growth(inputs),
            JustifiedPe => equity::justified_pe(inputs),
            Pvgo => equity::pvgo(inputs),
            ResidualIncome => equity::residual_income(inputs),

            BondPricing => fixed_income::bond_pricing(inputs),
            ModifiedDuration => fixed_income::modified_duration(&self.assumptions, inputs),
            Convexity => fixed_income::convexity(&self.assumptions, inputs),
            CreditSpread => fixed_income::credit_spread(&self.assumptions, inputs),

            BlackScholesCall => derivatives::black_scholes_call(inputs),
            BlackScholesPut => derivatives::black_scholes_put(inputs),
            DeltaHedge => derivatives::delta_hedge(inputs),
            ImpliedVolatility => derivatives::implied_volatility(&self.assumptions, inputs),

            ReitValuation => alternatives::reit_valuation(&self.assumptions, inputs),
            FfoMultiple => alternatives::ffo(&self.assumptions),
            CommodityReturn => alternatives::commodity_return(&self.assumptions),
            HedgeFundAlpha => alternatives::hedge_fund_alpha(&self.assumptions),

            InformationRatio => portfolio::information_ratio(inputs),
            TreynorRatio => portfolio::treynor_ratio(inputs),
            JensenAlpha => portfolio::jensen_alpha(&self.assumptions, inputs),
            Var => portfolio::value_at_risk(&self.assumptions, inputs),
        }
    }

    /// Generate the sensitivity series for a formula, or `None` when the
    /// formula defines no sweep.
    ///
    /// Like `evaluate`, fails with `UnknownFormula` on an unregistered pair.
    pub fn sweep(
        &self,
        category: Category,
        formula: Formula,
        inputs: &Inputs,
    ) -> Result<Option<SweepSeries>, EvalError> {
        catalog::lookup(category, formula)?;
        sweep::generate(formula, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn every_formula_evaluates_with_default_inputs() {
        let engine = Engine::default();
        let inputs = Inputs::default();
        for &formula in Formula::value_variants() {
            let out = engine.evaluate(formula.category(), formula, &inputs);
            assert!(out.is_ok(), "{formula:?} failed: {:?}", out.err());
            let out = out.unwrap();
            assert!(!out.calculation.is_empty());
            assert!(!out.result.is_empty());
            assert!(!out.interpretation.is_empty());
        }
    }

    #[test]
    fn evaluate_is_deterministic() {
        let engine = Engine::default();
        let inputs = Inputs::default();
        for &formula in Formula::value_variants() {
            let a = engine.evaluate(formula.category(), formula, &inputs).unwrap();
            let b = engine.evaluate(formula.category(), formula, &inputs).unwrap();
            // Identical strings, not merely equal numbers.
            assert_eq!(a, b, "{formula:?} not deterministic");
        }
    }

    #[test]
    fn mismatched_pair_is_unknown_formula() {
        let engine = Engine::default();
        let inputs = Inputs::default();
        let err = engine
            .evaluate(Category::Equity, Formula::BondPricing, &inputs)
            .unwrap_err();
        assert!(matches!(err, EvalError::UnknownFormula { .. }));
        let err = engine
            .sweep(Category::Equity, Formula::BondPricing, &inputs)
            .unwrap_err();
        assert!(matches!(err, EvalError::UnknownFormula { .. }));
    }

    #[test]
    fn only_six_formulas_define_sweeps() {
        let engine = Engine::default();
        let inputs = Inputs::default();
        let mut supported = Vec::new();
        for &formula in Formula::value_variants() {
            if engine
                .sweep(formula.category(), formula, &inputs)
                .unwrap()
                .is_some()
            {
                supported.push(formula);
            }
        }
        assert_eq!(
            supported,
            vec![
                Formula::MultipleRegression,
                Formula::Ppp,
                Formula::GordonGrowthModel,
                Formula::BondPricing,
                Formula::BlackScholesCall,
                Formula::InformationRatio,
            ]
        );
    }
}
