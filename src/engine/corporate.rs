//! Corporate finance evaluators: payout policy and cost of capital.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;

pub fn dividend_payout(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let dps = inputs.current_dividend;
    let eps = inputs.eps;
    if eps == 0.0 {
        return Err(EvalError::invalid_input("eps", "must be nonzero"));
    }
    let payout = dps / eps * 100.0;

    let policy = if payout > 60.0 {
        "income-focused"
    } else if payout > 30.0 {
        "balanced"
    } else {
        "growth-focused"
    };
    Ok(Evaluation {
        calculation: format!("Payout Ratio = {dps} / {eps}"),
        result: format!("{payout:.1}%"),
        interpretation: format!(
            "Payout ratio of {payout:.1}% indicates {policy} dividend policy."
        ),
    })
}

/// WACC with a CAPM cost of equity built on the assumed market return.
pub fn wacc(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let rf = inputs.risk_free_return;
    let cost_of_equity = rf + inputs.beta * (assumptions.market_return - rf);
    let after_tax_debt = inputs.cost_of_debt * (1.0 - inputs.tax_rate / 100.0);
    let wacc = inputs.equity_weight * cost_of_equity + inputs.debt_weight * after_tax_debt;

    Ok(Evaluation {
        calculation: format!(
            "WACC = ({} × {cost_of_equity:.1}%) + ({} × {after_tax_debt:.1}%)",
            inputs.equity_weight, inputs.debt_weight
        ),
        result: format!("{wacc:.2}%"),
        interpretation: format!(
            "WACC of {wacc:.2}% with {:.0}% equity weight and {after_tax_debt:.1}% after-tax cost of debt.",
            inputs.equity_weight * 100.0
        ),
    })
}

pub fn capm(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let rf = inputs.risk_free_return;
    let premium = assumptions.market_risk_premium;
    let cost_of_equity = rf + inputs.beta * premium;

    Ok(Evaluation {
        calculation: format!("re = {rf}% + {} × {premium}%", inputs.beta),
        result: format!("{cost_of_equity:.2}%"),
        interpretation: format!(
            "Cost of equity of {cost_of_equity:.2}% with beta of {} and {premium}% market risk premium.",
            inputs.beta
        ),
    })
}

pub fn modigliani(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    if inputs.equity_weight == 0.0 {
        return Err(EvalError::invalid_input("equityWeight", "must be nonzero"));
    }
    let r0 = assumptions.unlevered_cost;
    let debt_to_equity = inputs.debt_weight / inputs.equity_weight;
    let levered = r0 + (r0 - inputs.cost_of_debt) * debt_to_equity;

    Ok(Evaluation {
        calculation: format!(
            "re = {r0}% + ({r0}% - {}%) × {debt_to_equity:.2}",
            inputs.cost_of_debt
        ),
        result: format!("{levered:.2}%"),
        interpretation: format!(
            "Levered cost of equity of {levered:.2}% with D/E ratio of {debt_to_equity:.2}."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_default_is_balanced() {
        let out = dividend_payout(&Inputs::default()).unwrap();
        assert_eq!(out.result, "40.0%");
        assert!(out.interpretation.contains("balanced"));
    }

    #[test]
    fn wacc_default_inputs() {
        // re = 3 + 1.2×(9-3) = 10.2; rd' = 5×0.75 = 3.75; 0.6×10.2 + 0.4×3.75 = 7.62
        let out = wacc(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "7.62%");
    }

    #[test]
    fn capm_scales_with_beta() {
        let assumptions = Assumptions::default();
        let mut inputs = Inputs::default();
        let out = capm(&assumptions, &inputs).unwrap();
        assert_eq!(out.result, "10.20%");

        inputs.beta = 0.0;
        let out = capm(&assumptions, &inputs).unwrap();
        // Zero beta earns the risk-free rate.
        assert_eq!(out.result, "3.00%");
    }

    #[test]
    fn mm_cost_rises_linearly_with_leverage() {
        let assumptions = Assumptions::default();
        let mut inputs = Inputs::default();
        inputs.equity_weight = 0.5;
        inputs.debt_weight = 0.5;
        let at_one = modigliani(&assumptions, &inputs).unwrap();
        assert_eq!(at_one.result, "11.00%");

        inputs.debt_weight = 1.0;
        let at_two = modigliani(&assumptions, &inputs).unwrap();
        assert_eq!(at_two.result, "14.00%");
    }
}
