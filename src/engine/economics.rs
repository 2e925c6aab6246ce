//! Economics evaluators: parity relationships and forward valuation.
//!
//! Convention: FX quotes are "foreign currency per unit of domestic", so a
//! falling rate means the domestic currency is depreciating. Interest and
//! inflation rates are annual percentages; parity ratios use the one-period
//! form of the cataloged expressions.

use crate::domain::{Evaluation, Inputs};
use crate::error::EvalError;

/// PPP-expected spot rate: `S₀ × (1 + πf)/(1 + πd)`.
pub(crate) fn ppp_expected_rate(
    spot: f64,
    inflation_domestic: f64,
    inflation_foreign: f64,
) -> Result<f64, EvalError> {
    if inflation_domestic <= -100.0 {
        return Err(EvalError::invalid_input(
            "inflationDomestic",
            "inflation must be greater than -100%",
        ));
    }
    Ok(spot * (1.0 + inflation_foreign / 100.0) / (1.0 + inflation_domestic / 100.0))
}

/// Interest-parity forward/expected rate: `S₀ × (1 + rf)/(1 + rd)`.
pub(crate) fn parity_rate(
    spot: f64,
    domestic_rate: f64,
    foreign_rate: f64,
) -> Result<f64, EvalError> {
    if domestic_rate <= -100.0 {
        return Err(EvalError::invalid_input(
            "domesticRate",
            "interest rate must be greater than -100%",
        ));
    }
    Ok(spot * (1.0 + foreign_rate / 100.0) / (1.0 + domestic_rate / 100.0))
}

pub fn ppp(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let spot = inputs.spot_rate;
    let pi_d = inputs.inflation_domestic;
    let pi_f = inputs.inflation_foreign;
    let expected = ppp_expected_rate(spot, pi_d, pi_f)?;
    let differential = pi_d - pi_f;

    let direction = if expected < spot {
        "a depreciation of the higher-inflation domestic currency"
    } else if expected > spot {
        "an appreciation of the domestic currency"
    } else {
        "no change in the exchange rate"
    };
    Ok(Evaluation {
        calculation: format!(
            "S₁ = {spot} × (1 + {pi_f}%)/(1 + {pi_d}%) = {spot} × {:.4}",
            (1.0 + pi_f / 100.0) / (1.0 + pi_d / 100.0)
        ),
        result: format!("{expected:.4}"),
        interpretation: format!(
            "With an inflation differential of {differential:.1}%, PPP implies the spot rate moves from {spot} to {expected:.4}, {direction}."
        ),
    })
}

pub fn covered_interest_parity(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let spot = inputs.spot_rate;
    let rd = inputs.domestic_rate;
    let rf = inputs.foreign_rate;
    let implied = parity_rate(spot, rd, rf)?;
    let quoted = inputs.forward_rate;

    let reading = if quoted > implied {
        "the quoted forward is rich; covered arbitrage would sell it"
    } else if quoted < implied {
        "the quoted forward is cheap; covered arbitrage would buy it"
    } else {
        "the quoted forward sits exactly at the no-arbitrage level"
    };
    Ok(Evaluation {
        calculation: format!("F = {spot} × (1 + {rf}%)/(1 + {rd}%)"),
        result: format!("{implied:.4}"),
        interpretation: format!(
            "No-arbitrage forward of {implied:.4} vs quoted {quoted}: {reading}."
        ),
    })
}

pub fn uncovered_interest_parity(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let spot = inputs.spot_rate;
    let rd = inputs.domestic_rate;
    let rf = inputs.foreign_rate;
    let expected = parity_rate(spot, rd, rf)?;

    Ok(Evaluation {
        calculation: format!("E(S₁) = {spot} × (1 + {rf}%)/(1 + {rd}%)"),
        result: format!("{expected:.4}"),
        interpretation: format!(
            "UIP expects the spot rate to move to {expected:.4}, offsetting the {:.1}% rate differential. Unlike CIP this is an expectation, not an enforceable arbitrage.",
            rd - rf
        ),
    })
}

/// Value the forward against the parity-implied contract rate, discounted at
/// the domestic rate over the remaining horizon (per unit of notional).
pub fn forward_rate_valuation(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let f0 = parity_rate(inputs.spot_rate, inputs.domestic_rate, inputs.foreign_rate)?;
    let ft = inputs.forward_rate;
    let rd = inputs.domestic_rate;
    let t = inputs.time_horizon;
    if t < 0.0 {
        return Err(EvalError::invalid_input(
            "timeHorizon",
            "time horizon must be non-negative",
        ));
    }

    let value = (ft - f0) / (1.0 + rd / 100.0).powf(t);
    let side = if value > 0.0 { "long" } else { "short" };
    Ok(Evaluation {
        calculation: format!("Vt = ({ft} - {f0:.4}) / (1 + {rd}%)^{t}"),
        result: format!("{value:.4}"),
        interpretation: format!(
            "Per unit of notional the forward is worth {value:.4} to the {side} side, the discounted gap between the current forward rate and the contracted rate."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppp_default_inputs() {
        // 1.2 × 1.018/1.025
        let out = ppp(&Inputs::default()).unwrap();
        assert_eq!(out.result, "1.1918");
        assert!(out.interpretation.contains("depreciation"));
    }

    #[test]
    fn parity_rate_direction() {
        // Higher domestic rate pushes the forward below spot.
        let f = parity_rate(1.2, 3.0, 2.0).unwrap();
        assert!(f < 1.2);
        // Equal rates leave it unchanged.
        let f = parity_rate(1.2, 2.0, 2.0).unwrap();
        assert!((f - 1.2).abs() < 1e-12);
    }

    #[test]
    fn forward_value_sign_follows_rate_gap() {
        let inputs = Inputs::default();
        // Default quoted forward (1.205) is above the parity forward (~1.1883).
        let out = forward_rate_valuation(&inputs).unwrap();
        assert!(out.interpretation.contains("long"));

        let mut cheap = inputs.clone();
        cheap.forward_rate = 1.10;
        let out = forward_rate_valuation(&cheap).unwrap();
        assert!(out.interpretation.contains("short"));
    }
}
