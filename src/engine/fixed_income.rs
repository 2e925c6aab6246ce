//! Fixed income evaluators: bond pricing, duration, convexity, credit spread.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;

/// Price a coupon bond by discounting each period's cash flow.
///
/// This is a literal period-by-period present-value loop, not a closed-form
/// annuity: reference outputs were produced by the summation, and the two
/// differ in the last bits at double precision.
pub(crate) fn price_bond(
    face_value: f64,
    coupon_rate: f64,
    ytm: f64,
    years: f64,
    frequency: f64,
) -> Result<f64, EvalError> {
    if frequency <= 0.0 {
        return Err(EvalError::invalid_input("frequency", "must be positive"));
    }
    if years < 0.0 {
        return Err(EvalError::invalid_input(
            "timeToMaturity",
            "must be non-negative",
        ));
    }
    let periodic_yield = ytm / 100.0 / frequency;
    if periodic_yield <= -1.0 {
        return Err(EvalError::invalid_input(
            "ytm",
            "periodic yield must be greater than -100%",
        ));
    }

    let periodic_coupon = face_value * (coupon_rate / 100.0) / frequency;
    let total_periods = years * frequency;
    let whole_periods = total_periods.floor() as u32;

    let mut pv = 0.0;
    for period in 1..=whole_periods {
        pv += periodic_coupon / (1.0 + periodic_yield).powf(f64::from(period));
    }
    pv += face_value / (1.0 + periodic_yield).powf(total_periods);
    Ok(pv)
}

pub fn bond_pricing(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let face = inputs.face_value;
    let price = price_bond(
        face,
        inputs.coupon_rate,
        inputs.ytm,
        inputs.time_to_maturity,
        inputs.frequency,
    )?;
    let periodic_coupon = face * (inputs.coupon_rate / 100.0) / inputs.frequency;
    let base = 1.0 + inputs.ytm / 100.0 / inputs.frequency;
    let total_periods = inputs.time_to_maturity * inputs.frequency;

    let standing = if price > face {
        "premium"
    } else if price < face {
        "discount"
    } else {
        "par"
    };
    Ok(Evaluation {
        calculation: format!(
            "PV = Σ[{periodic_coupon}/{base:.4}^t] + {face}/{base:.4}^{total_periods}"
        ),
        result: format!("{price:.2}"),
        interpretation: format!(
            "Bond priced at {price:.2} {standing} with {}% coupon vs {}% YTM.",
            inputs.coupon_rate, inputs.ytm
        ),
    })
}

pub fn modified_duration(
    assumptions: &Assumptions,
    inputs: &Inputs,
) -> Result<Evaluation, EvalError> {
    if inputs.frequency <= 0.0 {
        return Err(EvalError::invalid_input("frequency", "must be positive"));
    }
    let mac = assumptions.macaulay_duration;
    let per_period = 1.0 + inputs.ytm / 100.0 / inputs.frequency;
    let mod_dur = mac / per_period;

    Ok(Evaluation {
        calculation: format!(
            "ModDur = {mac} / (1 + {}%/{}) = {mac} / {per_period:.4}",
            inputs.ytm, inputs.frequency
        ),
        result: format!("{mod_dur:.3}"),
        interpretation: format!(
            "Modified duration of {mod_dur:.3} means 1% yield change causes ~{mod_dur:.2}% price change."
        ),
    })
}

pub fn convexity(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    if inputs.frequency <= 0.0 {
        return Err(EvalError::invalid_input("frequency", "must be positive"));
    }
    let conv = assumptions.bond_convexity;
    let dy = assumptions.yield_shock;
    let mod_dur = assumptions.macaulay_duration / (1.0 + inputs.ytm / 100.0 / inputs.frequency);

    let duration_effect = -mod_dur * dy * 100.0;
    let convexity_effect = 0.5 * conv * dy * dy * 100.0;
    let total = duration_effect + convexity_effect;

    Ok(Evaluation {
        calculation: format!(
            "%ΔP = -{mod_dur:.2}×{:.0}% + 0.5×{conv}×({:.0}%)² = {duration_effect:.2}% + {convexity_effect:.2}%",
            dy * 100.0,
            dy * 100.0
        ),
        result: format!("{total:.2}%"),
        interpretation: format!(
            "For {:.0}% yield increase: {duration_effect:.2}% duration effect + {convexity_effect:.2}% convexity benefit.",
            dy * 100.0
        ),
    })
}

pub fn credit_spread(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let treasury = assumptions.treasury_yield;
    let spread = inputs.ytm - treasury;
    let bps = spread * 100.0;

    Ok(Evaluation {
        calculation: format!(
            "Credit Spread = {}% - {treasury}% = {spread:.1}%",
            inputs.ytm
        ),
        result: format!("{bps:.0} bps"),
        interpretation: format!(
            "{bps:.0} basis points spread compensates for default risk above Treasury rate."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bond_prices_at_premium() {
        // 5% coupon discounted at 4% YTM, 10y semiannual.
        let out = bond_pricing(&Inputs::default()).unwrap();
        assert_eq!(out.result, "1081.76");
        assert!(out.interpretation.contains("premium"));
    }

    #[test]
    fn coupon_equal_to_yield_prices_at_par() {
        let price = price_bond(1000.0, 5.0, 5.0, 10.0, 2.0).unwrap();
        assert!(
            (price - 1000.0).abs() < 1e-6,
            "par bond should price at face, got {price}"
        );
    }

    #[test]
    fn price_moves_inversely_with_yield() {
        let mut prev = f64::INFINITY;
        for ytm in [1.0, 3.0, 5.0, 7.0, 9.0] {
            let price = price_bond(1000.0, 5.0, ytm, 10.0, 2.0).unwrap();
            assert!(price < prev, "price should fall as yield rises");
            prev = price;
        }
    }

    #[test]
    fn zero_coupon_is_pure_discounted_face() {
        let price = price_bond(1000.0, 0.0, 4.0, 10.0, 2.0).unwrap();
        let expected = 1000.0 / 1.02_f64.powf(20.0);
        assert!((price - expected).abs() < 1e-9);
    }

    #[test]
    fn price_bond_rejects_bad_frequency() {
        assert!(price_bond(1000.0, 5.0, 4.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn duration_and_convexity_defaults() {
        let assumptions = Assumptions::default();
        let inputs = Inputs::default();

        // 7.5 / 1.02
        let out = modified_duration(&assumptions, &inputs).unwrap();
        assert_eq!(out.result, "7.353");

        // -7.35% duration effect + 0.33% convexity benefit
        let out = convexity(&assumptions, &inputs).unwrap();
        assert_eq!(out.result, "-7.03%");
    }

    #[test]
    fn credit_spread_default_is_50_bps() {
        let out = credit_spread(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "50 bps");
    }
}
