//! Derivatives evaluators: Black-Scholes pricing, delta, implied vol quote.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;
use crate::math::normal_cdf;

/// Black-Scholes intermediates for `(S, K, σ, T, r)` with σ and r in percent.
pub(crate) fn d1_d2(
    spot: f64,
    strike: f64,
    volatility: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
) -> Result<(f64, f64), EvalError> {
    if spot <= 0.0 {
        return Err(EvalError::invalid_input("spotPrice", "must be positive"));
    }
    if strike <= 0.0 {
        return Err(EvalError::invalid_input("strikePrice", "must be positive"));
    }
    if volatility <= 0.0 {
        return Err(EvalError::invalid_input("volatility", "must be positive"));
    }
    if time_to_expiry <= 0.0 {
        return Err(EvalError::invalid_input("timeToExpiry", "must be positive"));
    }

    let sigma = volatility / 100.0;
    let r = risk_free_rate / 100.0;
    let vol_sqrt_t = sigma * time_to_expiry.sqrt();
    let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * time_to_expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    Ok((d1, d2))
}

/// Call price from precomputed d1/d2.
pub(crate) fn call_price(
    spot: f64,
    strike: f64,
    risk_free_rate: f64,
    time_to_expiry: f64,
    d1: f64,
    d2: f64,
) -> f64 {
    let r = risk_free_rate / 100.0;
    spot * normal_cdf(d1) - strike * (-r * time_to_expiry).exp() * normal_cdf(d2)
}

pub fn black_scholes_call(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let (d1, d2) = d1_d2(
        inputs.spot_price,
        inputs.strike_price,
        inputs.volatility,
        inputs.time_to_expiry,
        inputs.risk_free_rate,
    )?;
    let call = call_price(
        inputs.spot_price,
        inputs.strike_price,
        inputs.risk_free_rate,
        inputs.time_to_expiry,
        d1,
        d2,
    );

    Ok(Evaluation {
        calculation: format!(
            "C = {}×N({d1:.3}) - {}×e^(-{}×{})×N({d2:.3})",
            inputs.spot_price,
            inputs.strike_price,
            inputs.risk_free_rate / 100.0,
            inputs.time_to_expiry
        ),
        result: format!("{call:.2}"),
        interpretation: format!(
            "Call option worth {call:.2} with {}% volatility and {:.0} days to expiry.",
            inputs.volatility,
            inputs.time_to_expiry * 365.0
        ),
    })
}

pub fn black_scholes_put(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let (d1, d2) = d1_d2(
        inputs.spot_price,
        inputs.strike_price,
        inputs.volatility,
        inputs.time_to_expiry,
        inputs.risk_free_rate,
    )?;
    let r = inputs.risk_free_rate / 100.0;
    let discounted_strike = inputs.strike_price * (-r * inputs.time_to_expiry).exp();
    let put = discounted_strike * normal_cdf(-d2) - inputs.spot_price * normal_cdf(-d1);
    let call = call_price(
        inputs.spot_price,
        inputs.strike_price,
        inputs.risk_free_rate,
        inputs.time_to_expiry,
        d1,
        d2,
    );

    Ok(Evaluation {
        calculation: format!(
            "P = {}×e^(-{}×{})×N({:.3}) - {}×N({:.3})",
            inputs.strike_price,
            r,
            inputs.time_to_expiry,
            -d2,
            inputs.spot_price,
            -d1
        ),
        result: format!("{put:.2}"),
        interpretation: format!(
            "Put option worth {put:.2}. Put-call parity: C - P = S - PV(K) = {:.2}.",
            call - put
        ),
    })
}

pub fn delta_hedge(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let (d1, _) = d1_d2(
        inputs.spot_price,
        inputs.strike_price,
        inputs.volatility,
        inputs.time_to_expiry,
        inputs.risk_free_rate,
    )?;
    let delta = normal_cdf(d1);

    Ok(Evaluation {
        calculation: format!("Delta = N(d₁) = N({d1:.3}) = {delta:.3}"),
        result: format!("{delta:.3}"),
        interpretation: format!(
            "Need {delta:.3} shares per call option to create delta-neutral hedge. Delta changes as stock moves."
        ),
    })
}

/// Illustrative implied-volatility quote.
///
/// This is a fixed teaching figure, not a root-find against the pricer; the
/// quote and the market price it accompanies both come from `Assumptions`.
pub fn implied_volatility(
    assumptions: &Assumptions,
    inputs: &Inputs,
) -> Result<Evaluation, EvalError> {
    let quote = assumptions.implied_vol_quote;
    let market_price = assumptions.option_market_price;

    let demand = if quote > inputs.volatility {
        "elevated"
    } else {
        "low"
    };
    Ok(Evaluation {
        calculation: format!("Market Price = {market_price}, Theoretical Price varies with σ"),
        result: format!("{quote}%"),
        interpretation: format!(
            "Implied volatility of {quote}% vs historical {}% suggests {demand} option demand.",
            inputs.volatility
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::normal_cdf;

    #[test]
    fn default_call_value() {
        let out = black_scholes_call(&Inputs::default()).unwrap();
        let call: f64 = out.result.parse().unwrap();
        assert!((3.0..3.5).contains(&call), "call = {call}");
    }

    #[test]
    fn put_call_parity_holds() {
        // C - P = S - K·e^{-rT} across a parameter grid.
        for spot in [80.0, 100.0, 120.0] {
            for vol in [10.0, 25.0, 60.0] {
                for t in [0.1, 0.25, 2.0] {
                    let (d1, d2) = d1_d2(spot, 105.0, vol, t, 3.0).unwrap();
                    let r = 0.03;
                    let call = call_price(spot, 105.0, 3.0, t, d1, d2);
                    let put =
                        105.0 * (-r * t).exp() * normal_cdf(-d2) - spot * normal_cdf(-d1);
                    let parity = spot - 105.0 * (-r * t).exp();
                    assert!(
                        (call - put - parity).abs() < 1e-6,
                        "parity violated at S={spot}, σ={vol}, T={t}"
                    );
                }
            }
        }
    }

    #[test]
    fn call_exceeds_intrinsic_value() {
        for spot in [90.0, 105.0, 120.0] {
            let (d1, d2) = d1_d2(spot, 105.0, 25.0, 0.25, 3.0).unwrap();
            let call = call_price(spot, 105.0, 3.0, 0.25, d1, d2);
            let intrinsic = (spot - 105.0).max(0.0);
            assert!(call >= intrinsic - 1e-9);
            assert!(call > 0.0);
        }
    }

    #[test]
    fn delta_is_a_probability_and_increases_with_spot() {
        let mut prev = 0.0;
        for spot in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let (d1, _) = d1_d2(spot, 105.0, 25.0, 0.25, 3.0).unwrap();
            let delta = normal_cdf(d1);
            assert!((0.0..=1.0).contains(&delta));
            assert!(delta > prev, "delta should rise with spot");
            prev = delta;
        }
    }

    #[test]
    fn degenerate_option_inputs_are_rejected() {
        assert!(d1_d2(100.0, 105.0, 0.0, 0.25, 3.0).is_err());
        assert!(d1_d2(100.0, 105.0, 25.0, 0.0, 3.0).is_err());
        assert!(d1_d2(-1.0, 105.0, 25.0, 0.25, 3.0).is_err());
    }
}
