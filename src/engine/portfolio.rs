//! Portfolio management evaluators: risk-adjusted performance and VaR.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;

pub fn information_ratio(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    if inputs.tracking_error == 0.0 {
        return Err(EvalError::invalid_input("trackingError", "must be nonzero"));
    }
    let active_return = inputs.portfolio_return - inputs.benchmark_return;
    let ir = active_return / inputs.tracking_error;

    let skill = if ir > 0.5 {
        "strong"
    } else if ir > 0.0 {
        "modest"
    } else {
        "poor"
    };
    Ok(Evaluation {
        calculation: format!(
            "IR = ({}% - {}%) / {}%",
            inputs.portfolio_return, inputs.benchmark_return, inputs.tracking_error
        ),
        result: format!("{ir:.3}"),
        interpretation: format!("IR of {ir:.3} indicates {skill} active management skill."),
    })
}

pub fn treynor_ratio(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    if inputs.beta == 0.0 {
        return Err(EvalError::invalid_input("beta", "must be nonzero"));
    }
    let excess = inputs.portfolio_return - inputs.risk_free_return;
    let treynor = excess / inputs.beta;

    Ok(Evaluation {
        calculation: format!(
            "Treynor = ({}% - {}%) / {}",
            inputs.portfolio_return, inputs.risk_free_return, inputs.beta
        ),
        result: format!("{treynor:.2}%"),
        interpretation: format!(
            "Excess return of {treynor:.2}% per unit of systematic risk (beta)."
        ),
    })
}

/// Jensen's alpha against the CAPM line built on the assumed market return.
pub fn jensen_alpha(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let rf = inputs.risk_free_return;
    let market_premium = assumptions.market_return - rf;
    let expected = rf + inputs.beta * market_premium;
    let alpha = inputs.portfolio_return - expected;

    let verdict = if alpha > 0.0 {
        "outperformed"
    } else {
        "underperformed"
    };
    Ok(Evaluation {
        calculation: format!(
            "α = {}% - [{rf}% + {}×({}% - {rf}%)] = {}% - {expected}%",
            inputs.portfolio_return,
            inputs.beta,
            assumptions.market_return,
            inputs.portfolio_return
        ),
        result: format!("{alpha:.2}%"),
        interpretation: format!(
            "Portfolio {verdict} its CAPM-expected return by {:.2}%.",
            alpha.abs()
        ),
    })
}

/// Parametric value at risk at the assumed one-tailed confidence level.
pub fn value_at_risk(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let z = assumptions.var_z_score;
    let tail_loss = z * inputs.portfolio_std_dev;
    let var = inputs.portfolio_return - tail_loss;
    let confidence = (1.0 - assumptions.var_confidence) * 100.0;

    Ok(Evaluation {
        calculation: format!(
            "VaR = {}% - {z}×{}% = {}% - {tail_loss:.1}%",
            inputs.portfolio_return, inputs.portfolio_std_dev, inputs.portfolio_return
        ),
        result: format!("{var:.1}%"),
        interpretation: format!(
            "With {confidence:.0}% confidence, the return will not fall below {var:.1}% over the period."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn information_ratio_default_is_strong() {
        // (10 - 8) / 2
        let out = information_ratio(&Inputs::default()).unwrap();
        assert_eq!(out.result, "1.000");
        assert!(out.interpretation.contains("strong"));
    }

    #[test]
    fn information_ratio_skill_tiers() {
        let mut inputs = Inputs::default();
        inputs.portfolio_return = 8.5;
        let out = information_ratio(&inputs).unwrap();
        assert!(out.interpretation.contains("modest"));

        inputs.portfolio_return = 7.0;
        let out = information_ratio(&inputs).unwrap();
        assert!(out.interpretation.contains("poor"));

        inputs.tracking_error = 0.0;
        assert!(information_ratio(&inputs).is_err());
    }

    #[test]
    fn treynor_default() {
        // (10 - 3) / 1.2
        let out = treynor_ratio(&Inputs::default()).unwrap();
        assert_eq!(out.result, "5.83%");
    }

    #[test]
    fn treynor_rejects_zero_beta() {
        let mut inputs = Inputs::default();
        inputs.beta = 0.0;
        assert!(treynor_ratio(&inputs).is_err());
    }

    #[test]
    fn jensen_alpha_default_slightly_underperforms() {
        // 10 - [3 + 1.2×(9 - 3)] = -0.2
        let out = jensen_alpha(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "-0.20%");
        assert!(out.interpretation.contains("underperformed"));
    }

    #[test]
    fn var_default() {
        // 10 - 1.645×15 = -14.675
        let out = value_at_risk(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "-14.7%");
        assert!(out.interpretation.contains("95% confidence"));
    }
}
