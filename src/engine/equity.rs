//! Equity valuation evaluators: dividend-discount family and residual income.

use crate::domain::{Evaluation, Inputs};
use crate::error::EvalError;

/// Gordon growth value `V₀ = D₀(1+g)/(r-g)`.
///
/// Diverges as `g → r`; callers must keep the growth rate strictly below the
/// required return, enforced here rather than silently returning ±∞.
pub(crate) fn gordon_value(
    current_dividend: f64,
    growth_rate: f64,
    required_return: f64,
) -> Result<f64, EvalError> {
    if growth_rate >= required_return {
        return Err(EvalError::invalid_input(
            "dividendGrowthRate",
            format!(
                "growth must be below the required return (g={growth_rate}, r={required_return})"
            ),
        ));
    }
    let next_dividend = current_dividend * (1.0 + growth_rate / 100.0);
    Ok(next_dividend / ((required_return - growth_rate) / 100.0))
}

pub fn gordon_growth(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let g = inputs.dividend_growth_rate;
    let r = inputs.required_return;
    let value = gordon_value(inputs.current_dividend, g, r)?;
    let next_dividend = inputs.current_dividend * (1.0 + g / 100.0);

    Ok(Evaluation {
        calculation: format!(
            "V₀ = {next_dividend:.2} / ({r}% - {g}%) = {next_dividend:.2} / {:.4}",
            (r - g) / 100.0
        ),
        result: format!("{value:.2}"),
        interpretation: format!(
            "Stock value of {value:.2} assumes {g}% perpetual growth with {r}% required return."
        ),
    })
}

pub fn justified_pe(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let g = inputs.dividend_growth_rate / 100.0;
    let r = inputs.required_return / 100.0;
    let payout = inputs.payout_ratio / 100.0;
    if g >= r {
        return Err(EvalError::invalid_input(
            "dividendGrowthRate",
            format!(
                "growth must be below the required return (g={}, r={})",
                inputs.dividend_growth_rate, inputs.required_return
            ),
        ));
    }
    let pe = payout * (1.0 + g) / (r - g);

    let verdict = if pe > inputs.pe_ratio {
        "undervalued"
    } else {
        "overvalued"
    };
    Ok(Evaluation {
        calculation: format!("P/E = ({payout} × {:.3}) / ({r} - {g})", 1.0 + g),
        result: format!("{pe:.2}"),
        interpretation: format!(
            "Justified P/E of {pe:.2} vs current {} suggests stock is {verdict}.",
            inputs.pe_ratio
        ),
    })
}

pub fn pvgo(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let r = inputs.required_return / 100.0;
    if r <= 0.0 {
        return Err(EvalError::invalid_input(
            "requiredReturn",
            "must be positive",
        ));
    }
    let no_growth_value = inputs.eps / r;
    let current_price = inputs.eps * inputs.pe_ratio;
    if current_price == 0.0 {
        return Err(EvalError::invalid_input("eps", "price (eps × P/E) must be nonzero"));
    }
    let pvgo = current_price - no_growth_value;

    Ok(Evaluation {
        calculation: format!(
            "PVGO = {current_price:.2} - ({}/{r}) = {current_price:.2} - {no_growth_value:.2}",
            inputs.eps
        ),
        result: format!("{pvgo:.2}"),
        interpretation: format!(
            "PVGO of {pvgo:.2} represents {:.1}% of stock value from growth opportunities.",
            pvgo / current_price * 100.0
        ),
    })
}

pub fn residual_income(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let equity_charge = inputs.book_value_per_share * (inputs.required_return / 100.0);
    let ri = inputs.eps - equity_charge;

    let (sign, reading) = if ri > 0.0 {
        ("Positive", "value creation")
    } else {
        ("Negative", "value destruction")
    };
    Ok(Evaluation {
        calculation: format!(
            "RI = {} - ({} × {}%) = {} - {equity_charge:.2}",
            inputs.eps, inputs.book_value_per_share, inputs.required_return, inputs.eps
        ),
        result: format!("{ri:.2}"),
        interpretation: format!(
            "{sign} RI of {ri:.2} indicates {reading} above cost of equity."
        ),
    })
}
