//! Financial statement analysis evaluators: DuPont ROE and quality ratios.

use crate::domain::{Evaluation, Inputs};
use crate::error::EvalError;

fn nonzero(value: f64, field: &'static str) -> Result<f64, EvalError> {
    if value == 0.0 {
        return Err(EvalError::invalid_input(field, "must be nonzero"));
    }
    Ok(value)
}

/// Three-factor DuPont decomposition.
///
/// The product of margin, turnover, and leverage collapses algebraically to
/// net income over equity; the decomposition tells you where the ROE comes
/// from, not what it is.
pub fn roe_du_pont(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let revenue = nonzero(inputs.revenue, "revenue")?;
    let assets = nonzero(inputs.total_assets, "totalAssets")?;
    let equity = nonzero(inputs.shareholder_equity, "shareholderEquity")?;
    let ni = inputs.net_income;

    let margin = ni / revenue;
    let turnover = revenue / assets;
    let leverage = assets / equity;
    let roe = margin * turnover * leverage;

    let driver = if leverage > 2.0 {
        "financial leverage is doing much of the work"
    } else {
        "the return is driven mainly by operations"
    };
    Ok(Evaluation {
        calculation: format!(
            "ROE = ({ni}/{revenue}) × ({revenue}/{assets}) × ({assets}/{equity}) = {:.2}% × {turnover:.2} × {leverage:.2}",
            margin * 100.0
        ),
        result: format!("{:.2}%", roe * 100.0),
        interpretation: format!(
            "ROE of {:.2}% decomposes into a {:.2}% net margin, {turnover:.2}× asset turnover, and {leverage:.2}× leverage; {driver}.",
            roe * 100.0,
            margin * 100.0
        ),
    })
}

pub fn sustainable_growth_rate(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let roe = inputs.roe;
    let retention = inputs.retention_ratio / 100.0;
    let g = roe * retention;

    Ok(Evaluation {
        calculation: format!("g = {roe}% × {retention:.2}"),
        result: format!("{g:.2}%"),
        interpretation: format!(
            "The firm can grow {g:.2}% per year from retained earnings alone, without raising external equity."
        ),
    })
}

pub fn earnings_quality(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let ni = nonzero(inputs.net_income, "netIncome")?;
    let cfo = inputs.cfo;
    let ratio = cfo / ni;

    let reading = if ratio >= 1.0 {
        "earnings are fully backed by operating cash flow"
    } else {
        "a sizable share of earnings is accruals; scrutinize revenue recognition"
    };
    Ok(Evaluation {
        calculation: format!("Quality Ratio = {cfo} / {ni}"),
        result: format!("{ratio:.2}"),
        interpretation: format!("CFO/NI of {ratio:.2}: {reading}."),
    })
}

pub fn working_capital_turnover(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let wc = nonzero(inputs.working_capital, "workingCapital")?;
    let revenue = inputs.revenue;
    let turns = revenue / wc;

    Ok(Evaluation {
        calculation: format!("WC Turnover = {revenue} / {wc}"),
        result: format!("{turns:.2}×"),
        interpretation: format!(
            "Each dollar of working capital supports {turns:.2} dollars of annual revenue."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn du_pont_identity_holds() {
        // The three factors must multiply back to NI/Equity exactly.
        let inputs = Inputs::default();
        let margin = inputs.net_income / inputs.revenue;
        let turnover = inputs.revenue / inputs.total_assets;
        let leverage = inputs.total_assets / inputs.shareholder_equity;
        let direct = inputs.net_income / inputs.shareholder_equity;
        assert!((margin * turnover * leverage - direct).abs() < 1e-12);

        let out = roe_du_pont(&inputs).unwrap();
        assert_eq!(out.result, "16.67%");
    }

    #[test]
    fn du_pont_rejects_zero_denominators() {
        let mut inputs = Inputs::default();
        inputs.shareholder_equity = 0.0;
        assert!(roe_du_pont(&inputs).is_err());
    }

    #[test]
    fn sustainable_growth_default() {
        // 15% ROE × 0.60 retention
        let out = sustainable_growth_rate(&Inputs::default()).unwrap();
        assert_eq!(out.result, "9.00%");
    }

    #[test]
    fn earnings_quality_default() {
        let out = earnings_quality(&Inputs::default()).unwrap();
        assert_eq!(out.result, "1.20");
        assert!(out.interpretation.contains("fully backed"));
    }

    #[test]
    fn working_capital_turnover_default() {
        // 5,000,000 revenue / 800,000 working capital
        let out = working_capital_turnover(&Inputs::default()).unwrap();
        assert_eq!(out.result, "6.25×");
    }
}
