//! The shared input parameter record.
//!
//! Every formula reads only the subset of fields it needs; the full set is
//! shared across the whole catalog so a front-end can keep one input form per
//! category. This is the "single superset struct" variant of the design: one
//! strongly-typed struct with every field, rather than a free-form map, so
//! field-name typos are caught at compile time inside the engine.
//!
//! All fields carry sane finite defaults. Rates are in percent unless the
//! field name says otherwise (`equityWeight`/`debtWeight` are fractions,
//! `spotRate`/`forwardRate` are FX quotes, `timeToExpiry` is in years).

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Named numeric inputs shared across all 36 formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    // Quantitative Methods
    pub sample_size: f64,
    pub r_squared: f64,
    pub num_indep_vars: f64,
    pub alpha: f64,
    pub test_statistic: f64,
    pub critical_value: f64,
    pub p_value: f64,

    // Economics
    pub spot_rate: f64,
    pub forward_rate: f64,
    pub domestic_rate: f64,
    pub foreign_rate: f64,
    pub inflation_domestic: f64,
    pub inflation_foreign: f64,
    pub time_horizon: f64,

    // Financial Statement Analysis
    pub net_income: f64,
    pub total_assets: f64,
    pub shareholder_equity: f64,
    pub total_debt: f64,
    pub revenue: f64,
    pub beginning_equity: f64,
    pub dividends_paid: f64,
    pub cfo: f64,
    pub working_capital: f64,

    // Corporate Finance
    pub current_dividend: f64,
    pub dividend_growth_rate: f64,
    pub required_return: f64,
    pub retention_ratio: f64,
    pub roe: f64,
    pub payout_ratio: f64,
    pub equity_weight: f64,
    pub debt_weight: f64,
    pub cost_of_debt: f64,
    pub tax_rate: f64,

    // Equity Valuation
    pub eps: f64,
    pub pe_ratio: f64,
    pub book_value_per_share: f64,
    pub price_to_book: f64,
    pub terminal_growth_rate: f64,

    // Fixed Income
    pub face_value: f64,
    pub coupon_rate: f64,
    pub ytm: f64,
    pub time_to_maturity: f64,
    pub frequency: f64,
    pub current_price: f64,

    // Derivatives
    pub spot_price: f64,
    pub strike_price: f64,
    pub time_to_expiry: f64,
    pub volatility: f64,
    pub risk_free_rate: f64,
    pub dividend_yield: f64,

    // Alternatives
    pub nav: f64,
    pub market_price: f64,
    pub noi: f64,
    pub cap_rate: f64,

    // Portfolio Management
    pub portfolio_return: f64,
    pub benchmark_return: f64,
    pub risk_free_return: f64,
    pub tracking_error: f64,
    pub beta: f64,
    pub portfolio_std_dev: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            sample_size: 100.0,
            r_squared: 0.75,
            num_indep_vars: 3.0,
            alpha: 0.05,
            test_statistic: 2.5,
            critical_value: 1.96,
            p_value: 0.012,

            spot_rate: 1.2000,
            forward_rate: 1.2050,
            domestic_rate: 3.0,
            foreign_rate: 2.0,
            inflation_domestic: 2.5,
            inflation_foreign: 1.8,
            time_horizon: 1.0,

            net_income: 1_000_000.0,
            total_assets: 10_000_000.0,
            shareholder_equity: 6_000_000.0,
            total_debt: 3_000_000.0,
            revenue: 5_000_000.0,
            beginning_equity: 5_500_000.0,
            dividends_paid: 250_000.0,
            cfo: 1_200_000.0,
            working_capital: 800_000.0,

            current_dividend: 2.00,
            dividend_growth_rate: 8.0,
            required_return: 12.0,
            retention_ratio: 60.0,
            roe: 15.0,
            payout_ratio: 40.0,
            equity_weight: 0.6,
            debt_weight: 0.4,
            cost_of_debt: 5.0,
            tax_rate: 25.0,

            eps: 5.00,
            pe_ratio: 18.0,
            book_value_per_share: 25.0,
            price_to_book: 1.8,
            terminal_growth_rate: 3.0,

            face_value: 1000.0,
            coupon_rate: 5.0,
            ytm: 4.0,
            time_to_maturity: 10.0,
            frequency: 2.0,
            current_price: 1081.0,

            spot_price: 100.0,
            strike_price: 105.0,
            time_to_expiry: 0.25,
            volatility: 25.0,
            risk_free_rate: 3.0,
            dividend_yield: 2.0,

            nav: 50.0,
            market_price: 52.0,
            noi: 1_000_000.0,
            cap_rate: 8.0,

            portfolio_return: 10.0,
            benchmark_return: 8.0,
            risk_free_return: 3.0,
            tracking_error: 2.0,
            beta: 1.2,
            portfolio_std_dev: 15.0,
        }
    }
}

impl Inputs {
    /// Set a field by its external (camelCase) name.
    ///
    /// Used by the CLI's `--set name=value` flags. Non-finite values are
    /// rejected up front so evaluators can assume finite inputs.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), EvalError> {
        if !value.is_finite() {
            return Err(EvalError::invalid_input(
                "value",
                format!("`{name}` must be finite, got {value}"),
            ));
        }

        let slot = match name {
            "sampleSize" => &mut self.sample_size,
            "rSquared" => &mut self.r_squared,
            "numIndepVars" => &mut self.num_indep_vars,
            "alpha" => &mut self.alpha,
            "testStatistic" => &mut self.test_statistic,
            "criticalValue" => &mut self.critical_value,
            "pValue" => &mut self.p_value,

            "spotRate" => &mut self.spot_rate,
            "forwardRate" => &mut self.forward_rate,
            "domesticRate" => &mut self.domestic_rate,
            "foreignRate" => &mut self.foreign_rate,
            "inflationDomestic" => &mut self.inflation_domestic,
            "inflationForeign" => &mut self.inflation_foreign,
            "timeHorizon" => &mut self.time_horizon,

            "netIncome" => &mut self.net_income,
            "totalAssets" => &mut self.total_assets,
            "shareholderEquity" => &mut self.shareholder_equity,
            "totalDebt" => &mut self.total_debt,
            "revenue" => &mut self.revenue,
            "beginningEquity" => &mut self.beginning_equity,
            "dividendsPaid" => &mut self.dividends_paid,
            "cfo" => &mut self.cfo,
            "workingCapital" => &mut self.working_capital,

            "currentDividend" => &mut self.current_dividend,
            "dividendGrowthRate" => &mut self.dividend_growth_rate,
            "requiredReturn" => &mut self.required_return,
            "retentionRatio" => &mut self.retention_ratio,
            "roe" => &mut self.roe,
            "payoutRatio" => &mut self.payout_ratio,
            "equityWeight" => &mut self.equity_weight,
            "debtWeight" => &mut self.debt_weight,
            "costOfDebt" => &mut self.cost_of_debt,
            "taxRate" => &mut self.tax_rate,

            "eps" => &mut self.eps,
            "peRatio" => &mut self.pe_ratio,
            "bookValuePerShare" => &mut self.book_value_per_share,
            "priceToBook" => &mut self.price_to_book,
            "terminalGrowthRate" => &mut self.terminal_growth_rate,

            "faceValue" => &mut self.face_value,
            "couponRate" => &mut self.coupon_rate,
            "ytm" => &mut self.ytm,
            "timeToMaturity" => &mut self.time_to_maturity,
            "frequency" => &mut self.frequency,
            "currentPrice" => &mut self.current_price,

            "spotPrice" => &mut self.spot_price,
            "strikePrice" => &mut self.strike_price,
            "timeToExpiry" => &mut self.time_to_expiry,
            "volatility" => &mut self.volatility,
            "riskFreeRate" => &mut self.risk_free_rate,
            "dividendYield" => &mut self.dividend_yield,

            "nav" => &mut self.nav,
            "marketPrice" => &mut self.market_price,
            "noi" => &mut self.noi,
            "capRate" => &mut self.cap_rate,

            "portfolioReturn" => &mut self.portfolio_return,
            "benchmarkReturn" => &mut self.benchmark_return,
            "riskFreeReturn" => &mut self.risk_free_return,
            "trackingError" => &mut self.tracking_error,
            "beta" => &mut self.beta,
            "portfolioStdDev" => &mut self.portfolio_std_dev,

            _ => {
                return Err(EvalError::invalid_input(
                    "name",
                    format!("unknown input field `{name}`"),
                ));
            }
        };

        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_by_external_name() {
        let mut inputs = Inputs::default();
        inputs.set("rSquared", 0.9).unwrap();
        assert_eq!(inputs.r_squared, 0.9);
        inputs.set("bookValuePerShare", 30.0).unwrap();
        assert_eq!(inputs.book_value_per_share, 30.0);
    }

    #[test]
    fn set_rejects_unknown_field_and_non_finite() {
        let mut inputs = Inputs::default();
        assert!(inputs.set("notAField", 1.0).is_err());
        assert!(inputs.set("rSquared", f64::NAN).is_err());
    }

    #[test]
    fn json_round_trip_uses_camel_case() {
        let inputs = Inputs::default();
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"sampleSize\":100.0"));
        let back: Inputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
