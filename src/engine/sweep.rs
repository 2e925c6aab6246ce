//! Sensitivity sweeps for the handful of formulas worth charting.
//!
//! Each generator varies a single input over a fixed range and records one or
//! more series at each step. Steps are produced by integer index
//! (`x = lo + step·i`) rather than float accumulation, so series length and
//! ordering never depend on rounding drift. Values are rounded to a fixed
//! number of decimals to keep exports and plots stable.

use crate::domain::{Formula, Inputs, SweepPoint, SweepSeries};
use crate::error::EvalError;

use super::{derivatives, economics, equity, fixed_income, quantitative};

fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn steps(lo: f64, hi: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((hi - lo) / step).round() as u32;
    (0..=count).map(move |i| lo + step * f64::from(i))
}

/// Produce the sweep series for `formula`, or `None` when it defines no sweep.
pub fn generate(formula: Formula, inputs: &Inputs) -> Result<Option<SweepSeries>, EvalError> {
    match formula {
        Formula::MultipleRegression => sample_size_sweep(inputs).map(Some),
        Formula::Ppp => inflation_sweep(inputs).map(Some),
        Formula::GordonGrowthModel => growth_sweep(inputs).map(Some),
        Formula::BondPricing => yield_sweep(inputs).map(Some),
        Formula::BlackScholesCall => spot_sweep(inputs).map(Some),
        Formula::InformationRatio => tracking_error_sweep(inputs).map(Some),
        _ => Ok(None),
    }
}

/// Adjusted R² as the sample grows, against the unadjusted level.
fn sample_size_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let k = inputs.num_indep_vars;
    let mut points = Vec::new();
    for n in steps(50.0, 200.0, 10.0) {
        let adj = quantitative::adjusted_r2(inputs.r_squared, n, k)?;
        points.push(SweepPoint {
            x: n,
            y: vec![round(adj, 4), inputs.r_squared],
        });
    }
    Ok(SweepSeries {
        x_label: "sampleSize",
        y_labels: vec!["adjustedR2", "unadjustedR2"],
        points,
    })
}

/// Expected PPP exchange rate as foreign inflation moves around the fixed
/// domestic rate, with the current spot rate as the flat reference line.
fn inflation_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let domestic = inputs.inflation_domestic;
    let mut points = Vec::new();
    for diff in steps(-3.0, 3.0, 0.2) {
        let diff = round(diff, 2);
        let expected =
            economics::ppp_expected_rate(inputs.spot_rate, domestic, domestic + diff)?;
        points.push(SweepPoint {
            x: diff,
            y: vec![round(expected, 4), inputs.spot_rate],
        });
    }
    Ok(SweepSeries {
        x_label: "inflationDifference",
        y_labels: vec!["expectedExchangeRate", "currentRate"],
        points,
    })
}

/// Gordon value across growth rates, with the value scaled by 20× the
/// current dividend as a unitless sensitivity alongside.
///
/// Steps at or above the required return are skipped; the model diverges
/// there, so the series simply ends early rather than charting ±∞.
fn growth_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let r = inputs.required_return;
    let d0 = inputs.current_dividend;
    let mut points = Vec::new();
    for g in steps(1.0, 10.0, 0.5) {
        let g = round(g, 2);
        if g >= r {
            continue;
        }
        let value = equity::gordon_value(d0, g, r)?;
        let sensitivity = value / (d0 * 20.0);
        points.push(SweepPoint {
            x: g,
            y: vec![round(value, 2), round(sensitivity, 2)],
        });
    }
    Ok(SweepSeries {
        x_label: "growthRate",
        y_labels: vec!["stockValue", "sensitivity"],
        points,
    })
}

/// Bond price across yields, with face value as the par reference line.
fn yield_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let mut points = Vec::new();
    for ytm in steps(1.0, 8.0, 0.25) {
        let ytm = round(ytm, 2);
        let price = fixed_income::price_bond(
            inputs.face_value,
            inputs.coupon_rate,
            ytm,
            inputs.time_to_maturity,
            inputs.frequency,
        )?;
        points.push(SweepPoint {
            x: ytm,
            y: vec![round(price, 2), inputs.face_value],
        });
    }
    Ok(SweepSeries {
        x_label: "yield",
        y_labels: vec!["price", "parValue"],
        points,
    })
}

/// Call value across spot prices, split into intrinsic and time value.
fn spot_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let mut points = Vec::new();
    for spot in steps(80.0, 120.0, 2.0) {
        let (d1, d2) = derivatives::d1_d2(
            spot,
            inputs.strike_price,
            inputs.volatility,
            inputs.time_to_expiry,
            inputs.risk_free_rate,
        )?;
        let call = derivatives::call_price(
            spot,
            inputs.strike_price,
            inputs.risk_free_rate,
            inputs.time_to_expiry,
            d1,
            d2,
        );
        let intrinsic = (spot - inputs.strike_price).max(0.0);
        points.push(SweepPoint {
            x: spot,
            y: vec![
                round(call, 2),
                round(intrinsic, 2),
                round(call - intrinsic, 2),
            ],
        });
    }
    Ok(SweepSeries {
        x_label: "spotPrice",
        y_labels: vec!["optionValue", "intrinsicValue", "timeValue"],
        points,
    })
}

/// Information ratio as tracking error widens, with the 0.5 skill threshold.
fn tracking_error_sweep(inputs: &Inputs) -> Result<SweepSeries, EvalError> {
    let active = inputs.portfolio_return - inputs.benchmark_return;
    let mut points = Vec::new();
    for te in steps(0.5, 8.0, 0.5) {
        let te = round(te, 2);
        points.push(SweepPoint {
            x: te,
            y: vec![round(active / te, 3), 0.5],
        });
    }
    Ok(SweepSeries {
        x_label: "trackingError",
        y_labels: vec!["informationRatio", "threshold"],
        points,
    })
}
