//! Standard-normal CDF via the Abramowitz–Stegun erf approximation.
//!
//! `Φ(x) = 0.5 (1 + erf(x / √2))`, with `erf` computed from the rational
//! approximation 7.1.26 of Abramowitz & Stegun (max absolute error ~1.5e-7).
//!
//! The approximation is load-bearing: every published reference value of this
//! calculator was produced with it, so option prices must use this `erf`, not
//! a library-exact error function. Swapping in an exact erf moves
//! Black-Scholes outputs in the 4th decimal.

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Error function, Abramowitz–Stegun rational approximation.
///
/// Odd by construction: `erf(-x) = -erf(x)` exactly.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Cumulative distribution function of the standard normal.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_at_zero_is_half() {
        // Within the approximation's own error bound, not exactly 0.5.
        assert!((normal_cdf(0.0) - 0.5).abs() < 1.5e-7);
    }

    #[test]
    fn cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 1.96, 3.0, 10.0] {
            let lo = normal_cdf(-x);
            let hi = normal_cdf(x);
            assert!(
                (lo - (1.0 - hi)).abs() < 1e-12,
                "symmetry violated at x={x}: {lo} vs {}",
                1.0 - hi
            );
        }
    }

    #[test]
    fn erf_matches_known_values() {
        // Reference values to 8 decimals; approximation is good to ~1.5e-7.
        let cases = [(0.5, 0.52049988), (1.0, 0.84270079), (2.0, 0.99532227)];
        for (x, want) in cases {
            assert!(
                (erf(x) - want).abs() < 1e-6,
                "erf({x}) = {}, want ~{want}",
                erf(x)
            );
        }
    }

    #[test]
    fn cdf_tails_saturate() {
        assert!(normal_cdf(8.0) > 0.999999);
        assert!(normal_cdf(-8.0) < 1e-6);
    }
}
