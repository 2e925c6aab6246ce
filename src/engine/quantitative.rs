//! Quantitative Methods evaluators: regression fit statistics and the t-test.

use crate::domain::{Assumptions, Evaluation, Inputs};
use crate::error::EvalError;

/// Adjusted R² = 1 - (1-R²)(n-1)/(n-k-1).
///
/// Requires `n > k + 1`; otherwise the penalty denominator is zero or
/// negative and the statistic is undefined.
pub(crate) fn adjusted_r2(r_squared: f64, n: f64, k: f64) -> Result<f64, EvalError> {
    if n <= k + 1.0 {
        return Err(EvalError::invalid_input(
            "sampleSize",
            format!("adjusted R² requires n > k+1 (n={n}, k={k})"),
        ));
    }
    Ok(1.0 - ((1.0 - r_squared) * (n - 1.0)) / (n - k - 1.0))
}

pub fn multiple_regression(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let r2 = inputs.r_squared;
    let n = inputs.sample_size;
    let k = inputs.num_indep_vars;
    let adj = adjusted_r2(r2, n, k)?;

    Ok(Evaluation {
        calculation: format!("Adjusted R² = 1 - [(1-{r2})×({n}-1)/({n}-{k}-1)]"),
        result: format!("{adj:.4}"),
        interpretation: format!(
            "The model explains {:.1}% of variance. Adjusted R² of {adj:.4} accounts for the {k} variables used.",
            r2 * 100.0
        ),
    })
}

pub fn adjusted_r_squared(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let r2 = inputs.r_squared;
    let n = inputs.sample_size;
    let k = inputs.num_indep_vars;
    let adj = adjusted_r2(r2, n, k)?;

    let (relation, reading) = if adj < r2 {
        ("lower than", "reflecting the penalty for additional variables")
    } else {
        ("equal to", "suggesting the variables add explanatory power")
    };
    Ok(Evaluation {
        calculation: format!("1 - [(1-{r2})×({n}-1)/({n}-{k}-1)]"),
        result: format!("{adj:.4}"),
        interpretation: format!(
            "Adjusted R² of {adj:.4} is {relation} the unadjusted R² of {r2}, {reading}."
        ),
    })
}

/// Compare the t-statistic against the critical value.
///
/// By default the raw signed statistic is compared (a one-sided
/// convention); `Assumptions::two_sided_t_test` switches to the two-sided
/// `|t|` comparison.
pub fn t_test(assumptions: &Assumptions, inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let t = inputs.test_statistic;
    let critical = inputs.critical_value;
    let stat = if assumptions.two_sided_t_test { t.abs() } else { t };
    let reject = stat > critical;

    let (decision, verb, cmp) = if reject {
        ("Reject H₀", "reject", ">")
    } else {
        ("Fail to Reject H₀", "fail to reject", "<")
    };
    Ok(Evaluation {
        calculation: format!("t = {t}, Critical Value = ±{critical}"),
        result: decision.to_string(),
        interpretation: format!(
            "With t-statistic = {t} {cmp} {critical}, we {verb} the null hypothesis at α = {}.",
            inputs.alpha
        ),
    })
}

pub fn f_statistic(inputs: &Inputs) -> Result<Evaluation, EvalError> {
    let r2 = inputs.r_squared;
    let n = inputs.sample_size;
    let k = inputs.num_indep_vars;
    if k < 1.0 {
        return Err(EvalError::invalid_input(
            "numIndepVars",
            "F-statistic requires at least one independent variable",
        ));
    }
    if n <= k + 1.0 {
        return Err(EvalError::invalid_input(
            "sampleSize",
            format!("F-statistic requires n > k+1 (n={n}, k={k})"),
        ));
    }
    if r2 >= 1.0 {
        return Err(EvalError::invalid_input(
            "rSquared",
            "F-statistic is undefined for R² ≥ 1",
        ));
    }

    let f = (r2 / k) / ((1.0 - r2) / (n - k - 1.0));
    Ok(Evaluation {
        calculation: format!("F = [{r2}/{k}] / [(1-{r2})/({n}-{k}-1)]"),
        result: format!("{f:.4}"),
        interpretation: format!(
            "F-statistic of {f:.4} tests joint significance of all {k} independent variables."
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_r2_default_inputs() {
        // 1 - (0.25 × 99 / 96) = 0.7421875
        let adj = adjusted_r2(0.75, 100.0, 3.0).unwrap();
        assert!((adj - 0.7421875).abs() < 1e-12);
    }

    #[test]
    fn adjusted_r2_penalizes_added_variables() {
        for n in [20.0, 50.0, 100.0, 500.0] {
            for k in [1.0, 3.0, 10.0] {
                for r2 in [0.0, 0.3, 0.75, 0.99] {
                    if n <= k + 1.0 {
                        continue;
                    }
                    let adj = adjusted_r2(r2, n, k).unwrap();
                    assert!(
                        adj <= r2,
                        "adjusted R² should not exceed R² (n={n}, k={k}, r2={r2})"
                    );
                }
            }
        }
        // Equality only with zero regressors.
        let adj = adjusted_r2(0.75, 100.0, 0.0).unwrap();
        assert_eq!(adj, 0.75);
    }

    #[test]
    fn adjusted_r2_rejects_degenerate_sample() {
        assert!(adjusted_r2(0.75, 4.0, 3.0).is_err());
        assert!(adjusted_r2(0.75, 3.0, 3.0).is_err());
    }

    #[test]
    fn f_statistic_default_inputs() {
        // (0.75/3) / (0.25/96) = 96
        let out = f_statistic(&Inputs::default()).unwrap();
        assert_eq!(out.result, "96.0000");
    }

    #[test]
    fn t_test_one_sided_keeps_signed_comparison() {
        let mut inputs = Inputs::default();
        inputs.test_statistic = -3.0;

        // Default (one-sided) behavior: a large negative t does not reject.
        let one_sided = t_test(&Assumptions::default(), &inputs).unwrap();
        assert_eq!(one_sided.result, "Fail to Reject H₀");

        // Two-sided convention compares |t|.
        let assumptions = Assumptions {
            two_sided_t_test: true,
            ..Assumptions::default()
        };
        let two_sided = t_test(&assumptions, &inputs).unwrap();
        assert_eq!(two_sided.result, "Reject H₀");
    }

    #[test]
    fn t_test_default_rejects() {
        let out = t_test(&Assumptions::default(), &Inputs::default()).unwrap();
        assert_eq!(out.result, "Reject H₀");
        assert_eq!(out.calculation, "t = 2.5, Critical Value = ±1.96");
    }
}
