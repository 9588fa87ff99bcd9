//! Descriptive statistics used by the moment estimator.
//!
//! All functions handle edge cases explicitly and return `None` rather
//! than propagating NaN.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Central moments**: two-pass; the mean is computed first, then the
//!   second and third central moments are accumulated in one sweep.
//!
//! Variance and skewness here are the **population** (biased) forms,
//! i.e. with denominator `n`. These are the moments the method-of-moments
//! inversion in [`crate::estimate`] is defined against.

use crate::error::SkewFitError;

/// Computes the arithmetic mean using compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use skewfit::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use skewfit::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let sum2: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Some(sum2 / data.len() as f64)
}

/// Computes the population standard deviation.
///
/// Equivalent to `sqrt(population_variance(data))`.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Computes the population skewness g₁ = m₃ / m₂^{3/2}.
///
/// This is the mean of the cubed standardized deviations,
/// `(1/n) Σ ((xᵢ − x̄)/σ)³`, with no small-sample bias correction.
/// It matches `scipy.stats.skew(bias=True)`.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, has zero variance, or
///   its moments overflow `f64`.
///
/// # Examples
/// ```
/// use skewfit::stats::population_skewness;
/// assert!(population_skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-15);
/// assert!(population_skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// ```
pub fn population_skewness(data: &[f64]) -> Option<f64> {
    Moments::of(data).ok().map(|m| m.skewness)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improved Kahan summation that also handles an addend larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// First three population moments of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub skewness: f64,
}

impl Moments {
    /// Two-pass computation.
    ///
    /// Finite inputs can still overflow: the sum in the mean, or the squared
    /// deviations in the variance. That is reported as
    /// [`SkewFitError::MomentOverflow`], never as zero variance.
    pub(crate) fn of(data: &[f64]) -> Result<Self, SkewFitError> {
        if data.is_empty() {
            return Err(SkewFitError::TooFewObservations {
                required: 1,
                actual: 0,
            });
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(SkewFitError::NonFiniteObservation { index, value });
        }
        let nf = data.len() as f64;
        let mean = kahan_sum(data) / nf;
        if !mean.is_finite() {
            return Err(SkewFitError::MomentOverflow { moment: "mean" });
        }
        let variance = data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf;
        if !variance.is_finite() {
            return Err(SkewFitError::MomentOverflow { moment: "variance" });
        }
        if variance == 0.0 {
            return Err(SkewFitError::ZeroVariance);
        }
        let sd = variance.sqrt();
        let skewness = data
            .iter()
            .map(|&x| {
                let z = (x - mean) / sd;
                z * z * z
            })
            .sum::<f64>()
            / nf;
        if !skewness.is_finite() {
            return Err(SkewFitError::MomentOverflow { moment: "skewness" });
        }
        Ok(Self {
            mean,
            variance,
            skewness,
        })
    }
}
