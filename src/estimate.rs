//! Method-of-moments estimation of skew-normal parameters.
//!
//! Closed-form inversion from the sample's population mean, variance and
//! skewness to (α, ω, ξ). There is no iterative search.
//!
//! # Algorithm
//! 1. Compute mean, population variance and population skewness γ.
//! 2. Clip γ to ±[`MAX_SKEWNESS`].
//! 3. Invert the skewness equation for δ:
//!    ```text
//!    |δ| = √( (π/2) · |γ|^{2/3} / (|γ|^{2/3} + ((4 − π)/2)^{2/3}) )
//!    ```
//!    with the sign of γ (δ = 0 when γ = 0).
//! 4. Clip δ to ±[`MAX_DELTA`].
//! 5. α = δ/√(1 − δ²), ω = √(σ²/(1 − 2δ²/π)), ξ = x̄ − ωδ√(2/π).
//!
//! Both clips are applied in that order and silently bias the estimate
//! for samples more skewed than the family supports. Each clip that fires
//! is logged at `warn` and recorded in [`FitReport`].
//!
//! Reference: Azzalini (2013), *The Skew-Normal and Related Families*,
//! §3.1.1 (method of moments).

use std::f64::consts::{FRAC_2_PI, PI};

use crate::distributions::SkewNormal;
use crate::error::SkewFitError;
use crate::sample::Sample;

/// Upper bound on |skewness| accepted by the estimator:
/// `0.995 · √(4 − π) · √(2/π) · (1 − 2/π)^{−3/2}`.
///
/// Skewness beyond this is clamped before δ is computed. Samples with
/// |skewness| between roughly 1 and this bound already drive δ past
/// [`MAX_DELTA`], so they are caught by the second clip instead.
#[allow(clippy::excessive_precision)]
pub const MAX_SKEWNESS: f64 = 3.357_901_219_069_619_4;

/// Upper bound on |δ|; keeps α = δ/√(1 − δ²) finite.
pub const MAX_DELTA: f64 = 0.9995;

/// Parameters plus diagnostics from one fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    /// The fitted distribution.
    pub params: SkewNormal,
    /// Population skewness of the sample, before clipping.
    pub raw_skewness: f64,
    /// Skewness actually used for the δ inversion.
    pub skewness: f64,
    /// δ after clipping.
    pub delta: f64,
    /// `true` if |raw skewness| exceeded [`MAX_SKEWNESS`].
    pub skewness_clipped: bool,
    /// `true` if the inverted δ reached ±[`MAX_DELTA`].
    pub delta_clipped: bool,
}

impl FitReport {
    /// `true` if either safety clip changed the estimate.
    pub fn was_clipped(&self) -> bool {
        self.skewness_clipped || self.delta_clipped
    }
}

/// Fits a skew-normal to raw observations.
///
/// # Errors
/// Any [`Sample::new`] validation error: fewer than two values, a
/// non-finite value, or zero variance.
///
/// # Examples
/// ```
/// use skewfit::estimate::fit_skew_normal;
/// let params = fit_skew_normal(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(params.alpha(), 0.0);
/// assert!((params.omega() - 2.0_f64.sqrt()).abs() < 1e-12);
/// assert!((params.xi() - 3.0).abs() < 1e-12);
///
/// assert!(fit_skew_normal(&[7.0, 7.0, 7.0]).is_err());
/// ```
pub fn fit_skew_normal(data: &[f64]) -> Result<SkewNormal, SkewFitError> {
    let sample = Sample::new(data)?;
    fit_sample(&sample)
}

/// Fits a skew-normal to an already validated sample.
///
/// # Errors
/// Returns [`SkewFitError::InvalidParameters`] only if the fitted scale or
/// location overflows `f64` (variance near `f64::MAX`).
pub fn fit_sample(sample: &Sample<'_>) -> Result<SkewNormal, SkewFitError> {
    fit_report(sample).map(|r| r.params)
}

/// Fits a skew-normal and returns the intermediate diagnostics.
///
/// # Errors
/// Same as [`fit_sample`].
///
/// # Examples
/// ```
/// use skewfit::estimate::fit_report;
/// use skewfit::sample::Sample;
/// // Nineteen zeros and a one: skewness ≈ 4.13, beyond the admissible range.
/// let mut data = vec![0.0; 19];
/// data.push(1.0);
/// let report = fit_report(&Sample::new(&data).unwrap()).unwrap();
/// assert!(report.skewness_clipped && report.delta_clipped);
/// ```
pub fn fit_report(sample: &Sample<'_>) -> Result<FitReport, SkewFitError> {
    let moments = sample.moments();
    let raw_skewness = moments.skewness;

    let skewness = raw_skewness.clamp(-MAX_SKEWNESS, MAX_SKEWNESS);
    let skewness_clipped = skewness != raw_skewness;
    if skewness_clipped {
        tracing::warn!(
            raw = raw_skewness,
            clipped = skewness,
            "sample skewness outside admissible range; clipping"
        );
    }

    let raw_delta = skewness_to_delta(skewness);
    let delta = raw_delta.clamp(-MAX_DELTA, MAX_DELTA);
    let delta_clipped = delta != raw_delta;
    if delta_clipped {
        tracing::warn!(raw = raw_delta, clipped = delta, "delta at boundary; clipping");
    }

    let alpha = delta / (1.0 - delta * delta).sqrt();
    let omega = (moments.variance / (1.0 - 2.0 * delta * delta / PI)).sqrt();
    let xi = moments.mean - omega * delta * FRAC_2_PI.sqrt();

    let params = SkewNormal::new(alpha, omega, xi)?;

    tracing::debug!(alpha, omega, xi, skewness, delta, n = sample.len(), "fitted skew-normal");

    Ok(FitReport {
        params,
        raw_skewness,
        skewness,
        delta,
        skewness_clipped,
        delta_clipped,
    })
}

/// Closed-form δ from (already clipped) skewness; `sign(0) = 0`.
fn skewness_to_delta(skewness: f64) -> f64 {
    if skewness == 0.0 {
        return 0.0;
    }
    let g = skewness.abs().powf(2.0 / 3.0);
    let c = ((4.0 - PI) / 2.0).powf(2.0 / 3.0);
    skewness.signum() * (PI / 2.0 * g / (g + c)).sqrt()
}

// ============================================================================
// Tests
// ============================================================================
