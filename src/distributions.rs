//! The skew-normal distribution.
//!
//! # Mathematical Definition
//! For shape α, scale ω > 0 and location ξ, with z = (x − ξ)/ω:
//!
//! - PDF: f(x) = (2/ω) · φ(z) · Φ(α·z)
//! - δ = α/√(1 + α²)
//! - Mean: ξ + ωδ√(2/π)
//! - Variance: ω²(1 − 2δ²/π)
//! - Skewness: ((4 − π)/2) · (δ√(2/π))³ / (1 − 2δ²/π)^{3/2}
//!
//! α = 0 recovers N(ξ, ω²). α = ±∞ is the (reflected) half-normal.
//!
//! Reference: Azzalini (1985), "A class of distributions which includes
//! the normal ones", *Scandinavian Journal of Statistics* 12(2).

use std::f64::consts::{FRAC_2_PI, PI};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SkewFitError;
use crate::special;

// ============================================================================
// Skew-Normal Distribution
// ============================================================================

/// Skew-normal distribution SN(ξ, ω, α).
///
/// Produced by [`crate::estimate::fit_sample`], consumed by density
/// evaluation and [`crate::random::sample_skew_normal`]. Immutable; the
/// constructor and deserialization both enforce the parameter invariants.
///
/// # Examples
/// ```
/// use skewfit::distributions::SkewNormal;
/// let sn = SkewNormal::new(0.0, 1.0, 0.0).unwrap();
/// // α = 0 is the standard normal.
/// assert!((sn.pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
/// assert!(SkewNormal::new(1.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSkewNormal")]
pub struct SkewNormal {
    alpha: f64,
    omega: f64,
    xi: f64,
}

#[derive(Deserialize)]
struct RawSkewNormal {
    alpha: f64,
    omega: f64,
    xi: f64,
}

impl TryFrom<RawSkewNormal> for SkewNormal {
    type Error = SkewFitError;

    fn try_from(raw: RawSkewNormal) -> Result<Self, Self::Error> {
        SkewNormal::new(raw.alpha, raw.omega, raw.xi)
    }
}

impl SkewNormal {
    /// Creates SN(ξ, ω, α).
    ///
    /// # Errors
    /// Returns [`SkewFitError::InvalidParameters`] if `alpha` is NaN,
    /// `omega` is not finite and positive, or `xi` is not finite.
    pub fn new(alpha: f64, omega: f64, xi: f64) -> Result<Self, SkewFitError> {
        if alpha.is_nan() {
            return Err(SkewFitError::InvalidParameters(
                "shape α must not be NaN".into(),
            ));
        }
        if !omega.is_finite() || omega <= 0.0 {
            return Err(SkewFitError::InvalidParameters(format!(
                "scale ω must be finite and > 0, got ω={omega}"
            )));
        }
        if !xi.is_finite() {
            return Err(SkewFitError::InvalidParameters(format!(
                "location ξ must be finite, got ξ={xi}"
            )));
        }
        Ok(Self { alpha, omega, xi })
    }

    /// Shape α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Scale ω.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Location ξ.
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// δ = α/√(1 + α²), in [−1, 1].
    pub fn delta(&self) -> f64 {
        shape_to_delta(self.alpha)
    }

    /// Mean = ξ + ωδ√(2/π).
    pub fn mean(&self) -> f64 {
        self.xi + self.omega * self.delta() * FRAC_2_PI.sqrt()
    }

    /// Variance = ω²(1 − 2δ²/π).
    pub fn variance(&self) -> f64 {
        let d = self.delta();
        self.omega * self.omega * (1.0 - 2.0 * d * d / PI)
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Population skewness of the distribution.
    pub fn skewness(&self) -> f64 {
        let mu_z = self.delta() * FRAC_2_PI.sqrt();
        let denom = (1.0 - mu_z * mu_z).powf(1.5);
        (4.0 - PI) / 2.0 * mu_z.powi(3) / denom
    }

    /// PDF: (2/ω) · φ(z) · Φ(α·z) with z = (x − ξ)/ω.
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.xi) / self.omega;
        // Keep Φ(±∞ · 0) = ½ instead of NaN at the mode of a half-normal.
        let az = if z == 0.0 { 0.0 } else { self.alpha * z };
        2.0 / self.omega * special::standard_normal_pdf(z) * special::standard_normal_cdf(az)
    }

    /// Evaluates [`SkewNormal::pdf`] at every point.
    pub fn pdf_slice(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// Draws `n` variates; see [`crate::random::sample_skew_normal`].
    pub fn sample_n<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let (u0, v) = crate::random::standard_normal_pairs(n, rng);
        crate::random::fold_transform(&u0, &v, self.delta(), self.xi, self.omega)
    }
}

/// δ = α/√(1 + α²), computed without overflow for large |α|.
pub(crate) fn shape_to_delta(alpha: f64) -> f64 {
    if alpha.is_infinite() {
        alpha.signum()
    } else {
        alpha / alpha.hypot(1.0)
    }
}

/// Skew-normal density at each point of `xs`.
///
/// # Errors
/// Returns [`SkewFitError::InvalidParameters`] under the same conditions
/// as [`SkewNormal::new`].
///
/// # Examples
/// ```
/// use skewfit::distributions::skew_normal_pdf;
/// let ys = skew_normal_pdf(&[-1.0, 0.0, 1.0], 4.0, 1.0, 0.0).unwrap();
/// assert!(ys[0] < ys[2]);
/// assert!(skew_normal_pdf(&[0.0], 1.0, -1.0, 0.0).is_err());
/// ```
pub fn skew_normal_pdf(xs: &[f64], alpha: f64, omega: f64, xi: f64) -> Result<Vec<f64>, SkewFitError> {
    Ok(SkewNormal::new(alpha, omega, xi)?.pdf_slice(xs))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn trapezoid(dist: &SkewNormal, lo: f64, hi: f64, steps: usize) -> f64 {
        let h = (hi - lo) / steps as f64;
        let mut sum = 0.5 * (dist.pdf(lo) + dist.pdf(hi));
        for i in 1..steps {
            sum += dist.pdf(lo + i as f64 * h);
        }
        sum * h
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(SkewNormal::new(f64::NAN, 1.0, 0.0).is_err());
        assert!(SkewNormal::new(1.0, 0.0, 0.0).is_err());
        assert!(SkewNormal::new(1.0, -2.0, 0.0).is_err());
        assert!(SkewNormal::new(1.0, f64::INFINITY, 0.0).is_err());
        assert!(SkewNormal::new(1.0, 1.0, f64::NAN).is_err());
        assert!(SkewNormal::new(f64::INFINITY, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_zero_shape_is_normal() {
        let sn = SkewNormal::new(0.0, 2.0, 5.0).unwrap();
        for &x in &[1.0, 4.0, 5.0, 6.5, 9.0] {
            let z: f64 = (x - 5.0) / 2.0;
            let expected = special::standard_normal_pdf(z) / 2.0;
            assert!((sn.pdf(x) - expected).abs() < 1e-15);
        }
        assert_eq!(sn.mean(), 5.0);
        assert!((sn.variance() - 4.0).abs() < 1e-15);
        assert_eq!(sn.skewness(), 0.0);
    }

    #[test]
    fn test_reflection() {
        // f(x; α) = f(2ξ − x; −α)
        let pos = SkewNormal::new(3.0, 1.5, 2.0).unwrap();
        let neg = SkewNormal::new(-3.0, 1.5, 2.0).unwrap();
        for &x in &[-1.0, 0.5, 2.0, 3.3, 6.0] {
            assert!((pos.pdf(x) - neg.pdf(4.0 - x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pdf_integrates_to_one() {
        for &(alpha, omega, xi) in &[(0.0, 1.0, 0.0), (4.0, 2.0, -3.0), (-7.5, 0.3, 10.0), (31.6, 0.5, 1.0)] {
            let sn = SkewNormal::new(alpha, omega, xi).unwrap();
            let area = trapezoid(&sn, xi - 12.0 * omega, xi + 12.0 * omega, 20_000);
            assert!((area - 1.0).abs() < 1e-4, "α={alpha}: area {area}");
        }
    }

    #[test]
    fn test_half_normal_limit() {
        let sn = SkewNormal::new(f64::INFINITY, 1.0, 0.0).unwrap();
        assert_eq!(sn.pdf(-0.5), 0.0);
        assert!((sn.pdf(0.0) - special::standard_normal_pdf(0.0)).abs() < 1e-15);
        assert!((sn.pdf(1.0) - 2.0 * special::standard_normal_pdf(1.0)).abs() < 1e-15);
        assert_eq!(sn.delta(), 1.0);
    }

    #[test]
    fn test_delta_large_shape() {
        let sn = SkewNormal::new(1e200, 1.0, 0.0).unwrap();
        assert!((sn.delta() - 1.0).abs() < 1e-15);
        let sn = SkewNormal::new(-1e200, 1.0, 0.0).unwrap();
        assert!((sn.delta() + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_moments_known_shape() {
        // α = 2 → δ = 2/√5
        let sn = SkewNormal::new(2.0, 2.0, 10.0).unwrap();
        let d = 2.0 / 5.0_f64.sqrt();
        assert!((sn.delta() - d).abs() < 1e-15);
        assert!((sn.mean() - (10.0 + 2.0 * d * (2.0 / PI).sqrt())).abs() < 1e-12);
        assert!((sn.skewness() - 0.4538).abs() < 1e-3);
        assert!((sn.std_dev() - sn.variance().sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_skew_normal_pdf_fn() {
        let xs = [-2.0, 0.0, 2.0];
        let ys = skew_normal_pdf(&xs, 1.5, 1.0, 0.0).unwrap();
        let sn = SkewNormal::new(1.5, 1.0, 0.0).unwrap();
        assert_eq!(ys, sn.pdf_slice(&xs));
        assert!(matches!(
            skew_normal_pdf(&xs, 1.0, 0.0, 0.0),
            Err(SkewFitError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_serde_validates() {
        let sn = SkewNormal::new(1.0, 2.0, 3.0).unwrap();
        let json = serde_json::to_string(&sn).unwrap();
        let back: SkewNormal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sn);
        let bad = r#"{"alpha": 1.0, "omega": -2.0, "xi": 3.0}"#;
        assert!(serde_json::from_str::<SkewNormal>(bad).is_err());
    }
}
