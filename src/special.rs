//! Special mathematical functions.
//!
//! A closed-form error function approximation and the standard normal
//! kernel built on top of it. No special-function library is used.

/// 1/√(2π) ≈ 0.3989422804014327
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

// ============================================================================
// Error Function
// ============================================================================

/// Rational argument constant `p` in `t = 1/(1 + p·|x|)`.
const ERF_P: f64 = 0.47047;

/// Polynomial coefficients a₁, a₂, a₃ (lowest power of `t` first).
const ERF_A1: f64 = 0.3480242;
const ERF_A2: f64 = -0.0958798;
const ERF_A3: f64 = 0.7478556;

/// Maximum absolute error of [`erf_approx`] over the real line.
pub const ERF_MAX_ABS_ERROR: f64 = 2.5e-5;

/// Closed-form approximation of the Gauss error function erf(x).
///
/// # Algorithm
/// Abramowitz & Stegun formula 7.1.25. With `u = |x|` and
/// `t = 1/(1 + p·u)`:
///
/// ```text
/// erf(u) ≈ 1 − (a₁t + a₂t² + a₃t³) · exp(−u²)
/// ```
///
/// evaluated in Horner form, with the sign restored afterwards since erf
/// is odd.
///
/// Reference: Abramowitz & Stegun (1964), *Handbook of Mathematical
/// Functions*, formula 7.1.25, p. 299.
///
/// # Accuracy
/// Maximum absolute error ≤ 2.5 × 10⁻⁵ ([`ERF_MAX_ABS_ERROR`]).
///
/// # Examples
/// ```
/// use skewfit::special::erf_approx;
/// assert_eq!(erf_approx(0.0), 0.0);
/// assert!((erf_approx(1.0) - 0.8427007929).abs() < 2.5e-5);
/// assert_eq!(erf_approx(-1.0), -erf_approx(1.0));
/// ```
pub fn erf_approx(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    let u = x.abs();

    let t = 1.0 / (1.0 + ERF_P * u);
    let poly = t * (ERF_A1 + t * (ERF_A2 + t * ERF_A3));

    sign * (1.0 - poly * (-u * u).exp())
}

// ============================================================================
// Standard Normal Kernel
// ============================================================================

/// Standard normal PDF φ(x) = (1/√(2π)) exp(−x²/2).
///
/// # Examples
/// ```
/// use skewfit::special::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF Φ(x) = ½(1 + erf(x/√2)).
///
/// Inherits the absolute error bound of [`erf_approx`], halved.
///
/// # Examples
/// ```
/// use skewfit::special::standard_normal_cdf;
/// assert_eq!(standard_normal_cdf(0.0), 0.5);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }
    0.5 * (1.0 + erf_approx(x * std::f64::consts::FRAC_1_SQRT_2))
}

/// Applies [`erf_approx`] to every element.
pub fn erf_approx_slice(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| erf_approx(x)).collect()
}

/// Applies [`standard_normal_pdf`] to every element.
pub fn standard_normal_pdf_slice(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| standard_normal_pdf(x)).collect()
}

/// Applies [`standard_normal_cdf`] to every element.
pub fn standard_normal_cdf_slice(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| standard_normal_cdf(x)).collect()
}

// ============================================================================
// Tests
// ============================================================================
