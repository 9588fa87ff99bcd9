//! Validated observation samples and optional preparation.
//!
//! [`Sample`] is the contract every estimator input satisfies: at least
//! two finite observations with nonzero variance. It borrows the caller's
//! data and never mutates it.
//!
//! [`prepare_sample`] performs the usual cleaning before a fit: dropping
//! non-positive codes and trimming high outliers. It is optional;
//! callers with already-clean data go straight to [`Sample::new`].

use serde::{Deserialize, Serialize};

use crate::error::SkewFitError;
use crate::stats::{self, Moments};

// ============================================================================
// Validated Sample
// ============================================================================

/// A borrowed, validated sample of observations.
///
/// # Invariants
/// - `len() >= Sample::MIN_LEN`
/// - every value is finite
/// - the population variance is nonzero
///
/// # Examples
/// ```
/// use skewfit::sample::Sample;
/// let data = [1.0, 2.0, 4.0];
/// let sample = Sample::new(&data).unwrap();
/// assert_eq!(sample.len(), 3);
///
/// assert!(Sample::new(&[5.0, 5.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    values: &'a [f64],
    moments: Moments,
}

impl<'a> Sample<'a> {
    /// Minimum number of observations.
    pub const MIN_LEN: usize = 2;

    /// Validates `values` against the sample contract.
    ///
    /// # Errors
    /// - [`SkewFitError::TooFewObservations`] if fewer than two values.
    /// - [`SkewFitError::NonFiniteObservation`] for the first NaN/Inf.
    /// - [`SkewFitError::ZeroVariance`] if all values are identical.
    /// - [`SkewFitError::MomentOverflow`] if the mean or variance of
    ///   finite values exceeds the `f64` range.
    pub fn new(values: &'a [f64]) -> Result<Self, SkewFitError> {
        if values.len() < Self::MIN_LEN {
            return Err(SkewFitError::TooFewObservations {
                required: Self::MIN_LEN,
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(SkewFitError::NonFiniteObservation { index, value });
        }
        let moments = Moments::of(values)?;
        Ok(Self { values, moments })
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a valid sample holds at least two observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.moments.mean
    }

    /// Population variance (denominator `n`).
    pub fn variance(&self) -> f64 {
        self.moments.variance
    }

    /// Population skewness before any clipping.
    pub fn skewness(&self) -> f64 {
        self.moments.skewness
    }

    pub(crate) fn moments(&self) -> Moments {
        self.moments
    }
}

impl<'a> TryFrom<&'a [f64]> for Sample<'a> {
    type Error = SkewFitError;

    fn try_from(values: &'a [f64]) -> Result<Self, Self::Error> {
        Sample::new(values)
    }
}

impl<'a> TryFrom<&'a Vec<f64>> for Sample<'a> {
    type Error = SkewFitError;

    fn try_from(values: &'a Vec<f64>) -> Result<Self, Self::Error> {
        Sample::new(values)
    }
}

// ============================================================================
// Sample Preparation
// ============================================================================

/// Cleaning rules applied by [`prepare_sample`].
///
/// Defaults mirror the common results-table workflow: non-positive values
/// are missing-result codes, and anything at or beyond three standard
/// deviations above the mean is trimmed.
///
/// # Examples
/// ```
/// use skewfit::sample::TrimConfig;
/// let config = TrimConfig::new().max_stddevs(2.5).positive_only(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Drop values `<= 0`. Default: `true`.
    pub positive_only: bool,

    /// Keep only `x < mean + k·std`, computed after the positive filter.
    /// `None` disables trimming. Default: `Some(3.0)`.
    pub max_stddevs: Option<f64>,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            positive_only: true,
            max_stddevs: Some(3.0),
        }
    }
}

impl TrimConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// No filtering at all; only non-finite values are dropped.
    pub fn passthrough() -> Self {
        Self {
            positive_only: false,
            max_stddevs: None,
        }
    }

    /// Set whether non-positive values are dropped.
    pub fn positive_only(mut self, enabled: bool) -> Self {
        self.positive_only = enabled;
        self
    }

    /// Set the high-outlier threshold in standard deviations.
    pub fn max_stddevs(mut self, k: f64) -> Self {
        self.max_stddevs = Some(k);
        self
    }

    /// Disable high-outlier trimming.
    pub fn no_trim(mut self) -> Self {
        self.max_stddevs = None;
        self
    }

    /// Checks that the threshold, if set, is finite and positive.
    pub fn validate(&self) -> Result<(), SkewFitError> {
        if let Some(k) = self.max_stddevs {
            if !k.is_finite() || k <= 0.0 {
                return Err(SkewFitError::InvalidConfig(format!(
                    "max_stddevs must be finite and > 0, got {k}"
                )));
            }
        }
        Ok(())
    }
}

/// Cleans raw observations according to `config`.
///
/// Steps, in order:
/// 1. drop NaN/Inf;
/// 2. if `positive_only`, drop values `<= 0`;
/// 3. if `max_stddevs = Some(k)`, keep `x < mean + k·std` using the
///    population moments of what survived step 2. Skipped when those
///    values have zero spread.
///
/// Order is preserved. The result is not guaranteed to satisfy the
/// [`Sample`] contract; pass it to [`Sample::new`].
///
/// # Errors
/// Returns [`SkewFitError::InvalidConfig`] if `config` fails validation.
///
/// # Examples
/// ```
/// use skewfit::sample::{prepare_sample, TrimConfig};
/// let raw = [-1.0, 0.0, 10.0, 11.0, 12.0];
/// let kept = prepare_sample(&raw, &TrimConfig::new().no_trim()).unwrap();
/// assert_eq!(kept, vec![10.0, 11.0, 12.0]);
/// ```
pub fn prepare_sample(raw: &[f64], config: &TrimConfig) -> Result<Vec<f64>, SkewFitError> {
    config.validate()?;

    let filtered: Vec<f64> = raw
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .filter(|&x| !config.positive_only || x > 0.0)
        .collect();

    let kept = match config.max_stddevs {
        Some(k) => match (stats::mean(&filtered), stats::population_std_dev(&filtered)) {
            (Some(mean), Some(sd)) if sd > 0.0 => {
                let cutoff = mean + k * sd;
                filtered.into_iter().filter(|&x| x < cutoff).collect()
            }
            _ => filtered,
        },
        None => filtered,
    };

    tracing::debug!(
        raw = raw.len(),
        kept = kept.len(),
        dropped = raw.len() - kept.len(),
        "prepared sample"
    );
    Ok(kept)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prepared_is_subsequence(
            raw in proptest::collection::vec(-100.0_f64..1000.0, 0..80),
            k in 0.5_f64..5.0,
        ) {
            let kept = prepare_sample(&raw, &TrimConfig::new().max_stddevs(k)).unwrap();
            prop_assert!(kept.len() <= raw.len());
            prop_assert!(kept.iter().all(|&x| x > 0.0));
            let mut it = raw.iter();
            for x in &kept {
                prop_assert!(it.any(|y| y == x));
            }
        }

        #[test]
        fn valid_sample_has_positive_variance(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..50),
        ) {
            if let Ok(s) = Sample::new(&data) {
                prop_assert!(s.variance() > 0.0);
            }
        }
    }
}
