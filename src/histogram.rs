//! Equal-width histogram binning.
//!
//! Produces counts and normalized densities so an observed or simulated
//! sample can be compared against a fitted [`SkewNormal`] density.
//! Rendering is left to the caller.
//!
//! [`SkewNormal`]: crate::distributions::SkewNormal

use crate::error::SkewFitError;
use crate::stats;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 50;

/// Equal-width histogram over `[min, max]`.
///
/// Every bin is half-open `[lo, hi)` except the last, which is closed so
/// that `max` is counted.
///
/// # Examples
/// ```
/// use skewfit::histogram::Histogram;
/// let h = Histogram::new(&[0.0, 0.5, 1.0, 1.5, 2.0], 2).unwrap();
/// assert_eq!(h.counts(), &[2, 3]);
/// assert_eq!(h.bin_edges(), vec![0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    bin_width: f64,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Bins `data` into `bins` equal-width buckets spanning its range.
    ///
    /// If every value is identical, a single unit-width range starting at
    /// that value is used so that densities stay finite.
    ///
    /// # Errors
    /// - [`SkewFitError::InvalidConfig`] if `bins == 0`.
    /// - [`SkewFitError::TooFewObservations`] if `data` is empty.
    /// - [`SkewFitError::NonFiniteObservation`] for the first NaN/Inf.
    pub fn new(data: &[f64], bins: usize) -> Result<Self, SkewFitError> {
        if bins == 0 {
            return Err(SkewFitError::InvalidConfig(
                "histogram needs at least one bin".into(),
            ));
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(SkewFitError::NonFiniteObservation { index, value });
        }
        let (Some(lo), Some(hi)) = (stats::min(data), stats::max(data)) else {
            return Err(SkewFitError::TooFewObservations {
                required: 1,
                actual: 0,
            });
        };
        let span = if hi > lo { hi - lo } else { 1.0 };
        let bin_width = span / bins as f64;

        let mut counts = vec![0_u64; bins];
        for &x in data {
            let idx = (((x - lo) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self {
            min: lo,
            bin_width,
            counts,
            total: data.len() as u64,
        })
    }

    /// Bins with [`DEFAULT_BINS`] buckets.
    pub fn with_default_bins(data: &[f64]) -> Result<Self, SkewFitError> {
        Self::new(data, DEFAULT_BINS)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `bins() + 1` edges from the minimum to the upper bound.
    pub fn bin_edges(&self) -> Vec<f64> {
        (0..=self.bins())
            .map(|i| self.min + i as f64 * self.bin_width)
            .collect()
    }

    /// Midpoint of each bin.
    pub fn bin_centers(&self) -> Vec<f64> {
        (0..self.bins())
            .map(|i| self.min + (i as f64 + 0.5) * self.bin_width)
            .collect()
    }

    /// count / (total · width) per bin; sums to 1 when multiplied by width.
    pub fn densities(&self) -> Vec<f64> {
        let norm = self.total as f64 * self.bin_width;
        self.counts.iter().map(|&c| c as f64 / norm).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::SkewNormal;
    use crate::random::create_rng;

    #[test]
    fn test_basic_counts() {
        let h = Histogram::new(&[1.0, 2.0, 2.5, 3.9, 4.0], 3).unwrap();
        assert_eq!(h.bins(), 3);
        assert_eq!(h.total(), 5);
        assert!((h.bin_width() - 1.0).abs() < 1e-15);
        assert_eq!(h.counts(), &[1, 2, 2]);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let h = Histogram::new(&[0.0, 10.0], 10).unwrap();
        assert_eq!(h.counts()[0], 1);
        assert_eq!(h.counts()[9], 1);
    }

    #[test]
    fn test_constant_data() {
        let h = Histogram::new(&[3.0, 3.0, 3.0], 4).unwrap();
        assert_eq!(h.counts(), &[3, 0, 0, 0]);
        assert!((h.bin_width() - 0.25).abs() < 1e-15);
        assert!(h.densities().iter().all(|d| d.is_finite()));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Histogram::new(&[1.0], 0),
            Err(SkewFitError::InvalidConfig(_))
        ));
        assert!(matches!(
            Histogram::new(&[], 5),
            Err(SkewFitError::TooFewObservations { .. })
        ));
        assert!(matches!(
            Histogram::new(&[1.0, f64::NAN], 5),
            Err(SkewFitError::NonFiniteObservation { index: 1, .. })
        ));
    }

    #[test]
    fn test_edges_and_centers() {
        let h = Histogram::new(&[0.0, 4.0], 4).unwrap();
        assert_eq!(h.bin_edges(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(h.bin_centers(), vec![0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let data: Vec<f64> = (0..1000).map(|i| (i as f64).sqrt()).collect();
        let h = Histogram::with_default_bins(&data).unwrap();
        assert_eq!(h.bins(), DEFAULT_BINS);
        let mass: f64 = h.densities().iter().map(|d| d * h.bin_width()).sum();
        assert!((mass - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_simulated_density_tracks_pdf() {
        let dist = SkewNormal::new(3.0, 2.0, 0.0).unwrap();
        let xs = dist.sample_n(200_000, &mut create_rng(5));
        let h = Histogram::new(&xs, 40).unwrap();
        let centers = h.bin_centers();
        let dens = h.densities();
        let worst = centers
            .iter()
            .zip(&dens)
            .map(|(&c, &d)| (d - dist.pdf(c)).abs())
            .fold(0.0, f64::max);
        assert!(worst < 0.02, "max density gap {worst}");
    }
}
