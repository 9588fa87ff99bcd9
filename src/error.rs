//! Error type shared by every fallible operation in the crate.

/// Errors produced while validating samples, parameters, or configuration.
///
/// Clipping of out-of-range skewness is *not* an error; it is reported
/// through [`FitReport`](crate::estimate::FitReport) and a `tracing` warning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkewFitError {
    /// Fewer observations than the operation needs.
    #[error("need at least {required} observations, got {actual}")]
    TooFewObservations { required: usize, actual: usize },

    /// An observation is NaN or infinite.
    #[error("observation at index {index} is not finite: {value}")]
    NonFiniteObservation { index: usize, value: f64 },

    /// Every observation is identical, so skewness and scale are undefined.
    #[error("sample variance is zero")]
    ZeroVariance,

    /// A moment of finite observations exceeds the `f64` range.
    #[error("sample {moment} overflows f64")]
    MomentOverflow { moment: &'static str },

    /// Distribution or sampler parameters violate their constraints.
    #[error("invalid skew-normal parameters: {0}")]
    InvalidParameters(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
