use thiserror::Error;

/// Validation failures while finishing a calibration run.
///
/// The session treats every one of these as a rejected no-op: calibration
/// stays open, the scale is untouched and the user retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// The supplied real-world distance must be strictly positive.
    #[error("reference distance must be positive, got {0}")]
    NonPositiveDistance(f64),

    /// Two reference points are required before a distance can be applied.
    #[error("need 2 reference points, have {0}")]
    MissingReferences(usize),

    /// The two reference points coincide on screen, so no scale exists.
    #[error("reference points are coincident")]
    DegenerateReferences,
}
