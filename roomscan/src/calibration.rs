//! Pixel-to-real-world scale calibration
//!
//! The user confirms two on-screen reference points bracketing a known
//! real-world distance (a tape measure laid on the floor). The ratio of the
//! pixel distance to that real distance becomes the session scale. Until a
//! run completes, a fixed default scale applies.

use nalgebra::{distance, Point2};

use crate::error::CalibrationError;

/// Reference points required for a scale run
pub const REFERENCE_POINTS_REQUIRED: usize = 2;

/// Calibration state for a measurement session
#[derive(Debug, Clone)]
pub struct Calibration {
    reference_points: Vec<Point2<f64>>,
    scale: f64,
}

impl Calibration {
    /// Create a calibration holding the default scale
    pub fn new(default_scale: f64) -> Self {
        Self {
            reference_points: Vec::with_capacity(REFERENCE_POINTS_REQUIRED),
            scale: default_scale,
        }
    }

    /// Start (or restart) a calibration run, discarding any reference points
    pub fn begin(&mut self) {
        self.reference_points.clear();
    }

    /// Record a reference point at the reticle
    ///
    /// Returns false once both reference points exist: the run is paused
    /// awaiting the real-world distance and further captures are rejected.
    pub fn capture_reference(&mut self, point: Point2<f64>) -> bool {
        if self.awaiting_distance() {
            return false;
        }
        self.reference_points.push(point);
        true
    }

    /// Whether both reference points exist and only the distance is missing
    pub fn awaiting_distance(&self) -> bool {
        self.reference_points.len() >= REFERENCE_POINTS_REQUIRED
    }

    /// Reference points captured so far
    pub fn reference_points(&self) -> &[Point2<f64>] {
        &self.reference_points
    }

    /// Apply the real-world distance between the two reference points
    ///
    /// On success the new scale (pixels per real-world unit) is stored and
    /// returned, and the reference points are cleared for the next run. On
    /// failure nothing changes: the run stays open for a retry.
    ///
    /// # Arguments
    /// * `real_distance` - Measured real-world distance, must be > 0
    pub fn finish(&mut self, real_distance: f64) -> Result<f64, CalibrationError> {
        if real_distance <= 0.0 {
            return Err(CalibrationError::NonPositiveDistance(real_distance));
        }
        if self.reference_points.len() < REFERENCE_POINTS_REQUIRED {
            return Err(CalibrationError::MissingReferences(
                self.reference_points.len(),
            ));
        }

        let pixel_distance = distance(&self.reference_points[0], &self.reference_points[1]);
        if pixel_distance <= 0.0 {
            return Err(CalibrationError::DegenerateReferences);
        }

        self.scale = pixel_distance / real_distance;
        self.reference_points.clear();
        Ok(self.scale)
    }

    /// Current pixels-per-real-unit scale
    ///
    /// Must not be consulted for geometry while a run is open with fewer
    /// than two reference points recorded.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
