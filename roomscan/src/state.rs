use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Millisecond-resolution instant supplied by the host.
///
/// Every time-sensitive signal (motion sample, clock tick) carries one of
/// these; the session never reads a wall clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from milliseconds since an arbitrary epoch
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the epoch
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since an earlier timestamp (zero if `earlier`
    /// is in the future)
    pub fn saturating_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Timestamp `ms` milliseconds after this one
    pub fn advanced_by(&self, ms: u64) -> Timestamp {
        Self(self.0.saturating_add(ms))
    }
}

/// Viewport dimensions of the live camera feed
///
/// The module reads no pixel content; the viewport exists only to locate
/// the reticle, the fixed aiming point at its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The reticle position: the viewport center
    pub fn reticle(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Measurement session states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanState {
    /// Collecting reference points for a scale run
    Calibrating { references_captured: usize },
    /// Accepting corner captures
    MeasuringOpen,
    /// Polygon sealed, awaiting completion or undo
    MeasuringClosed,
}

/// External signals that drive state transitions
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Enter calibration mode, or leave it without changing the scale
    ToggleCalibration,
    /// Supply the real-world distance between the two reference points
    FinishCalibration { real_distance: f64 },
    /// Confirm the current reticle position as a corner (or reference point)
    CapturePoint(Point2<f64>),
    /// Remove the last vertex, or reopen a closed polygon
    Undo,
    /// Motion-magnitude sample from the device sensor or pointer fallback
    MotionSample { magnitude: f64, at: Timestamp },
    /// Periodic clock tick (nominal period 50 ms)
    Tick { at: Timestamp },
    /// The camera viewport was resized
    ViewportResized { width: f64, height: f64 },
    /// Finalize the closed polygon and end the session
    CompleteMeasurement,
    /// End the session with no result
    Cancel,
}
