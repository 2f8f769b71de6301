use nalgebra::Point2;
use std::sync::Arc;

use crate::state::Timestamp;

/// Events emitted for external callbacks
#[derive(Debug, Clone)]
pub enum ScanCallbackEvent {
    /// A corner was appended to the polygon
    PointCaptured {
        /// Index of the new vertex in capture order
        index: usize,
        /// The captured point
        point: Point2<f64>,
    },
    /// The polygon was sealed by a capture near the first vertex
    PolygonClosed {
        /// Number of vertices in the sealed polygon
        vertex_count: usize,
    },
    /// Undo reopened a sealed polygon with all vertices intact
    PolygonReopened {
        /// Number of vertices restored to the open polygon
        vertex_count: usize,
    },
    /// A calibration run completed and the scale changed
    CalibrationFinished {
        /// New scale in pixels per real-world unit
        scale: f64,
    },
    /// The stability detector fired an auto-capture
    AutoCaptureFired {
        /// Tick timestamp at which the trigger fired
        at: Timestamp,
    },
    /// The session finished with a result (fired exactly once)
    MeasurementComplete {
        /// Area in square feet, 2-decimal precision
        area: f64,
        /// Perimeter in feet, 2-decimal precision
        perimeter: f64,
    },
    /// The session ended without a result (fired exactly once)
    SessionCancelled,
}

/// Callback ID for registration/deregistration
pub type CallbackId = u64;

/// Callback function type
pub type ScanCallback = Arc<dyn Fn(&ScanCallbackEvent) + Send + Sync>;
