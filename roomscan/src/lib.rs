//! roomscan - Camera-relative room measurement sessions
//!
//! Measurement session state machine for the room scanning workflow.
//! Processes host signals through states: Calibrating <-> MeasuringOpen -> MeasuringClosed
//!
//! The host points the device camera at each corner of the room; the
//! session turns reticle confirmations (manual or stability-triggered) into
//! a polygon and reports its calibrated area and perimeter. The module
//! never sees pixel content, only the viewport size, motion magnitudes and
//! clock ticks.

use nalgebra::{distance, Point2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub mod calibration;
pub mod callback;
pub mod config;
pub mod error;
pub mod motion;
pub mod stability;
pub mod state;

use crate::calibration::Calibration;
use crate::callback::{CallbackId, ScanCallback};
use crate::stability::StabilityDetector;

// Re-export commonly used types for external use
pub use crate::callback::ScanCallbackEvent;
pub use crate::config::ScanConfig;
pub use crate::error::CalibrationError;
pub use crate::motion::{pump_motion, MockMotionSensor, MotionSample, MotionSource};
pub use crate::state::{ScanEvent, ScanState, Timestamp, Viewport};
pub use scan_math::{solve_rect_dimensions, PolygonStats, RectDimensions};

/// Final result of a measurement session
///
/// Both values are in real-world units (feet / square feet) rounded to
/// 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Enclosed area in square feet
    pub area: f64,
    /// Boundary length in feet
    pub perimeter: f64,
}

impl Measurement {
    /// Back-solve length x width for the room-creation workflow, assuming a
    /// rectangular room (square fallback for non-rectangular measurements)
    pub fn rect_dimensions(&self) -> RectDimensions {
        solve_rect_dimensions(self.area, self.perimeter)
    }
}

/// Round to the 2-decimal precision of reported measurements
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Main measurement session state machine
pub struct ScanSession {
    /// Current state
    state: ScanState,
    /// Session configuration
    config: ScanConfig,
    /// Captured polygon vertices, in capture order
    vertices: Vec<Point2<f64>>,
    /// Pixel-to-real-unit calibration
    calibration: Calibration,
    /// Stillness detector driving auto-capture
    detector: StabilityDetector,
    /// Live camera viewport (locates the reticle)
    viewport: Viewport,
    /// Registered callbacks
    callbacks: Arc<Mutex<HashMap<CallbackId, ScanCallback>>>,
    /// Next callback ID
    next_callback_id: Arc<Mutex<CallbackId>>,
    /// False once the session has completed or been cancelled
    active: bool,
}

impl ScanSession {
    /// Create a new measurement session
    pub fn new(config: ScanConfig, viewport: Viewport) -> Self {
        let calibration = Calibration::new(config.default_scale);
        let detector = StabilityDetector::new(&config);
        Self {
            state: ScanState::MeasuringOpen,
            config,
            vertices: Vec::new(),
            calibration,
            detector,
            viewport,
            callbacks: Arc::new(Mutex::new(HashMap::new())),
            next_callback_id: Arc::new(Mutex::new(0)),
            active: true,
        }
    }

    /// Register a callback for session events
    pub fn register_callback<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&ScanCallbackEvent) + Send + Sync + 'static,
    {
        let mut callbacks = self.callbacks.lock().unwrap();
        let mut next_id = self.next_callback_id.lock().unwrap();

        let callback_id = *next_id;
        *next_id += 1;

        callbacks.insert(callback_id, Arc::new(callback));
        callback_id
    }

    /// Deregister a callback
    pub fn deregister_callback(&self, callback_id: CallbackId) -> bool {
        let mut callbacks = self.callbacks.lock().unwrap();
        callbacks.remove(&callback_id).is_some()
    }

    /// Get the number of registered callbacks
    pub fn callback_count(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    /// Emit an event to all registered callbacks
    fn emit_event(&self, event: &ScanCallbackEvent) {
        let callbacks = self.callbacks.lock().unwrap();
        for callback in callbacks.values() {
            callback(event);
        }
    }

    /// Process an external signal and potentially transition states
    ///
    /// Every signal source funnels through here: UI actions, motion
    /// samples, clock ticks and viewport resizes. Invalid operations are
    /// rejected no-ops that leave all state unchanged.
    ///
    /// Returns the final measurement when a `CompleteMeasurement` event
    /// succeeds, None for every other event.
    pub fn process_event(&mut self, event: ScanEvent) -> Option<Measurement> {
        if !self.active {
            log::warn!("Event ignored, session has ended: {event:?}");
            return None;
        }

        match (self.state.clone(), event) {
            (_, ScanEvent::ViewportResized { width, height }) => {
                self.viewport = Viewport::new(width, height);
                None
            }

            (_, ScanEvent::MotionSample { magnitude, at }) => {
                self.detector.on_sample(magnitude, at);
                None
            }

            (_, ScanEvent::Tick { at }) => {
                self.handle_tick(at);
                None
            }

            (_, ScanEvent::CapturePoint(target)) => {
                self.capture_point(target);
                None
            }

            (ScanState::MeasuringOpen, ScanEvent::ToggleCalibration) => {
                self.handle_enter_calibration();
                None
            }
            (ScanState::Calibrating { .. }, ScanEvent::ToggleCalibration) => {
                self.handle_leave_calibration();
                None
            }

            (ScanState::Calibrating { .. }, ScanEvent::FinishCalibration { real_distance }) => {
                self.handle_finish_calibration(real_distance);
                None
            }

            (ScanState::MeasuringClosed, ScanEvent::Undo) => {
                self.handle_reopen();
                None
            }
            (ScanState::MeasuringOpen, ScanEvent::Undo) => {
                // No-op on an empty vertex sequence
                if let Some(removed) = self.vertices.pop() {
                    log::info!(
                        "Removed vertex ({:.1}, {:.1}), {} remain",
                        removed.x,
                        removed.y,
                        self.vertices.len()
                    );
                }
                None
            }

            (ScanState::MeasuringClosed, ScanEvent::CompleteMeasurement) => {
                self.handle_complete()
            }

            (_, ScanEvent::Cancel) => {
                self.handle_cancel();
                None
            }

            // Invalid transitions
            (state, event) => {
                log::warn!("Rejected {event:?} in {state:?}");
                None
            }
        }
    }

    /// Advance the stability detector by one clock tick
    ///
    /// A trigger performs a capture at the reticle through the same
    /// transition rules as a manual confirmation.
    fn handle_tick(&mut self, at: Timestamp) {
        if self.detector.on_tick(at) {
            log::info!("Stability trigger at {} ms", at.as_millis());
            self.emit_event(&ScanCallbackEvent::AutoCaptureFired { at });
            self.capture_point(self.viewport.reticle());
        }
    }

    /// Confirm a point at `target` under the current state's rules
    fn capture_point(&mut self, target: Point2<f64>) {
        match self.state {
            ScanState::Calibrating { .. } => {
                if self.calibration.capture_reference(target) {
                    let captured = self.calibration.reference_points().len();
                    self.state = ScanState::Calibrating {
                        references_captured: captured,
                    };
                    log::info!(
                        "Captured reference point {}/{}",
                        captured,
                        calibration::REFERENCE_POINTS_REQUIRED
                    );
                    if self.calibration.awaiting_distance() {
                        log::info!("Calibration paused awaiting real-world distance");
                    }
                } else {
                    log::warn!("Reference capture rejected, awaiting distance");
                }
            }

            ScanState::MeasuringOpen => {
                if self.vertices.len() >= 3
                    && distance(&target, &self.vertices[0]) < self.config.close_radius
                {
                    // Seal with the existing vertices; target is not appended
                    self.state = ScanState::MeasuringClosed;
                    self.detector.suspend();
                    log::info!("Polygon closed with {} vertices", self.vertices.len());
                    self.emit_event(&ScanCallbackEvent::PolygonClosed {
                        vertex_count: self.vertices.len(),
                    });
                } else {
                    self.vertices.push(target);
                    let index = self.vertices.len() - 1;
                    log::info!(
                        "Captured vertex {} at ({:.1}, {:.1})",
                        index,
                        target.x,
                        target.y
                    );
                    self.emit_event(&ScanCallbackEvent::PointCaptured {
                        index,
                        point: target,
                    });
                }
            }

            ScanState::MeasuringClosed => {
                log::warn!("Capture rejected, polygon is closed (undo first)");
            }
        }
    }

    /// Enter calibration mode, clearing any previous reference points
    fn handle_enter_calibration(&mut self) {
        self.calibration.begin();
        self.state = ScanState::Calibrating {
            references_captured: 0,
        };
        self.detector.suspend();
        log::info!("Entering calibration mode");
    }

    /// Leave calibration mode without changing the scale
    fn handle_leave_calibration(&mut self) {
        self.state = ScanState::MeasuringOpen;
        self.detector.resume();
        log::info!("Leaving calibration mode, scale unchanged");
    }

    /// Apply the real-world reference distance and return to measuring
    ///
    /// A completed run invalidates any in-progress polygon: area and
    /// perimeter captured under the old scale are meaningless under the new
    /// one.
    fn handle_finish_calibration(&mut self, real_distance: f64) {
        match self.calibration.finish(real_distance) {
            Ok(scale) => {
                if !self.vertices.is_empty() {
                    log::info!(
                        "Scale changed, discarding {} in-progress vertices",
                        self.vertices.len()
                    );
                    self.vertices.clear();
                }
                self.state = ScanState::MeasuringOpen;
                self.detector.resume();
                log::info!("Calibration complete, scale {scale:.3} px/unit");
                self.emit_event(&ScanCallbackEvent::CalibrationFinished { scale });
            }
            Err(e) => {
                log::warn!("Calibration rejected: {e}");
            }
        }
    }

    /// Reopen a sealed polygon with all vertices intact
    fn handle_reopen(&mut self) {
        self.state = ScanState::MeasuringOpen;
        self.detector.resume();
        log::info!("Polygon reopened with {} vertices", self.vertices.len());
        self.emit_event(&ScanCallbackEvent::PolygonReopened {
            vertex_count: self.vertices.len(),
        });
    }

    /// Finalize the closed polygon and end the session
    fn handle_complete(&mut self) -> Option<Measurement> {
        let stats = scan_math::polygon_stats(&self.vertices, true, self.viewport.reticle());
        let scale = self.calibration.scale();
        let measurement = Measurement {
            area: round_hundredths(scan_math::area_to_real(stats.area, scale)),
            perimeter: round_hundredths(scan_math::length_to_real(stats.perimeter, scale)),
        };

        self.active = false;
        log::info!(
            "Measurement complete: {:.2} sq ft, {:.2} ft perimeter",
            measurement.area,
            measurement.perimeter
        );
        self.emit_event(&ScanCallbackEvent::MeasurementComplete {
            area: measurement.area,
            perimeter: measurement.perimeter,
        });

        Some(measurement)
    }

    /// End the session with no result
    fn handle_cancel(&mut self) {
        self.active = false;
        log::info!("Session cancelled in {:?}", self.state);
        self.emit_event(&ScanCallbackEvent::SessionCancelled);
    }

    /// Finalize the closed polygon and end the session
    ///
    /// Convenience wrapper over [`ScanSession::process_event`] for the
    /// embedding application. Returns None (and changes nothing) unless the
    /// polygon is closed.
    pub fn complete_measurement(&mut self) -> Option<Measurement> {
        self.process_event(ScanEvent::CompleteMeasurement)
    }

    /// End the session with no result
    ///
    /// Convenience wrapper over [`ScanSession::process_event`]; valid in
    /// any state.
    pub fn cancel(&mut self) {
        self.process_event(ScanEvent::Cancel);
    }

    /// Get the current state
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Whether the session is still accepting events
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Captured polygon vertices, in capture order
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Whether the polygon has been sealed
    pub fn is_closed(&self) -> bool {
        matches!(self.state, ScanState::MeasuringClosed)
    }

    /// Whether the session is in calibration mode
    pub fn is_calibrating(&self) -> bool {
        matches!(self.state, ScanState::Calibrating { .. })
    }

    /// Progress toward an auto-capture, 0..=100
    pub fn progress(&self) -> u8 {
        self.detector.progress()
    }

    /// Whether the post-capture cooldown is active
    pub fn cooldown_active(&self) -> bool {
        self.detector.cooldown_active()
    }

    /// Current pixels-per-real-unit scale
    pub fn scale(&self) -> f64 {
        self.calibration.scale()
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Reference points of an in-progress calibration run
    pub fn reference_points(&self) -> &[Point2<f64>] {
        self.calibration.reference_points()
    }

    /// Live polygon stats in pixel units, for the overlay renderer
    ///
    /// While open, the reticle contributes as a provisional final vertex.
    pub fn live_stats(&self) -> PolygonStats {
        scan_math::polygon_stats(&self.vertices, self.is_closed(), self.viewport.reticle())
    }

    /// Live polygon stats converted to real-world units (unrounded)
    pub fn live_measurement(&self) -> Measurement {
        let stats = self.live_stats();
        let scale = self.calibration.scale();
        Measurement {
            area: scan_math::area_to_real(stats.area, scale),
            perimeter: scan_math::length_to_real(stats.perimeter, scale),
        }
    }
}
