//! Motion sample sources
//!
//! The host negotiates sensor permissions and owns the platform specifics;
//! by the time a source reaches the session it is nothing but a stream of
//! non-negative magnitudes. On platforms without a motion sensor the host
//! synthesizes samples from pointer movement and feeds them through the
//! same interface.

use crate::state::Timestamp;
use crate::ScanSession;

/// One motion-magnitude sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Absolute magnitude of the acceleration vector (non-negative)
    pub magnitude: f64,
    /// When the sample was taken
    pub at: Timestamp,
}

impl MotionSample {
    /// Create a new sample
    pub fn new(magnitude: f64, at: Timestamp) -> Self {
        Self { magnitude, at }
    }
}

/// Trait for pull-based motion sample delivery
///
/// Abstracts the device accelerometer and the pointer-movement fallback so
/// the session and tests consume the same interface.
pub trait MotionSource {
    /// Next pending sample, or None when the source is drained
    fn next_sample(&mut self) -> Option<MotionSample>;
}

/// Drain every pending sample from a source into the session
///
/// Helper for hosts that batch sensor delivery per animation frame: call
/// this before forwarding the frame's clock tick so the tick's elapsed-time
/// computation sees all motion that preceded it.
pub fn pump_motion<S: MotionSource>(session: &mut ScanSession, source: &mut S) {
    while let Some(sample) = source.next_sample() {
        session.process_event(crate::state::ScanEvent::MotionSample {
            magnitude: sample.magnitude,
            at: sample.at,
        });
    }
}

/// Scripted motion source for testing
pub struct MockMotionSensor {
    samples: Vec<MotionSample>,
    index: usize,
}

impl MockMotionSensor {
    /// Create a mock sensor replaying a predefined sample timeline
    pub fn new(samples: Vec<MotionSample>) -> Self {
        Self { samples, index: 0 }
    }

    /// Number of samples not yet delivered
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.index
    }

    /// Rewind to the start of the timeline
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl MotionSource for MockMotionSensor {
    fn next_sample(&mut self) -> Option<MotionSample> {
        let sample = self.samples.get(self.index).copied()?;
        self.index += 1;
        Some(sample)
    }
}
