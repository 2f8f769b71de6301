//! Stability-based auto-capture
//!
//! Replaces manual confirmation taps: once the device has been held still
//! against a corner for long enough, a capture trigger fires on its own.
//! Motion samples above a threshold reset the hold; a refractory cooldown
//! after each trigger prevents double-capturing the same corner.
//!
//! The detector is tick-driven and owns no timers. The cooldown deadline is
//! plain data checked against the next tick's timestamp, so dropping the
//! session cancels it implicitly.

use crate::config::ScanConfig;
use crate::state::Timestamp;

/// Progress value at which the capture trigger fires
pub const TRIGGER_PROGRESS: u8 = 100;

/// Stillness detector driving auto-capture
#[derive(Debug, Clone)]
pub struct StabilityDetector {
    motion_threshold: f64,
    hold_duration_ms: u64,
    progress_step: u8,
    cooldown_ms: u64,

    progress: u8,
    last_motion: Option<Timestamp>,
    cooldown_until: Option<Timestamp>,
    suspended: bool,
}

impl StabilityDetector {
    /// Create a detector from session configuration
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            motion_threshold: config.motion_threshold,
            hold_duration_ms: config.hold_duration_ms,
            progress_step: config.progress_step,
            cooldown_ms: config.cooldown_ms,
            progress: 0,
            last_motion: None,
            cooldown_until: None,
            suspended: false,
        }
    }

    /// Feed one motion-magnitude sample
    ///
    /// A magnitude strictly above the threshold counts as device movement:
    /// the hold restarts and any accumulated progress is lost.
    pub fn on_sample(&mut self, magnitude: f64, at: Timestamp) {
        if self.suspended {
            return;
        }
        if magnitude > self.motion_threshold {
            self.last_motion = Some(at);
            self.progress = 0;
        }
    }

    /// Advance the detector by one clock tick
    ///
    /// Returns true exactly when the progress ramp reaches its trigger
    /// value; the caller then performs the capture. While the cooldown is
    /// active ticks only check for its expiry.
    pub fn on_tick(&mut self, at: Timestamp) -> bool {
        if self.suspended {
            return false;
        }

        if let Some(deadline) = self.cooldown_until {
            if at >= deadline {
                self.cooldown_until = None;
                self.progress = 0;
                self.last_motion = Some(at);
            }
            return false;
        }

        // First tick after construction or resume seeds the hold baseline
        let last_motion = match self.last_motion {
            Some(ts) => ts,
            None => {
                self.last_motion = Some(at);
                return false;
            }
        };

        if at.saturating_since(last_motion) > self.hold_duration_ms {
            self.progress = self.progress.saturating_add(self.progress_step);
            if self.progress >= TRIGGER_PROGRESS {
                self.progress = TRIGGER_PROGRESS;
                self.cooldown_until = Some(at.advanced_by(self.cooldown_ms));
                return true;
            }
        }

        false
    }

    /// Suspend the detector (calibration mode or closed polygon)
    ///
    /// Progress is pinned to 0 and every tick and sample is ignored until
    /// [`StabilityDetector::resume`].
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.progress = 0;
        self.last_motion = None;
        self.cooldown_until = None;
    }

    /// Resume after suspension
    ///
    /// The hold baseline is left unset and re-seeded by the next tick, so a
    /// device that sat still throughout the suspension cannot fire a
    /// capture on the first tick back.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Current progress toward an auto-capture, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Whether the post-capture refractory period is active
    pub fn cooldown_active(&self) -> bool {
        self.cooldown_until.is_some()
    }

    /// Whether the detector is currently suspended
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}
