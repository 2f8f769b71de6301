use serde::{Deserialize, Serialize};

/// Configuration for a measurement session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Pixels per real-world length unit until a calibration run completes
    pub default_scale: f64,
    /// Capture within this distance of the first vertex seals the polygon (pixels)
    pub close_radius: f64,
    /// Motion-magnitude above this counts as device movement
    pub motion_threshold: f64,
    /// Stillness required before the capture ramp starts (ms)
    pub hold_duration_ms: u64,
    /// Nominal clock tick period (ms)
    pub tick_period_ms: u64,
    /// Progress added per qualifying tick (percent)
    pub progress_step: u8,
    /// Refractory period after an auto-capture (ms)
    pub cooldown_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_scale: 35.0,
            close_radius: 30.0,
            motion_threshold: 0.8,
            hold_duration_ms: 400,
            tick_period_ms: 50,
            progress_step: 8,
            cooldown_ms: 1500,
        }
    }
}
