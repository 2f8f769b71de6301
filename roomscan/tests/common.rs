//! Common utilities for roomscan tests

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roomscan::{MotionSample, ScanEvent, ScanSession, Timestamp};

/// Helper to create a timestamp from milliseconds
pub fn ts(ms: u64) -> Timestamp {
    Timestamp::from_millis(ms)
}

/// A motion spike well above the movement threshold
pub fn spike(at_ms: u64) -> MotionSample {
    MotionSample::new(2.0, ts(at_ms))
}

/// Feed clock ticks at the nominal 50 ms period over [from_ms, to_ms]
pub fn run_ticks(session: &mut ScanSession, from_ms: u64, to_ms: u64) {
    let mut t = from_ms;
    while t <= to_ms {
        session.process_event(ScanEvent::Tick { at: ts(t) });
        t += 50;
    }
}

/// Sub-threshold handheld jitter over [from_ms, to_ms]
///
/// Magnitudes are drawn below the given bound, so a trace bounded by the
/// motion threshold must never reset the stability ramp.
pub fn jitter_trace(from_ms: u64, to_ms: u64, period_ms: u64, max_magnitude: f64, seed: u64) -> Vec<MotionSample> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut samples = Vec::new();
    let mut t = from_ms;
    while t <= to_ms {
        samples.push(MotionSample::new(rng.gen_range(0.0..max_magnitude), ts(t)));
        t += period_ms;
    }
    samples
}
