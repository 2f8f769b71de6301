//! Pixel-to-real-world unit conversion
//!
//! A calibration run yields `scale` in pixels per real-world length unit.
//! Lengths divide by the scale once, areas divide by it squared.

/// Convert a pixel-space area to real-world square units
///
/// # Arguments
/// * `area_px` - Area in pixel²
/// * `scale` - Calibration factor in pixels per real-world unit (> 0)
pub fn area_to_real(area_px: f64, scale: f64) -> f64 {
    area_px / (scale * scale)
}

/// Convert a pixel-space length to real-world units
///
/// # Arguments
/// * `length_px` - Length in pixels
/// * `scale` - Calibration factor in pixels per real-world unit (> 0)
pub fn length_to_real(length_px: f64, scale: f64) -> f64 {
    length_px / scale
}
