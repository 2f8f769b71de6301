//! Back-solving rectangle dimensions from area and perimeter
//!
//! The room-creation workflow records a room as length x width. Given the
//! measured area and perimeter of an assumed-rectangular room, the two side
//! lengths are the roots of `x² - s·x + area = 0` with `s` the
//! semi-perimeter.

/// Rectangle side lengths recovered from area and perimeter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectDimensions {
    /// Longer side
    pub length: f64,
    /// Shorter side
    pub width: f64,
}

/// Solve rectangle dimensions from area and perimeter
///
/// Computes the semi-perimeter `s = perimeter / 2` and the discriminant
/// `D = s² - 4·area`. For `D >= 0` the sides are `(s ± √D) / 2`, larger
/// side first.
///
/// A negative discriminant means no real rectangle has this area and
/// perimeter (the measured shape was not rectangular). In that case both
/// dimensions fall back to the side of an equal-area square, `√area`. This
/// is a deliberate approximation for non-rectangular rooms, not an error.
///
/// # Arguments
/// * `area` - Enclosed area in real-world square units
/// * `perimeter` - Boundary length in real-world units
///
/// # Returns
/// [`RectDimensions`] with `length >= width`
pub fn solve_rect_dimensions(area: f64, perimeter: f64) -> RectDimensions {
    let s = perimeter / 2.0;
    let discriminant = s * s - 4.0 * area;

    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        RectDimensions {
            length: (s + root) / 2.0,
            width: (s - root) / 2.0,
        }
    } else {
        let side = area.sqrt();
        RectDimensions {
            length: side,
            width: side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_zero_discriminant() {
        // 10 x 10 square: area 100, perimeter 40, discriminant exactly 0
        let dims = solve_rect_dimensions(100.0, 40.0);

        assert_relative_eq!(dims.length, 10.0, epsilon = 1e-9);
        assert_relative_eq!(dims.width, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rectangle_roundtrip() {
        // 12 x 3 rectangle: area 36, perimeter 30
        let dims = solve_rect_dimensions(36.0, 30.0);

        assert_relative_eq!(dims.length, 12.0, epsilon = 1e-9);
        assert_relative_eq!(dims.width, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_discriminant_square_fallback() {
        // s = 30, s² = 900 < 4·area = 2000: no real rectangle
        let dims = solve_rect_dimensions(500.0, 60.0);

        let side = 500.0_f64.sqrt();
        assert_relative_eq!(dims.length, side, epsilon = 1e-9);
        assert_relative_eq!(dims.width, side, epsilon = 1e-9);
    }

    #[test]
    fn test_fallback_for_long_thin_input() {
        // area 50, perimeter 60: discriminant negative, both sides √50
        let dims = solve_rect_dimensions(50.0, 60.0);

        assert_relative_eq!(dims.length, 50.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(dims.width, dims.length, epsilon = 1e-9);
    }

    #[test]
    fn test_length_is_always_the_larger_side() {
        let dims = solve_rect_dimensions(8.0, 12.0);

        assert!(dims.length >= dims.width);
        assert_relative_eq!(dims.length * dims.width, 8.0, epsilon = 1e-9);
        assert_relative_eq!(2.0 * (dims.length + dims.width), 12.0, epsilon = 1e-9);
    }
}
