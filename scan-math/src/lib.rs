//! scan-math - Polygon geometry for camera-based room measurement
//!
//! This crate provides the pure geometric computations behind the room
//! scanning workflow:
//!
//! - **Polygon** - shoelace area and perimeter over an ordered vertex
//!   sequence, including the in-progress polygon with a live cursor vertex
//! - **Rect** - back-solving rectangle dimensions from area and perimeter
//! - **Units** - pixel-to-real-world conversion via a calibration scale
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use scan_math::polygon_stats;
//!
//! let vertices = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(100.0, 0.0),
//!     Point2::new(100.0, 100.0),
//!     Point2::new(0.0, 100.0),
//! ];
//!
//! // Closed square, 100 px on a side
//! let stats = polygon_stats(&vertices, true, Point2::new(50.0, 50.0));
//! assert_eq!(stats.area, 10_000.0);
//! assert_eq!(stats.perimeter, 400.0);
//! ```

pub mod polygon;
pub mod rect;
pub mod units;

// Re-export commonly used items
pub use polygon::{polygon_stats, shoelace_area, PolygonStats};
pub use rect::{solve_rect_dimensions, RectDimensions};
pub use units::{area_to_real, length_to_real};
