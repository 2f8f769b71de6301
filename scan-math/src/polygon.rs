//! Shoelace area and perimeter over an ordered vertex sequence
//!
//! The vertex sequence is insertion-ordered and never reordered; duplicates
//! are permitted. An open sequence is measured together with a live cursor
//! vertex so the overlay can preview the shape before it is sealed.

use nalgebra::{distance, Point2};

/// Area and perimeter of a polygon, in pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonStats {
    /// Enclosed area in pixel²
    pub area: f64,
    /// Boundary length in pixels
    pub perimeter: f64,
}

/// Compute the unsigned shoelace area of a polygon
///
/// Treats the vertex list as a cycle (last vertex connects to the first).
/// The signed sum is taken in list order and the absolute value returned,
/// so vertex winding does not affect the result.
///
/// # Arguments
/// * `vertices` - Polygon vertices in capture order
///
/// # Returns
/// Area in pixel², zero if fewer than 3 vertices
pub fn shoelace_area(vertices: &[Point2<f64>]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        sum += a.x * b.y - b.x * a.y;
    }

    sum.abs() / 2.0
}

/// Sum of consecutive edge lengths without a closing edge
fn chain_length(vertices: &[Point2<f64>]) -> f64 {
    vertices
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

/// Perimeter of a closed polygon (cyclic edge sum)
///
/// # Arguments
/// * `vertices` - Polygon vertices in capture order
///
/// # Returns
/// Perimeter in pixels, zero if fewer than 2 vertices
pub fn cyclic_perimeter(vertices: &[Point2<f64>]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }

    let closing = distance(&vertices[vertices.len() - 1], &vertices[0]);
    chain_length(vertices) + closing
}

/// Measure a polygon under construction
///
/// This is the single authoritative computation behind both the live
/// overlay preview and the final measurement:
///
/// - Closed: area and perimeter over the vertex sequence as a cycle.
/// - Open: `cursor` is appended as a provisional final vertex for the area,
///   and the perimeter is the open chain plus the live edge from the last
///   captured vertex to `cursor`. With no captured vertices both are zero.
///
/// # Arguments
/// * `vertices` - Captured polygon vertices in capture order
/// * `closed` - Whether the polygon has been sealed
/// * `cursor` - Current reticle position, used only while open
///
/// # Returns
/// [`PolygonStats`] in pixel units
pub fn polygon_stats(vertices: &[Point2<f64>], closed: bool, cursor: Point2<f64>) -> PolygonStats {
    if closed {
        return PolygonStats {
            area: shoelace_area(vertices),
            perimeter: cyclic_perimeter(vertices),
        };
    }

    if vertices.is_empty() {
        return PolygonStats {
            area: 0.0,
            perimeter: 0.0,
        };
    }

    let mut effective = Vec::with_capacity(vertices.len() + 1);
    effective.extend_from_slice(vertices);
    effective.push(cursor);

    PolygonStats {
        area: shoelace_area(&effective),
        // Open chain: no closing edge back to the first vertex
        perimeter: chain_length(&effective),
    }
}
