//! Flat-section triangulation through the external ear-clipping algorithm.
//!
//! This module owns only the data contract: contours are flattened into one
//! coordinate array with hole start indices, and the returned index triples
//! are normalized to counter-clockwise winding before the sweep engine maps
//! them onto ring vertices. The clipping algorithm itself is external.

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Triangulates an outer contour minus its holes.
///
/// Returned triangles index the section's points in flattened order: the
/// outer contour's points first, then each hole's points in hole order.
/// Triangle winding is counter-clockwise in the section plane.
///
/// # Errors
///
/// Returns an error if the external ear clipper rejects the input or
/// returns a malformed triangle list.
#[allow(clippy::cast_possible_truncation)]
pub fn triangulate_section(outer: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<[u32; 3]>> {
    let point_count = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut coords = Vec::with_capacity(point_count * 2);
    let mut hole_starts = Vec::with_capacity(holes.len());

    for point in outer {
        coords.push(point.x);
        coords.push(point.y);
    }
    for hole in holes {
        hole_starts.push(coords.len() / 2);
        for point in hole {
            coords.push(point.x);
            coords.push(point.y);
        }
    }

    let indices = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(|err| TessellationError::EarClip(format!("{err:?}")))?;
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(TessellationError::IncompleteTriangulation(indices.len()).into());
    }

    let mut triangles = Vec::with_capacity(indices.len() / 3);
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        // Normalize winding; downstream cap orientation depends on it and
        // must not depend on the external algorithm's own convention.
        if doubled_area(&coords, a, b, c) < 0.0 {
            triangles.push([a as u32, c as u32, b as u32]);
        } else {
            triangles.push([a as u32, b as u32, c as u32]);
        }
    }
    Ok(triangles)
}

/// Twice the signed area of a triangle addressed into the flat coordinate
/// array.
fn doubled_area(coords: &[f64], a: usize, b: usize, c: usize) -> f64 {
    let (ax, ay) = (coords[2 * a], coords[2 * a + 1]);
    let (bx, by) = (coords[2 * b], coords[2 * b + 1]);
    let (cx, cy) = (coords[2 * c], coords[2 * c + 1]);
    (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::Shape;
    use crate::math::Point2;

    use super::*;

    #[test]
    fn square_triangulates_into_two_ccw_triangles() {
        let square = Shape::rectangle(2.0, 2.0).unwrap();
        let triangles = triangulate_section(square.outer(), square.holes()).unwrap();
        assert_eq!(triangles.len(), 2);

        let coords: Vec<f64> = square
            .outer()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect();
        for tri in &triangles {
            let area = doubled_area(
                &coords,
                tri[0] as usize,
                tri[1] as usize,
                tri[2] as usize,
            );
            assert!(area > 0.0, "triangle {tri:?} is not counter-clockwise");
        }
    }

    #[test]
    fn section_with_hole_keeps_the_hole_open() {
        let ring = Shape::annulus(4.0, 2.0, 16).unwrap();
        let triangles = triangulate_section(ring.outer(), ring.holes()).unwrap();
        // n outer + n hole points triangulate into 2n triangles.
        assert_eq!(triangles.len(), 32);

        // No triangle may use three hole vertices of the same hole edge
        // span crossing the hole: cheap sanity check via centroid radius.
        for tri in &triangles {
            let centroid = centroid_of(&ring, *tri);
            let radius = (centroid.0 * centroid.0 + centroid.1 * centroid.1).sqrt();
            assert!(
                radius > 1.9,
                "triangle centroid {centroid:?} landed inside the hole"
            );
        }
    }

    #[test]
    fn degenerate_input_is_reported() {
        let empty: [Point2; 0] = [];
        assert!(triangulate_section(&empty, &[]).is_err());
    }

    fn centroid_of(ring: &Shape, tri: [u32; 3]) -> (f64, f64) {
        let points: Vec<Point2> = ring
            .outer()
            .iter()
            .chain(ring.holes()[0].iter())
            .copied()
            .collect();
        let mut x = 0.0;
        let mut y = 0.0;
        for index in tri {
            x += points[index as usize].x;
            y += points[index as usize].y;
        }
        (x / 3.0, y / 3.0)
    }
}
