use geo::{Coord, LineString, MultiPolygon, Polygon};
use tracing::debug;

use crate::error::{BooleanError, Result};
use crate::geometry::Shape;
use crate::math::polygon_2d::{signed_area_2d, with_winding};
use crate::math::{Point2, TOLERANCE};

/// Converts a shape into the external algorithm's polygon representation,
/// preserving point order. The external library closes rings itself.
pub(crate) fn to_polygon(shape: &Shape) -> Polygon<f64> {
    Polygon::new(
        ring_of(shape.outer()),
        shape.holes().iter().map(|h| ring_of(h)).collect(),
    )
}

fn ring_of(points: &[Point2]) -> LineString<f64> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}

/// Rebuilds a shape from whatever paths the external algorithm returned.
///
/// The result's own nesting and orientation are deliberately ignored:
/// every ring is collected, the one enclosing the largest absolute area
/// becomes the outer contour (forced counter-clockwise), and every other
/// ring becomes a hole (forced clockwise).
pub(crate) fn from_result(result: &MultiPolygon<f64>, operation: &'static str) -> Result<Shape> {
    let mut rings: Vec<Vec<Point2>> = Vec::new();
    for polygon in &result.0 {
        collect_ring(polygon.exterior(), &mut rings);
        for interior in polygon.interiors() {
            collect_ring(interior, &mut rings);
        }
    }
    debug!(operation, rings = rings.len(), "classifying boolean result");

    let outer_at = rings
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            signed_area_2d(a)
                .abs()
                .total_cmp(&signed_area_2d(b).abs())
        })
        .map(|(index, _)| index);
    let Some(outer_at) = outer_at else {
        return Err(BooleanError::EmptyResult { operation }.into());
    };

    let outer = with_winding(rings.swap_remove(outer_at), true);
    let holes = rings
        .into_iter()
        .map(|ring| with_winding(ring, false))
        .collect();
    Shape::new(outer, holes)
}

/// Collects one returned ring, dropping the closing duplicate point and
/// any sliver too degenerate to form a contour.
fn collect_ring(ring: &LineString<f64>, rings: &mut Vec<Vec<Point2>>) {
    let mut points: Vec<Point2> = ring.coords().map(|c| Point2::new(c.x, c.y)).collect();
    if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
        if points.len() >= 2 && (first - last).norm() < TOLERANCE {
            points.pop();
        }
    }
    if points.len() >= 3 {
        rings.push(points);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::polygon_2d::is_ccw;

    use super::*;

    #[test]
    fn polygon_round_trip_preserves_structure() {
        let ring = Shape::annulus(5.0, 3.0, 16).unwrap();
        let polygon = to_polygon(&ring);
        assert_eq!(polygon.interiors().len(), 1);

        let back = from_result(&MultiPolygon(vec![polygon]), "round-trip").unwrap();
        assert_eq!(back.hole_count(), 1);
        assert!(back.is_ccw());
    }

    #[test]
    fn classification_ignores_reported_orientation() {
        // Feed the adapter a polygon whose rings carry the wrong windings.
        let upside_down = Shape::annulus(5.0, 3.0, 16).unwrap().reverse();
        let polygon = to_polygon(&upside_down);
        let shape = from_result(&MultiPolygon(vec![polygon]), "orientation").unwrap();

        assert!(shape.is_ccw());
        assert!(!is_ccw(&shape.holes()[0]));
    }

    #[test]
    fn largest_ring_wins_the_outer_slot() {
        let large = to_polygon(&Shape::circle(10.0, 16).unwrap());
        let small = to_polygon(
            &Shape::circle(2.0, 16)
                .unwrap()
                .translate(crate::math::Vector2::new(20.0, 0.0)),
        );
        // Order deliberately puts the small polygon first.
        let shape = from_result(&MultiPolygon(vec![small, large]), "classify").unwrap();

        assert!(shape.signed_area() > 200.0);
        assert_eq!(shape.hole_count(), 1);
    }

    #[test]
    fn empty_result_is_an_error() {
        assert!(from_result(&MultiPolygon(vec![]), "empty").is_err());
    }
}
