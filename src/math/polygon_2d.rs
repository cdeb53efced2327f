use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed 2D contour (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns whether the contour winds counter-clockwise.
#[must_use]
pub fn is_ccw(points: &[Point2]) -> bool {
    signed_area_2d(points) > 0.0
}

/// Forces a contour to the requested winding, reversing its point order
/// when it disagrees. Contours with no measurable area pass through as-is.
#[must_use]
pub fn with_winding(mut points: Vec<Point2>, ccw: bool) -> Vec<Point2> {
    let area = signed_area_2d(&points);
    if area.abs() > TOLERANCE && (area > 0.0) != ccw {
        points.reverse();
    }
    points
}

/// Pointwise linear interpolation between two contours of equal length.
///
/// Length equality is the caller's responsibility.
#[must_use]
pub(crate) fn lerp_contour(a: &[Point2], b: &[Point2], t: f64) -> Vec<Point2> {
    a.iter()
        .zip(b)
        .map(|(p, q)| Point2::new(p.x + (q.x - p.x) * t, p.y + (q.y - p.y) * t))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ccw_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&ccw_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = ccw_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn with_winding_reverses_only_when_needed() {
        let ccw = ccw_square();
        let kept = with_winding(ccw.clone(), true);
        assert_eq!(kept, ccw);

        let flipped = with_winding(ccw.clone(), false);
        assert!(!is_ccw(&flipped));
        assert_eq!(with_winding(flipped, true), ccw);
    }

    #[test]
    fn lerp_contour_midpoint() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0)];
        let b = vec![Point2::new(2.0, 2.0), Point2::new(4.0, 2.0), Point2::new(4.0, 4.0)];
        let mid = lerp_contour(&a, &b, 0.5);
        assert!((mid[0].x - 1.0).abs() < TOLERANCE);
        assert!((mid[0].y - 1.0).abs() < TOLERANCE);
        assert!((mid[2].x - 3.0).abs() < TOLERANCE);
    }
}
