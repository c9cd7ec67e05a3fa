//! Path point model.
//!
//! Pure functions that walk a [`Path`] and derive measurements from its
//! points. Every call re-walks the whole path; nothing is cached.
//!
//! The "center" here is the mean of every point the walk emits, with curve
//! control points counted like endpoints. It is not an area centroid.

use crate::{Path, Point};

/// Ordered points of the path: a line or move emits its endpoint, a
/// quadratic emits control then endpoint, a cubic emits both controls then
/// the endpoint. `Close` emits nothing.
pub fn vertices(path: &Path) -> impl Iterator<Item = Point> + '_ {
    path.commands().iter().flat_map(|cmd| cmd.points())
}

/// Mean of every emitted point. Zero for an empty path.
pub fn approximate_center(path: &Path) -> Point {
    let (sum_x, sum_y, count) = vertices(path).fold((0.0, 0.0, 0usize), |(sx, sy, n), p| {
        (sx + p.x, sy + p.y, n + 1)
    });

    if count == 0 {
        return Point::ZERO;
    }
    Point::new(sum_x / count as f32, sum_y / count as f32)
}

/// Vertex nearest to `target`; the first one wins on ties. Zero for an
/// empty path.
pub fn closest_point(path: &Path, target: Point) -> Point {
    let mut points = vertices(path);
    let Some(first) = points.next() else {
        return Point::ZERO;
    };

    let mut closest = first;
    let mut best = first.distance_to(&target);
    for p in points {
        let d = p.distance_to(&target);
        if d < best {
            best = d;
            closest = p;
        }
    }
    closest
}

/// First vertex paired with the vertex farthest from it.
///
/// Ties keep the earliest vertex. A single-vertex path yields `(v, v)`;
/// an empty path yields `None`.
pub fn farthest_from_first(path: &Path) -> Option<(Point, Point)> {
    let mut points = vertices(path);
    let start = points.next()?;

    let mut end = start;
    let mut best = 0.0;
    for p in points {
        let d = start.distance_to(&p);
        if d > best {
            best = d;
            end = p;
        }
    }
    Some((start, end))
}

/// Anchor segment used by move-by-projection.
///
/// `start` is the vertex nearest to `target`. `end` is deliberately NOT the
/// second-nearest vertex: it is the second vertex of the path, or the
/// second-to-last vertex when the second vertex is exactly as far from
/// `target` as the first one is. Callers rely on this fixed choice to get a
/// stable projection line, so it must not be "improved".
///
/// Degenerate paths: empty yields two zero points, a single vertex yields
/// `(v, v)`.
pub fn near_endpoint_pair(path: &Path, target: Point) -> (Point, Point) {
    let points: Vec<Point> = vertices(path).collect();
    let Some(&first) = points.first() else {
        return (Point::ZERO, Point::ZERO);
    };

    let start = closest_point(path, target);
    if points.len() < 2 {
        return (start, first);
    }

    let reference = first.distance_to(&target);
    let mut end = points[1];
    if end.distance_to(&target) == reference {
        end = points[points.len() - 2];
    }
    (start, end)
}

/// Axis-aligned extents of the path's vertices as `(min, max)`.
pub fn extents(path: &Path) -> Option<(Point, Point)> {
    let mut points = vertices(path);
    let first = points.next()?;

    Some(points.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

/// Whether `point` lies strictly inside the vertices' extents.
pub fn interior_contains(path: &Path, point: Point) -> bool {
    match extents(path) {
        Some((min, max)) => {
            min.x < point.x && min.y < point.y && max.x > point.x && max.y > point.y
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    fn square(size: f32) -> Path {
        Path::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(size, 0.0))
            .line_to(Point::new(size, size))
            .line_to(Point::new(0.0, size))
            .close()
    }

    #[test]
    fn test_vertices_weighting_by_segment_kind() {
        let path = Path::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(1.0, 0.0))
            .quad_to(Point::new(2.0, 1.0), Point::new(3.0, 0.0))
            .cubic_to(Point::new(4.0, 1.0), Point::new(5.0, 1.0), Point::new(6.0, 0.0))
            .close();

        let pts: Vec<_> = vertices(&path).collect();
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[2], Point::new(2.0, 1.0));
        assert_eq!(pts[6], Point::new(6.0, 0.0));

        // Restartable: a second walk yields the same sequence.
        assert_eq!(vertices(&path).collect::<Vec<_>>(), pts);
    }

    #[test]
    fn test_approximate_center_of_rectangle() {
        let center = approximate_center(&square(100.0));
        assert_eq!(center, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_approximate_center_counts_control_points() {
        // Quad contributes its control point too: (0,0), (10,10), (20,0)
        let path = Path::new()
            .move_to(Point::new(0.0, 0.0))
            .quad_to(Point::new(10.0, 10.0), Point::new(20.0, 0.0));
        let center = approximate_center(&path);
        assert!(approx_eq(center.x, 10.0));
        assert!(approx_eq(center.y, 10.0 / 3.0));
    }

    #[test]
    fn test_degenerate_paths() {
        let empty = Path::new();
        assert_eq!(approximate_center(&empty), Point::ZERO);
        assert_eq!(closest_point(&empty, Point::new(3.0, 3.0)), Point::ZERO);
        assert_eq!(farthest_from_first(&empty), None);
        assert_eq!(
            near_endpoint_pair(&empty, Point::new(1.0, 1.0)),
            (Point::ZERO, Point::ZERO)
        );
        assert!(!interior_contains(&empty, Point::ZERO));

        let v = Point::new(7.0, 9.0);
        let single = Path::new().move_to(v);
        assert_eq!(approximate_center(&single), v);
        assert_eq!(farthest_from_first(&single), Some((v, v)));
        assert_eq!(near_endpoint_pair(&single, Point::ZERO), (v, v));
    }

    #[test]
    fn test_closest_point() {
        let closest = closest_point(&square(10.0), Point::new(9.0, 1.0));
        assert_eq!(closest, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_closest_point_tie_keeps_first() {
        // (5, 5) is equidistant from all four corners.
        let closest = closest_point(&square(10.0), Point::new(5.0, 5.0));
        assert_eq!(closest, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_farthest_from_first() {
        let pair = farthest_from_first(&square(10.0));
        assert_eq!(pair, Some((Point::new(0.0, 0.0), Point::new(10.0, 10.0))));
    }

    #[test]
    fn test_near_endpoint_pair_uses_second_vertex() {
        // Nearest vertex to (9, 9) is (10, 10); end stays the second vertex.
        let (start, end) = near_endpoint_pair(&square(10.0), Point::new(9.0, 9.0));
        assert_eq!(start, Point::new(10.0, 10.0));
        assert_eq!(end, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_near_endpoint_pair_falls_back_to_second_to_last() {
        // (5, -3) is equally far from (0,0) and (10,0): end falls back to
        // the second-to-last vertex, (10, 10).
        let (start, end) = near_endpoint_pair(&square(10.0), Point::new(5.0, -3.0));
        assert_eq!(start, Point::new(0.0, 0.0));
        assert_eq!(end, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_interior_is_strict() {
        let path = square(10.0);
        assert!(interior_contains(&path, Point::new(5.0, 5.0)));
        assert!(!interior_contains(&path, Point::new(0.0, 5.0)));
        assert!(!interior_contains(&path, Point::new(10.0, 10.0)));
        assert!(!interior_contains(&path, Point::new(11.0, 5.0)));
    }

    #[test]
    fn test_extents() {
        let path = Path::new()
            .move_to(Point::new(3.0, 8.0))
            .line_to(Point::new(-1.0, 2.0))
            .line_to(Point::new(6.0, 4.0));
        assert_eq!(
            extents(&path),
            Some((Point::new(-1.0, 2.0), Point::new(6.0, 8.0)))
        );
    }
}
