//! Box renderer: corner points in, drawable items out.
//!
//! Stateless. Nothing here remembers a previous outline; callers rebuild
//! from their own corner state every time.

use crate::path_points::{approximate_center, near_endpoint_pair};
use crate::{Color, OverlayItem, OverlayShape, Path, Point, TextStyle};

/// Default handle radius.
pub const DEFAULT_HANDLE_RADIUS: f32 = 7.0;

/// Closed rectangle path through both corners.
///
/// Vertex order is top-left, top-right, bottom-right, bottom-left, so the
/// fourth vertex is always the bottom-left corner. Expects `top_left` to be
/// above and left of `bottom_right`.
pub fn rectangle_path(top_left: Point, bottom_right: Point) -> Path {
    Path::new()
        .move_to(top_left)
        .line_to(Point::new(bottom_right.x, top_left.y))
        .line_to(bottom_right)
        .line_to(Point::new(top_left.x, bottom_right.y))
        .close()
}

/// Stroked rectangle outline item.
pub fn rectangle_outline(
    top_left: Point,
    bottom_right: Point,
    stroke: Color,
    stroke_width: f32,
) -> OverlayItem {
    OverlayItem::new(
        OverlayShape::Outline {
            path: rectangle_path(top_left, bottom_right),
        },
        stroke,
        stroke_width,
    )
}

/// Filled and stroked circle handle.
pub fn circle_handle(center: Point, color: Color, stroke_width: f32, radius: f32) -> OverlayItem {
    OverlayItem::new(OverlayShape::Circle { center, radius }, color, stroke_width).filled(color)
}

/// Fixed-size text label with its frame's top-left at `origin`.
pub fn text_label(origin: Point, width: f32, height: f32, text: &str, style: TextStyle) -> OverlayItem {
    OverlayItem::new(
        OverlayShape::Label {
            origin,
            width,
            height,
            text: text.to_string(),
            style,
        },
        Color::TRANSPARENT,
        0.0,
    )
    .filled(style.background)
}

/// Move the path so its approximate center lands on `point`.
pub fn translate_by_delta(path: &Path, point: Point) -> Path {
    let center = approximate_center(path);
    path.translated(point.x - center.x, point.y - center.y)
}

/// Move the path by `point - last_point`.
pub fn translate_by_last_delta(path: &Path, point: Point, last_point: Point) -> Path {
    path.translated(point.x - last_point.x, point.y - last_point.y)
}

/// Move the path along its anchor segment.
///
/// `last_point` is projected onto the infinite line through the anchor
/// segment picked by [`near_endpoint_pair`], and the path is translated so
/// that projection lands on `point`. Returns `None` when the segment has
/// zero length.
pub fn translate_along_anchor_segment(path: &Path, point: Point, last_point: Point) -> Option<Path> {
    let (start, end) = near_endpoint_pair(path, last_point);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        log::trace!("Anchor segment is degenerate, skipping projection move");
        return None;
    }

    let t = (dx * last_point.x + dy * last_point.y - dx * start.x - dy * start.y) / len_sq;
    let anchor = Point::new(start.x + dx * t, start.y + dy * t);

    Some(path.translated(point.x - anchor.x, point.y - anchor.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_points::vertices;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_rectangle_path_vertex_order() {
        let path = rectangle_path(Point::new(10.0, 20.0), Point::new(50.0, 80.0));
        let pts: Vec<_> = vertices(&path).collect();
        assert_eq!(
            pts,
            vec![
                Point::new(10.0, 20.0),
                Point::new(50.0, 20.0),
                Point::new(50.0, 80.0),
                Point::new(10.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_outline_is_unfilled() {
        let item = rectangle_outline(Point::ZERO, Point::new(1.0, 1.0), Color::RED, 3.0);
        assert_eq!(item.fill, Color::TRANSPARENT);
        assert_eq!(item.stroke, Color::RED);
        assert_eq!(item.stroke_width, 3.0);
        assert!(item.is_visible());
    }

    #[test]
    fn test_circle_handle_visibility() {
        let visible = circle_handle(Point::ZERO, Color::RED, 3.0, DEFAULT_HANDLE_RADIUS);
        assert!(visible.is_visible());
        assert_eq!(
            visible.shape,
            OverlayShape::Circle {
                center: Point::ZERO,
                radius: 7.0
            }
        );

        let hidden = circle_handle(Point::ZERO, Color::TRANSPARENT, 3.0, DEFAULT_HANDLE_RADIUS);
        assert!(!hidden.is_visible());
    }

    #[test]
    fn test_translate_by_delta_recenters() {
        let path = rectangle_path(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let moved = translate_by_delta(&path, Point::new(200.0, 300.0));
        assert_eq!(approximate_center(&moved), Point::new(200.0, 300.0));
    }

    #[test]
    fn test_translate_by_last_delta() {
        let path = rectangle_path(Point::new(150.0, 250.0), Point::new(300.0, 400.0));
        let moved = translate_by_last_delta(&path, Point::new(210.0, 310.0), Point::new(200.0, 300.0));
        let first = vertices(&moved).next();
        assert_eq!(first, Some(Point::new(160.0, 260.0)));
    }

    #[test]
    fn test_translate_along_anchor_segment() {
        // Anchor segment for (9, 9) runs (10,10) -> (10,0); projection of
        // (9, 9) onto it is (10, 9), which is moved onto (12, 9).
        let path = rectangle_path(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let moved = translate_along_anchor_segment(&path, Point::new(12.0, 9.0), Point::new(9.0, 9.0))
            .expect("segment is not degenerate");
        let first = vertices(&moved).next().unwrap();
        assert!(approx_eq(first.x, 2.0));
        assert!(approx_eq(first.y, 0.0));
    }

    #[test]
    fn test_translate_along_degenerate_segment() {
        let p = Point::new(4.0, 4.0);
        let path = Path::new().move_to(p).line_to(p);
        assert!(translate_along_anchor_segment(&path, Point::ZERO, Point::new(1.0, 1.0)).is_none());
        assert!(translate_along_anchor_segment(&Path::new(), Point::ZERO, Point::ZERO).is_none());
    }
}
