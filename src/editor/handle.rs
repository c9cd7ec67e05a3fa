//! Corner handles and their hit testing.

use boxtag_geom::Point;

use super::EditMode;

/// Which corner a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// The only handle painted visibly; the drag affordance.
    BottomRightAnchor,
    TopRight,
    TopLeft,
    BottomLeft,
}

impl HandleRole {
    /// Hit-test order. The first matching handle wins.
    pub const PRIORITY: [HandleRole; 4] = [
        HandleRole::BottomRightAnchor,
        HandleRole::TopRight,
        HandleRole::TopLeft,
        HandleRole::BottomLeft,
    ];

    /// Corner position for a box spanning `top_left`..`bottom_right`.
    pub fn position(&self, top_left: Point, bottom_right: Point) -> Point {
        match self {
            HandleRole::BottomRightAnchor => bottom_right,
            HandleRole::TopRight => Point::new(bottom_right.x, top_left.y),
            HandleRole::TopLeft => top_left,
            HandleRole::BottomLeft => Point::new(top_left.x, bottom_right.y),
        }
    }

    /// Only the anchor is painted; the other three are invisible but live.
    pub fn is_visible(&self) -> bool {
        matches!(self, HandleRole::BottomRightAnchor)
    }

    /// Resize mode entered when this handle is grabbed.
    pub fn resize_mode(&self) -> EditMode {
        match self {
            HandleRole::BottomRightAnchor => EditMode::ResizeFromBottomRight,
            HandleRole::TopRight => EditMode::ResizeFromTopRight,
            HandleRole::TopLeft => EditMode::ResizeFromTopLeft,
            HandleRole::BottomLeft => EditMode::ResizeFromBottomLeft,
        }
    }
}

/// A handle placed on the current box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub role: HandleRole,
    pub center: Point,
}

impl Handle {
    pub fn new(role: HandleRole, center: Point) -> Self {
        Self { role, center }
    }

    /// Whether `point` grabs this handle.
    ///
    /// Matches inside the filled circle, or inside the circle's rim stroked
    /// with a `hit_band` wide line (half on each side of the rim).
    pub fn hit(&self, point: Point, radius: f32, hit_band: f32) -> bool {
        let d = self.center.distance_to(&point);
        d <= radius || (d - radius).abs() <= hit_band / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let a = Point::new(150.0, 250.0);
        let b = Point::new(250.0, 350.0);
        assert_eq!(HandleRole::BottomRightAnchor.position(a, b), b);
        assert_eq!(HandleRole::TopRight.position(a, b), Point::new(250.0, 250.0));
        assert_eq!(HandleRole::TopLeft.position(a, b), a);
        assert_eq!(HandleRole::BottomLeft.position(a, b), Point::new(150.0, 350.0));
    }

    #[test]
    fn test_only_anchor_is_visible() {
        let visible: Vec<_> = HandleRole::PRIORITY
            .iter()
            .filter(|r| r.is_visible())
            .collect();
        assert_eq!(visible, vec![&HandleRole::BottomRightAnchor]);
    }

    #[test]
    fn test_hit_inside_circle_and_stroke_band() {
        let handle = Handle::new(HandleRole::TopLeft, Point::new(100.0, 100.0));

        // Inside the filled circle.
        assert!(handle.hit(Point::new(103.0, 104.0), 7.0, 22.5));
        // Outside the circle but within the widened rim (7 + 11.25).
        assert!(handle.hit(Point::new(118.0, 100.0), 7.0, 22.5));
        // Beyond the rim band.
        assert!(!handle.hit(Point::new(119.0, 100.0), 7.0, 22.5));
    }
}
