//! Box editor state machine.
//!
//! Owns the live rectangle as two corners plus the current edit mode, and
//! turns a stream of pointer events into constrained resize and move edits.
//! The drawable outline is never stored; it is rebuilt from the corners
//! whenever it is needed.

mod handle;


pub use handle::{Handle, HandleRole};

use boxtag_geom::path_points::{approximate_center, farthest_from_first, interior_contains, vertices};
use boxtag_geom::renderer::{
    circle_handle, rectangle_outline, rectangle_path, text_label, translate_along_anchor_segment,
    translate_by_last_delta,
};
use boxtag_geom::{Bounds, Color, Overlay, Path, Point, TextStyle};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EditorSettings, MoveStrategy};
use crate::constants::label;

/// Current edit mode. Latched on gesture start, cleared on gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    ResizeFromBottomRight,
    ResizeFromTopRight,
    ResizeFromTopLeft,
    ResizeFromBottomLeft,
    /// Dragging the whole box; `last_point` is the previous pointer sample.
    Move { last_point: Point },
}

impl EditMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditMode::Idle)
    }
}

/// Phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    Start,
    Update,
    End,
}

/// A pointer sample in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: GesturePhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn start(x: f32, y: f32) -> Self {
        Self {
            phase: GesturePhase::Start,
            position: Point::new(x, y),
        }
    }

    pub fn update(x: f32, y: f32) -> Self {
        Self {
            phase: GesturePhase::Update,
            position: Point::new(x, y),
        }
    }

    pub fn end(x: f32, y: f32) -> Self {
        Self {
            phase: GesturePhase::End,
            position: Point::new(x, y),
        }
    }
}

/// Interactive single-box editor.
///
/// Invariant: `point_a.x < point_b.x` and `point_a.y < point_b.y` after
/// every accepted edit. Edits that would break it, or any area/margin
/// constraint, are dropped without changing state.
#[derive(Debug, Clone)]
pub struct BoxEditor {
    point_a: Point,
    point_b: Point,
    mode: EditMode,
    container: Bounds,
    settings: EditorSettings,
    label: Option<String>,
}

impl BoxEditor {
    /// Create an editor with default settings.
    pub fn new(center: Point, container: Bounds) -> Self {
        Self::build(center, container, EditorSettings::default())
    }

    /// Create an editor with an initial square box centered on `center`,
    /// shifted as needed so every side sits at least `margin` inside the
    /// container. Fails if `settings` does not pass
    /// [`EditorSettings::validate`].
    pub fn with_settings(
        center: Point,
        container: Bounds,
        settings: EditorSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::build(center, container, settings))
    }

    fn build(center: Point, container: Bounds, settings: EditorSettings) -> Self {
        let half = settings.initial_size / 2.0;
        let m = settings.margin;
        let a = center.offset(-half, -half);
        let b = center.offset(half, half);

        let mut dx = 0.0;
        if a.x < container.min_x() + m {
            dx = container.min_x() + m - a.x;
        }
        if b.x > container.max_x() - m {
            dx = container.max_x() - m - b.x;
        }

        let mut dy = 0.0;
        if a.y < container.min_y() + m {
            dy = container.min_y() + m - a.y;
        }
        if b.y > container.max_y() - m {
            dy = container.max_y() - m - b.y;
        }

        let editor = Self {
            point_a: a.offset(dx, dy),
            point_b: b.offset(dx, dy),
            mode: EditMode::Idle,
            container,
            settings,
            label: None,
        };
        log::debug!(
            "Created box editor at {:?}..{:?} in container {:?}",
            editor.point_a,
            editor.point_b,
            container
        );
        editor
    }

    /// Feed one pointer event. Returns whether the box geometry changed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event.phase {
            GesturePhase::Start => self.begin_gesture(event.position),
            GesturePhase::Update => self.update_gesture(event.position),
            GesturePhase::End => {
                self.end_gesture();
                false
            }
        }
    }

    /// Press: pick the edit mode for this gesture.
    ///
    /// Handles are tested in [`HandleRole::PRIORITY`] order; a grabbed
    /// corner snaps to the press point if that resize is allowed. Otherwise
    /// a press strictly inside the box starts a move.
    pub fn begin_gesture(&mut self, point: Point) -> bool {
        let radius = self.settings.handle_radius;
        let band = self.settings.hit_band();

        if let Some(handle) = self
            .handles()
            .into_iter()
            .find(|h| h.hit(point, radius, band))
        {
            let mode = handle.role.resize_mode();
            log::debug!("Grabbed {:?} handle at {:?}", handle.role, point);
            self.mode = mode;
            return self.apply_resize(mode, point);
        }

        if interior_contains(&self.outline_path(), point) {
            log::debug!("Started moving box from {:?}", point);
            self.mode = EditMode::Move { last_point: point };
        } else {
            self.mode = EditMode::Idle;
        }
        false
    }

    /// Drag: apply the latched mode to a new pointer sample.
    pub fn update_gesture(&mut self, point: Point) -> bool {
        match self.mode {
            EditMode::Idle => false,
            EditMode::Move { last_point } => {
                let changed = self.move_box(point, last_point);
                self.mode = EditMode::Move { last_point: point };
                changed
            }
            mode => self.apply_resize(mode, point),
        }
    }

    /// Release: back to idle, geometry untouched.
    pub fn end_gesture(&mut self) {
        if !self.mode.is_idle() {
            log::debug!(
                "Finished {:?}, box is {:?}..{:?}",
                self.mode,
                self.point_a,
                self.point_b
            );
        }
        self.mode = EditMode::Idle;
    }

    /// Corners a resize in `mode` would produce for `point`, or `None` if
    /// the sample violates a constraint. Pure: reads state, changes nothing.
    pub fn resize_candidate(&self, mode: EditMode, point: Point) -> Option<(Point, Point)> {
        let a = self.point_a;
        let b = self.point_b;
        let min_area = self.settings.min_area;
        let top_limit = self.container.min_y() + self.settings.margin;
        let bottom_limit = self.container.max_y() - self.settings.margin;

        match mode {
            EditMode::ResizeFromBottomRight => ((point.x - a.x) * (point.y - a.y) > min_area
                && point.y > a.y
                && point.x > a.x
                && point.y < bottom_limit)
                .then_some((a, point)),
            EditMode::ResizeFromTopRight => ((point.x - a.x) * (b.y - point.y) > min_area
                && point.y < b.y
                && point.x > a.x
                && point.y > top_limit)
                .then_some((Point::new(a.x, point.y), Point::new(point.x, b.y))),
            EditMode::ResizeFromTopLeft => ((b.x - point.x) * (b.y - point.y) > min_area
                && point.y < b.y
                && point.x < b.x
                && point.y > top_limit)
                .then_some((point, b)),
            EditMode::ResizeFromBottomLeft => ((b.x - point.x) * (point.y - a.y) > min_area
                && point.y > a.y
                && point.x < b.x
                && point.y < bottom_limit)
                .then_some((Point::new(point.x, a.y), Point::new(b.x, point.y))),
            EditMode::Idle | EditMode::Move { .. } => None,
        }
    }

    fn apply_resize(&mut self, mode: EditMode, point: Point) -> bool {
        match self.resize_candidate(mode, point) {
            Some((a, b)) => {
                let changed = a != self.point_a || b != self.point_b;
                self.point_a = a;
                self.point_b = b;
                changed
            }
            None => {
                log::trace!("Rejected {:?} sample at {:?}", mode, point);
                false
            }
        }
    }

    fn move_box(&mut self, point: Point, last_point: Point) -> bool {
        let outline = self.outline_path();
        let moved = match self.settings.move_strategy {
            MoveStrategy::Delta => Some(translate_by_last_delta(&outline, point, last_point)),
            MoveStrategy::Projection => translate_along_anchor_segment(&outline, point, last_point),
        };
        let Some((mut start, mut end)) = moved.as_ref().and_then(farthest_from_first) else {
            return false;
        };

        // Clamping an edge pins the opposite coordinate to its previous
        // value, so the box shrinks instead of leaving the container.
        let m = self.settings.margin;
        let c = self.container;
        if start.y < c.min_y() + m {
            start.y = c.min_y() + m;
            end.y = self.point_b.y;
        }
        if start.x < c.min_x() + m {
            start.x = c.min_x() + m;
            end.x = self.point_b.x;
        }
        if end.y > c.max_y() - m {
            end.y = c.max_y() - m;
            start.y = self.point_a.y;
        }
        if end.x > c.max_x() - m {
            end.x = c.max_x() - m;
            start.x = self.point_a.x;
        }

        if !(start.x < end.x && start.y < end.y) {
            log::trace!("Rejected move to {:?}..{:?}", start, end);
            return false;
        }

        let changed = start != self.point_a || end != self.point_b;
        self.point_a = start;
        self.point_b = end;
        changed
    }

    /// Current corners as `(top_left, bottom_right)`.
    pub fn corners(&self) -> (Point, Point) {
        (self.point_a, self.point_b)
    }

    pub fn current_top_left(&self) -> Point {
        self.point_a
    }

    /// Approximate center of the current outline.
    pub fn current_center(&self) -> Point {
        approximate_center(&self.outline_path())
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Outline path rebuilt from the corners.
    pub fn outline_path(&self) -> Path {
        rectangle_path(self.point_a, self.point_b)
    }

    /// The four handles, in hit-test priority order.
    pub fn handles(&self) -> [Handle; 4] {
        HandleRole::PRIORITY.map(|role| Handle::new(role, role.position(self.point_a, self.point_b)))
    }

    /// Attach a category label. Replaces any previous label; geometry is
    /// not touched.
    pub fn attach_label(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Attached label {:?}", text);
        self.label = Some(text);
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Where the label frame goes: just below the outline's bottom-left
    /// vertex.
    pub fn label_origin(&self) -> Option<Point> {
        vertices(&self.outline_path())
            .nth(3)
            .map(|p| p.offset(0.0, label::OFFSET_Y))
    }

    /// Everything the presentation layer has to paint, in order: outline,
    /// the four handles, then the label if one is attached.
    pub fn render(&self) -> Overlay {
        let s = &self.settings;
        let mut overlay = Overlay::new();

        overlay.push(rectangle_outline(
            self.point_a,
            self.point_b,
            s.box_color,
            s.stroke_width,
        ));

        for handle in self.handles() {
            let color = if handle.role.is_visible() {
                s.box_color
            } else {
                Color::TRANSPARENT
            };
            overlay.push(circle_handle(
                handle.center,
                color,
                s.stroke_width,
                s.handle_radius,
            ));
        }

        if let (Some(text), Some(origin)) = (self.label.as_deref(), self.label_origin()) {
            let style = TextStyle {
                font_size: label::FONT_SIZE,
                color: Color::WHITE,
                background: Color::BLACK.with_alpha(label::BACKGROUND_ALPHA),
                corner_radius: label::CORNER_RADIUS,
            };
            overlay.push(text_label(origin, label::WIDTH, label::HEIGHT, text, style));
        }

        overlay
    }
}
