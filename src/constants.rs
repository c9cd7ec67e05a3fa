//! Default geometry constants for the box editor.
//!
//! All of these are overridable through [`crate::config::EditorSettings`].

/// Side length of the box created at session start.
pub const INITIAL_BOX_SIZE: f32 = 100.0;

/// Distance the box keeps from every container edge.
pub const CONTAINER_MARGIN: f32 = 5.0;

/// Smallest area a resize may produce (exclusive).
pub const MIN_BOX_AREA: f32 = 3000.0;

/// Radius of the corner handles.
pub const HANDLE_RADIUS: f32 = 7.0;

/// Stroke width used to widen a handle's outline for hit testing.
pub const HIT_LINE_WIDTH: f32 = 15.0;

/// Multiplier applied to [`HIT_LINE_WIDTH`].
pub const HIT_WIDTH_FACTOR: f32 = 1.5;

/// Stroke width for the outline and handles.
pub const STROKE_WIDTH: f32 = 3.0;

/// Label frame geometry, relative to the bottom-left corner.
pub mod label {
    pub const OFFSET_Y: f32 = 5.0;
    pub const WIDTH: f32 = 100.0;
    pub const HEIGHT: f32 = 15.0;
    pub const FONT_SIZE: f32 = 12.0;
    pub const CORNER_RADIUS: f32 = 3.0;
    pub const BACKGROUND_ALPHA: f32 = 0.5;
}
