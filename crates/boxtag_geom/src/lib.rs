//! boxtag_geom - geometry and drawable primitives for the box annotation editor.
//!
//! This crate has no application state. It provides:
//! - `Point` / `Bounds` value types
//! - a generic `Path` made of move/line/quad/cubic commands
//! - the path point model (vertex extraction and derived measurements)
//! - the box renderer, which turns corners into drawable overlay items

mod color;
mod overlay;
mod path;
pub mod path_points;
mod point;
pub mod renderer;

pub use color::Color;
pub use overlay::{Overlay, OverlayItem, OverlayShape, TextStyle};
pub use path::{Path, PathCommand};
pub use point::{Bounds, Point};
