//! boxtag - single-object manual image labeling.
//!
//! The user drags a rectangle over a photo, tags it with a category, and the
//! box is exported as an annotation record. Geometry primitives live in the
//! `boxtag_geom` crate; this crate owns the editor state machine and the
//! application around it.

pub mod config;
pub mod constants;
pub mod editor;
pub mod record;
pub mod script;

pub use boxtag_geom::{Bounds, Color, Overlay, OverlayItem, OverlayShape, Path, Point};
pub use config::{AppConfig, ConfigError, EditorSettings, LogLevel, MoveStrategy};
pub use editor::{BoxEditor, EditMode, GesturePhase, Handle, HandleRole, PointerEvent};
pub use record::{AnnotationRecord, ImageInfo, RecordError, ShapeRecord, display_scale};
pub use script::{GestureScript, ReplayError, ReplayOutcome};
