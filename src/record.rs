//! Annotation record handed to the external writer.
//!
//! The record pairs the chosen label with two points taken from the editor,
//! the top-left corner and the approximate center, scaled from display
//! space into image pixels.

use boxtag_geom::Point;
use serde::{Deserialize, Serialize};

use crate::config::ExportSettings;
use crate::editor::BoxEditor;

/// Empty flags object; always serialised as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {}

/// One labelled shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub label: String,
    /// `[top_left, center]`, each as `[x, y]`
    pub points: Vec<[f32; 2]>,
    pub group_id: Option<u32>,
    pub shape_type: String,
    pub flags: Flags,
}

/// Metadata of the photo being annotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Where the writer stores the image
    pub path: String,
    /// Base64 of the image file bytes
    #[serde(default)]
    pub data: String,
    pub width: u32,
    pub height: u32,
}

/// The full record in the shape the dataset tooling expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub version: String,
    pub flags: Flags,
    pub shapes: Vec<ShapeRecord>,
    pub image_path: String,
    pub image_data: String,
    pub image_height: u32,
    pub image_width: u32,
}

/// Proportion between image pixels and displayed units.
pub fn display_scale(image_height: u32, displayed_height: f32) -> Result<f32, RecordError> {
    if !(displayed_height > 0.0) || !displayed_height.is_finite() {
        return Err(RecordError::InvalidScale { displayed_height });
    }
    Ok(image_height as f32 / displayed_height)
}

impl AnnotationRecord {
    /// Build a record from two display-space points.
    pub fn from_points(
        top_left: Point,
        center: Point,
        label: &str,
        image: &ImageInfo,
        scale: f32,
        export: &ExportSettings,
    ) -> Self {
        let top_left = top_left.scaled(scale);
        let center = center.scaled(scale);

        Self {
            version: export.version.clone(),
            flags: Flags::default(),
            shapes: vec![ShapeRecord {
                label: label.to_string(),
                points: vec![[top_left.x, top_left.y], [center.x, center.y]],
                group_id: None,
                shape_type: export.shape_type.clone(),
                flags: Flags::default(),
            }],
            image_path: image.path.clone(),
            image_data: image.data.clone(),
            image_height: image.height,
            image_width: image.width,
        }
    }

    /// Build a record from the editor's current box.
    pub fn from_editor(
        editor: &BoxEditor,
        label: &str,
        image: &ImageInfo,
        scale: f32,
        export: &ExportSettings,
    ) -> Self {
        let record = Self::from_points(
            editor.current_top_left(),
            editor.current_center(),
            label,
            image,
            scale,
            export,
        );
        log::info!(
            "Built annotation record for {:?}: points {:?}",
            label,
            record.shapes[0].points
        );
        record
    }

    /// Serialize with pretty printing.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors that can occur while producing a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The display height cannot be used as a divisor
    #[error("Invalid displayed height {displayed_height}")]
    InvalidScale { displayed_height: f32 },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
