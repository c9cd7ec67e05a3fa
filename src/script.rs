//! Gesture replay scripts.
//!
//! A script captures one annotation session: the container, the initial
//! center, the pointer events in delivery order, the chosen label, and the
//! photo's metadata. Replaying it drives a [`BoxEditor`] exactly as live
//! input would and yields the resulting record.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use boxtag_geom::{Bounds, Overlay, Point};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, ConfigError};
use crate::editor::{BoxEditor, PointerEvent};
use crate::record::{AnnotationRecord, ImageInfo, RecordError, display_scale};

/// A recorded annotation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Display area the box must stay inside
    pub container: Bounds,
    /// Initial box center; defaults to the container center
    #[serde(default)]
    pub center: Option<Point>,
    /// Height the photo is displayed at; defaults to the container height
    #[serde(default)]
    pub displayed_height: Option<f32>,
    /// Pointer events in delivery order
    pub events: Vec<PointerEvent>,
    /// Label picked for the box
    pub label: String,
    /// Photo metadata
    pub image: ImageInfo,
}

/// Result of replaying a script.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub record: AnnotationRecord,
    pub overlay: Overlay,
    /// Number of events that changed the box
    pub accepted_edits: usize,
}

impl GestureScript {
    /// Read a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        let script: Self = serde_json::from_str(&json)?;
        script.validate()?;
        log::debug!(
            "Loaded script {:?} with {} events",
            path,
            script.events.len()
        );
        Ok(script)
    }

    fn validate(&self) -> Result<(), ReplayError> {
        if !(self.container.width > 0.0 && self.container.height > 0.0) {
            return Err(ReplayError::Invalid(format!(
                "container must have a positive size, got {}x{}",
                self.container.width, self.container.height
            )));
        }
        Ok(())
    }

    /// Take the image dimensions and the base64 payload from an image file.
    pub fn use_image_file(&mut self, path: &Path) -> Result<(), ReplayError> {
        let bytes = std::fs::read(path)?;
        let (width, height) = image::ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()?
            .into_dimensions()?;
        log::debug!(
            "Read {}x{} ({} bytes) from {:?}",
            width,
            height,
            bytes.len(),
            path
        );
        self.image.width = width;
        self.image.height = height;
        self.image.data = STANDARD.encode(&bytes);
        Ok(())
    }

    /// Drive an editor through the events and build the record.
    pub fn replay(&self, config: &AppConfig) -> Result<ReplayOutcome, ReplayError> {
        if !config.has_tag(&self.label) {
            return Err(ReplayError::UnknownLabel(self.label.clone()));
        }
        let center = self.center.unwrap_or_else(|| self.container.center());
        let mut editor = BoxEditor::with_settings(center, self.container, config.editor.clone())?;

        let accepted_edits = self
            .events
            .iter()
            .filter(|event| editor.handle_event(**event))
            .count();
        editor.end_gesture();
        editor.attach_label(self.label.as_str());

        let displayed_height = self.displayed_height.unwrap_or(self.container.height);
        let scale = display_scale(self.image.height, displayed_height)?;
        let record =
            AnnotationRecord::from_editor(&editor, &self.label, &self.image, scale, &config.export);

        log::info!(
            "Replayed {} events ({} accepted edits), final box {:?}",
            self.events.len(),
            accepted_edits,
            editor.corners()
        );

        Ok(ReplayOutcome {
            record,
            overlay: editor.render(),
            accepted_edits,
        })
    }
}

/// Errors that can occur while replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),

    /// The label is not in the configured tag catalogue
    #[error("Unknown label '{0}'")]
    UnknownLabel(String),

    #[error("Invalid script: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "container": { "x": 0.0, "y": 0.0, "width": 400.0, "height": 800.0 },
        "center": { "x": 200.0, "y": 300.0 },
        "events": [
            { "phase": "start", "position": { "x": 250.0, "y": 350.0 } },
            { "phase": "update", "position": { "x": 300.0, "y": 400.0 } },
            { "phase": "update", "position": { "x": 160.0, "y": 260.0 } },
            { "phase": "end", "position": { "x": 300.0, "y": 400.0 } },
            { "phase": "start", "position": { "x": 200.0, "y": 300.0 } },
            { "phase": "update", "position": { "x": 210.0, "y": 310.0 } },
            { "phase": "end", "position": { "x": 210.0, "y": 310.0 } }
        ],
        "label": "02 HDPE",
        "image": { "path": "photo.jpg", "width": 800, "height": 1600 }
    }"#;

    #[test]
    fn test_replay_script() {
        let script: GestureScript = serde_json::from_str(SCRIPT).unwrap();
        let outcome = script.replay(&AppConfig::new()).unwrap();

        // One resize and one move; the press snaps the anchor onto itself
        // and the undersized sample is dropped.
        assert_eq!(outcome.accepted_edits, 2);
        // Label is drawn after the outline and the four handles.
        assert_eq!(outcome.overlay.len(), 6);

        // Box ends at (160,260)..(310,410); scale is 1600 / 800.
        let shape = &outcome.record.shapes[0];
        assert_eq!(shape.label, "02 HDPE");
        assert_eq!(shape.points, vec![[320.0, 520.0], [470.0, 670.0]]);
        assert_eq!(outcome.record.image_data, "");
    }

    #[test]
    fn test_image_file_fills_size_and_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        image::RgbImage::new(8, 16).save(&path).unwrap();

        let mut script: GestureScript = serde_json::from_str(SCRIPT).unwrap();
        script.displayed_height = Some(800.0);
        script.use_image_file(&path).unwrap();
        let outcome = script.replay(&AppConfig::new()).unwrap();

        assert_eq!(outcome.record.image_width, 8);
        assert_eq!(outcome.record.image_height, 16);
        let payload = STANDARD.decode(&outcome.record.image_data).unwrap();
        assert_eq!(payload, std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let mut script: GestureScript = serde_json::from_str(SCRIPT).unwrap();
        script.label = "2 hdpe".to_string();
        let err = script.replay(&AppConfig::new()).unwrap_err();
        assert!(matches!(err, ReplayError::UnknownLabel(ref l) if l == "2 hdpe"));
    }

    #[test]
    fn test_defaults_to_container_center() {
        let mut script: GestureScript = serde_json::from_str(SCRIPT).unwrap();
        script.center = None;
        script.events.clear();
        let outcome = script.replay(&AppConfig::new()).unwrap();
        // Center (200, 400), top-left (150, 350), doubled.
        assert_eq!(
            outcome.record.shapes[0].points,
            vec![[300.0, 700.0], [400.0, 800.0]]
        );
        assert_eq!(outcome.accepted_edits, 0);
    }

    #[test]
    fn test_load_rejects_empty_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, SCRIPT.replace("\"width\": 400.0", "\"width\": 0.0")).unwrap();
        assert!(matches!(
            GestureScript::load(&path),
            Err(ReplayError::Invalid(_))
        ));

        std::fs::write(&path, SCRIPT).unwrap();
        let script = GestureScript::load(&path).unwrap();
        assert_eq!(script.events.len(), 7);
    }
}
