//! Configuration file support for boxtag.
//!
//! Editor tunables, export metadata and the tag catalogue are kept in a
//! versioned JSON file so a deployment can adjust them without a rebuild.

use std::path::Path;

use boxtag_geom::Color;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// How a `move` drag translates the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoveStrategy {
    /// Translate by the pointer delta since the previous sample.
    #[default]
    Delta,
    /// Slide along the anchor segment nearest the previous sample.
    Projection,
}

/// Geometry and styling of the box editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub initial_size: f32,
    pub margin: f32,
    pub min_area: f32,
    pub handle_radius: f32,
    pub hit_line_width: f32,
    pub hit_width_factor: f32,
    pub stroke_width: f32,
    pub box_color: Color,
    pub move_strategy: MoveStrategy,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            initial_size: constants::INITIAL_BOX_SIZE,
            margin: constants::CONTAINER_MARGIN,
            min_area: constants::MIN_BOX_AREA,
            handle_radius: constants::HANDLE_RADIUS,
            hit_line_width: constants::HIT_LINE_WIDTH,
            hit_width_factor: constants::HIT_WIDTH_FACTOR,
            stroke_width: constants::STROKE_WIDTH,
            box_color: Color::RED,
            move_strategy: MoveStrategy::default(),
        }
    }
}

impl EditorSettings {
    /// Reject values the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("initial_size", self.initial_size),
            ("min_area", self.min_area),
            ("handle_radius", self.handle_radius),
            ("stroke_width", self.stroke_width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "editor.{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("margin", self.margin),
            ("hit_line_width", self.hit_line_width),
            ("hit_width_factor", self.hit_width_factor),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "editor.{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Width of the band around a handle's rim that still counts as a hit.
    pub fn hit_band(&self) -> f32 {
        self.hit_line_width * self.hit_width_factor
    }
}

/// Metadata written into every annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Value of the record's `version` field
    pub version: String,
    /// Value of each shape's `shape_type` field
    pub shape_type: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            version: "4.5.12".to_string(),
            shape_type: "rectangle".to_string(),
        }
    }
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Box editor geometry
    #[serde(default)]
    pub editor: EditorSettings,

    /// Annotation record metadata
    #[serde(default)]
    pub export: ExportSettings,

    /// Labels offered by the tag picker
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

fn default_tags() -> Vec<String> {
    [
        "01 PET bottles",
        "01 PET other",
        "02 HDPE",
        "05 PP",
        "ALUM cans",
        "TIN",
        "GLASS",
        "PAP paper",
        "PAP cardboard",
        "Batteries",
        "Plastic cards",
        "Tooth brushes",
        "Electronics",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            editor: EditorSettings::default(),
            export: ExportSettings::default(),
            tags: default_tags(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        config.editor.validate()?;

        Ok(config)
    }

    /// Whether `label` is in the tag catalogue.
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t == label)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "boxtag-config.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("boxtag").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("boxtag")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
