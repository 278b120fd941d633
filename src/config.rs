//! View settings
//!
//! Optional TOML configuration for the presentation layer. The defaults
//! match the constants in `bounds` and `render`; a `fraction-distance.toml`
//! next to the invocation (or a `--config` path) overrides them.
//!
//! Example:
//! ```toml
//! [view]
//! padding = 0.05
//! min_width = 1.0
//! axis_width = 64
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::bounds::{DEFAULT_MIN_WIDTH, DEFAULT_PADDING};
use crate::render::{DEFAULT_AXIS_WIDTH, MIN_AXIS_WIDTH};

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),
    #[error("error parsing config data: {0}")]
    Parse(String),
}

type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for the number-line views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Margin added on each side of the data.
    pub padding: f64,
    /// Minimum total width of the fixed-width view.
    pub min_width: f64,
    /// Axis width in character cells.
    pub axis_width: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            padding: DEFAULT_PADDING,
            min_width: DEFAULT_MIN_WIDTH,
            axis_width: DEFAULT_AXIS_WIDTH,
        }
    }
}

/// File name searched in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "fraction-distance.toml";

/// Load settings from a TOML file. A missing or invalid file is a reported
/// error, never a silent fallback.
pub fn load_settings(path: &Path) -> Result<ViewSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
    parse_settings(&text)
}

/// Parse the settings TOML data.
pub fn parse_settings(toml_str: &str) -> Result<ViewSettings> {
    let parsed_toml: toml::Value =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let table = parsed_toml
        .as_table()
        .ok_or_else(|| ConfigError::Parse("Root is not a table".to_string()))?;

    let mut settings = ViewSettings::default();

    if let Some(view) = table.get("view") {
        let view_table = view
            .as_table()
            .ok_or_else(|| ConfigError::Parse("'view' is not a table".to_string()))?;

        if let Some(value) = view_table.get("padding") {
            settings.padding = read_float(value, "view.padding")?;
        }
        if let Some(value) = view_table.get("min_width") {
            settings.min_width = read_float(value, "view.min_width")?;
        }
        if let Some(value) = view_table.get("axis_width") {
            let width = value.as_integer().ok_or_else(|| {
                ConfigError::Parse("'view.axis_width' is not an integer".to_string())
            })?;
            settings.axis_width = usize::try_from(width).map_err(|_| {
                ConfigError::Parse("'view.axis_width' is out of range".to_string())
            })?;
        }
    }

    validate(&settings)?;
    Ok(settings)
}

fn read_float(value: &toml::Value, key: &str) -> Result<f64> {
    // integers are accepted where a float is expected, like `min_width = 2`
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
        .ok_or_else(|| ConfigError::Parse(format!("'{}' is not a number", key)))
}

fn validate(settings: &ViewSettings) -> Result<()> {
    if !(settings.padding > 0.0 && settings.padding.is_finite()) {
        return Err(ConfigError::Parse(
            "'view.padding' must be a positive number".to_string(),
        ));
    }
    if !(settings.min_width > 0.0 && settings.min_width.is_finite()) {
        return Err(ConfigError::Parse(
            "'view.min_width' must be a positive number".to_string(),
        ));
    }
    if settings.axis_width < MIN_AXIS_WIDTH {
        return Err(ConfigError::Parse(format!(
            "'view.axis_width' must be at least {}",
            MIN_AXIS_WIDTH
        )));
    }
    Ok(())
}
