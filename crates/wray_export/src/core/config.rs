//! # Export Configuration
//!
//! Settings that select where a scene file is written and in which syntax.
//!
//! ## Design Goals
//!
//! - **Serializable**: Loadable from TOML or RON through [`Config`]
//! - **Type Safe**: The output format is an enum, precision follows from it
//!
//! The numeric precision and the epsilon constant are part of the renderer's file
//! contract and are deliberately not configurable.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use crate::config::{Config, ConfigError};

/// File name used when no destination is configured
pub const DEFAULT_OUTPUT_FILE: &str = "scene.wray-scene";

/// # Output Format
///
/// Selects which syntax the exporter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON-like nested object, 6 decimal digits
    #[default]
    Strict,
    /// JavaScript object literal with constructor calls, 4 decimal digits
    Script,
}

impl ExportFormat {
    /// Number of decimal digits every float is written with
    pub const fn precision(self) -> usize {
        match self {
            Self::Strict => 6,
            Self::Script => 4,
        }
    }

    /// Lowercase name as used in config files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "json" => Ok(Self::Strict),
            "script" | "js" => Ok(Self::Script),
            other => Err(ConfigError::InvalidValue(format!("unknown export format '{other}'"))),
        }
    }
}

/// # Export Configuration
///
/// Top-level configuration for a single export run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination file for [`crate::export::SceneExporter::export_to_file`]
    pub output_path: PathBuf,
    /// Syntax of the emitted file
    pub format: ExportFormat,
    /// Default log filter for hosts that initialize logging from this config
    pub log_level: String,
}

impl ExportConfig {
    /// Create a configuration with the default destination and strict format
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: ExportFormat::default(),
            log_level: "info".to_string(),
        }
    }

    /// Set the destination file
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Destination file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("output path cannot be empty".to_string()));
        }

        if self.output_path.file_name().is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "output path '{}' does not name a file",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ExportConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_path(), Path::new("scene.wray-scene"));
        assert_eq!(config.format, ExportFormat::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_is_fixed_per_format() {
        assert_eq!(ExportFormat::Strict.precision(), 6);
        assert_eq!(ExportFormat::Script.precision(), 4);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("strict".parse::<ExportFormat>().unwrap(), ExportFormat::Strict);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Strict);
        assert_eq!(" script ".parse::<ExportFormat>().unwrap(), ExportFormat::Script);
        assert_eq!("js".parse::<ExportFormat>().unwrap(), ExportFormat::Script);
        assert!("obj".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let config = ExportConfig::new().with_output_path("");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_parse_toml() {
        let config: ExportConfig = toml::from_str(
            r#"
output_path = "out/monkey.wray-scene"
format = "script"
"#,
        )
        .unwrap();

        assert_eq!(config.output_path(), Path::new("out/monkey.wray-scene"));
        assert_eq!(config.format, ExportFormat::Script);
        // Missing keys fall back to defaults
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_ron() {
        let config: ExportConfig = ron::from_str(
            r#"(output_path: "a.wray-scene", format: strict, log_level: "debug")"#,
        )
        .unwrap();

        assert_eq!(config.output_path(), Path::new("a.wray-scene"));
        assert_eq!(config.format, ExportFormat::Strict);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("wray_export_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let config = ExportConfig::new()
            .with_output_path("scene.js")
            .with_format(ExportFormat::Script)
            .with_log_level("warn");

        for name in ["export.toml", "export.ron"] {
            let path = dir.join(name);
            config.save_to_file(&path).unwrap();
            let loaded = ExportConfig::load_from_file(&path).unwrap();
            assert_eq!(loaded, config);
        }

        let unsupported = config.save_to_file(dir.join("export.yaml"));
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
