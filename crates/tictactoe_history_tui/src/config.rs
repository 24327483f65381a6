//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal UI, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Color for X marks (ratatui color name or `#rrggbb`).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_color() -> String {
    "red".to_string()
}

fn default_o_color() -> String {
    "green".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_history.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

/// Parsed colors for the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkColors {
    /// Color for X.
    pub x: Color,
    /// Color for O.
    pub o: Color,
}

impl Default for MarkColors {
    fn default() -> Self {
        Self {
            x: Color::Red,
            o: Color::Green,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Parses the configured mark colors.
    #[instrument(skip(self), fields(x = %self.x_color, o = %self.o_color))]
    pub fn mark_colors(&self) -> Result<MarkColors, ConfigError> {
        Ok(MarkColors {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
        })
    }
}

#[track_caller]
fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", field, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(
            config.mark_colors().expect("default colors"),
            MarkColors::default(),
        );
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = TuiConfig::from_toml("x_color = \"#ff8800\"\nlog_filter = \"debug\"\n")
            .expect("config parses");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.o_color(), "green");
        let colors = config.mark_colors().expect("colors parse");
        assert_eq!(colors.x, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(colors.o, Color::Green);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TuiConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let config = TuiConfig::from_toml("o_color = \"not-a-color\"").expect("config parses");
        let err = config.mark_colors().unwrap_err();
        assert!(err.message.contains("o_color"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_file = \"game.log\"").expect("write config");

        let config = TuiConfig::from_file(file.path()).expect("config loads");
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config =
            TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults used");
        assert_eq!(config, TuiConfig::default());
        assert!(TuiConfig::from_file(dir.path().join("absent.toml")).is_err());
    }
}
