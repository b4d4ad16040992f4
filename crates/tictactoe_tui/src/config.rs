//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives log output (the terminal is owned by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default tracing filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Colour names for marks and highlights.
    #[serde(default)]
    theme: Theme,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_level: default_log_level(),
            theme: Theme::default(),
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
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads `path` if it exists; `Ok(None)` means the caller should use defaults.
    ///
    /// Nothing is logged here because the log file itself comes from the
    /// config, so the subscriber is not installed yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Replaces the log file path (command-line override).
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Colour names as written in the config file.
///
/// Any name ratatui understands works: `red`, `lightgreen`, `#dcffdc`, ...
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Colour of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,
    /// Colour of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,
    /// Background of the three winning cells.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,
    /// Border colour of the selected cell.
    #[serde(default = "default_cursor_color")]
    cursor_color: String,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "lightgreen".to_string()
}

fn default_cursor_color() -> String {
    "yellow".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            cursor_color: default_cursor_color(),
        }
    }
}

impl Theme {
    /// Resolves every colour name.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
            cursor: parse_color("cursor_color", &self.cursor_color)?,
        })
    }
}

fn parse_color(field: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Unknown colour {:?} for {}", name, field)))
}

/// Resolved colours used while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Winning cells background.
    pub highlight: Color,
    /// Selected cell border.
    pub cursor: Color,
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

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml("").expect("empty config");
        assert_eq!(config, TuiConfig::default());
        let palette = config.theme().palette().expect("palette");
        assert_eq!(palette.highlight, Color::LightGreen);
        assert_eq!(palette.x, Color::Blue);
    }

    #[test]
    fn test_partial_theme() {
        let config = TuiConfig::from_toml(
            r##"
            log_level = "debug"

            [theme]
            highlight_color = "#dcffdc"
            "##,
        )
        .expect("valid config");

        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.theme().x_color(), "blue");
        let palette = config.theme().palette().expect("palette");
        assert_eq!(palette.highlight, Color::Rgb(0xdc, 0xff, 0xdc));
    }

    #[test]
    fn test_unknown_colour_rejected() {
        let err = TuiConfig::from_toml("[theme]\nx_color = \"not-a-colour\"\n").unwrap_err();
        assert!(err.message.contains("x_color"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = TuiConfig::from_toml("log_level = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
