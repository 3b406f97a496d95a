//! Reporter configuration
//!
//! Parses an optional TOML file such as:
//!
//! ```toml
//! width = 120
//! color = "never"
//! ```

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::console::DEFAULT_WIDTH;

/// Narrowest accepted display width
pub const MIN_WIDTH: usize = 40;
/// Widest accepted display width
pub const MAX_WIDTH: usize = 1000;

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no for the current process
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Display settings shared by every report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Display width of panels and tables
    #[serde(default = "default_width")]
    pub width: usize,
    /// Colour handling
    #[serde(default)]
    pub color: ColorMode,
}

const fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            color: ColorMode::default(),
        }
    }
}

impl ReporterConfig {
    /// Parse a reporter config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse reporter config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse reporter config")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, re-validating the result
    pub fn with_overrides(mut self, width: Option<usize>, color: Option<ColorMode>) -> Result<Self> {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(color) = color {
            self.color = color;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            bail!(
                "Invalid width {}: must be at least {MIN_WIDTH} columns",
                self.width
            );
        }
        if self.width > MAX_WIDTH {
            bail!(
                "Invalid width {}: must be at most {MAX_WIDTH} columns",
                self.width
            );
        }
        Ok(())
    }
}
