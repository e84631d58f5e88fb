// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the crop selector, loaded from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::constant::{
    CONFIG_DIR, CONFIG_ENV, CONFIG_FILE, DEFAULT_JPEG_QUALITY, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};

/// Global configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory generated output names are placed in.
    pub default_output_dir: Option<PathBuf>,
    /// Pixels per scroll unit. `0.0` means a tenth of the visible size.
    pub scroll_increment: f32,
    /// Invert wheel direction.
    pub natural_scrolling: bool,
    /// Visible canvas width in pixels.
    pub viewport_width: u32,
    /// Visible canvas height in pixels.
    pub viewport_height: u32,
    /// Whether a crop may be taken before the pointer is released.
    pub allow_crop_while_selecting: bool,
    /// JPEG quality (1-100) for saved crops.
    pub jpeg_quality: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_dir: dirs::picture_dir().or_else(dirs::home_dir),
            scroll_increment: 0.0,
            natural_scrolling: false,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            allow_crop_while_selecting: true,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl AppConfig {
    /// Parse a YAML document into a sanitized config.
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(contents).context("invalid config YAML")?;
        Ok(config.sanitize())
    }

    /// Pull out-of-range values back into something usable.
    #[must_use]
    pub fn sanitize(mut self) -> Self {
        if !self.scroll_increment.is_finite() || self.scroll_increment < 0.0 {
            self.scroll_increment = 0.0;
        }
        if self.viewport_width == 0 {
            self.viewport_width = DEFAULT_VIEWPORT_WIDTH;
        }
        if self.viewport_height == 0 {
            self.viewport_height = DEFAULT_VIEWPORT_HEIGHT;
        }
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        self
    }
}

/// Loaded configuration together with where it came from.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration, optionally forcing a specific path.
///
/// Never fails: unreadable or malformed files are reported in `warnings`
/// and the next candidate (or the built-in defaults) is used instead.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        let parsed = fs::read_to_string(&candidate)
            .with_context(|| format!("failed to read config {}", candidate.display()))
            .and_then(|contents| AppConfig::from_yaml(&contents));

        match parsed {
            Ok(config) => {
                log::debug!("Loaded config from {}", candidate.display());
                return ConfigHandle {
                    config,
                    source: Some(candidate),
                    warnings,
                };
            }
            Err(err) => warnings.push(format!("{}: {err:#}", candidate.display())),
        }
    }

    ConfigHandle {
        config: AppConfig::default(),
        source: None,
        warnings,
    }
}

fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(CONFIG_DIR).join(CONFIG_FILE));
    }

    candidates
}
