//! Render pass configuration.
//!
//! A [`RenderConfig`] is an explicit value handed to the engine; nothing is
//! global, so several passes with different settings can coexist. Configs
//! can be written by hand as RON files; any field left out takes its
//! default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colors::{self, Color};
use crate::light::FillStyle;
use crate::math::Vec3;

/// Errors produced while reading configuration or scene files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("canvas may be at most {max}x{max}, got {width}x{height}")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },
    #[error("light direction must be non-zero and finite")]
    InvalidLight,
}

/// Largest accepted canvas width or height.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Everything a render pass needs to know up front.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// World-to-screen scale: `screen = (world + 1) * scale_ratio`.
    pub scale_ratio: f32,
    pub light_direction: Vec3,
    pub base_color: Color,
    pub edge_color: Color,
    pub background: Color,
    pub fill: bool,
    pub edges: bool,
    pub fill_style: FillStyle,
    /// Seed for [`FillStyle::Random`].
    pub seed: u64,
    /// Log every triangle as it is drawn.
    pub trace: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            scale_ratio: 250.0,
            light_direction: Vec3::BACK,
            base_color: colors::WHITE,
            edge_color: colors::WHITE,
            background: colors::BLACK,
            fill: true,
            edges: false,
            fill_style: FillStyle::Shaded,
            seed: 0,
            trace: false,
        }
    }
}

impl RenderConfig {
    /// Load a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no render pass can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_CANVAS_DIMENSION || self.height > MAX_CANVAS_DIMENSION {
            return Err(ConfigError::CanvasTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_CANVAS_DIMENSION,
            });
        }
        let length = self.light_direction.magnitude();
        if !length.is_finite() || length == 0.0 {
            return Err(ConfigError::InvalidLight);
        }
        Ok(())
    }

    /// A warning when the scale ratio would map the unit cube past the
    /// canvas edges (more than half the width or height).
    pub fn scale_warning(&self) -> Option<String> {
        let half_width = (self.width / 2) as f32;
        let half_height = (self.height / 2) as f32;
        if self.scale_ratio > half_width || self.scale_ratio > half_height {
            Some(format!(
                "scale ratio {} exceeds half the {}x{} canvas; triangles may be clipped",
                self.scale_ratio, self.width, self.height
            ))
        } else {
            None
        }
    }
}
