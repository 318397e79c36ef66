// src/config.rs

//! Defines the configuration structures for the `gfx-demo` renderer.
//!
//! Every struct carries `#[serde(default)]`, so a configuration file may
//! name any subset of keys; the rest keep their defaults. Colors are given
//! as strings (`"#rrggbb"`, a color name, or `"transparent"`) and vectors as
//! `{ "x": .., "y": .. }` objects.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Color;
use crate::font::default_font;
use crate::text::{Alignment, Format};
use crate::vector::Vector;

// --- Top-Level Configuration Structure ---

/// The complete configuration of a demo run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// The in-memory surface everything is drawn on.
    pub canvas: CanvasConfig,
    /// Layout of the demo message.
    pub text: TextConfig,
    /// What the demo scene contains and how it is composed.
    pub scene: SceneConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Config::from_json(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

// --- Canvas Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: i16,
    pub height: i16,
    /// Color the canvas is cleared to before drawing.
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 96,
            height: 64,
            background: Color::WHITE,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Vector {
        Vector {
            x: self.width,
            y: self.height,
        }
    }
}

// --- Text Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub horizontal: Alignment,
    pub vertical: Alignment,
    pub wrap: bool,
    pub spacing: Vector,
    pub top_left_margin: Vector,
    pub bottom_right_margin: Vector,
    pub foreground: Color,
    pub background: Color,
}

impl Default for TextConfig {
    fn default() -> Self {
        let format = Format::default();
        TextConfig {
            horizontal: Alignment::Centre,
            vertical: Alignment::Centre,
            wrap: true,
            spacing: format.spacing,
            top_left_margin: format.top_left_margin,
            bottom_right_margin: format.bottom_right_margin,
            foreground: format.foreground,
            background: format.background,
        }
    }
}

impl TextConfig {
    /// The text format these settings describe, using the built-in font.
    pub fn format(&self) -> Format<'static> {
        Format::new(default_font())
            .with_alignment(self.horizontal, self.vertical)
            .with_wrap(self.wrap)
            .with_spacing(self.spacing)
            .with_margins(self.top_left_margin, self.bottom_right_margin)
            .with_colors(self.foreground, self.background)
    }
}

// --- Scene Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Text drawn in the bottom panel.
    pub message: String,
    /// Route drawing through a `Buffer` that is flushed once at the end.
    pub buffered: bool,
    /// Draw the second panel through a mirrored subframe.
    pub mirrored: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            message: "Hello, world!".to_string(),
            buffered: true,
            mirrored: true,
        }
    }
}
