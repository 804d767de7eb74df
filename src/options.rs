//! Runtime configuration with TOML file support.
//!
//! All tweakable settings (camera projection, viewport size, demo scene
//! layout, driver cadence) are consolidated here. Every sub-struct uses
//! `#[serde(default)]` so partial TOML files (e.g. only overriding
//! `[driver]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RaypickError;

/// Camera projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Eye distance from the origin along +z.
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 3.0,
        }
    }
}

/// Viewport size in physical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportOptions {
    /// Width in physical pixels.
    pub width: f32,
    /// Height in physical pixels.
    pub height: f32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Demo scene layout: three spheres on the x axis, bobbing vertically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Sphere radius.
    pub radius: f32,
    /// Distance between adjacent sphere centers on the x axis.
    pub spacing: f32,
    /// Peak vertical offset of the bobbing motion.
    pub bob_amplitude: f32,
    /// Per-sphere bobbing frequencies in radians per second.
    pub bob_frequencies: Vec<f32>,
    /// Material color for non-highlighted objects (RGB, 0..1).
    pub base_color: [f32; 3],
    /// Material color for highlighted objects (RGB, 0..1).
    pub highlight_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            spacing: 2.0,
            bob_amplitude: 1.5,
            bob_frequencies: vec![0.3, 0.8, 1.4],
            base_color: [1.0, 0.0, 0.0],
            highlight_color: [0.0, 0.0, 1.0],
        }
    }
}

/// Demo driver cadence and scripted input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriverOptions {
    /// Total frames to run.
    pub frames: u32,
    /// Frames per second of the fixed-timestep loop.
    pub frame_rate: f32,
    /// Seconds for one full pointer sweep across the viewport.
    pub sweep_period: f32,
    /// Seconds an object must stay hovered before the scripted click fires.
    pub click_dwell: f32,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_rate: 60.0,
            sweep_period: 8.0,
            click_dwell: 0.5,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Viewport size.
    pub viewport: ViewportOptions,
    /// Demo scene layout.
    pub scene: SceneOptions,
    /// Demo driver cadence.
    pub driver: DriverOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RaypickError> {
        let content =
            std::fs::read_to_string(path).map_err(RaypickError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RaypickError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RaypickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RaypickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RaypickError::Io)?;
        }
        std::fs::write(path, content).map_err(RaypickError::Io)
    }
}
