//! Configuration types for loading a sphere scenario from YAML.
//!
//! A scenario file has these sections, all optional:
//!
//! - [`WindowConfig`]    – drawing surface size and title
//! - [`PhysicsConfig`]   – gravitational constant, restitution, dt clamp
//! - [`CameraConfig`]    – rotation speed and synthetic depth scale
//! - [`LightingConfig`]  – gradient layers and colors
//! - [`PlacementConfig`] – spheres placed at startup
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 800
//!   height: 600
//!   title: "Sphere gravity"
//!
//! physics:
//!   G: 66.743              # scaled for pixel distances
//!   restitution: 0.9
//!   max_dt: 0.1            # omit to keep the raw frame delta
//!
//! camera:
//!   rotation_speed: 0.0005 # radians per frame while an arrow key is held
//!   depth_divisor: 3.0     # z = (height/2 - click_y) / depth_divisor
//!
//! lighting:
//!   layers: 10
//!   emitter_color: [255, 255, 255]
//!   body_color: [100, 100, 100]
//!   background: [0, 0, 0]
//!
//! placements:
//!   - at: [400.0, 300.0]   # screen pixels, as if clicked
//!     radius: 20.0
//!     mass: 10.0
//!     speed: 0.0
//!     angle: 0.0           # degrees
//!     emits_light: false
//! ```
//!
//! Placements go through the same path as a click plus typed properties.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{DEFAULT_G, DEFAULT_RESTITUTION};
use crate::visualization::camera::DEFAULT_ROTATION_SPEED;
use crate::visualization::renderer::DEFAULT_LAYERS;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Sphere gravity".to_owned(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub restitution: f64, // collision bounciness
    pub max_dt: Option<f64>, // clamp for the frame delta
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            restitution: DEFAULT_RESTITUTION,
            max_dt: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub rotation_speed: f64,
    pub depth_divisor: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            depth_divisor: 3.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub layers: usize,
    pub emitter_color: [u8; 3],
    pub body_color: [u8; 3],
    pub background: [u8; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            emitter_color: [255, 255, 255],
            body_color: [100, 100, 100],
            background: [0, 0, 0],
        }
    }
}

/// A sphere placed at startup, equivalent to a click plus five typed values
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    pub at: [f64; 2],
    pub radius: f64,
    pub mass: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub angle: f64, // degrees
    #[serde(default)]
    pub emits_light: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub placements: Vec<PlacementConfig>,
}

impl SimConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid scenario YAML")
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).with_context(|| format!("invalid scenario YAML in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SimConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, SimConfig::default());
        assert_eq!(cfg.physics.g, 66.743);
        assert_eq!(cfg.physics.max_dt, None);
        assert_eq!(cfg.lighting.layers, 10);
    }

    #[test]
    fn partial_sections_and_placements() {
        let yaml = "
physics:
  G: 1.5
  max_dt: 0.05
placements:
  - at: [10.0, 20.0]
    radius: 3.0
    mass: 2.0
    emits_light: true
";
        let cfg = SimConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.physics.g, 1.5);
        assert_eq!(cfg.physics.restitution, 0.9);
        assert_eq!(cfg.physics.max_dt, Some(0.05));
        assert_eq!(cfg.placements.len(), 1);
        assert_eq!(cfg.placements[0].speed, 0.0);
        assert!(cfg.placements[0].emits_light);
    }

    #[test]
    fn placement_requires_radius_and_mass() {
        let yaml = "placements:\n  - at: [1.0, 1.0]\n    radius: 3.0\n";
        assert!(SimConfig::from_yaml_str(yaml).is_err());
    }
}
