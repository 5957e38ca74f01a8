//! Configuration types for loading box scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`WorldConfig`]    – box size, physical constants, collision response
//! - [`RunConfig`]      – fixed step size and step count for the headless driver
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference three-body scene:
//!
//! ```yaml
//! world:
//!   box_size: 10.0          # cube edge length, centred on the origin
//!   G: 0.1                  # gravitational constant
//!   wall_restitution: 0.8
//!   body_restitution: 0.8   # used by "restitution" only
//!   collision: "legacy"     # or "restitution"
//!
//! run:
//!   dt: 0.016               # seconds per step
//!   steps: 600
//!   log_every: 60
//!
//! bodies:
//!   - radius: 1.1
//!     mass: 1.0
//!     color: 0xff0000
//!     x: [-2.0, 0.0, 0.0]
//!   - radius: 1.0
//!     mass: 1.0
//!     color: 0x00ff00
//!     x: [-1.0, 3.0, 1.0]
//! ```
//!
//! Every `world` and `run` field is optional. A body without `x` starts at
//! the origin, without `v` at rest.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::states::Color;

/// Pairwise collision response
/// `collision: "legacy"` or `collision: "restitution"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionModel {
    /// `j = 2 vn / (m_i + m_j)`, `v_i -= j m_i n`, `v_j += j m_j n`; restitution unused
    #[default]
    #[serde(rename = "legacy")]
    Legacy,

    /// Inverse-mass impulse `j = -(1 + e) vn / (1/m_i + 1/m_j)` with `e = body_restitution`
    #[serde(rename = "restitution")]
    Restitution,
}

/// World-level configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WorldConfig {
    pub box_size: Option<f64>,
    #[serde(rename = "G")]
    pub g: Option<f64>,
    pub wall_restitution: Option<f64>,
    pub body_restitution: Option<f64>,
    pub collision: Option<CollisionModel>,
}

/// Fixed-step driver settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub dt: f64, // seconds per update
    pub steps: usize, // number of updates
    pub log_every: usize, // read-back period in steps, 0 disables
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            steps: 600,
            log_every: 60,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub radius: f64,
    pub mass: f64,
    #[serde(default)]
    pub color: Color,
    pub x: Option<[f64; 3]>, // initial position, origin when absent
    pub v: Option<[f64; 3]>, // initial velocity, zero when absent
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
