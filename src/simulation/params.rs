//! Physical parameters of the box world
//!
//! `WorldParams` holds the tunables:
//! - cube edge length (`box_size`), from which the half extent is derived,
//! - gravitational constant `g`,
//! - restitution against the walls and between bodies,
//! - which pairwise collision response to use

use crate::configuration::config::CollisionModel;
use crate::error::{Error, Result};

pub const DEFAULT_BOX_SIZE: f64 = 10.0;
pub const DEFAULT_G: f64 = 0.1;
pub const DEFAULT_WALL_RESTITUTION: f64 = 0.8;
pub const DEFAULT_BODY_RESTITUTION: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct WorldParams {
    pub box_size: f64, // edge length of the cube centred on the origin
    pub g: f64, // gravitational constant
    pub wall_restitution: f64, // fraction of normal velocity kept on a wall hit
    pub body_restitution: f64, // only read by CollisionModel::Restitution
    pub collision_model: CollisionModel,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            g: DEFAULT_G,
            wall_restitution: DEFAULT_WALL_RESTITUTION,
            body_restitution: DEFAULT_BODY_RESTITUTION,
            collision_model: CollisionModel::Legacy,
        }
    }
}

impl WorldParams {
    /// Default parameters with a different box size.
    pub fn with_box_size(box_size: f64) -> Self {
        Self {
            box_size,
            ..Self::default()
        }
    }

    pub fn half_extent(&self) -> f64 {
        0.5 * self.box_size
    }

    pub fn validate(&self) -> Result<()> {
        if !self.box_size.is_finite() || self.box_size <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "box_size must be finite and > 0, got {}",
                self.box_size
            )));
        }
        if !self.g.is_finite() {
            return Err(Error::InvalidParam(format!("G must be finite, got {}", self.g)));
        }
        for (name, e) in [
            ("wall_restitution", self.wall_restitution),
            ("body_restitution", self.body_restitution),
        ] {
            if !e.is_finite() || e < 0.0 {
                return Err(Error::InvalidParam(format!("{name} must be finite and >= 0, got {e}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scene() {
        let p = WorldParams::default();
        assert_eq!(p.box_size, 10.0);
        assert_eq!(p.half_extent(), 5.0);
        assert_eq!(p.g, 0.1);
        assert_eq!(p.wall_restitution, 0.8);
        assert_eq!(p.body_restitution, 0.8);
        assert_eq!(p.collision_model, CollisionModel::Legacy);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn bad_box_size_rejected() {
        for s in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert!(WorldParams::with_box_size(s).validate().is_err(), "box {s} accepted");
        }
    }

    #[test]
    fn negative_restitution_rejected() {
        let p = WorldParams {
            wall_restitution: -0.1,
            ..WorldParams::default()
        };
        let msg = p.validate().unwrap_err().to_string();
        assert!(msg.contains("wall_restitution"));
    }
}
