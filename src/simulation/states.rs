//! Core state types for the box simulation.
//!
//! - `Body`   a sphere with mass, position and velocity
//! - `BodyId` stable handle used for identity (removal, duplicate checks)
//! - `Color`  opaque presentation attribute carried through untouched

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::{Error, Result};

pub type NVec3 = Vector3<f64>;

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a body, assigned once at construction.
///
/// Two bodies with identical radius/mass/position are still distinct;
/// a clone keeps the id of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    fn next() -> Self {
        BodyId(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 0xRRGGBB colour. The simulation never reads it.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Color(pub u32);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

pub(crate) fn ensure_finite(v: &NVec3, what: &str) -> Result<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite(format!("{what} must be finite, got {v:?}")))
    }
}

/// A clone is the same body: it keeps the source's [`BodyId`]. One
/// `Simulator` rejects it as a duplicate, but nothing stops a host from
/// adding the source and a clone to two different simulators; keeping an
/// identity in one simulator at a time is the host's responsibility.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) id: BodyId,
    pub(crate) x: NVec3, // position
    pub(crate) v: NVec3, // velocity
    m: f64, // mass
    radius: f64, // collision radius
    color: Color,
}

impl Body {
    /// Create a body at rest.
    ///
    /// `position` defaults to the origin. Radius and mass must be finite
    /// and strictly positive; there is no clamping.
    pub fn new(radius: f64, mass: f64, color: Color, position: Option<NVec3>) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam(format!("radius must be finite and > 0, got {radius}")));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam(format!("mass must be finite and > 0, got {mass}")));
        }
        let x = position.unwrap_or_else(NVec3::zeros);
        ensure_finite(&x, "position")?;

        Ok(Self {
            id: BodyId::next(),
            x,
            v: NVec3::zeros(),
            m: mass,
            radius,
            color,
        })
    }

    /// Builder form of [`Body::set_velocity`].
    pub fn with_velocity(mut self, v: NVec3) -> Result<Self> {
        self.set_velocity(v)?;
        Ok(self)
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the position. Only finiteness is checked; the box is not.
    pub fn set_position(&mut self, x: NVec3) -> Result<()> {
        ensure_finite(&x, "position")?;
        self.x = x;
        Ok(())
    }

    pub fn set_velocity(&mut self, v: NVec3) -> Result<()> {
        ensure_finite(&v, "velocity")?;
        self.v = v;
        Ok(())
    }

    /// 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// m v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_defaults_to_origin_at_rest() -> Result<()> {
        let b = Body::new(1.0, 2.0, Color(0xff0000), None)?;
        assert_eq!(b.position(), NVec3::zeros());
        assert_eq!(b.velocity(), NVec3::zeros());
        assert_eq!(b.radius(), 1.0);
        assert_eq!(b.mass(), 2.0);
        assert_eq!(b.color(), Color(0xff0000));
        Ok(())
    }

    #[test]
    fn non_positive_radius_rejected() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Body::new(r, 1.0, Color::default(), None).unwrap_err();
            assert!(err.to_string().contains("radius"), "radius {r} accepted");
        }
    }

    #[test]
    fn non_positive_mass_rejected() {
        for m in [0.0, -2.0, f64::NAN] {
            let err = Body::new(1.0, m, Color::default(), None).unwrap_err();
            assert!(err.to_string().contains("mass"), "mass {m} accepted");
        }
    }

    #[test]
    fn non_finite_initial_state_rejected() {
        let pos = NVec3::new(0.0, f64::NAN, 0.0);
        assert!(matches!(
            Body::new(1.0, 1.0, Color::default(), Some(pos)),
            Err(Error::NonFinite(_))
        ));

        let vel = NVec3::new(f64::INFINITY, 0.0, 0.0);
        let b = Body::new(1.0, 1.0, Color::default(), None).unwrap();
        assert!(matches!(b.with_velocity(vel), Err(Error::NonFinite(_))));
    }

    #[test]
    fn set_position_replaces_unconditionally() -> Result<()> {
        let mut b = Body::new(1.0, 1.0, Color::default(), None)?;
        b.set_position(NVec3::new(100.0, -100.0, 3.0))?;
        assert_eq!(b.position(), NVec3::new(100.0, -100.0, 3.0));

        let before = b.position();
        assert!(b.set_position(NVec3::new(f64::NAN, 0.0, 0.0)).is_err());
        assert_eq!(b.position(), before);
        Ok(())
    }

    #[test]
    fn ids_are_unique_and_survive_clone() -> Result<()> {
        let a = Body::new(1.0, 1.0, Color::default(), None)?;
        let b = Body::new(1.0, 1.0, Color::default(), None)?;
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
        Ok(())
    }

    #[test]
    fn kinetic_energy_and_momentum() -> Result<()> {
        // |v|^2 = 25, KE = 0.5 * 2 * 25
        let b = Body::new(1.0, 2.0, Color::default(), None)?
            .with_velocity(NVec3::new(3.0, 4.0, 0.0))?;
        assert!((b.kinetic_energy() - 25.0).abs() < 1e-12);
        assert_eq!(b.momentum(), NVec3::new(6.0, 8.0, 0.0));
        Ok(())
    }
}
