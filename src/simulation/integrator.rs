//! Fixed-step explicit updates for the box simulation
//!
//! `update` splits one step into a drift at the start and a kick at the
//! end, with collisions in between. Positions therefore move with the
//! velocity left over from the previous step (semi-implicit Euler).

use log::warn;

use super::states::{Body, NVec3};

/// Drift: x_n+1 = x_n + dt * v_n
pub fn drift(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        b.x += b.v * dt;
    }
}

/// Kick: v_n+1 = v_n + dt * a_n
///
/// A body whose new velocity would not be finite keeps its old one.
pub fn kick(bodies: &mut [Body], accels: &[NVec3], dt: f64) {
    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        let v = b.v + a * dt;
        if v.iter().all(|c| c.is_finite()) {
            b.v = v;
        } else {
            warn!("body {}: dropped non-finite velocity update {:?}", b.id(), a * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Color;

    #[test]
    fn drift_moves_by_velocity_times_dt() {
        let mut bodies = vec![Body::new(1.0, 1.0, Color::default(), None)
            .unwrap()
            .with_velocity(NVec3::new(1.0, -2.0, 0.5))
            .unwrap()];
        drift(&mut bodies, 0.5);
        assert_eq!(bodies[0].position(), NVec3::new(0.5, -1.0, 0.25));
        assert_eq!(bodies[0].velocity(), NVec3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn kick_adds_acceleration_times_dt() {
        let mut bodies = vec![Body::new(1.0, 1.0, Color::default(), None).unwrap()];
        kick(&mut bodies, &[NVec3::new(0.0, 4.0, 0.0)], 0.25);
        assert_eq!(bodies[0].velocity(), NVec3::new(0.0, 1.0, 0.0));
        assert_eq!(bodies[0].position(), NVec3::zeros());
    }

    #[test]
    fn kick_keeps_velocity_on_overflow() {
        let mut bodies = vec![Body::new(1.0, 1.0, Color::default(), None)
            .unwrap()
            .with_velocity(NVec3::new(1.0, 0.0, 0.0))
            .unwrap()];
        kick(&mut bodies, &[NVec3::new(f64::MAX, 0.0, 0.0)], 10.0);
        assert_eq!(bodies[0].velocity(), NVec3::new(1.0, 0.0, 0.0));
    }
}
