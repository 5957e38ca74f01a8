//! Wall and body-body collision response
//!
//! Neither pass moves a body: overlapping spheres and spheres poking
//! through a wall stay where they are and only their velocities change.

use log::{debug, trace};

use crate::configuration::config::CollisionModel;
use crate::simulation::states::{Body, NVec3};

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Axes on which the sphere reaches past the half extent, as a bitmask
/// (bit 0 = x, bit 1 = y, bit 2 = z).
pub fn wall_contacts(body: &Body, half_extent: f64) -> u8 {
    let mut mask = 0u8;
    for axis in 0..3 {
        if body.x[axis].abs() + body.radius() > half_extent {
            mask |= 1 << axis;
        }
    }
    mask
}

/// Reflect each penetrating axis independently: `v[axis] *= -restitution`.
/// A corner hit flips two or three components in the same call.
///
/// Returns the number of bodies that touched at least one wall.
pub fn resolve_walls(bodies: &mut [Body], half_extent: f64, restitution: f64) -> usize {
    let mut hits = 0;
    for b in bodies.iter_mut() {
        let mask = wall_contacts(b, half_extent);
        if mask == 0 {
            continue;
        }
        hits += 1;
        for axis in 0..3 {
            if mask & (1 << axis) != 0 {
                b.v[axis] *= -restitution;
            }
        }
        debug!(
            "bounding box collision: body {} on {}",
            b.id(),
            AXES.iter()
                .enumerate()
                .filter(|(axis, _)| mask & (1 << *axis) != 0)
                .map(|(_, c)| *c)
                .collect::<String>()
        );
    }
    hits
}

/// Candidate pairs `(i, j)` with `i < j` in collection order.
///
/// This is the whole broad phase: every pair is a candidate. A spatial
/// structure can replace it as long as it yields the overlapping pairs in
/// the same order.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Strict sphere overlap test.
pub fn overlapping(a: &Body, b: &Body) -> bool {
    (b.x - a.x).norm() < a.radius() + b.radius()
}

/// Velocity changes `(dv_i, dv_j)` for an overlapping pair, or `None`
/// when the pair is separating (`vn > 0`).
///
/// The contact normal points from `a` to `b`. For coincident centres the
/// normal is zero, so `vn == 0` and both deltas are zero.
pub fn impulse(
    a: &Body,
    b: &Body,
    model: CollisionModel,
    restitution: f64,
) -> Option<(NVec3, NVec3)> {
    let delta = b.x - a.x;
    let distance = delta.norm();
    let normal = if distance > 0.0 { delta / distance } else { NVec3::zeros() };

    let rel_vel = b.v - a.v;
    let vn = rel_vel.dot(&normal);
    if vn > 0.0 {
        return None;
    }

    let (ma, mb) = (a.mass(), b.mass());
    match model {
        CollisionModel::Legacy => {
            let j = normal * (2.0 * vn / (ma + mb));
            Some((-(j * ma), j * mb))
        }
        CollisionModel::Restitution => {
            let j = -(1.0 + restitution) * vn / (1.0 / ma + 1.0 / mb);
            Some((-(normal * (j / ma)), normal * (j / mb)))
        }
    }
}

/// Resolve every overlapping candidate pair in order. Later pairs see the
/// velocities produced by earlier ones.
///
/// Returns the number of pairs that received an impulse.
pub fn resolve_bodies(bodies: &mut [Body], model: CollisionModel, restitution: f64) -> usize {
    let mut resolved = 0;
    for (i, j) in candidate_pairs(bodies.len()) {
        let (a, b) = (&bodies[i], &bodies[j]);
        if !overlapping(a, b) {
            continue;
        }
        match impulse(a, b, model, restitution) {
            Some((dv_a, dv_b)) => {
                trace!("body collision {} <-> {}: dv {:?} / {:?}", a.id(), b.id(), dv_a, dv_b);
                bodies[i].v += dv_a;
                bodies[j].v += dv_b;
                resolved += 1;
            }
            None => trace!("bodies {} and {} overlap but separate", a.id(), b.id()),
        }
    }
    resolved
}
