//! Acceleration contributors for the box simulation
//!
//! Defines the acceleration trait, a summing container and the
//! direct pairwise gravity used by every `Simulator`

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// Acceleration source operating on the body slice.
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]);
}

/// Unsoftened Newtonian gravity, summed over every ordered pair.
///
/// Each body computes its own pull from every other body, so an unordered
/// pair is visited twice, once from each side. A pair contributes nothing
/// when the bodies coincide or when they are so close that the pull is not
/// a finite number.
pub struct PairwiseGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for PairwiseGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) {
        for (i, bi) in bodies.iter().enumerate() {
            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // i is pulled along +direction, toward j
                let direction = bj.x - bi.x;
                let distance = direction.norm();
                if distance > 0.0 {
                    // G m_i m_j / r^2 / m_i, without forming m_i m_j
                    let acceleration = self.g * bj.mass() / (distance * distance);
                    let contribution = (direction / distance) * acceleration;
                    if contribution.iter().all(|c| c.is_finite()) {
                        out[i] += contribution;
                    }
                }
            }
        }
    }
}
