//! The bounding-box world.
//!
//! `Simulator` owns its bodies and advances them one `update` at a time:
//!
//! 1. drift every body with the velocity from the previous step
//! 2. reflect velocities of bodies reaching past a wall
//! 3. apply impulses to overlapping, approaching pairs
//! 4. kick every body with the gravitational acceleration at the new positions
//!
//! The whole call mutates the collection in place; a host sharing a
//! `Simulator` between threads must hold its lock across `update`.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::simulation::collision;
use crate::simulation::forces::{AccelSet, PairwiseGravity};
use crate::simulation::integrator::{drift, kick};
use crate::simulation::params::WorldParams;
use crate::simulation::states::{Body, BodyId, NVec3};

pub struct Simulator {
    params: WorldParams,
    half_extent: f64,
    bodies: Vec<Body>,
    forces: AccelSet,
    accels: Vec<NVec3>, // scratch buffer reused across steps
}

impl Simulator {
    /// Box of edge `box_size` with every other parameter at its default.
    pub fn new(box_size: f64) -> Result<Self> {
        Self::with_params(WorldParams::with_box_size(box_size))
    }

    pub fn with_params(params: WorldParams) -> Result<Self> {
        params.validate()?;
        let forces = AccelSet::new().with(PairwiseGravity { g: params.g });
        Ok(Self {
            half_extent: params.half_extent(),
            params,
            bodies: Vec::new(),
            forces,
            accels: Vec::new(),
        })
    }

    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    /// Bodies in iteration order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Append a body and return its handle.
    ///
    /// A body whose id is already present (a clone of a managed body) is
    /// rejected and the collection is left as it was.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId> {
        let id = body.id;
        if self.contains(id) {
            warn!("rejected duplicate body {id}");
            return Err(Error::DuplicateBody(id));
        }
        debug!("add body {id}: r={} m={} x={:?}", body.radius(), body.mass(), body.x);
        self.bodies.push(body);
        Ok(id)
    }

    /// Remove the body with this id and hand it back. Unknown ids are a no-op.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b.id == id)?;
        debug!("remove body {id}");
        Some(self.bodies.remove(index))
    }

    /// Advance the world by `dt` seconds.
    ///
    /// `dt == 0` returns immediately without touching any body. A negative
    /// or non-finite `dt` is rejected before anything is mutated.
    pub fn update(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            warn!("rejected update with dt = {dt}");
            return Err(Error::InvalidTimeStep(dt));
        }
        if dt == 0.0 || self.bodies.is_empty() {
            return Ok(());
        }

        drift(&mut self.bodies, dt);

        collision::resolve_walls(&mut self.bodies, self.half_extent, self.params.wall_restitution);

        collision::resolve_bodies(
            &mut self.bodies,
            self.params.collision_model,
            self.params.body_restitution,
        );

        self.accels.resize(self.bodies.len(), NVec3::zeros());
        self.forces.accumulate_accels(&self.bodies, &mut self.accels);
        kick(&mut self.bodies, &self.accels, dt);

        Ok(())
    }

    /// Sum of 1/2 m |v|^2 over all bodies.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Sum of m v over all bodies.
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
