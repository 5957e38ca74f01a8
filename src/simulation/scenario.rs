//! Build runnable scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - a `Simulator` with its world parameters and all bodies added
//! - the fixed-step run settings for the headless driver

use crate::configuration::config::{BodyConfig, RunConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::params::WorldParams;
use crate::simulation::states::{Body, NVec3};
use crate::simulation::world::Simulator;

pub struct Scenario {
    pub simulator: Simulator,
    pub run: RunConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Missing world fields keep their defaults
        let defaults = WorldParams::default();
        let w = cfg.world;
        let params = WorldParams {
            box_size: w.box_size.unwrap_or(defaults.box_size),
            g: w.g.unwrap_or(defaults.g),
            wall_restitution: w.wall_restitution.unwrap_or(defaults.wall_restitution),
            body_restitution: w.body_restitution.unwrap_or(defaults.body_restitution),
            collision_model: w.collision.unwrap_or(defaults.collision_model),
        };

        if !cfg.run.dt.is_finite() || cfg.run.dt < 0.0 {
            return Err(Error::InvalidParam(format!(
                "run.dt must be finite and >= 0, got {}",
                cfg.run.dt
            )));
        }

        let mut simulator = Simulator::with_params(params)?;
        for bc in &cfg.bodies {
            simulator.add_body(build_body(bc)?)?;
        }

        Ok(Self {
            simulator,
            run: cfg.run,
        })
    }

    /// Run `run.steps` fixed updates, calling `observe` after each one with
    /// the 1-based step number.
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<()>
    where
        F: FnMut(usize, &Simulator),
    {
        for step in 1..=self.run.steps {
            self.simulator.update(self.run.dt)?;
            observe(step, &self.simulator);
        }
        Ok(())
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let body = Body::new(bc.radius, bc.mass, bc.color, bc.x.map(NVec3::from))?;
    match bc.v {
        Some(v) => body.with_velocity(NVec3::from(v)),
        None => Ok(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::CollisionModel;

    const THREE_BODIES: &str = r#"
run:
  dt: 0.01
  steps: 3
bodies:
  - { radius: 1.1, mass: 1.0, color: 0xff0000, x: [-2.0, 0.0, 0.0] }
  - { radius: 1.0, mass: 1.0, color: 0x00ff00, x: [-1.0, 3.0, 1.0] }
  - { radius: 0.9, mass: 1.0, color: 0x0000ff, x: [3.0, 1.0, 0.0] }
"#;

    #[test]
    fn builds_reference_scene_with_defaults() -> Result<()> {
        let scenario = Scenario::build_scenario(ScenarioConfig::from_yaml_str(THREE_BODIES)?)?;
        let sim = &scenario.simulator;
        assert_eq!(sim.len(), 3);
        assert_eq!(sim.half_extent(), 5.0);
        assert_eq!(sim.params().collision_model, CollisionModel::Legacy);
        assert_eq!(sim.bodies()[2].position(), NVec3::new(3.0, 1.0, 0.0));
        assert_eq!(sim.bodies()[0].velocity(), NVec3::zeros());
        Ok(())
    }

    #[test]
    fn run_with_observes_every_step() -> Result<()> {
        let mut scenario = Scenario::build_scenario(ScenarioConfig::from_yaml_str(THREE_BODIES)?)?;
        let mut seen = Vec::new();
        scenario.run_with(|step, _| seen.push(step))?;
        assert_eq!(seen, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn invalid_body_fails_the_build() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str("bodies:\n  - { radius: 1.0, mass: 0.0 }\n")?;
        assert!(Scenario::build_scenario(cfg).is_err());
        Ok(())
    }

    #[test]
    fn negative_run_dt_rejected() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str("run:\n  dt: -1.0\n")?;
        assert!(matches!(Scenario::build_scenario(cfg), Err(Error::InvalidParam(_))));
        Ok(())
    }
}
