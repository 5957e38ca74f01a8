pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use error::{Error, Result};

pub use simulation::states::{Body, BodyId, Color, NVec3};
pub use simulation::params::WorldParams;
pub use simulation::forces::{Acceleration, AccelSet, PairwiseGravity};
pub use simulation::world::Simulator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{CollisionModel, WorldConfig, RunConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_update;
