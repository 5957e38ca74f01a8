use thiserror::Error;

use crate::simulation::states::BodyId;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by body construction, simulator mutation and scenario loading.
///
/// Every variant is a local validation failure; a call that returns one of
/// these has not mutated any state.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or configuration parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A position or velocity component was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(String),

    /// `update` was called with a negative or non-finite delta.
    #[error("invalid time step: {0} (must be finite and >= 0)")]
    InvalidTimeStep(f64),

    /// The body is already managed by this simulator.
    #[error("body {0} is already in the simulation")]
    DuplicateBody(BodyId),

    /// Scenario file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("radius must be > 0".to_string());
        let msg = e.to_string();
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn time_step_error_carries_value() {
        let msg = Error::InvalidTimeStep(-0.5).to_string();
        assert!(msg.contains("-0.5"));
    }
}
