//! Error type for the simulation and its configuration

use thiserror::Error;

/// Everything that can go wrong outside of normal gameplay
#[derive(Debug, Error)]
pub enum SimError {
    /// `tick` was handed a timestep that is zero, negative, or not finite
    #[error("invalid timestep {0}: dt must be positive and finite")]
    InvalidTimestep(f32),

    /// Asteroid pool capacity of zero
    #[error("asteroid pool capacity must be at least 1")]
    EmptyAsteroidPool,

    /// Tuning JSON could not be parsed (or a snapshot could not be encoded)
    #[error("json error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
