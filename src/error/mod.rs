use thiserror::Error;

use crate::extract::ExtractError;
use crate::simulator::SimulationError;

/// Top-level error type for the crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PharmakinError {
    /// An error from parameter extraction
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// An error from dosing simulation
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
