//! Error types for the simulation core

use std::fmt;

/// Errors surfaced to the host by the simulation core.
#[derive(Debug)]
pub enum SimError {
    /// The chain was empty while the simulation claimed to be active.
    EmptyChainWhileActive,
    /// A tuning value failed validation.
    InvalidTuning(String),
    /// Tuning JSON could not be parsed.
    TuningParse(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyChainWhileActive => {
                write!(f, "Simulation is active but the chain is empty")
            }
            SimError::InvalidTuning(msg) => write!(f, "Invalid tuning: {}", msg),
            SimError::TuningParse(e) => write!(f, "Failed to parse tuning: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::TuningParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::TuningParse(e)
    }
}
