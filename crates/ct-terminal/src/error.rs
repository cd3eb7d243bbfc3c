use ct_core::ConfigError;
use ct_sim::SimError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TerminalError {
    #[error("invalid terminal configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("simulation horizon must be at least 1 tick")]
    InvalidHorizon,
}

pub type TerminalResult<T> = Result<T, TerminalError>;
