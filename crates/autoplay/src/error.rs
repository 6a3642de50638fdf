use lanewar_core::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("step limit of {0} reached")]
    StepLimit(u32),
    #[error("no legal action for the acting side")]
    NoLegalAction,
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for AutoplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AutoplayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
