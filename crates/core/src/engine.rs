use crate::{ConfigError, InstanceId, Lane, Phase, Side};
use thiserror::Error;

mod actions;
mod combat;
mod round;
mod setup;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("side {0:?} does not hold priority")]
    NotYourPriority(Side),
    #[error("lane {0} is already occupied")]
    SlotOccupied(Lane),
    #[error("not enough mana: have {have}, need {need}")]
    NotEnoughMana { have: u32, need: u32 },
    #[error("lane {0} is out of range")]
    InvalidLane(Lane),
    #[error("side {0:?} does not hold the attack token")]
    NotAttackToken(Side),
    #[error("invalid attack lanes")]
    InvalidLanes,
    #[error("deck still has {0} cards")]
    DeckNotEmpty(usize),
    #[error("discard pile is empty")]
    NoDiscard,
    #[error("match is not active")]
    MatchNotActive,
    #[error("unknown card {0}")]
    UnknownCard(InstanceId),
    #[error("card {0} is not in hand")]
    CardNotInHand(InstanceId),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;
