use lanewar_core::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuffTiming {
    RoundStart,
    OnPlay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Buff {
    /// Extra mana at round start. May exceed the match's max mana.
    ExtraMana { amount: u32 },
    /// Heal at round start, up to starting life.
    Regenerate { amount: u32 },
    /// Raise life at round start with no cap.
    Vitality { amount: u32 },
    /// Stat boost to every own board card at round start.
    Fortify { attack: u32, health: u32 },
    /// Stat boost to the card that was just played.
    Empower { attack: u32, health: u32 },
}

impl Buff {
    pub fn timing(&self) -> BuffTiming {
        match self {
            Self::Empower { .. } => BuffTiming::OnPlay,
            Self::ExtraMana { .. }
            | Self::Regenerate { .. }
            | Self::Vitality { .. }
            | Self::Fortify { .. } => BuffTiming::RoundStart,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::ExtraMana { amount } => format!("+{amount} mana"),
            Self::Regenerate { amount } => format!("regenerate {amount}"),
            Self::Vitality { amount } => format!("+{amount} life"),
            Self::Fortify { attack, health } => format!("+{attack}/+{health} to board"),
            Self::Empower { attack, health } => format!("+{attack}/+{health} on play"),
        }
    }
}

/// A buff owned by one side of the match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveBuff {
    pub side: Side,
    pub buff: Buff,
}

impl ActiveBuff {
    pub fn new(side: Side, buff: Buff) -> Self {
        Self { side, buff }
    }
}
