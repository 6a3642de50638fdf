use crate::{Lane, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INITIAL_DRAW: u32 = 3;
pub const SUPPORTED_LANE_COUNTS: [u8; 2] = [3, 5];

fn default_initial_draw() -> u32 {
    DEFAULT_INITIAL_DRAW
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("lane count must be 3 or 5, got {0}")]
    InvalidLaneCount(u8),
    #[error("initial draw must be positive")]
    ZeroInitialDraw,
    #[error("max mana must be positive")]
    ZeroMaxMana,
    #[error("starting life for side {0:?} must be positive")]
    ZeroStartingLife(Side),
    #[error("max hand size {cap} is below the initial draw of {draw}")]
    HandCapBelowInitialDraw { cap: usize, draw: u32 },
}

/// Per-match parameters. Immutable once the match is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    pub starting_life_a: u32,
    pub starting_life_b: u32,
    pub max_mana: u32,
    pub lane_count: u8,
    #[serde(default = "default_initial_draw")]
    pub initial_draw: u32,
    #[serde(default)]
    pub max_hand_size: Option<usize>,
    /// Side controlled by two cooperating allies, if any.
    #[serde(default)]
    pub coop_side: Option<Side>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(30, 10, 3)
    }
}

impl MatchConfig {
    pub fn new(starting_life: u32, max_mana: u32, lane_count: u8) -> Self {
        Self {
            starting_life_a: starting_life,
            starting_life_b: starting_life,
            max_mana,
            lane_count,
            initial_draw: DEFAULT_INITIAL_DRAW,
            max_hand_size: None,
            coop_side: None,
        }
    }

    pub fn starting_life(&self, side: Side) -> u32 {
        match side {
            Side::A => self.starting_life_a,
            Side::B => self.starting_life_b,
        }
    }

    pub fn lanes(&self) -> impl Iterator<Item = Lane> {
        1..=self.lane_count
    }

    pub fn lane_in_range(&self, lane: Lane) -> bool {
        lane >= 1 && lane <= self.lane_count
    }

    /// Mana available to each side in the given round.
    pub fn mana_for_round(&self, round: u32) -> u32 {
        self.max_mana.min(round)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_LANE_COUNTS.contains(&self.lane_count) {
            return Err(ConfigError::InvalidLaneCount(self.lane_count));
        }
        if self.initial_draw == 0 {
            return Err(ConfigError::ZeroInitialDraw);
        }
        if self.max_mana == 0 {
            return Err(ConfigError::ZeroMaxMana);
        }
        for side in Side::BOTH {
            if self.starting_life(side) == 0 {
                return Err(ConfigError::ZeroStartingLife(side));
            }
        }
        if let Some(cap) = self.max_hand_size {
            if cap < self.initial_draw as usize {
                return Err(ConfigError::HandCapBelowInitialDraw {
                    cap,
                    draw: self.initial_draw,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_unsupported_lane_count() {
        let config = MatchConfig::new(30, 10, 4);
        assert_eq!(config.validate(), Err(ConfigError::InvalidLaneCount(4)));
    }

    #[test]
    fn rejects_zero_draw() {
        let mut config = MatchConfig::default();
        config.initial_draw = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInitialDraw));
    }

    #[test]
    fn rejects_hand_cap_below_draw() {
        let mut config = MatchConfig::default();
        config.max_hand_size = Some(2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::HandCapBelowInitialDraw { cap: 2, draw: 3 })
        );
    }

    #[test]
    fn mana_follows_round_up_to_cap() {
        let config = MatchConfig::new(30, 4, 3);
        assert_eq!(config.mana_for_round(1), 1);
        assert_eq!(config.mana_for_round(4), 4);
        assert_eq!(config.mana_for_round(9), 4);
    }

    #[test]
    fn initial_draw_defaults_when_missing() {
        let raw = r#"{"starting_life_a":20,"starting_life_b":25,"max_mana":10,"lane_count":5}"#;
        let config: MatchConfig = serde_json::from_str(raw).expect("parse");
        assert_eq!(config.initial_draw, DEFAULT_INITIAL_DRAW);
        assert_eq!(config.starting_life(Side::B), 25);
        assert_eq!(config.lanes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
