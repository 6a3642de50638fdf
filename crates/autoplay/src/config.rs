use serde::{Deserialize, Serialize};

/// Scoring weights for [`crate::GreedyBot`]. Every action is compared against
/// a pass, which always scores 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeuristicWeights {
    pub attack: f64,
    pub health: f64,
    pub keyword: f64,
    /// Bonus for dropping a card into a lane the enemy already holds.
    pub contest: f64,
    /// Extra bonus when the played card would kill the card across from it.
    pub lethal_contest: f64,
    pub mana_efficiency: f64,
    pub buy: f64,
    pub life: f64,
    pub board: f64,
    /// An attack must swing the evaluation by more than this to be worth it.
    pub attack_threshold: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            attack: 1.0,
            health: 0.6,
            keyword: 1.5,
            contest: 0.8,
            lethal_contest: 1.2,
            mana_efficiency: 0.5,
            buy: 0.4,
            life: 1.0,
            board: 0.5,
            attack_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub max_steps: u32,
    pub weights: HeuristicWeights,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            max_steps: 2_000,
            weights: HeuristicWeights::default(),
        }
    }
}
