use crate::HeuristicWeights;
use lanewar_core::{MatchState, Side};
use serde::{Deserialize, Serialize};

/// Score of a won match. Large enough to dominate any board swing.
pub const DECISIVE_SCORE: f64 = 1_000_000.0;

/// What the heuristic sees of a position, from one side's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvalMetrics {
    pub own_life: u32,
    pub enemy_life: u32,
    pub own_attack: u32,
    pub own_health: u32,
    pub enemy_attack: u32,
    pub enemy_health: u32,
    pub won: bool,
    pub lost: bool,
}

pub fn eval_metrics(state: &MatchState, side: Side) -> EvalMetrics {
    let board_totals = |side: Side| {
        state
            .board(side)
            .iter()
            .fold((0u32, 0u32), |(atk, hp), card| {
                (atk + card.attack(), hp + card.hp())
            })
    };
    let (own_attack, own_health) = board_totals(side);
    let (enemy_attack, enemy_health) = board_totals(side.opponent());
    EvalMetrics {
        own_life: state.life(side),
        enemy_life: state.life(side.opponent()),
        own_attack,
        own_health,
        enemy_attack,
        enemy_health,
        won: state.winner == Some(side),
        lost: state.winner == Some(side.opponent()),
    }
}

pub fn weighted_score(metrics: EvalMetrics, weights: HeuristicWeights) -> f64 {
    if metrics.won {
        return DECISIVE_SCORE;
    }
    if metrics.lost {
        return -DECISIVE_SCORE;
    }
    let life = metrics.own_life as f64 - metrics.enemy_life as f64;
    let own_board = (metrics.own_attack + metrics.own_health) as f64;
    let enemy_board = (metrics.enemy_attack + metrics.enemy_health) as f64;
    life * weights.life + (own_board - enemy_board) * weights.board
}
