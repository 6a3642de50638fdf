use crate::{eval_metrics, weighted_score, AutoplayError, HeuristicWeights};
use lanewar_core::{Action, InstanceId, Keyword, Lane, MatchState};

/// Anything that can pick the next action for the side holding priority.
pub trait Controller {
    fn name(&self) -> &str;

    fn choose(&self, state: &MatchState) -> Result<Action, AutoplayError>;
}

/// One-ply greedy opponent. Every legal action gets a score, passing scores
/// 0, and the first action with the highest score wins.
#[derive(Debug, Clone, Default)]
pub struct GreedyBot {
    pub weights: HeuristicWeights,
}

impl GreedyBot {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn score_action(&self, state: &MatchState, action: &Action) -> f64 {
        match action {
            Action::Pass | Action::ConfirmDefense => 0.0,
            Action::Play { instance_id, lane } => self.score_play(state, *instance_id, *lane),
            Action::Buy => self.weights.buy,
            Action::Attack { lanes } => self.score_attack(state, lanes),
        }
    }

    /// Legal actions paired with their scores, in enumeration order.
    pub fn ranked_actions(&self, state: &MatchState) -> Vec<(Action, f64)> {
        state
            .legal_actions()
            .into_iter()
            .map(|action| {
                let score = self.score_action(state, &action);
                (action, score)
            })
            .collect()
    }

    fn score_play(&self, state: &MatchState, instance_id: InstanceId, lane: Lane) -> f64 {
        let Some(card) = state.card(instance_id) else {
            return f64::NEG_INFINITY;
        };
        let weights = &self.weights;
        let mut score =
            card.attack() as f64 * weights.attack + card.hp() as f64 * weights.health;
        if card.keyword() != Keyword::None {
            score += weights.keyword;
        }
        if let Some(enemy) = state.lane_occupant(card.owner.opponent(), lane) {
            score += weights.contest;
            if card.attack() >= enemy.hp() {
                score += weights.lethal_contest;
            }
        }
        let mana = state.mana(card.owner);
        if mana > 0 {
            score += weights.mana_efficiency * card.cost() as f64 / mana as f64;
        }
        score
    }

    fn score_attack(&self, state: &MatchState, lanes: &[Lane]) -> f64 {
        let side = state.priority;
        let resolved = state
            .declare_attack(lanes)
            .and_then(|declared| declared.confirm_defense());
        let Ok((after, _)) = resolved else {
            return f64::NEG_INFINITY;
        };
        let before = weighted_score(eval_metrics(state, side), self.weights);
        let after = weighted_score(eval_metrics(&after, side), self.weights);
        after - before - self.weights.attack_threshold
    }
}

impl Controller for GreedyBot {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose(&self, state: &MatchState) -> Result<Action, AutoplayError> {
        let mut best: Option<(Action, f64)> = None;
        for (action, score) in self.ranked_actions(state) {
            if best.as_ref().map_or(true, |(_, top)| score > *top) {
                best = Some((action, score));
            }
        }
        best.map(|(action, _)| action)
            .ok_or(AutoplayError::NoLegalAction)
    }
}
