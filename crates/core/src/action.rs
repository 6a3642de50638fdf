use crate::{CombatEvent, EngineResult, InstanceId, Lane, MatchRng, MatchState, Phase, Zone};
use serde::{Deserialize, Serialize};

/// One engine operation, as chosen by a controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Play { instance_id: InstanceId, lane: Lane },
    Pass,
    Buy,
    Attack { lanes: Vec<Lane> },
    ConfirmDefense,
}

impl Action {
    pub fn short_label(&self) -> String {
        match self {
            Self::Play { instance_id, lane } => format!("play {instance_id} -> lane {lane}"),
            Self::Pass => "pass".to_string(),
            Self::Buy => "buy".to_string(),
            Self::Attack { lanes } => format!("attack {lanes:?}"),
            Self::ConfirmDefense => "confirm defense".to_string(),
        }
    }
}

impl MatchState {
    /// Every action the priority side could take right now. Attacks are
    /// offered as "all lanes" plus each single lane.
    pub fn legal_actions(&self) -> Vec<Action> {
        if !self.is_active() {
            return Vec::new();
        }
        if self.phase == Phase::DefenderReaction {
            return vec![Action::ConfirmDefense];
        }

        let side = self.priority;
        let mana = self.mana(side);
        let free_lanes = self.free_lanes(side);
        let mut actions = Vec::new();
        for card in self.hand(side) {
            if card.cost() > mana {
                continue;
            }
            for &lane in &free_lanes {
                actions.push(Action::Play {
                    instance_id: card.instance_id,
                    lane,
                });
            }
        }
        if mana >= 1
            && self.deck_count(side) == 0
            && self.cards.iter().any(|card| card.is_in(side, Zone::Discard))
        {
            actions.push(Action::Buy);
        }
        if self.attack_token == side {
            let occupied = self.occupied_lanes(side);
            if !occupied.is_empty() {
                if occupied.len() > 1 {
                    for &lane in &occupied {
                        actions.push(Action::Attack { lanes: vec![lane] });
                    }
                }
                actions.push(Action::Attack { lanes: occupied });
            }
        }
        actions.push(Action::Pass);
        actions
    }

    /// Dispatches one action. Only a confirmed defense produces events.
    pub fn apply(
        &self,
        action: &Action,
        rng: &mut impl MatchRng,
    ) -> EngineResult<(Self, Vec<CombatEvent>)> {
        match action {
            Action::Play { instance_id, lane } => {
                Ok((self.play_card(*instance_id, *lane)?, Vec::new()))
            }
            Action::Pass => Ok((self.pass()?, Vec::new())),
            Action::Buy => Ok((self.buy_card(rng)?, Vec::new())),
            Action::Attack { lanes } => Ok((self.declare_attack(lanes)?, Vec::new())),
            Action::ConfirmDefense => self.confirm_defense(),
        }
    }
}
