use super::{EngineError, EngineResult};
use crate::*;
use log::debug;
use std::collections::BTreeSet;

impl MatchState {
    /// Plays a card from the priority side's hand into an empty lane.
    pub fn play_card(&self, instance_id: InstanceId, lane: Lane) -> EngineResult<Self> {
        self.ensure_actions()?;
        let idx = self
            .card_index(instance_id)
            .ok_or(EngineError::UnknownCard(instance_id))?;
        let card = &self.cards[idx];
        let side = self.priority;
        if card.owner != side {
            return Err(EngineError::NotYourPriority(card.owner));
        }
        if card.zone != Zone::Hand {
            return Err(EngineError::CardNotInHand(instance_id));
        }
        let have = self.mana(side);
        if have < card.cost() {
            return Err(EngineError::NotEnoughMana {
                have,
                need: card.cost(),
            });
        }
        if !self.config.lane_in_range(lane) {
            return Err(EngineError::InvalidLane(lane));
        }
        if self.occupant_index(side, lane).is_some() {
            return Err(EngineError::SlotOccupied(lane));
        }

        let cost = card.cost();
        let mut next = self.clone();
        next.place_on_board(idx, lane);
        next.player_mut(side).mana -= cost;
        next.hand_off_after_play(side);
        debug!("{side:?} played card {instance_id} to lane {lane} for {cost} mana");
        Ok(next)
    }

    /// Passes for the priority side. When both sides have passed the round advances.
    pub fn pass(&self) -> EngineResult<Self> {
        self.ensure_actions()?;
        let side = self.priority;
        let mut next = self.clone();
        next.player_mut(side).passed = true;
        if next.passed(side.opponent()) {
            next.advance_round(side);
        } else {
            next.priority = side.opponent();
            debug!("{side:?} passed");
        }
        Ok(next)
    }

    /// Pays one mana to return a random discarded card to hand. Only allowed
    /// once the deck is exhausted.
    pub fn buy_card(&self, rng: &mut impl MatchRng) -> EngineResult<Self> {
        self.ensure_actions()?;
        let side = self.priority;
        let have = self.mana(side);
        if have < 1 {
            return Err(EngineError::NotEnoughMana { have, need: 1 });
        }
        let deck = self.deck_count(side);
        if deck > 0 {
            return Err(EngineError::DeckNotEmpty(deck));
        }
        let discarded: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_in(side, Zone::Discard))
            .map(|(idx, _)| idx)
            .collect();
        if discarded.is_empty() {
            return Err(EngineError::NoDiscard);
        }

        let idx = discarded[rng.gen_index(discarded.len())];
        let mut next = self.clone();
        next.move_card(idx, Zone::Hand);
        next.player_mut(side).mana -= 1;
        next.hand_off_after_play(side);
        debug!(
            "{side:?} bought back card {}",
            next.cards[idx].instance_id
        );
        Ok(next)
    }

    /// Declares an attack with the given lanes. Duplicates are folded; every
    /// lane must hold one of the attacker's board cards.
    pub fn declare_attack(&self, lanes: &[Lane]) -> EngineResult<Self> {
        self.ensure_actions()?;
        let side = self.priority;
        if self.attack_token != side {
            return Err(EngineError::NotAttackToken(side));
        }
        if lanes.is_empty() {
            return Err(EngineError::InvalidLanes);
        }
        let mut declared = BTreeSet::new();
        for &lane in lanes {
            if !self.config.lane_in_range(lane) || self.occupant_index(side, lane).is_none() {
                return Err(EngineError::InvalidLanes);
            }
            declared.insert(lane);
        }

        let mut next = self.clone();
        debug!("{side:?} attacks with lanes {declared:?}");
        next.declared_lanes = Some(declared);
        next.phase = Phase::DefenderReaction;
        next.priority = side.opponent();
        Ok(next)
    }

    pub(crate) fn ensure_active(&self) -> EngineResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(EngineError::MatchNotActive)
        }
    }

    pub(crate) fn ensure_phase(&self, phase: Phase) -> EngineResult<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase(self.phase))
        }
    }

    fn ensure_actions(&self) -> EngineResult<()> {
        self.ensure_active()?;
        self.ensure_phase(Phase::Actions)
    }

    /// A cooperative side hands the turn to its other ally; everyone else
    /// hands priority across the table.
    fn hand_off_after_play(&mut self, side: Side) {
        if self.config.coop_side == Some(side) {
            self.ally_turn = (self.ally_turn + 1) % 2;
        } else {
            self.priority = side.opponent();
        }
    }
}
