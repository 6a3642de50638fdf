use crate::{CardInstance, InstanceId, Keyword, Lane, MatchConfig, Side, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Active,
    Finished,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Play, buy, pass or declare an attack.
    Actions,
    /// An attack is declared and waiting for the defender to confirm.
    DefenderReaction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    pub life: u32,
    pub mana: u32,
    pub passed: bool,
}

/// The whole match. Operations never mutate a state in place; they return a
/// new one, so earlier snapshots stay valid for replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchState {
    pub config: MatchConfig,
    pub status: MatchStatus,
    pub winner: Option<Side>,
    pub players: [PlayerState; 2],
    pub round_number: u32,
    pub phase: Phase,
    pub attack_token: Side,
    pub priority: Side,
    #[serde(default)]
    pub declared_lanes: Option<BTreeSet<Lane>>,
    /// Acting ally of the cooperative side, 0 or 1.
    #[serde(default)]
    pub ally_turn: u8,
    pub cards: Vec<CardInstance>,
    #[serde(default)]
    pub next_seq: u64,
}

impl MatchState {
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side.index()]
    }

    pub fn life(&self, side: Side) -> u32 {
        self.player(side).life
    }

    pub fn mana(&self, side: Side) -> u32 {
        self.player(side).mana
    }

    pub fn passed(&self, side: Side) -> bool {
        self.player(side).passed
    }

    pub fn is_active(&self) -> bool {
        self.status == MatchStatus::Active
    }

    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.iter().find(|card| card.instance_id == id)
    }

    /// Cards in hand, oldest first.
    pub fn hand(&self, side: Side) -> Vec<&CardInstance> {
        let mut cards = self.cards_in(side, Zone::Hand);
        cards.sort_by_key(|card| card.zone_seq);
        cards
    }

    /// Cards on the board, by lane.
    pub fn board(&self, side: Side) -> Vec<&CardInstance> {
        let mut cards = self.cards_in(side, Zone::Board);
        cards.sort_by_key(|card| card.lane);
        cards
    }

    pub fn deck_count(&self, side: Side) -> usize {
        self.count_in(side, Zone::Deck)
    }

    pub fn discard_count(&self, side: Side) -> usize {
        self.count_in(side, Zone::Discard)
    }

    pub fn hand_count(&self, side: Side) -> usize {
        self.count_in(side, Zone::Hand)
    }

    pub fn lane_occupant(&self, side: Side, lane: Lane) -> Option<&CardInstance> {
        self.occupant_index(side, lane).map(|idx| &self.cards[idx])
    }

    pub fn free_lanes(&self, side: Side) -> Vec<Lane> {
        self.config
            .lanes()
            .filter(|lane| self.occupant_index(side, *lane).is_none())
            .collect()
    }

    pub fn occupied_lanes(&self, side: Side) -> Vec<Lane> {
        self.board(side).iter().filter_map(|card| card.lane).collect()
    }

    fn cards_in(&self, side: Side, zone: Zone) -> Vec<&CardInstance> {
        self.cards
            .iter()
            .filter(|card| card.is_in(side, zone))
            .collect()
    }

    fn count_in(&self, side: Side, zone: Zone) -> usize {
        self.cards.iter().filter(|card| card.is_in(side, zone)).count()
    }

    pub(crate) fn card_index(&self, id: InstanceId) -> Option<usize> {
        self.cards.iter().position(|card| card.instance_id == id)
    }

    pub(crate) fn occupant_index(&self, side: Side, lane: Lane) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.is_in(side, Zone::Board) && card.lane == Some(lane))
    }

    /// The taunt card in the lowest lane, if any.
    pub(crate) fn taunt_blocker_index(&self, side: Side) -> Option<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_in(side, Zone::Board) && card.has_keyword(Keyword::Taunt))
            .min_by_key(|(_, card)| card.lane)
            .map(|(idx, _)| idx)
    }

    fn stamp(&mut self) -> u64 {
        self.next_seq = self.next_seq.saturating_add(1);
        self.next_seq
    }

    pub(crate) fn move_card(&mut self, idx: usize, zone: Zone) {
        let seq = self.stamp();
        let card = &mut self.cards[idx];
        if card.zone == Zone::Board && zone != Zone::Board {
            card.current_hp = None;
            card.lane = None;
            card.attack_bonus = 0;
        }
        card.zone = zone;
        card.zone_seq = seq;
    }

    pub(crate) fn place_on_board(&mut self, idx: usize, lane: Lane) {
        self.move_card(idx, Zone::Board);
        let card = &mut self.cards[idx];
        card.lane = Some(lane);
        card.current_hp = Some(card.template.base_hp);
    }

    /// Moves the top deck card into hand. Returns the drawn card, if any.
    pub(crate) fn draw_card(&mut self, side: Side) -> Option<InstanceId> {
        let idx = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_in(side, Zone::Deck))
            .min_by_key(|(_, card)| card.zone_seq)
            .map(|(idx, _)| idx)?;
        self.move_card(idx, Zone::Hand);
        Some(self.cards[idx].instance_id)
    }

    pub(crate) fn hand_has_room(&self, side: Side) -> bool {
        match self.config.max_hand_size {
            Some(cap) => self.hand_count(side) < cap,
            None => true,
        }
    }
}
