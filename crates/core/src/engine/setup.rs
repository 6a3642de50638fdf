use crate::*;
use log::debug;

impl MatchState {
    /// Builds a match: one deck card per template, each deck shuffled on its
    /// own, then the opening hands drawn.
    pub fn create(
        deck_a: &[CardTemplate],
        deck_b: &[CardTemplate],
        config: MatchConfig,
        rng: &mut impl MatchRng,
    ) -> EngineResult<Self> {
        config.validate()?;
        let opening_mana = config.mana_for_round(1);
        let players = Side::BOTH.map(|side| PlayerState {
            life: config.starting_life(side),
            mana: opening_mana,
            passed: false,
        });
        let mut state = Self {
            config,
            status: MatchStatus::Active,
            winner: None,
            players,
            round_number: 1,
            phase: Phase::Actions,
            attack_token: Side::A,
            priority: Side::A,
            declared_lanes: None,
            ally_turn: 0,
            cards: Vec::with_capacity(deck_a.len() + deck_b.len()),
            next_seq: 0,
        };

        let mut next_id: InstanceId = 1;
        for (side, deck) in [(Side::A, deck_a), (Side::B, deck_b)] {
            let mut order: Vec<usize> = (0..deck.len()).collect();
            rng.shuffle(&mut order);
            for template_idx in order {
                state.next_seq = state.next_seq.saturating_add(1);
                state.cards.push(CardInstance {
                    instance_id: next_id,
                    template: deck[template_idx].clone(),
                    owner: side,
                    zone: Zone::Deck,
                    current_hp: None,
                    lane: None,
                    attack_bonus: 0,
                    zone_seq: state.next_seq,
                });
                next_id = next_id.saturating_add(1);
            }
        }

        for side in Side::BOTH {
            for _ in 0..state.config.initial_draw {
                if state.draw_card(side).is_none() {
                    break;
                }
            }
        }
        debug!(
            "match created: {} + {} cards, {} lanes",
            deck_a.len(),
            deck_b.len(),
            state.config.lane_count
        );
        Ok(state)
    }
}
