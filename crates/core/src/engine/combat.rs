use super::{EngineError, EngineResult};
use crate::*;
use log::{info, trace};

/// Stats of a card as they were before its lane resolved.
#[derive(Debug, Clone, Copy)]
struct Combatant {
    idx: usize,
    id: InstanceId,
    side: Side,
    atk: u32,
    hp: u32,
    keyword: Keyword,
}

impl Combatant {
    fn snapshot(state: &MatchState, idx: usize) -> Self {
        let card = &state.cards[idx];
        Self {
            idx,
            id: card.instance_id,
            side: card.owner,
            atk: card.attack(),
            hp: card.hp(),
            keyword: card.keyword(),
        }
    }

    fn has(&self, keyword: Keyword) -> bool {
        self.keyword == keyword
    }
}

impl MatchState {
    /// Resolves the declared attack lane by lane in ascending order, then
    /// hands the attack token and priority to the side that defended.
    pub fn confirm_defense(&self) -> EngineResult<(Self, Vec<CombatEvent>)> {
        self.ensure_active()?;
        self.ensure_phase(Phase::DefenderReaction)?;
        let lanes: Vec<Lane> = self
            .declared_lanes
            .as_ref()
            .filter(|lanes| !lanes.is_empty())
            .ok_or(EngineError::InvalidLanes)?
            .iter()
            .copied()
            .collect();

        let attacker_side = self.attack_token;
        let defender_side = attacker_side.opponent();
        let mut next = self.clone();
        let mut events = EventBus::default();
        for lane in lanes {
            next.resolve_lane(attacker_side, lane, &mut events);
        }
        next.settle_winner(attacker_side);

        next.phase = Phase::Actions;
        next.declared_lanes = None;
        next.attack_token = defender_side;
        next.priority = defender_side;
        for side in Side::BOTH {
            next.player_mut(side).passed = false;
        }
        info!(
            "combat resolved with {} events: life A={} B={}",
            events.len(),
            next.life(Side::A),
            next.life(Side::B)
        );
        Ok((next, events.into_events()))
    }

    fn resolve_lane(&mut self, attacker_side: Side, lane: Lane, events: &mut EventBus) {
        let defender_side = attacker_side.opponent();
        let Some(attacker_idx) = self.occupant_index(attacker_side, lane) else {
            trace!("lane {lane}: no attacker left");
            return;
        };
        let attacker = Combatant::snapshot(self, attacker_idx);
        events.push(CombatEvent::Attack {
            attacker: attacker.id,
            lane,
        });

        let defender_idx = match self.occupant_index(defender_side, lane) {
            Some(idx) => Some(idx),
            None => {
                let blocker = self.taunt_blocker_index(defender_side);
                if let Some(idx) = blocker {
                    events.push(CombatEvent::Redirect {
                        attacker: attacker.id,
                        blocker: self.cards[idx].instance_id,
                        lane,
                    });
                }
                blocker
            }
        };

        let Some(defender_idx) = defender_idx else {
            trace!("lane {lane}: unblocked, {} to face", attacker.atk);
            self.strike_face(defender_side, attacker.atk, events);
            self.lifesteal(&attacker, attacker.atk, events);
            return;
        };
        let defender = Combatant::snapshot(self, defender_idx);
        trace!(
            "lane {lane}: {}({}/{}) into {}({}/{})",
            attacker.id,
            attacker.atk,
            attacker.hp,
            defender.id,
            defender.atk,
            defender.hp
        );
        if attacker.has(Keyword::FirstStrike) {
            self.first_strike_exchange(&attacker, &defender, events);
        } else {
            self.simultaneous_exchange(&attacker, &defender, events);
        }
    }

    fn first_strike_exchange(
        &mut self,
        attacker: &Combatant,
        defender: &Combatant,
        events: &mut EventBus,
    ) {
        events.push(CombatEvent::FirstStrike {
            attacker: attacker.id,
        });
        let dmg = attacker.atk.min(defender.hp);
        events.push(CombatEvent::Damage {
            target: defender.id,
            amount: dmg,
            role: CombatRole::Defender,
        });
        self.lifesteal(attacker, dmg, events);

        if defender.hp - dmg == 0 {
            self.kill(defender, events);
            let spillover = attacker.atk - dmg;
            if spillover > 0 {
                self.strike_face(defender.side, spillover, events);
                self.lifesteal(attacker, spillover, events);
            }
            return;
        }

        self.cards[defender.idx].current_hp = Some(defender.hp - dmg);
        // A defending first striker never strikes back.
        if defender.has(Keyword::FirstStrike) {
            return;
        }
        let dmg_back = defender.atk.min(attacker.hp);
        events.push(CombatEvent::Damage {
            target: attacker.id,
            amount: dmg_back,
            role: CombatRole::Attacker,
        });
        self.lifesteal(defender, dmg_back, events);
        self.wound(attacker, dmg_back, events);
    }

    fn simultaneous_exchange(
        &mut self,
        attacker: &Combatant,
        defender: &Combatant,
        events: &mut EventBus,
    ) {
        let to_defender = attacker.atk.min(defender.hp);
        let to_attacker = defender.atk.min(attacker.hp);
        events.push(CombatEvent::Damage {
            target: defender.id,
            amount: to_defender,
            role: CombatRole::Defender,
        });
        events.push(CombatEvent::Damage {
            target: attacker.id,
            amount: to_attacker,
            role: CombatRole::Attacker,
        });
        self.lifesteal(attacker, to_defender, events);
        self.lifesteal(defender, to_attacker, events);
        self.wound(defender, to_defender, events);
        self.wound(attacker, to_attacker, events);
    }

    /// Applies `dmg`, already clamped to the snapshot hp. A card at zero goes
    /// to the discard.
    fn wound(&mut self, target: &Combatant, dmg: u32, events: &mut EventBus) {
        let remaining = target.hp - dmg;
        if remaining == 0 {
            self.kill(target, events);
        } else {
            self.cards[target.idx].current_hp = Some(remaining);
        }
    }

    fn kill(&mut self, target: &Combatant, events: &mut EventBus) {
        events.push(CombatEvent::Death {
            instance_id: target.id,
        });
        self.move_card(target.idx, Zone::Discard);
    }

    fn strike_face(&mut self, side: Side, amount: u32, events: &mut EventBus) {
        let player = self.player_mut(side);
        player.life = player.life.saturating_sub(amount);
        let life_after = player.life;
        events.push(CombatEvent::Face {
            side,
            amount,
            life_after,
        });
    }

    fn lifesteal(&mut self, source: &Combatant, dealt: u32, events: &mut EventBus) {
        if !source.has(Keyword::Lifesteal) || dealt == 0 {
            return;
        }
        let cap = self.config.starting_life(source.side);
        let player = self.player_mut(source.side);
        // Life raised above the cap from outside the engine is left alone.
        if player.life < cap {
            player.life = player.life.saturating_add(dealt).min(cap);
        }
        events.push(CombatEvent::Heal {
            side: source.side,
            amount: dealt,
        });
    }

    /// A defender at zero life loses even if the attacker is also at zero.
    fn settle_winner(&mut self, attacker_side: Side) {
        let defender_side = attacker_side.opponent();
        let winner = if self.life(defender_side) == 0 {
            Some(attacker_side)
        } else if self.life(attacker_side) == 0 {
            Some(defender_side)
        } else {
            None
        };
        if let Some(side) = winner {
            self.status = MatchStatus::Finished;
            self.winner = Some(side);
            info!("match finished in round {}: {side:?} wins", self.round_number);
        }
    }
}
