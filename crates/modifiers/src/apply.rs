use crate::{ActiveBuff, Buff, BuffTiming};
use lanewar_core::{InstanceId, MatchState, Side, Zone};
use log::debug;

/// Applies every round-start buff. Call right after a pass that advanced the round.
pub fn apply_round_start_buffs(state: &MatchState, buffs: &[ActiveBuff]) -> MatchState {
    let mut next = state.clone();
    for active in buffs
        .iter()
        .filter(|active| active.buff.timing() == BuffTiming::RoundStart)
    {
        let side = active.side;
        match active.buff {
            Buff::ExtraMana { amount } => {
                let player = next.player_mut(side);
                player.mana = player.mana.saturating_add(amount);
            }
            Buff::Regenerate { amount } => {
                let cap = next.config.starting_life(side);
                let player = next.player_mut(side);
                if player.life < cap {
                    player.life = player.life.saturating_add(amount).min(cap);
                }
            }
            Buff::Vitality { amount } => {
                let player = next.player_mut(side);
                player.life = player.life.saturating_add(amount);
            }
            Buff::Fortify { attack, health } => fortify_board(&mut next, side, attack, health),
            Buff::Empower { .. } => {}
        }
        debug!("round {}: {side:?} {}", next.round_number, active.buff.label());
    }
    next
}

/// Applies every on-play buff of the card owner's side to `instance_id`.
/// Cards that are not on the board are left alone.
pub fn apply_on_play_buffs(
    state: &MatchState,
    buffs: &[ActiveBuff],
    instance_id: InstanceId,
) -> MatchState {
    let mut next = state.clone();
    let Some(card) = next
        .cards
        .iter_mut()
        .find(|card| card.instance_id == instance_id && card.zone == Zone::Board)
    else {
        return next;
    };
    let owner = card.owner;
    for active in buffs.iter().filter(|active| active.side == owner) {
        if let Buff::Empower { attack, health } = active.buff {
            card.attack_bonus = card.attack_bonus.saturating_add(attack);
            card.current_hp = card.current_hp.map(|hp| hp.saturating_add(health));
            debug!("card {instance_id}: {}", active.buff.label());
        }
    }
    next
}

fn fortify_board(state: &mut MatchState, side: Side, attack: u32, health: u32) {
    for card in state
        .cards
        .iter_mut()
        .filter(|card| card.is_in(side, Zone::Board))
    {
        card.attack_bonus = card.attack_bonus.saturating_add(attack);
        card.current_hp = card.current_hp.map(|hp| hp.saturating_add(health));
    }
}
