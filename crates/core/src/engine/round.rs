use crate::*;
use log::info;

impl MatchState {
    /// Runs once both sides have passed. `last_passer` receives the attack
    /// token and priority for the new round.
    pub(crate) fn advance_round(&mut self, last_passer: Side) {
        self.round_number = self.round_number.saturating_add(1);
        let mana = self.config.mana_for_round(self.round_number);
        for side in Side::BOTH {
            let player = self.player_mut(side);
            player.mana = mana;
            player.passed = false;
            if self.hand_has_room(side) {
                self.draw_card(side);
            }
        }
        self.attack_token = last_passer;
        self.priority = last_passer;
        self.phase = Phase::Actions;
        self.declared_lanes = None;
        self.ally_turn = 0;
        info!(
            "round {} begins: {mana} mana, {last_passer:?} holds the attack token",
            self.round_number
        );
    }
}
