use crate::{AutoplayConfig, AutoplayError, Controller, MatchTrace, RunStatus, StepRecord};
use lanewar_core::{Action, CardTemplate, MatchConfig, MatchRng, MatchState, RngState, Side};
use lanewar_modifiers::{apply_on_play_buffs, apply_round_start_buffs, ActiveBuff};
use log::{debug, info, warn};

/// Final state plus the recorded trace of a driven match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub state: MatchState,
    pub trace: MatchTrace,
}

impl MatchOutcome {
    /// Turns an unfinished run into the matching error.
    pub fn into_finished(self, max_steps: u32) -> Result<Self, AutoplayError> {
        match self.trace.status {
            RunStatus::Finished => Ok(self),
            RunStatus::MaxSteps => Err(AutoplayError::StepLimit(max_steps)),
            RunStatus::NoLegalAction => Err(AutoplayError::NoLegalAction),
        }
    }
}

/// Plays one controller per side until the match ends or the step limit
/// runs out. Buffs are applied between engine operations.
pub struct MatchDriver<'a> {
    pub config: AutoplayConfig,
    controllers: [&'a dyn Controller; 2],
    buffs: Vec<ActiveBuff>,
}

impl<'a> MatchDriver<'a> {
    pub fn new(
        config: AutoplayConfig,
        side_a: &'a dyn Controller,
        side_b: &'a dyn Controller,
    ) -> Self {
        Self {
            config,
            controllers: [side_a, side_b],
            buffs: Vec::new(),
        }
    }

    pub fn with_buffs(mut self, buffs: Vec<ActiveBuff>) -> Self {
        self.buffs = buffs;
        self
    }

    pub fn controller(&self, side: Side) -> &dyn Controller {
        self.controllers[side.index()]
    }

    pub fn run(
        &self,
        deck_a: &[CardTemplate],
        deck_b: &[CardTemplate],
        match_config: MatchConfig,
    ) -> Result<MatchOutcome, AutoplayError> {
        let mut rng = RngState::from_seed(self.config.seed);
        let state = MatchState::create(deck_a, deck_b, match_config, &mut rng)?;
        self.run_from(state, &mut rng)
    }

    pub fn run_from(
        &self,
        mut state: MatchState,
        rng: &mut impl MatchRng,
    ) -> Result<MatchOutcome, AutoplayError> {
        let mut steps = Vec::new();
        let mut status = RunStatus::MaxSteps;
        for step in 0..self.config.max_steps {
            if !state.is_active() {
                break;
            }
            let actor = state.priority;
            let controller = self.controller(actor);
            let action = match controller.choose(&state) {
                Ok(action) => action,
                Err(AutoplayError::NoLegalAction) => {
                    status = RunStatus::NoLegalAction;
                    break;
                }
                Err(err) => return Err(err),
            };
            let ally = (state.config.coop_side == Some(actor)).then_some(state.ally_turn);
            let round = state.round_number;
            let (next, events) = state.apply(&action, &mut *rng).map_err(|err| {
                warn!(
                    "{} ({actor:?}) chose rejected action {}: {err}",
                    controller.name(),
                    action.short_label()
                );
                AutoplayError::from(err)
            })?;
            state = self.apply_buffs(next, &action, round);
            debug!("step {step}: {actor:?} {}", action.short_label());
            steps.push(StepRecord {
                step,
                round,
                actor,
                ally,
                action,
                life_a: state.life(Side::A),
                life_b: state.life(Side::B),
                events,
            });
        }
        if !state.is_active() {
            status = RunStatus::Finished;
            info!(
                "match over after {} rounds: winner {:?}",
                state.round_number, state.winner
            );
        }
        let trace = MatchTrace {
            seed: self.config.seed,
            status,
            winner: state.winner,
            rounds: state.round_number,
            steps,
        };
        Ok(MatchOutcome { state, trace })
    }

    fn apply_buffs(&self, state: MatchState, action: &Action, round_before: u32) -> MatchState {
        if self.buffs.is_empty() {
            return state;
        }
        match action {
            Action::Pass if state.round_number > round_before => {
                apply_round_start_buffs(&state, &self.buffs)
            }
            Action::Play { instance_id, .. } => {
                apply_on_play_buffs(&state, &self.buffs, *instance_id)
            }
            _ => state,
        }
    }
}
