use crate::AutoplayError;
use lanewar_core::{Action, CombatEvent, Side};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Finished,
    MaxSteps,
    NoLegalAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    pub step: u32,
    pub round: u32,
    pub actor: Side,
    /// Acting ally when the actor is the cooperative side.
    #[serde(default)]
    pub ally: Option<u8>,
    pub action: Action,
    pub life_a: u32,
    pub life_b: u32,
    #[serde(default)]
    pub events: Vec<CombatEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchTrace {
    pub seed: u64,
    pub status: RunStatus,
    pub winner: Option<Side>,
    pub rounds: u32,
    pub steps: Vec<StepRecord>,
}

impl MatchTrace {
    pub fn to_text_report(&self) -> String {
        let winner = match self.winner {
            Some(side) => format!("{side:?}"),
            None => "none".to_string(),
        };
        let mut lines = vec![format!(
            "status: {:?} winner: {winner} rounds: {} seed: {}",
            self.status, self.rounds, self.seed
        )];
        for step in &self.steps {
            lines.push(format!(
                "  {:>4} r{:<3} {:?} {:<24} life {}/{}",
                step.step,
                step.round,
                step.actor,
                step.action.short_label(),
                step.life_a,
                step.life_b
            ));
            for event in &step.events {
                lines.push(format!("         {event:?}"));
            }
        }
        lines.join("\n")
    }
}

pub fn write_json(path: &Path, trace: &MatchTrace) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(trace)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, trace: &MatchTrace) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, trace.to_text_report())?;
    Ok(())
}
