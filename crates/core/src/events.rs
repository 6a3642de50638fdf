use crate::{InstanceId, Lane, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CombatRole {
    Attacker,
    Defender,
}

/// What happened during one combat resolution, in order. Output only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CombatEvent {
    Attack {
        attacker: InstanceId,
        lane: Lane,
    },
    FirstStrike {
        attacker: InstanceId,
    },
    Damage {
        target: InstanceId,
        amount: u32,
        role: CombatRole,
    },
    Heal {
        side: Side,
        amount: u32,
    },
    Death {
        instance_id: InstanceId,
    },
    Face {
        side: Side,
        amount: u32,
        life_after: u32,
    },
    Redirect {
        attacker: InstanceId,
        blocker: InstanceId,
        lane: Lane,
    },
}

/// Collects events while one confirmation resolves.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    queue: Vec<CombatEvent>,
}

impl EventBus {
    pub(crate) fn push(&mut self, event: CombatEvent) {
        self.queue.push(event);
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn into_events(self) -> Vec<CombatEvent> {
        self.queue
    }
}
