use serde::{Deserialize, Serialize};

/// Match-scoped card identifier. Assigned once at match creation, never reused.
pub type InstanceId = u32;
/// One-based lane index.
pub type Lane = u8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Keyword {
    #[default]
    None,
    FirstStrike,
    Taunt,
    Lifesteal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Zone {
    Deck,
    Hand,
    Board,
    Discard,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub base_hp: u32,
    pub base_atk: u32,
    pub mana_cost: u32,
    #[serde(default)]
    pub keyword: Keyword,
}

impl CardTemplate {
    pub fn new(id: impl Into<String>, base_atk: u32, base_hp: u32, mana_cost: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            base_hp,
            base_atk,
            mana_cost,
            keyword: Keyword::None,
        }
    }

    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keyword = keyword;
        self
    }
}

/// A template bound into one match. Zone and lane are attributes; the card
/// itself lives in the match's flat card list for its whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardInstance {
    pub instance_id: InstanceId,
    pub template: CardTemplate,
    pub owner: Side,
    pub zone: Zone,
    /// Set while on the board.
    #[serde(default)]
    pub current_hp: Option<u32>,
    /// Set while on the board.
    #[serde(default)]
    pub lane: Option<Lane>,
    /// Board-only attack modifier written by run modifiers; cleared on leaving the board.
    #[serde(default)]
    pub attack_bonus: u32,
    /// Stamp taken when the card entered its current zone.
    #[serde(default)]
    pub zone_seq: u64,
}

impl CardInstance {
    pub fn attack(&self) -> u32 {
        self.template.base_atk.saturating_add(self.attack_bonus)
    }

    pub fn hp(&self) -> u32 {
        self.current_hp.unwrap_or(0)
    }

    pub fn keyword(&self) -> Keyword {
        self.template.keyword
    }

    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.template.keyword == keyword
    }

    pub fn cost(&self) -> u32 {
        self.template.mana_cost
    }

    pub fn is_in(&self, side: Side, zone: Zone) -> bool {
        self.owner == side && self.zone == zone
    }
}
