use serde::{Deserialize, Serialize};

pub use lanewar_core::{CardTemplate, Keyword, MatchConfig};

/// Every card template a deck may reference, in file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    pub cards: Vec<CardTemplate>,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&CardTemplate> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A named deck: template ids, repeated once per copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckList {
    pub name: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub catalog: Catalog,
    pub decks: Vec<DeckList>,
    pub match_config: MatchConfig,
}
