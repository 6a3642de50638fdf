use crate::schema::{Assets, Catalog, DeckList};
use anyhow::{bail, Context};
use lanewar_core::{CardTemplate, MatchConfig};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CATALOG_FILE: &str = "cards.json";
pub const DECKS_FILE: &str = "decks.json";
pub const MATCH_FILE: &str = "match.json";

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let catalog: Catalog = load_json(path)?;
    if catalog.is_empty() {
        bail!("no cards in {}", path.display());
    }
    let mut seen = HashSet::new();
    for card in &catalog.cards {
        if card.id.trim().is_empty() {
            bail!("card id cannot be empty in {}", path.display());
        }
        if !seen.insert(card.id.as_str()) {
            bail!("duplicate card {} in {}", card.id, path.display());
        }
        if card.base_hp == 0 {
            bail!("card {} has zero base_hp in {}", card.id, path.display());
        }
    }
    Ok(catalog)
}

pub fn load_decks(path: &Path) -> anyhow::Result<Vec<DeckList>> {
    let decks: Vec<DeckList> = load_json(path)?;
    let mut seen = HashSet::new();
    for deck in &decks {
        if deck.name.trim().is_empty() {
            bail!("deck name cannot be empty in {}", path.display());
        }
        if !seen.insert(deck.name.as_str()) {
            bail!("duplicate deck {} in {}", deck.name, path.display());
        }
    }
    Ok(decks)
}

pub fn load_match_config(path: &Path) -> anyhow::Result<MatchConfig> {
    let config: MatchConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("invalid match config {}", path.display()))?;
    Ok(config)
}

/// Resolves template ids against the catalog, keeping order and duplicates.
pub fn build_deck<S: AsRef<str>>(
    catalog: &Catalog,
    names: &[S],
) -> anyhow::Result<Vec<CardTemplate>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            catalog
                .get(name)
                .cloned()
                .with_context(|| format!("unknown card {name}"))
        })
        .collect()
}

/// Loads `cards.json`, `decks.json` and `match.json` from `dir` and checks
/// that every deck resolves against the catalog.
pub fn load_assets(dir: &Path) -> anyhow::Result<Assets> {
    let catalog = load_catalog(&dir.join(CATALOG_FILE))?;
    let decks = load_decks(&dir.join(DECKS_FILE))?;
    let match_config = load_match_config(&dir.join(MATCH_FILE))?;
    for deck in &decks {
        build_deck(&catalog, &deck.cards).with_context(|| format!("deck {}", deck.name))?;
    }
    Ok(Assets {
        catalog,
        decks,
        match_config,
    })
}

impl Assets {
    pub fn deck_list(&self, name: &str) -> Option<&DeckList> {
        self.decks.iter().find(|deck| deck.name == name)
    }

    pub fn deck(&self, name: &str) -> anyhow::Result<Vec<CardTemplate>> {
        let Some(list) = self.deck_list(name) else {
            bail!("unknown deck {name}");
        };
        build_deck(&self.catalog, &list.cards)
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
