use lanewar_core::{Keyword, MatchConfig, MatchState, RngState};
use lanewar_data::{build_deck, load_assets, load_catalog, load_decks, load_match_config};
use std::fs;
use std::path::{Path, PathBuf};

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lanewar-data-{label}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn write(dir: &Path, file: &str, body: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn bundled_assets_load_and_start_a_match() {
    let assets = load_assets(&assets_root()).expect("load assets");
    assert_eq!(assets.match_config.lane_count, 3);
    assert_eq!(assets.match_config.max_hand_size, Some(7));
    assert_eq!(assets.match_config.coop_side, None);

    let lancer = assets.catalog.get("lancer").expect("lancer");
    assert_eq!(lancer.keyword, Keyword::FirstStrike);

    let deck_a = assets.deck("vanguard").expect("vanguard");
    let deck_b = assets.deck("bulwark").expect("bulwark");
    assert_eq!(deck_a.len(), 11);
    let mut rng = RngState::from_seed(5);
    let state = MatchState::create(&deck_a, &deck_b, assets.match_config.clone(), &mut rng)
        .expect("create match");
    assert_eq!(state.deck_count(lanewar_core::Side::A), 8);
}

#[test]
fn unknown_deck_name_is_an_error() {
    let assets = load_assets(&assets_root()).expect("load assets");
    let err = assets.deck("swarm").expect_err("missing deck");
    assert!(err.to_string().contains("unknown deck swarm"));
}

#[test]
fn build_deck_keeps_order_and_copies() {
    let assets = load_assets(&assets_root()).expect("load assets");
    let deck = build_deck(&assets.catalog, &["knight", "militia", "knight"]).expect("build");
    let ids: Vec<&str> = deck.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, vec!["knight", "militia", "knight"]);
}

#[test]
fn build_deck_rejects_unknown_card() {
    let assets = load_assets(&assets_root()).expect("load assets");
    let err = build_deck(&assets.catalog, &["knight", "dragon"]).expect_err("unknown card");
    assert!(err.to_string().contains("unknown card dragon"));
}

#[test]
fn keyword_defaults_to_none() {
    let dir = scratch_dir("keyword");
    let path = write(
        &dir,
        "cards.json",
        r#"[{ "id": "pawn", "base_atk": 1, "base_hp": 1, "mana_cost": 1 }]"#,
    );
    let catalog = load_catalog(&path).expect("catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.cards[0].keyword, Keyword::None);
    assert_eq!(catalog.cards[0].name, "");
}

#[test]
fn empty_catalog_is_rejected() {
    let dir = scratch_dir("empty");
    let path = write(&dir, "cards.json", "[]");
    let err = load_catalog(&path).expect_err("empty catalog");
    assert!(err.to_string().contains("no cards in"));
}

#[test]
fn duplicate_card_ids_are_rejected() {
    let dir = scratch_dir("dupe");
    let path = write(
        &dir,
        "cards.json",
        r#"[
            { "id": "pawn", "base_atk": 1, "base_hp": 1, "mana_cost": 1 },
            { "id": "pawn", "base_atk": 2, "base_hp": 2, "mana_cost": 2 }
        ]"#,
    );
    let err = load_catalog(&path).expect_err("duplicate");
    assert!(err.to_string().contains("duplicate card pawn"));
}

#[test]
fn zero_health_cards_are_rejected() {
    let dir = scratch_dir("zero-hp");
    let path = write(
        &dir,
        "cards.json",
        r#"[{ "id": "ghost", "base_atk": 1, "base_hp": 0, "mana_cost": 1 }]"#,
    );
    let err = load_catalog(&path).expect_err("zero hp");
    assert!(err.to_string().contains("zero base_hp"));
}

#[test]
fn duplicate_deck_names_are_rejected() {
    let dir = scratch_dir("decks");
    let path = write(
        &dir,
        "decks.json",
        r#"[{ "name": "a", "cards": [] }, { "name": "a", "cards": ["pawn"] }]"#,
    );
    let err = load_decks(&path).expect_err("duplicate deck");
    assert!(err.to_string().contains("duplicate deck a"));
}

#[test]
fn match_config_defaults_and_validation() {
    let dir = scratch_dir("match");
    let path = write(
        &dir,
        "match.json",
        r#"{ "starting_life_a": 20, "starting_life_b": 25, "max_mana": 8, "lane_count": 5 }"#,
    );
    let config = load_match_config(&path).expect("config");
    assert_eq!(config.initial_draw, 3);
    assert_eq!(config.max_hand_size, None);
    assert_eq!(config.starting_life_b, 25);

    let bad = write(
        &dir,
        "bad.json",
        r#"{ "starting_life_a": 20, "starting_life_b": 20, "max_mana": 8, "lane_count": 4 }"#,
    );
    let err = load_match_config(&bad).expect_err("bad lanes");
    assert!(err.to_string().contains("invalid match config"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = scratch_dir("missing");
    let err = load_assets(&dir).expect_err("missing files");
    assert!(format!("{err:#}").contains("cards.json"));
}

#[test]
fn deck_with_unknown_card_fails_asset_load() {
    let dir = scratch_dir("assets");
    write(
        &dir,
        "cards.json",
        r#"[{ "id": "pawn", "base_atk": 1, "base_hp": 1, "mana_cost": 1 }]"#,
    );
    write(&dir, "decks.json", r#"[{ "name": "odd", "cards": ["pawn", "rook"] }]"#);
    let config = serde_json::to_string(&MatchConfig::default()).expect("encode config");
    write(&dir, "match.json", &config);

    let err = load_assets(&dir).expect_err("unknown card");
    let chain = format!("{err:#}");
    assert!(chain.contains("deck odd"));
    assert!(chain.contains("unknown card rook"));
}
