use lanewar_autoplay::{AutoplayError, Controller, GreedyBot, HeuristicWeights};
use lanewar_core::{
    Action, CardInstance, CardTemplate, InstanceId, Keyword, Lane, MatchConfig, MatchState,
    MatchStatus, RngState, Side, Zone,
};

fn empty_match() -> MatchState {
    let mut rng = RngState::from_seed(3);
    MatchState::create(&[], &[], MatchConfig::default(), &mut rng).expect("create match")
}

fn insert(
    state: &mut MatchState,
    side: Side,
    zone: Zone,
    lane: Option<Lane>,
    template: CardTemplate,
) -> InstanceId {
    let id = state.cards.len() as InstanceId + 1;
    state.cards.push(CardInstance {
        instance_id: id,
        current_hp: lane.map(|_| template.base_hp),
        template,
        owner: side,
        zone,
        lane,
        attack_bonus: 0,
        zone_seq: id as u64,
    });
    id
}

fn on_board(state: &mut MatchState, side: Side, lane: Lane, atk: u32, hp: u32) -> InstanceId {
    let template = CardTemplate::new(format!("unit_{atk}_{hp}"), atk, hp, 1);
    insert(state, side, Zone::Board, Some(lane), template)
}

fn in_hand(state: &mut MatchState, side: Side, template: CardTemplate) -> InstanceId {
    insert(state, side, Zone::Hand, None, template)
}

#[test]
fn passes_when_nothing_else_is_legal() {
    let state = empty_match();
    assert_eq!(state.legal_actions(), vec![Action::Pass]);
    assert_eq!(GreedyBot::default().choose(&state).expect("choose"), Action::Pass);
}

#[test]
fn finished_match_has_no_choice() {
    let mut state = empty_match();
    state.status = MatchStatus::Finished;
    assert!(matches!(
        GreedyBot::default().choose(&state),
        Err(AutoplayError::NoLegalAction)
    ));
}

#[test]
fn defender_always_confirms() {
    let mut state = empty_match();
    on_board(&mut state, Side::A, 1, 3, 3);
    let declared = state.declare_attack(&[1]).expect("declare");
    assert_eq!(declared.priority, Side::B);
    assert_eq!(
        GreedyBot::default().choose(&declared).expect("choose"),
        Action::ConfirmDefense
    );
}

#[test]
fn attacks_an_open_lane() {
    let mut state = empty_match();
    on_board(&mut state, Side::A, 1, 3, 3);
    let action = GreedyBot::default().choose(&state).expect("choose");
    assert_eq!(action, Action::Attack { lanes: vec![1] });
}

#[test]
fn holds_back_a_losing_attack() {
    let mut state = empty_match();
    on_board(&mut state, Side::A, 1, 1, 1);
    on_board(&mut state, Side::B, 1, 5, 5);
    let bot = GreedyBot::default();
    let ranked = bot.ranked_actions(&state);
    assert_eq!(ranked[0].0, Action::Attack { lanes: vec![1] });
    assert!(ranked[0].1 < 0.0);
    assert_eq!(bot.choose(&state).expect("choose"), Action::Pass);
}

#[test]
fn picks_the_strongest_card_for_the_first_free_lane() {
    let weak = CardTemplate::new("weak", 1, 1, 1);
    let strong = CardTemplate::new("strong", 3, 3, 1);
    let mut rng = RngState::from_seed(11);
    let state = MatchState::create(
        &[weak, strong],
        &[],
        MatchConfig::default(),
        &mut rng,
    )
    .expect("create match");
    let strong_id = state
        .hand(Side::A)
        .iter()
        .find(|card| card.template.id == "strong")
        .map(|card| card.instance_id)
        .expect("strong in hand");

    let action = GreedyBot::default().choose(&state).expect("choose");

    assert_eq!(
        action,
        Action::Play {
            instance_id: strong_id,
            lane: 1
        }
    );
}

#[test]
fn contests_a_lane_it_can_clear() {
    let mut state = empty_match();
    on_board(&mut state, Side::B, 2, 2, 2);
    let id = in_hand(&mut state, Side::A, CardTemplate::new("spear", 3, 1, 1));

    let action = GreedyBot::default().choose(&state).expect("choose");

    assert_eq!(action, Action::Play { instance_id: id, lane: 2 });
}

#[test]
fn ranked_actions_follow_enumeration_order() {
    let mut state = empty_match();
    in_hand(&mut state, Side::A, CardTemplate::new("grunt", 2, 2, 1));
    let bot = GreedyBot::default();
    let ranked: Vec<Action> = bot
        .ranked_actions(&state)
        .into_iter()
        .map(|(action, _)| action)
        .collect();
    assert_eq!(ranked, state.legal_actions());
    let pass = bot.score_action(&state, &Action::Pass);
    assert_eq!(pass, 0.0);
}

macro_rules! keyword_case {
    ($name:ident, $keyword:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let mut state = empty_match();
            let template = CardTemplate::new("keyword_check", 2, 2, 1).with_keyword($keyword);
            let id = in_hand(&mut state, Side::A, template);
            let bot = GreedyBot::new(HeuristicWeights::default());
            let score = bot.score_action(&state, &Action::Play { instance_id: id, lane: 1 });
            assert!((score - $expected).abs() < 1e-9, "score {score}");
        }
    };
}

keyword_case!(play_score_plain, Keyword::None, 3.7);
keyword_case!(play_score_first_strike, Keyword::FirstStrike, 5.2);
keyword_case!(play_score_taunt, Keyword::Taunt, 5.2);
keyword_case!(play_score_lifesteal, Keyword::Lifesteal, 5.2);
