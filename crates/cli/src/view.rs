use lanewar_core::{
    CardInstance, CombatEvent, CombatRole, InstanceId, Keyword, MatchState, Phase, Side,
};

pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::A => "A",
        Side::B => "B",
    }
}

fn keyword_tag(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::None => "",
        Keyword::FirstStrike => " [first strike]",
        Keyword::Taunt => " [taunt]",
        Keyword::Lifesteal => " [lifesteal]",
    }
}

fn card_name(card: &CardInstance) -> &str {
    if card.template.name.is_empty() {
        &card.template.id
    } else {
        &card.template.name
    }
}

pub fn card_label(state: &MatchState, id: InstanceId) -> String {
    match state.card(id) {
        Some(card) => format!("{}#{id}", card_name(card)),
        None => format!("#{id}"),
    }
}

pub fn format_hand_card(card: &CardInstance) -> String {
    format!(
        "{} ({}/{}, cost {}){}",
        card_name(card),
        card.attack(),
        card.template.base_hp,
        card.cost(),
        keyword_tag(card.keyword())
    )
}

pub fn format_board_card(card: &CardInstance) -> String {
    format!(
        "{} {}/{}{}",
        card_name(card),
        card.attack(),
        card.hp(),
        keyword_tag(card.keyword())
    )
}

pub fn format_event(state: &MatchState, event: &CombatEvent) -> String {
    match event {
        CombatEvent::Attack { attacker, lane } => {
            format!("{} attacks in lane {lane}", card_label(state, *attacker))
        }
        CombatEvent::Redirect {
            attacker,
            blocker,
            lane,
        } => format!(
            "{} in lane {lane} is pulled onto {}",
            card_label(state, *attacker),
            card_label(state, *blocker)
        ),
        CombatEvent::FirstStrike { attacker } => {
            format!("{} strikes first", card_label(state, *attacker))
        }
        CombatEvent::Damage {
            target,
            amount,
            role,
        } => {
            let role = match role {
                CombatRole::Attacker => "attacker",
                CombatRole::Defender => "defender",
            };
            format!("{role} {} takes {amount}", card_label(state, *target))
        }
        CombatEvent::Heal { side, amount } => {
            format!("side {} heals {amount}", side_label(*side))
        }
        CombatEvent::Death { instance_id } => {
            format!("{} dies", card_label(state, *instance_id))
        }
        CombatEvent::Face {
            side,
            amount,
            life_after,
        } => format!(
            "side {} takes {amount} to the face ({life_after} left)",
            side_label(*side)
        ),
    }
}

pub fn print_events(state: &MatchState, events: &[CombatEvent]) {
    for event in events {
        println!("  event: {}", format_event(state, event));
    }
}

pub fn print_state(state: &MatchState) {
    println!(
        "round {} | phase {} | priority {} | attack token {}",
        state.round_number,
        match state.phase {
            Phase::Actions => "actions",
            Phase::DefenderReaction => "defender reaction",
        },
        side_label(state.priority),
        side_label(state.attack_token)
    );
    if let Some(lanes) = state.declared_lanes.as_ref() {
        println!("declared lanes: {lanes:?}");
    }
    if state.config.coop_side.is_some() {
        println!("acting ally: {}", state.ally_turn + 1);
    }
    for side in Side::BOTH {
        let player = state.player(side);
        println!(
            "side {}: life {} mana {} hand {} deck {} discard {}{}",
            side_label(side),
            player.life,
            player.mana,
            state.hand_count(side),
            state.deck_count(side),
            state.discard_count(side),
            if player.passed { " (passed)" } else { "" }
        );
    }
}

pub fn print_hand(state: &MatchState, side: Side) {
    let hand = state.hand(side);
    if hand.is_empty() {
        println!("hand: (empty)");
        return;
    }
    println!("hand:");
    for (idx, card) in hand.iter().enumerate() {
        println!("  {}. {}", idx + 1, format_hand_card(card));
    }
}

pub fn print_board(state: &MatchState) {
    for lane in state.config.lanes() {
        let cell = |side: Side| {
            state
                .lane_occupant(side, lane)
                .map(format_board_card)
                .unwrap_or_else(|| "-".to_string())
        };
        println!("lane {lane}: A {:<32} | B {}", cell(Side::A), cell(Side::B));
    }
}

pub fn print_help() {
    println!("commands:");
    println!("  state | s               show life, mana and phase");
    println!("  hand | h                list your hand");
    println!("  board | b               show both boards");
    println!("  actions | a             list legal actions");
    println!("  play <card> <lane>      play hand card number <card> into <lane>");
    println!("  buy                     buy a random card back from your discard");
    println!("  attack [lanes..]        attack with the given lanes, or all of them");
    println!("  confirm | c             resolve an attack declared against you");
    println!("  pass | p                pass priority");
    println!("  json                    print the match state as JSON");
    println!("  help | ?                show this list");
    println!("  quit | q                leave the match");
}
