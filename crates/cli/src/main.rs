mod view;

use lanewar_autoplay::{
    write_json, write_text, AutoplayConfig, AutoplayError, Controller, GreedyBot, MatchDriver,
    MatchTrace,
};
use lanewar_core::{Action, CardTemplate, EngineError, Lane, MatchState, Phase, RngState, Side};
use lanewar_data::{load_assets, Assets};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use view::{print_board, print_events, print_hand, print_help, print_state, side_label};

const DEFAULT_SEED: u64 = 0xC0FFEE;
const DEFAULT_ASSETS_DIR: &str = "assets";
const HUMAN: Side = Side::A;
const LOG_ENV: &str = "LANEWAR_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    auto: bool,
    seed: u64,
    assets: PathBuf,
    deck_a: Option<String>,
    deck_b: Option<String>,
    trace: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Quit,
    State,
    Hand,
    Board,
    Actions,
    Json,
    Play { hand_index: usize, lane: Lane },
    Buy,
    Attack { lanes: Vec<Lane> },
    Confirm,
    Pass,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        seed: DEFAULT_SEED,
        assets: PathBuf::from(DEFAULT_ASSETS_DIR),
        deck_a: None,
        deck_b: None,
        trace: None,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        match (args[idx].as_str(), value) {
            ("--auto", _) => options.auto = true,
            ("--seed", Some(value)) => {
                match value.parse::<u64>() {
                    Ok(seed) => options.seed = seed,
                    Err(_) => eprintln!("ignoring invalid seed '{value}'"),
                }
                idx += 1;
            }
            ("--assets", Some(value)) => {
                options.assets = PathBuf::from(value);
                idx += 1;
            }
            ("--deck-a", Some(value)) => {
                options.deck_a = Some(value.clone());
                idx += 1;
            }
            ("--deck-b", Some(value)) => {
                options.deck_b = Some(value.clone());
                idx += 1;
            }
            ("--trace", Some(value)) => {
                options.trace = Some(PathBuf::from(value));
                idx += 1;
            }
            (other, _) => eprintln!("ignoring argument '{other}'"),
        }
        idx += 1;
    }
    options
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();
    let command = match cmd {
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "state" | "s" => Command::State,
        "hand" | "h" => Command::Hand,
        "board" | "b" => Command::Board,
        "actions" | "a" => Command::Actions,
        "json" => Command::Json,
        "buy" => Command::Buy,
        "confirm" | "c" => Command::Confirm,
        "pass" | "p" => Command::Pass,
        "play" => {
            let [card, lane] = args.as_slice() else {
                return Err("usage: play <card> <lane>".to_string());
            };
            let hand_index = card
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| format!("invalid card number '{card}'"))?;
            let lane = parse_lane(lane)?;
            Command::Play { hand_index, lane }
        }
        "attack" => {
            let lanes = args
                .iter()
                .flat_map(|arg| arg.split(','))
                .filter(|part| !part.trim().is_empty())
                .map(|part| parse_lane(part.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            Command::Attack { lanes }
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn parse_lane(value: &str) -> Result<Lane, String> {
    value
        .parse::<Lane>()
        .map_err(|_| format!("invalid lane '{value}'"))
}

fn log_filter(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn is_text_trace(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn write_trace(path: &Path, trace: &MatchTrace) -> Result<(), AutoplayError> {
    if is_text_trace(path) {
        write_text(path, trace)
    } else {
        write_json(path, trace)
    }
}

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let assets = match load_assets(&options.assets) {
        Ok(assets) => assets,
        Err(err) => {
            eprintln!("asset load error: {err:#}");
            std::process::exit(1);
        }
    };
    let (deck_a, deck_b) = match pick_decks(&assets, &options) {
        Ok(decks) => decks,
        Err(err) => {
            eprintln!("deck error: {err:#}");
            std::process::exit(1);
        }
    };
    if options.auto {
        run_auto(&options, &assets, &deck_a, &deck_b);
        return;
    }
    run_interactive(&options, &assets, &deck_a, &deck_b);
}

fn pick_decks(
    assets: &Assets,
    options: &CliOptions,
) -> Result<(Vec<CardTemplate>, Vec<CardTemplate>), String> {
    let first = assets.decks.first().map(|deck| deck.name.as_str());
    let second = assets.decks.get(1).map(|deck| deck.name.as_str()).or(first);
    let name_a = options.deck_a.as_deref().or(first);
    let name_b = options.deck_b.as_deref().or(second);
    let (Some(name_a), Some(name_b)) = (name_a, name_b) else {
        return Err(format!("no decks in {}", options.assets.display()));
    };
    let deck_a = assets.deck(name_a).map_err(|err| format!("{err:#}"))?;
    let deck_b = assets.deck(name_b).map_err(|err| format!("{err:#}"))?;
    println!("deck A: {name_a} ({} cards)", deck_a.len());
    println!("deck B: {name_b} ({} cards)", deck_b.len());
    Ok((deck_a, deck_b))
}

fn run_auto(
    options: &CliOptions,
    assets: &Assets,
    deck_a: &[CardTemplate],
    deck_b: &[CardTemplate],
) {
    let config = AutoplayConfig {
        seed: options.seed,
        ..AutoplayConfig::default()
    };
    let bot = GreedyBot::new(config.weights);
    let driver = MatchDriver::new(config, &bot, &bot);
    let outcome = match driver.run(deck_a, deck_b, assets.match_config.clone()) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("autoplay error: {err}");
            std::process::exit(1);
        }
    };
    println!("seed: {}", outcome.trace.seed);
    for step in &outcome.trace.steps {
        println!(
            "r{:<3} {}: {}",
            step.round,
            side_label(step.actor),
            step.action.short_label()
        );
        print_events(&outcome.state, &step.events);
    }
    println!("status: {:?}", outcome.trace.status);
    match outcome.trace.winner {
        Some(side) => println!(
            "winner: side {} after {} rounds",
            side_label(side),
            outcome.trace.rounds
        ),
        None => println!("no winner after {} rounds", outcome.trace.rounds),
    }
    if let Some(path) = options.trace.as_ref() {
        match write_trace(path, &outcome.trace) {
            Ok(()) => println!("trace written to {}", path.display()),
            Err(err) => {
                eprintln!("trace write error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn run_interactive(
    options: &CliOptions,
    assets: &Assets,
    deck_a: &[CardTemplate],
    deck_b: &[CardTemplate],
) {
    let mut rng = RngState::from_seed(options.seed);
    let mut state = match MatchState::create(deck_a, deck_b, assets.match_config.clone(), &mut rng)
    {
        Ok(state) => state,
        Err(err) => {
            eprintln!("match setup error: {err}");
            std::process::exit(1);
        }
    };
    let bot = GreedyBot::default();
    println!(
        "you play side {}; the {} bot plays side {}",
        side_label(HUMAN),
        bot.name(),
        side_label(HUMAN.opponent())
    );
    print_help();
    print_state(&state);
    print_hand(&state, HUMAN);
    let stdin = io::stdin();
    loop {
        if !state.is_active() {
            print_state(&state);
            match state.winner {
                Some(side) if side == HUMAN => println!("you win"),
                Some(_) => println!("the bot wins"),
                None => println!("match over"),
            }
            break;
        }
        if state.priority != HUMAN {
            let action = match bot.choose(&state) {
                Ok(action) => action,
                Err(err) => {
                    eprintln!("bot error: {err}");
                    break;
                }
            };
            println!("bot: {}", action.short_label());
            match state.apply(&action, &mut rng) {
                Ok((next, events)) => {
                    state = next;
                    print_events(&state, &events);
                }
                Err(err) => {
                    print_engine_error(&state, &err);
                    break;
                }
            }
            continue;
        }

        print!("{}", prompt_text(&state));
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("hint: type 'help' for the command list");
                continue;
            }
        };
        let action = match command {
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
            Command::State => {
                print_state(&state);
                continue;
            }
            Command::Hand => {
                print_hand(&state, HUMAN);
                continue;
            }
            Command::Board => {
                print_board(&state);
                continue;
            }
            Command::Actions => {
                for action in state.legal_actions() {
                    println!("  {}", action.short_label());
                }
                continue;
            }
            Command::Json => {
                match serde_json::to_string_pretty(&state) {
                    Ok(body) => println!("{body}"),
                    Err(err) => eprintln!("error: {err}"),
                }
                continue;
            }
            Command::Play { hand_index, lane } => {
                let hand = state.hand(HUMAN);
                let Some(card) = hand.get(hand_index - 1) else {
                    eprintln!("error: no card number {hand_index} in hand");
                    eprintln!("hint: use 'hand' to list your cards");
                    continue;
                };
                Action::Play {
                    instance_id: card.instance_id,
                    lane,
                }
            }
            Command::Buy => Action::Buy,
            Command::Attack { lanes } if lanes.is_empty() => Action::Attack {
                lanes: state.occupied_lanes(HUMAN),
            },
            Command::Attack { lanes } => Action::Attack { lanes },
            Command::Confirm => Action::ConfirmDefense,
            Command::Pass => Action::Pass,
        };
        match state.apply(&action, &mut rng) {
            Ok((next, events)) => {
                let round = state.round_number;
                state = next;
                print_events(&state, &events);
                if state.round_number != round {
                    println!("-- round {} --", state.round_number);
                    print_hand(&state, HUMAN);
                }
            }
            Err(err) => print_engine_error(&state, &err),
        }
    }
}

fn prompt_text(state: &MatchState) -> String {
    let phase = match state.phase {
        Phase::Actions => "act",
        Phase::DefenderReaction => "defend",
    };
    format!(
        "[r{} {} life {}/{} mana {}] > ",
        state.round_number,
        phase,
        state.life(HUMAN),
        state.life(HUMAN.opponent()),
        state.mana(HUMAN)
    )
}

fn print_engine_error(state: &MatchState, err: &EngineError) {
    eprintln!("error: {err}");
    if let Some(hint) = engine_error_hint(state, err) {
        eprintln!("hint: {hint}");
    }
}

fn engine_error_hint(state: &MatchState, err: &EngineError) -> Option<String> {
    let side = state.priority;
    match err {
        EngineError::InvalidPhase(Phase::DefenderReaction) => {
            Some("an attack is waiting: use 'confirm'".to_string())
        }
        EngineError::InvalidPhase(Phase::Actions) => {
            Some("nothing to confirm: play, buy, attack or pass".to_string())
        }
        EngineError::NotYourPriority(owner) => Some(format!(
            "side {} acts now, not side {}",
            side_label(side),
            side_label(*owner)
        )),
        EngineError::SlotOccupied(_) => Some(format!(
            "free lanes: {:?}",
            state.free_lanes(side)
        )),
        EngineError::NotEnoughMana { have, need } => Some(format!(
            "{need} mana needed, {have} left this round; pass to refill"
        )),
        EngineError::InvalidLane(_) => Some(format!(
            "lanes run from 1 to {}",
            state.config.lane_count
        )),
        EngineError::NotAttackToken(_) => Some(format!(
            "side {} holds the attack token this round",
            side_label(state.attack_token)
        )),
        EngineError::InvalidLanes => Some(format!(
            "attack only from occupied lanes: {:?}",
            state.occupied_lanes(side)
        )),
        EngineError::DeckNotEmpty(count) => Some(format!(
            "buying opens up once the deck is empty ({count} cards left)"
        )),
        EngineError::NoDiscard => Some("nothing in the discard pile to buy back".to_string()),
        EngineError::MatchNotActive => Some("the match is over".to_string()),
        EngineError::UnknownCard(_) | EngineError::CardNotInHand(_) => {
            Some("use 'hand' to list playable cards".to_string())
        }
        EngineError::Config(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn options_default_to_interactive() {
        let options = parse_cli_options(&[]);
        assert!(!options.auto);
        assert_eq!(options.seed, DEFAULT_SEED);
        assert_eq!(options.assets, PathBuf::from("assets"));
        assert_eq!(options.deck_a, None);
    }

    #[test]
    fn options_parse_all_flags() {
        let options = parse_cli_options(&args(&[
            "--auto", "--seed", "42", "--assets", "data", "--deck-a", "vanguard", "--deck-b",
            "bulwark", "--trace", "out/trace.json",
        ]));
        assert_eq!(
            options,
            CliOptions {
                auto: true,
                seed: 42,
                assets: PathBuf::from("data"),
                deck_a: Some("vanguard".to_string()),
                deck_b: Some("bulwark".to_string()),
                trace: Some(PathBuf::from("out/trace.json")),
            }
        );
    }

    #[test]
    fn bad_seed_keeps_default() {
        let options = parse_cli_options(&args(&["--seed", "soon"]));
        assert_eq!(options.seed, DEFAULT_SEED);
    }

    #[test]
    fn commands_parse() {
        assert_eq!(
            parse_command("play 2 3"),
            Ok(Command::Play {
                hand_index: 2,
                lane: 3
            })
        );
        assert_eq!(
            parse_command("attack 1,3 2"),
            Ok(Command::Attack {
                lanes: vec![1, 3, 2]
            })
        );
        assert_eq!(parse_command("attack"), Ok(Command::Attack { lanes: vec![] }));
        assert_eq!(parse_command(" c "), Ok(Command::Confirm));
        assert_eq!(parse_command("p"), Ok(Command::Pass));
    }

    #[test]
    fn bad_commands_are_rejected() {
        assert!(parse_command("play 0 1").is_err());
        assert!(parse_command("play 1").is_err());
        assert!(parse_command("attack x").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        use tracing_subscriber::filter::LevelFilter;
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn trace_format_follows_extension() {
        assert!(is_text_trace(Path::new("out/trace.txt")));
        assert!(is_text_trace(Path::new("REPORT.TXT")));
        assert!(!is_text_trace(Path::new("out/trace.json")));
        assert!(!is_text_trace(Path::new("trace")));
    }

    #[test]
    fn hints_point_at_the_fix() {
        let mut rng = RngState::from_seed(1);
        let state = MatchState::create(&[], &[], Default::default(), &mut rng).expect("create");
        let hint = engine_error_hint(&state, &EngineError::InvalidLane(9)).expect("hint");
        assert_eq!(hint, "lanes run from 1 to 3");
        let hint = engine_error_hint(&state, &EngineError::InvalidPhase(Phase::DefenderReaction))
            .expect("hint");
        assert!(hint.contains("confirm"));
    }
}
