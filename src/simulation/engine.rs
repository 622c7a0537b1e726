use crate::card::Card;
use crate::game::state::{GameError, GameState, MAX_HAND_SIZE, MIN_HAND_SIZE};
use crate::game::turns::{resolve_turn, TurnOutcome};
use crate::rng::GameRng;
use crate::simulation::mulligan::vancouver_scry;
use crate::simulation::stats::TrialSummary;
use crate::simulation::strategy::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_TRIALS: usize = 5000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("number of trials must be positive")]
    NoTrials,
    #[error("hand size {0} is outside {min}..={max}", min = MIN_HAND_SIZE, max = MAX_HAND_SIZE)]
    InvalidHandSize(usize),
    #[error("deck has {0} cards, not enough for a {1} card hand")]
    DeckTooSmall(usize, usize),
}

/// Settings shared by every trial of a run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationConfig {
    pub trials: usize,
    pub on_the_draw: bool,
    /// Scry once after a mulligan (hand smaller than seven)
    pub use_scry: bool,
    pub seed: Option<u64>,
    /// Hand sizes to simulate, in report order
    pub hand_sizes: Vec<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: DEFAULT_TRIALS,
            on_the_draw: false,
            use_scry: true,
            seed: None,
            hand_sizes: (MIN_HAND_SIZE..=MAX_HAND_SIZE).rev().collect(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self, deck: &[Card]) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        for &size in &self.hand_sizes {
            if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&size) {
                return Err(ConfigError::InvalidHandSize(size));
            }
            if deck.len() <= size {
                return Err(ConfigError::DeckTooSmall(deck.len(), size));
            }
        }
        Ok(())
    }
}

/// Result of a single game simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1-based turn on which Tron came online
    pub tron_turn: u32,
    pub starting_hand: Vec<String>,
}

/// Draw and resolve turns until Tron is assembled. Returns the 1-based turn.
pub fn play_until_tron(
    state: &mut GameState,
    strategy: &Strategy,
    verbose: bool,
) -> Result<u32, GameError> {
    loop {
        if verbose {
            println!("--- Turn {} ---", state.turn + 1);
        }
        if state.draws_this_turn() {
            state.draw_card()?;
            if verbose {
                if let Some(card) = state.hand.cards().last() {
                    println!("  [Draw] {}", card.name());
                }
            }
        }

        if resolve_turn(state, strategy, verbose)? == TurnOutcome::WinAchieved {
            let turn = state.turn + 1;
            if verbose {
                println!("=== Tron assembled on turn {} ===", turn);
            }
            return Ok(turn);
        }
        state.turn += 1;
    }
}

/// Run a complete game simulation
pub fn run_game(
    deck: &[Card],
    strategy: &Strategy,
    config: &SimulationConfig,
    hand_size: usize,
    seed: u64,
    verbose: bool,
) -> Result<GameResult, GameError> {
    let mut rng = GameRng::new(Some(seed));
    let mut state = GameState::new_game(deck, hand_size, config.on_the_draw, &mut rng)?;
    let starting_hand: Vec<String> = state
        .hand
        .cards()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    if verbose {
        println!("=== Game Start (seed: {}) ===", seed);
        println!("{}", if config.on_the_draw { "On the draw" } else { "On the play" });
        println!("Opening hand ({} cards):", starting_hand.len());
        for name in &starting_hand {
            println!("  - {}", name);
        }
    }

    if config.use_scry && hand_size < MAX_HAND_SIZE {
        vancouver_scry(&mut state, &strategy.roles, verbose);
    }

    let tron_turn = play_until_tron(&mut state, strategy, verbose)?;
    Ok(GameResult {
        tron_turn,
        starting_hand,
    })
}

/// Seed of one trial, distinct per hand size
fn trial_seed(base_seed: u64, hand_size: usize, trial: usize) -> u64 {
    base_seed
        .wrapping_add((hand_size as u64) << 32)
        .wrapping_add(trial as u64)
}

/// Run `config.trials` independent games for one hand size in parallel
pub fn run_trials(
    deck: &[Card],
    strategy: &Strategy,
    config: &SimulationConfig,
    hand_size: usize,
    base_seed: u64,
    progress: &ProgressBar,
) -> TrialSummary {
    let results: Vec<Result<GameResult, GameError>> = (0..config.trials)
        .into_par_iter()
        .map(|i| {
            let result = run_game(
                deck,
                strategy,
                config,
                hand_size,
                trial_seed(base_seed, hand_size, i),
                false,
            );
            progress.inc(1);
            result
        })
        .collect();

    TrialSummary::from_results(hand_size, &results)
}

/// Run every configured hand size, largest first
pub fn estimate_turns(
    deck: &[Card],
    strategy: &Strategy,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<Vec<TrialSummary>, ConfigError> {
    config.validate(deck)?;
    let base_seed = GameRng::new(config.seed).seed();

    let summaries = config
        .hand_sizes
        .iter()
        .map(|&hand_size| {
            let progress = if show_progress {
                new_progress_bar(config.trials as u64, hand_size)
            } else {
                ProgressBar::hidden()
            };
            let summary = run_trials(deck, strategy, config, hand_size, base_seed, &progress);
            progress.finish_and_clear();
            summary
        })
        .collect();
    Ok(summaries)
}

fn new_progress_bar(len: u64, hand_size: usize) -> ProgressBar {
    let style = ProgressStyle::with_template("{prefix:>12} [{bar:40}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(len)
        .with_style(style)
        .with_prefix(format!("{} cards", hand_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDatabase;
    use crate::game::zones::Library;
    use crate::simulation::deck::builtin_deck;

    fn setup() -> (CardDatabase, Strategy) {
        let db = CardDatabase::builtin().expect("Failed to load cards");
        let strategy = Strategy::resolve(&db).expect("Failed to resolve strategy");
        (db, strategy)
    }

    fn library(db: &CardDatabase, names: &[&str]) -> Library {
        Library::from_cards(names.iter().map(|n| db.get_card(n).unwrap()).collect())
    }

    /// Map in the opener, Tower on the first draw, the rest of Tron deeper down
    fn map_line_library(db: &CardDatabase) -> Library {
        let filler = "Karn Liberated";
        library(
            db,
            &[
                "Expedition Map", "Forest", "Forest", filler, filler, filler, filler,
                "Urza's Tower", filler, "Urza's Power Plant", filler, "Urza's Mine",
            ],
        )
    }

    #[test]
    fn test_expedition_map_line() {
        let (db, strategy) = setup();
        let mut state = GameState::with_library(map_line_library(&db), 7, false).unwrap();

        // Turn 1: Forest then Map. Turn 2: Tower, Map fetches Mine.
        // Turn 3: Mine. Turn 4: draws Power Plant and completes Tron.
        let turn = play_until_tron(&mut state, &strategy, false).unwrap();
        assert_eq!(turn, 4);
        assert!(state.graveyard.cards().iter().any(|c| c.name() == "Expedition Map"));
        assert_eq!(state.land_count(), 4);
        assert_eq!(state.library.size(), 1);

        let mut again = GameState::with_library(map_line_library(&db), 7, false).unwrap();
        assert_eq!(play_until_tron(&mut again, &strategy, false).unwrap(), turn);
    }

    #[test]
    fn test_tron_in_hand_on_the_play_is_turn_three() {
        let (db, strategy) = setup();
        let lib = library(
            &db,
            &[
                "Urza's Tower", "Urza's Mine", "Urza's Power Plant", "Forest", "Forest",
                "Wurmcoil Engine", "Karn Liberated",
                "Karn Liberated", "Karn Liberated", "Karn Liberated",
            ],
        );
        let mut state = GameState::with_library(lib, 7, false).unwrap();
        assert_eq!(play_until_tron(&mut state, &strategy, false).unwrap(), 3);
    }

    #[test]
    fn test_exhausted_library_is_an_error() {
        let (db, strategy) = setup();
        let lib = library(&db, &["Forest", "Forest", "Forest", "Karn Liberated"]);
        let mut state = GameState::with_library(lib, 3, true).unwrap();

        let result = play_until_tron(&mut state, &strategy, false);
        assert_eq!(result, Err(GameError::DeckExhausted { turn: 1 }));
    }

    #[test]
    fn test_run_game_is_reproducible() {
        let (db, strategy) = setup();
        let deck = builtin_deck(&db).unwrap();
        let config = SimulationConfig::default();

        let first = run_game(&deck, &strategy, &config, 6, 42, false);
        let second = run_game(&deck, &strategy, &config, 6, 42, false);
        assert_eq!(first, second);
        let result = first.expect("a 60 card deck finds Tron");
        assert!(result.tron_turn >= 3);
        assert_eq!(result.starting_hand.len(), 6);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let (db, _) = setup();
        let deck = builtin_deck(&db).unwrap();

        let mut config = SimulationConfig::default();
        assert!(config.validate(&deck).is_ok());

        config.hand_sizes = vec![8];
        assert_eq!(config.validate(&deck), Err(ConfigError::InvalidHandSize(8)));

        config.hand_sizes = vec![7];
        config.trials = 0;
        assert_eq!(config.validate(&deck), Err(ConfigError::NoTrials));

        config.trials = 10;
        assert_eq!(config.validate(&deck[..5]), Err(ConfigError::DeckTooSmall(5, 7)));
    }

    #[test]
    fn test_estimate_turns_small_run() {
        let (db, strategy) = setup();
        let deck = builtin_deck(&db).unwrap();
        let config = SimulationConfig {
            trials: 50,
            seed: Some(7),
            ..SimulationConfig::default()
        };

        let summaries = estimate_turns(&deck, &strategy, &config, false).unwrap();
        let sizes: Vec<_> = summaries.iter().map(|s| s.hand_size).collect();
        assert_eq!(sizes, vec![7, 6, 5, 4, 3]);
        for summary in &summaries {
            assert_eq!(summary.games + summary.exhausted, 50);
            assert!(summary.mean_turn().map_or(true, |m| m >= 3.0));
        }

        let again = estimate_turns(&deck, &strategy, &config, false).unwrap();
        assert_eq!(summaries[0].turns, again[0].turns);
    }
}
