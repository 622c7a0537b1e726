use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use tron_sim::card::{Card, CardDatabase};
use tron_sim::cli::{format_summary, parse_hand_size, prompt_on_the_draw, ReportKind};
use tron_sim::rng::GameRng;
use tron_sim::simulation::engine::DEFAULT_TRIALS;
use tron_sim::simulation::{
    builtin_deck, estimate_turns, parse_deck_file, run_game, SimulationConfig, Strategy,
    TrialSummary,
};

#[derive(Parser)]
#[command(name = "tron-sim")]
#[command(about = "Estimate the turn Mono-Green Tron assembles its Urza lands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Card catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    cards: Option<String>,

    /// Deck file to use (defaults to the built-in list)
    #[arg(long, global = true)]
    deck: Option<String>,

    #[command(flatten)]
    estimate: EstimateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single traced game
    Game {
        /// Starting hand size (3 to 7)
        #[arg(long, default_value = "7", value_parser = parse_hand_size)]
        hand_size: usize,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the scry after a mulligan
        #[arg(long)]
        no_scry: bool,

        #[command(flatten)]
        regime: Regime,
    },
}

/// Estimate for hand sizes 7 down to 3 (default command)
#[derive(Args)]
struct EstimateArgs {
    /// Number of games per hand size
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Statistic to print per hand size
    #[arg(short, long, value_enum, default_value_t = ReportKind::Mean)]
    report: ReportKind,

    /// Skip the scry after a mulligan
    #[arg(long)]
    no_scry: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    regime: Regime,
}

/// Initiative; prompts when neither flag is given
#[derive(Args)]
struct Regime {
    /// Simulate on the draw
    #[arg(long, conflicts_with = "on_the_play")]
    on_the_draw: bool,

    /// Simulate on the play
    #[arg(long)]
    on_the_play: bool,
}

impl Regime {
    fn on_the_draw(&self) -> io::Result<bool> {
        if self.on_the_draw || self.on_the_play {
            return Ok(self.on_the_draw);
        }
        let stdin = io::stdin();
        prompt_on_the_draw(stdin.lock(), io::stdout())
    }
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    generated_at: String,
    report: String,
    config: &'a SimulationConfig,
    summaries: &'a [TrialSummary],
}

fn main() {
    let cli = Cli::parse();

    let db = match &cli.cards {
        Some(path) => CardDatabase::from_file(path),
        None => CardDatabase::builtin(),
    };
    let db = match db {
        Ok(db) => {
            eprintln!("✓ Loaded {} cards", db.card_count());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    let strategy = match Strategy::resolve(&db) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("✗ Card catalog does not fit the Tron play pattern: {}", e);
            std::process::exit(1);
        }
    };

    let deck_name = cli.deck.as_deref().unwrap_or("built-in");
    let deck = match &cli.deck {
        Some(path) => parse_deck_file(path, &db),
        None => builtin_deck(&db),
    };
    let deck = match deck {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("✗ Failed to parse deck '{}': {}", deck_name, e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Game {
            hand_size,
            seed,
            no_scry,
            regime,
        }) => {
            let on_the_draw = read_regime(&regime);
            play_single_game(&deck, &strategy, hand_size, seed, !no_scry, on_the_draw);
        }
        None => {
            let on_the_draw = read_regime(&cli.estimate.regime);
            run_estimate(&deck, deck_name, &strategy, &cli.estimate, on_the_draw);
        }
    }
}

fn read_regime(regime: &Regime) -> bool {
    match regime.on_the_draw() {
        Ok(on_the_draw) => on_the_draw,
        Err(e) => {
            eprintln!("✗ Could not read answer: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_estimate(
    deck: &[Card],
    deck_name: &str,
    strategy: &Strategy,
    args: &EstimateArgs,
    on_the_draw: bool,
) {
    let seed = GameRng::new(args.seed).seed();
    let config = SimulationConfig {
        trials: args.trials,
        on_the_draw,
        use_scry: !args.no_scry,
        seed: Some(seed),
        ..SimulationConfig::default()
    };

    if !args.json {
        println!("\n=== Tron Simulator ===\n");
        println!("Deck: {} ({} cards)", deck_name, deck.len());
        println!("Games per hand size: {}", config.trials);
        println!("{}", if on_the_draw { "On the draw" } else { "On the play" });
        println!("Vancouver scry: {}", if config.use_scry { "on" } else { "off" });
        println!("Seed: {}", seed);
        println!("Started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!();
        println!("simulating hands:");
    }

    let start = std::time::Instant::now();
    let summaries = match estimate_turns(deck, strategy, &config, !args.json) {
        Ok(summaries) => summaries,
        Err(e) => {
            eprintln!("✗ Invalid simulation settings: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    for summary in &summaries {
        if summary.exhausted > 0 {
            eprintln!(
                "⚠ {} card hand: {} of {} games ran out of cards and were excluded",
                summary.hand_size,
                summary.exhausted,
                summary.exhausted + summary.games
            );
        }
    }

    if args.json {
        let report = EstimateReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            report: format!("{:?}", args.report).to_lowercase(),
            config: &config,
            summaries: &summaries,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for summary in &summaries {
        println!("{}", format_summary(summary, args.report));
    }

    let total_games = config.trials * summaries.len();
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        total_games as f64 / elapsed.as_secs_f64()
    );
}

fn play_single_game(
    deck: &[Card],
    strategy: &Strategy,
    hand_size: usize,
    seed: Option<u64>,
    use_scry: bool,
    on_the_draw: bool,
) {
    let seed = GameRng::new(seed).seed();
    let config = SimulationConfig {
        trials: 1,
        on_the_draw,
        use_scry,
        seed: Some(seed),
        hand_sizes: vec![hand_size],
    };
    if let Err(e) = config.validate(deck) {
        eprintln!("✗ Invalid simulation settings: {}", e);
        std::process::exit(1);
    }

    match run_game(deck, strategy, &config, hand_size, seed, true) {
        Ok(result) => println!("\nTron on turn {} (seed {})", result.tron_turn, seed),
        Err(e) => {
            eprintln!("⚠ Game aborted: {}", e);
        }
    }
}
