use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rules_chess::{
    AlphaBeta, Color, Engine, Logger, MaterialCount, Outcome, Position, SearchConfig,
};
use serde::Serialize;

/// Plays the engine against itself and reports how the games went
#[derive(Parser, Debug)]
#[command(name = "Rules Chess - Experiments")]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value = "4")]
    games: usize,
    /// Search depth for white
    #[arg(short, long, default_value = "2")]
    white_depth: u8,
    /// Search depth for black
    #[arg(short, long, default_value = "2")]
    black_depth: u8,
    /// Seed the per-game seeds are drawn from; random when left out
    #[arg(short, long)]
    seed: Option<u64>,
    /// Games still going after this many plies are abandoned
    #[arg(short, long, default_value = "200")]
    max_plies: usize,
    #[arg(short, long, default_value = "1")]
    log_level: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GameSummary {
    game: usize,
    white_seed: u64,
    black_seed: u64,
    plies: usize,
    result: &'static str,
    winner: Option<Color>,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct Totals {
    white_wins: usize,
    black_wins: usize,
    draws: usize,
    unfinished: usize,
}

fn main() -> Result<(), serde_json::Error> {
    let cli = Cli::parse();
    let mut logger = Logger::new(cli.log_level);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut totals = Totals::default();
    for game in 0..cli.games {
        let white_seed = rng.gen();
        let black_seed = rng.gen();
        let mut white = AlphaBeta::new(
            MaterialCount::default(),
            SearchConfig { depth: cli.white_depth, seed: Some(white_seed), log_level: 0 },
        );
        let mut black = AlphaBeta::new(
            MaterialCount::default(),
            SearchConfig { depth: cli.black_depth, seed: Some(black_seed), log_level: 0 },
        );

        logger.time_start(1, "match time");
        let (position, plies) = run_single_match(&mut white, &mut black, cli.max_plies, &logger);
        logger.time_end(1, "match time");
        logger.log_lazy(3, || format!("{}", position));

        let outcome = position.outcome();
        match outcome.map(Outcome::winner) {
            Some(Some(Color::White)) => totals.white_wins += 1,
            Some(Some(Color::Black)) => totals.black_wins += 1,
            Some(None) => totals.draws += 1,
            None => totals.unfinished += 1,
        }

        let summary = GameSummary {
            game,
            white_seed,
            black_seed,
            plies,
            result: match outcome {
                Some(Outcome::Checkmate { .. }) => "checkmate",
                Some(Outcome::Stalemate) => "stalemate",
                Some(Outcome::Resigned { .. }) => "resigned",
                Some(Outcome::Drawn) => "drawn",
                None => "unfinished",
            },
            winner: outcome.and_then(Outcome::winner),
        };
        println!("{}", serde_json::to_string(&summary)?);
    }
    println!("{}", serde_json::to_string(&totals)?);
    Ok(())
}

/// Plays until the game ends or `max_plies` is reached, returning the final
/// position and how many plies were played.
fn run_single_match(
    white_player: &mut dyn Engine,
    black_player: &mut dyn Engine,
    max_plies: usize,
    logger: &Logger,
) -> (Position, usize) {
    let mut position = Position::initial();
    let mut plies = 0;
    while plies < max_plies && !position.is_finished() {
        let player = match position.get_side_to_move() {
            Color::White => &mut *white_player,
            Color::Black => &mut *black_player,
        };
        let Some(mv) = player.get_move(&position) else { break; };
        match position.play(mv) {
            Ok(next) => position = next,
            Err(e) => {
                logger.log(0, &format!("rules rejected engine move {}: {}", mv, e));
                break;
            }
        }
        plies += 1;
    }
    (position, plies)
}
