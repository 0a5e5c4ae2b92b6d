use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rules_chess::{
    AlphaBeta, Color, Engine, MaterialCount, Move, Outcome, PieceKind, Position, SearchConfig,
    Square,
};

const INSTRUCTIONS: &str = "\
    Please enter your move as 4 space-separated integers, plus a piece name when promoting:\n    \
      <from_row> <from_col> <to_row> <to_col> [promotion]\n      \
      Rows count down from black's back rank: 0 is the 8th rank, 7 is the 1st.\n      \
      Columns count across from the a-file: 0 is a, 7 is h.\n      \
      For promotion: queen, rook, bishop or knight.\n  \
      Example: \n    \
        - the opening move 1. e4 would be entered as \"6 4 4 4\".\n    \
        - a promotion to a queen pushing white's e-pawn would be \"1 4 0 4 queen\".\n\
";

/// Arguments to the engine
#[derive(Parser, Debug)]
#[command(
    name = "Rules Chess - Engine",
    about = "Play a game of chess against the alpha-beta engine on the terminal."
)]
struct Cli {
    /// The color the engine should play as
    #[arg(short, long, default_value = "black")]
    engine_color: ArgColor,
    /// How many plies the engine looks ahead
    #[arg(short, long, default_value = "3")]
    depth: u8,
    /// Seed for the engine's move ordering; random when left out
    #[arg(long)]
    seed: Option<u64>,
    /// Whether to prevent the game board, human-readable moves, and prompts
    /// from being printed
    #[arg(short, long)]
    quiet: bool,
    /// How chatty the engine is, from 0 (silent) to 10
    #[arg(short, long, default_value = "0")]
    log_level: u8,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ArgColor {
    White,
    Black,
}

impl ArgColor {
    fn to_color(self) -> Color {
        match self {
            ArgColor::White => Color::White,
            ArgColor::Black => Color::Black,
        }
    }
}

/// Reads one move from a line of input, or `None` if it is malformed.
fn parse_move(input: &str) -> Option<Move> {
    let tokens = input.split_whitespace().collect::<Vec<_>>();
    if !(4..=5).contains(&tokens.len()) {
        return None;
    }
    let nums = tokens[..4]
        .iter()
        .map(|s| s.parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;
    let from = Square::new(nums[0], nums[1])?;
    let to = Square::new(nums[2], nums[3])?;
    match tokens.get(4) {
        Some(name) => Some(Move::with_promotion(from, to, PieceKind::from_name(name)?)),
        None => Some(Move::new(from, to)),
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = SearchConfig { depth: cli.depth, seed: cli.seed, log_level: cli.log_level };
    let mut engine = AlphaBeta::new(MaterialCount::default(), config);
    let engine_color = cli.engine_color.to_color();

    let mut position = Position::initial();

    while !position.is_finished() {
        if position.get_side_to_move() == engine_color {
            let Some(mv) = engine.get_move(&position) else { break; };
            if !cli.quiet {
                println!(
                    "Engine played: {} {} {} {}{} [{}]",
                    mv.from.row,
                    mv.from.col,
                    mv.to.row,
                    mv.to.col,
                    mv.promotion.map(|k| format!(" {}", k)).unwrap_or_default(),
                    mv,
                );
            } else {
                println!(
                    "{} {} {} {}{}",
                    mv.from.row,
                    mv.from.col,
                    mv.to.row,
                    mv.to.col,
                    mv.promotion.map(|k| format!(" {}", k)).unwrap_or_default(),
                );
            }
            match position.play(mv) {
                Ok(next) => position = next,
                Err(e) => {
                    eprintln!("Engine chose a move the rules reject: {}", e);
                    break;
                }
            }
        } else {
            if !cli.quiet {
                println!("{}", position);
                print!("Enter your move: ");
                io::stdout().flush()?;
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // stdin closed, the human walks away
                if let Ok(next) = position.resign(!engine_color) {
                    position = next;
                }
                break;
            }
            let Some(mv) = parse_move(&input) else {
                println!("Invalid input.");
                println!("{}", INSTRUCTIONS);
                continue;
            };
            match position.play(mv) {
                Ok(next) => position = next,
                Err(e) => {
                    println!("Illegal move: {}.", e);
                    println!("{}", INSTRUCTIONS);
                    continue;
                }
            }
        }
    }

    if !cli.quiet {
        println!("{}", position);
    }
    match position.outcome() {
        Some(Outcome::Checkmate { winner }) => println!("{} wins by checkmate", winner),
        Some(Outcome::Resigned { winner }) => println!("{} wins by resignation", winner),
        Some(Outcome::Stalemate) => println!("draw by stalemate"),
        Some(Outcome::Drawn) => println!("draw"),
        None => println!("game abandoned"),
    }
    Ok(())
}
