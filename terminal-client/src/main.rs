mod config;
mod console;
mod offline;

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use arcade_common::games::{Difficulty, SessionRng};
use arcade_common::{log, logger};
use clap::{Parser, Subcommand};

use config::{Config, GameType, get_config_manager, remember_last_game};
use console::Console;

#[derive(Parser)]
#[command(name = "arcade", about = "Offline arcade mini-games")]
struct Args {
    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Fixed seed for bot moves, card shuffles and timer delays.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    game: Option<GameCommand>,
}

#[derive(clap::Args, Clone, Copy)]
struct DifficultyArgs {
    #[arg(long, short)]
    difficulty: Option<Difficulty>,
}

#[derive(Subcommand, Clone, Copy)]
enum GameCommand {
    #[command(name = "tictactoe")]
    TicTacToe(DifficultyArgs),
    Memory(DifficultyArgs),
    Reaction,
    NumberGuess(DifficultyArgs),
    Math(DifficultyArgs),
    Typing(DifficultyArgs),
}

impl GameCommand {
    fn game_type(&self) -> GameType {
        match self {
            GameCommand::TicTacToe(_) => GameType::TicTacToe,
            GameCommand::Memory(_) => GameType::Memory,
            GameCommand::Reaction => GameType::Reaction,
            GameCommand::NumberGuess(_) => GameType::NumberGuess,
            GameCommand::Math(_) => GameType::Math,
            GameCommand::Typing(_) => GameType::Typing,
        }
    }

    fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameCommand::TicTacToe(args)
            | GameCommand::Memory(args)
            | GameCommand::NumberGuess(args)
            | GameCommand::Math(args)
            | GameCommand::Typing(args) => args.difficulty,
            GameCommand::Reaction => None,
        }
    }
}

/// Games played turn by turn over the line console. The reaction test is
/// not one of them: it timestamps key presses on its own reader thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleGame {
    TicTacToe,
    Memory,
    NumberGuess,
    Math,
    Typing,
}

impl ConsoleGame {
    fn from_game_type(game_type: GameType) -> Option<Self> {
        match game_type {
            GameType::TicTacToe => Some(ConsoleGame::TicTacToe),
            GameType::Memory => Some(ConsoleGame::Memory),
            GameType::NumberGuess => Some(ConsoleGame::NumberGuess),
            GameType::Math => Some(ConsoleGame::Math),
            GameType::Typing => Some(ConsoleGame::Typing),
            GameType::Reaction => None,
        }
    }
}

/// One game. `false` when input ended before it finished.
fn play_once<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: ConsoleGame,
    difficulty: Difficulty,
    config: &Config,
    rng: &mut SessionRng,
) -> Result<bool, String> {
    match game {
        ConsoleGame::TicTacToe => {
            let result = offline::run_tictactoe_game(console, difficulty, &config.tictactoe, rng)?;
            if let Some(result) = result {
                log!("Tic Tac Toe finished: {:?}", result);
            }
            Ok(result.is_some())
        }
        ConsoleGame::Memory => {
            let result = offline::run_memory_game(console, difficulty, &config.memory, rng)?;
            if let Some((moves, seconds)) = result {
                log!("Memory Match finished in {} moves, {} s", moves, seconds);
            }
            Ok(result.is_some())
        }
        ConsoleGame::NumberGuess => {
            let result = offline::run_number_guess_game(console, difficulty, &config.number_guess, rng)?;
            if let Some((won, attempts)) = result {
                log!("Number Guess finished: won={} attempts={}", won, attempts);
            }
            Ok(result.is_some())
        }
        ConsoleGame::Math => {
            let result = offline::run_math_round(console, difficulty, rng)?;
            if let Some(summary) = result {
                log!(
                    "Math Battle round: correct={} time={:.2}s",
                    summary.correct,
                    summary.answer_secs
                );
            }
            Ok(result.is_some())
        }
        ConsoleGame::Typing => {
            let result = offline::run_typing_test(console, difficulty, rng)?;
            if let Some(result) = result {
                log!(
                    "Typing Test finished: {} WPM, {}/{} words",
                    result.wpm,
                    result.correct_words,
                    result.total_words
                );
            }
            Ok(result.is_some())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let game_type = match args.game.map(|g| g.game_type()).or(config.last_game) {
        Some(game_type) => game_type,
        None => return Err("No game selected. Run with --help to see the games.".into()),
    };
    let difficulty = args
        .game
        .and_then(|g| g.difficulty())
        .unwrap_or(config.default_difficulty);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} ({}), seed {}",
        game_type.title(),
        difficulty,
        rng.seed()
    );

    match ConsoleGame::from_game_type(game_type) {
        Some(game) => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            loop {
                let finished = play_once(&mut console, game, difficulty, &config, &mut rng)?;
                if !finished || !console.ask_yes_no("Play again?")? {
                    break;
                }
            }
        }
        None => {
            let presses = offline::spawn_key_listener(BufReader::new(io::stdin()));
            let results = offline::run_reaction_game(&mut io::stdout(), &presses, &mut rng)?;
            if let Some(best) = results.iter().min() {
                log!("Reaction Test best time: {} ms over {} rounds", best, results.len());
            }
        }
    }

    if let Err(e) = remember_last_game(&config_manager, game_type) {
        log!("Not saving last game: {}", e);
    }

    Ok(())
}
