use std::io::{BufRead, Write};
use std::time::Duration;

use arcade_common::games::tictactoe::{Board, Mark, MatchResult, Position, TicTacToeMatch};
use arcade_common::games::{Difficulty, SessionRng};
use arcade_common::log;

use crate::config::TicTacToeConfig;
use crate::console::Console;

/// Empty cells show their 1-based number so the player knows what to type.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => format!(" {} ", row * 3 + col + 1),
                    other => format!(" {} ", other),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// 1-based row and column, as the player reads the board.
pub fn describe_cell(index: usize) -> String {
    let position = Position::from_index(index);
    format!("row {}, column {}", position.row + 1, position.col + 1)
}

/// Plays one game. `None` when input ends before the game does.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    cfg: &TicTacToeConfig,
    rng: &mut SessionRng,
) -> Result<Option<MatchResult>, String> {
    let mut game = TicTacToeMatch::new(difficulty);
    console.say(&format!(
        "Tic Tac Toe ({}). You are X, the bot is O.",
        game.difficulty()
    ))?;

    loop {
        console.say(&render_board(game.board()))?;
        if let Some(result) = game.result() {
            let message = match result {
                MatchResult::Win => "You won!",
                MatchResult::Lose => "You lost!",
                MatchResult::Draw => "Draw!",
            };
            console.say(message)?;
            if let Some(line) = game.winning_line() {
                let cells: Vec<String> = line.iter().map(|index| (index + 1).to_string()).collect();
                console.say(&format!("Winning line: {}", cells.join("-")))?;
            }
            return Ok(Some(result));
        }

        let Some(cell) = console.ask_number("Your move (1-9):", 1, 9)? else {
            return Ok(None);
        };

        let bot_move = match game.place_mark(cell as usize - 1, rng) {
            Ok(bot_move) => bot_move,
            Err(e) => {
                console.say(&e)?;
                continue;
            }
        };

        if let Some(index) = bot_move {
            console.say("Bot is thinking...")?;
            std::thread::sleep(Duration::from_millis(cfg.bot_delay_ms));
            console.say(&format!("Bot played {}.", describe_cell(index)))?;
            log!("Bot ({}) played cell {}", difficulty, index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_delay() -> TicTacToeConfig {
        TicTacToeConfig { bot_delay_ms: 0 }
    }

    #[test]
    fn test_render_board_numbers_empty_cells() {
        let board = Board::new().with_mark(4, Mark::X).with_mark(0, Mark::O);
        assert_eq!(
            render_board(&board),
            " O | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_describe_cell() {
        assert_eq!(describe_cell(0), "row 1, column 1");
        assert_eq!(describe_cell(5), "row 2, column 3");
        assert_eq!(describe_cell(7), "row 3, column 2");
    }

    #[test]
    fn test_bot_move_is_announced() {
        arcade_common::logger::init_logger(None);
        let mut rng = SessionRng::new(42);
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new());
        run_tictactoe_game(&mut console, Difficulty::Hard, &no_delay(), &mut rng).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        // Hard answers the centre with the first corner.
        assert!(output.contains("Bot played row 1, column 1."));
    }

    #[test]
    fn test_lost_game_shows_winning_line() {
        arcade_common::logger::init_logger(None);
        let mut rng = SessionRng::new(42);
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(3);
        let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
        let result = run_tictactoe_game(&mut console, Difficulty::Hard, &no_delay(), &mut rng).unwrap();
        // X: 1, 2, 4. O: centre, block at 3, then completes 3-5-7.
        assert_eq!(result, Some(MatchResult::Lose));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Winning line: 3-5-7"));
    }

    #[test]
    fn test_game_against_hard_bot_is_never_won() {
        arcade_common::logger::init_logger(None);
        let mut rng = SessionRng::new(42);
        // Human tries the cells in order; occupied ones are refused and retried.
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(3);
        let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
        let result = run_tictactoe_game(&mut console, Difficulty::Hard, &no_delay(), &mut rng).unwrap();
        assert!(matches!(result, Some(MatchResult::Lose | MatchResult::Draw)));
    }

    #[test]
    fn test_input_end_returns_none() {
        let mut rng = SessionRng::new(42);
        let mut console = Console::new(Cursor::new(b"5\n".to_vec()), Vec::new());
        let result = run_tictactoe_game(&mut console, Difficulty::Easy, &no_delay(), &mut rng).unwrap();
        assert_eq!(result, None);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(" X "));
    }
}
