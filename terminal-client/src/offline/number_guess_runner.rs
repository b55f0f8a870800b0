use std::io::{BufRead, Write};

use arcade_common::games::number_guess::{GuessHint, GuessResult, NumberGuessGame};
use arcade_common::games::{Difficulty, SessionRng};

use crate::config::NumberGuessConfig;
use crate::console::Console;

fn hint_text(hint: GuessHint) -> &'static str {
    match hint {
        GuessHint::TooLow => "higher",
        GuessHint::TooHigh => "lower",
        GuessHint::Correct => "correct",
    }
}

/// Returns `(won, attempts)`, or `None` when input ends mid-game.
pub fn run_number_guess_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    cfg: &NumberGuessConfig,
    rng: &mut SessionRng,
) -> Result<Option<(bool, u32)>, String> {
    let mut game = NumberGuessGame::new(difficulty, rng);
    console.say(&format!(
        "Number Guess ({}): I picked a number from 1 to {}.",
        difficulty,
        game.max()
    ))?;

    loop {
        let prompt = format!("Guess ({} left):", game.attempts_left());
        let Some(value) = console.ask_number(&prompt, 1, game.max())? else {
            return Ok(None);
        };

        match game.guess(value)? {
            GuessResult::Correct { attempts } => {
                console.say(&format!("Correct! Found it in {} attempts.", attempts))?;
                return Ok(Some((true, attempts)));
            }
            GuessResult::TooLow => console.say("Go higher.")?,
            GuessResult::TooHigh => console.say("Go lower.")?,
            GuessResult::OutOfAttempts { secret, .. } => {
                console.say(&format!("Out of attempts. The number was {}.", secret))?;
                return Ok(Some((false, game.attempts())));
            }
        }

        if cfg.show_history {
            let history: Vec<String> = game
                .history()
                .iter()
                .map(|(value, hint)| format!("{} ({})", value, hint_text(*hint)))
                .collect();
            console.say(&format!("So far: {}", history.join(", ")))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_binary_search_player_wins() {
        // Binary search over 1..=50 needs at most 6 guesses. The preview game
        // shares the runner's seed, so it has the same secret.
        let mut rng = SessionRng::new(42);
        let mut preview = NumberGuessGame::new(Difficulty::Easy, &mut SessionRng::new(42));
        let (mut low, mut high) = (1, 50);
        let mut script = String::new();
        loop {
            let mid = (low + high) / 2;
            script.push_str(&format!("{}\n", mid));
            match preview.guess(mid).unwrap() {
                GuessResult::Correct { .. } => break,
                GuessResult::TooLow => low = mid + 1,
                GuessResult::TooHigh => high = mid - 1,
                GuessResult::OutOfAttempts { .. } => panic!("binary search ran out"),
            }
        }

        let cfg = NumberGuessConfig { show_history: true };
        let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
        let result = run_number_guess_game(&mut console, Difficulty::Easy, &cfg, &mut rng).unwrap();
        assert_eq!(result.map(|(won, _)| won), Some(true));
    }

    #[test]
    fn test_ten_misses_lose() {
        let mut rng = SessionRng::new(42);
        let preview = NumberGuessGame::new(Difficulty::Hard, &mut SessionRng::new(42));
        let wrong = if preview.clone().guess(1) == Ok(GuessResult::Correct { attempts: 1 }) { 2 } else { 1 };
        let script = format!("{}\n", wrong).repeat(10);

        let cfg = NumberGuessConfig { show_history: false };
        let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
        let result = run_number_guess_game(&mut console, Difficulty::Hard, &cfg, &mut rng).unwrap();
        assert_eq!(result, Some((false, 10)));
    }
}
