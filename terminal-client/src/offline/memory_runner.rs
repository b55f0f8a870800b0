use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use arcade_common::games::memory_match::{FlipResult, MemoryGameState};
use arcade_common::games::{Difficulty, SessionRng};

use crate::config::MemoryConfig;
use crate::console::Console;

fn card_face(symbol: u8) -> char {
    char::from(b'A' + symbol)
}

fn render_cards(state: &MemoryGameState) -> String {
    let cells: Vec<String> = state
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if state.is_visible(index) {
                format!("  {} ", card_face(card.symbol))
            } else {
                format!("{:>3} ", index + 1)
            }
        })
        .collect();
    cells
        .chunks(state.columns())
        .map(|row| row.concat().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plays until every pair is found. Returns moves and elapsed seconds, or
/// `None` when input ends first.
pub fn run_memory_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    cfg: &MemoryConfig,
    rng: &mut SessionRng,
) -> Result<Option<(u32, u64)>, String> {
    let mut state = MemoryGameState::new(difficulty, rng)?;
    let card_count = state.cards().len() as u32;
    let started = Instant::now();
    console.say(&format!("Memory Match ({}): find all {} pairs.", difficulty, card_count / 2))?;

    loop {
        console.say(&render_cards(&state))?;
        let Some(choice) = console.ask_number(&format!("Flip a card (1-{}):", card_count), 1, card_count)? else {
            return Ok(None);
        };

        match state.flip(choice as usize - 1)? {
            FlipResult::Ignored => console.say("That card is already face up.")?,
            FlipResult::FirstCard => {}
            FlipResult::Match => console.say("Match!")?,
            FlipResult::Mismatch { .. } => {
                console.say(&render_cards(&state))?;
                console.say("No match.")?;
                std::thread::sleep(Duration::from_millis(cfg.mismatch_delay_ms));
                state.hide_mismatched();
            }
            FlipResult::Completed { moves } => {
                let seconds = started.elapsed().as_secs();
                console.say(&render_cards(&state))?;
                console.say(&format!("All pairs found in {} moves and {} s.", moves, seconds))?;
                return Ok(Some((moves, seconds)));
            }
        }
    }
}
