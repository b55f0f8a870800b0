use std::io::{BufRead, Write};
use std::time::Instant;

use arcade_common::games::typing_test::{TypingResult, pick_sentence};
use arcade_common::games::{Difficulty, SessionRng};

use crate::console::Console;

/// The clock starts once the sentence is shown; a terminal has no
/// keystroke events to start it on the first key.
pub fn run_typing_test<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Option<TypingResult>, String> {
    let sentence = pick_sentence(difficulty, rng);
    console.say("Type this sentence and press Enter:")?;
    console.say(&format!("  {}", sentence))?;
    let started = Instant::now();

    let input = loop {
        let Some(line) = console.ask(">")? else {
            return Ok(None);
        };
        if line.is_empty() {
            console.say("Type the sentence first.")?;
            continue;
        }
        break line;
    };

    let result = TypingResult::measure(sentence, &input, started.elapsed());
    if result.exact {
        console.say("Perfect!")?;
    } else {
        console.say(&format!(
            "{}/{} words correct.",
            result.correct_words, result.total_words
        ))?;
    }
    console.say(&format!("{} WPM", result.wpm))?;
    Ok(Some(result))
}
