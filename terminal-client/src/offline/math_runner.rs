use std::io::{BufRead, Write};
use std::time::Instant;

use arcade_common::games::math_battle::generate_question;
use arcade_common::games::{Difficulty, SessionRng};

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathRoundSummary {
    pub correct: bool,
    pub answer_secs: f64,
}

pub fn run_math_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Option<MathRoundSummary>, String> {
    let question = generate_question(difficulty, rng);
    let started = Instant::now();

    let answer = loop {
        let Some(line) = console.ask(&format!("{} =", question))? else {
            return Ok(None);
        };
        match line.parse::<i32>() {
            Ok(value) => break value,
            Err(_) => console.say("Enter a whole number.")?,
        }
    };

    let answer_secs = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;
    let correct = question.check(answer);
    if correct {
        console.say(&format!("Correct! {:.2} s", answer_secs))?;
    } else {
        console.say(&format!("Wrong, {} = {}.", question, question.answer))?;
    }
    Ok(Some(MathRoundSummary {
        correct,
        answer_secs,
    }))
}
