use crate::games::{Difficulty, SessionRng};

pub const MAX_ATTEMPTS: u32 = 10;

pub fn max_number(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 50,
        Difficulty::Medium => 100,
        Difficulty::Hard => 200,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessHint {
    TooLow,
    TooHigh,
    Correct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct { attempts: u32 },
    TooLow,
    TooHigh,
    OutOfAttempts { hint: GuessHint, secret: u32 },
}

#[derive(Debug, Clone)]
pub struct NumberGuessGame {
    secret: u32,
    max: u32,
    attempts: u32,
    won: bool,
    history: Vec<(u32, GuessHint)>,
}

impl NumberGuessGame {
    pub fn new(difficulty: Difficulty, rng: &mut SessionRng) -> Self {
        let max = max_number(difficulty);
        Self::with_secret(rng.random_range(1..=max), max)
    }

    pub fn with_secret(secret: u32, max: u32) -> Self {
        Self {
            secret,
            max,
            attempts: 0,
            won: false,
            history: Vec::new(),
        }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    pub fn history(&self) -> &[(u32, GuessHint)] {
        &self.history
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.won || self.attempts >= MAX_ATTEMPTS
    }

    pub fn guess(&mut self, value: u32) -> Result<GuessResult, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if value < 1 || value > self.max {
            return Err(format!("Guess must be between 1 and {}", self.max));
        }

        self.attempts += 1;
        let hint = match value.cmp(&self.secret) {
            std::cmp::Ordering::Less => GuessHint::TooLow,
            std::cmp::Ordering::Greater => GuessHint::TooHigh,
            std::cmp::Ordering::Equal => GuessHint::Correct,
        };
        self.history.push((value, hint));

        if hint == GuessHint::Correct {
            self.won = true;
            return Ok(GuessResult::Correct {
                attempts: self.attempts,
            });
        }
        if self.attempts >= MAX_ATTEMPTS {
            return Ok(GuessResult::OutOfAttempts {
                hint,
                secret: self.secret,
            });
        }
        Ok(match hint {
            GuessHint::TooLow => GuessResult::TooLow,
            _ => GuessResult::TooHigh,
        })
    }
}
