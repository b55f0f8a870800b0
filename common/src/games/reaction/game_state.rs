use std::time::{Duration, Instant};

use crate::games::SessionRng;

pub const MIN_DELAY_MS: u64 = 2000;
pub const MAX_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionPhase {
    Idle,
    Waiting { ready_at: Instant },
    Ready { since: Instant },
    TooEarly,
    Clicked { reaction_ms: u64 },
}

/// Wait-for-green reaction test. Every transition takes the current time
/// from the caller.
#[derive(Debug, Clone)]
pub struct ReactionTimer {
    phase: ReactionPhase,
}

impl Default for ReactionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionTimer {
    pub fn new() -> Self {
        Self {
            phase: ReactionPhase::Idle,
        }
    }

    pub fn phase(&self) -> ReactionPhase {
        self.phase
    }

    pub fn reaction_ms(&self) -> Option<u64> {
        match self.phase {
            ReactionPhase::Clicked { reaction_ms } => Some(reaction_ms),
            _ => None,
        }
    }

    /// Starts a round from any phase and returns the chosen wait.
    pub fn start(&mut self, now: Instant, rng: &mut SessionRng) -> Duration {
        let delay = Duration::from_millis(rng.random_range(MIN_DELAY_MS..=MAX_DELAY_MS));
        self.phase = ReactionPhase::Waiting {
            ready_at: now + delay,
        };
        delay
    }

    pub fn poll(&mut self, now: Instant) -> ReactionPhase {
        if let ReactionPhase::Waiting { ready_at } = self.phase
            && now >= ready_at
        {
            self.phase = ReactionPhase::Ready { since: ready_at };
        }
        self.phase
    }

    pub fn click(&mut self, now: Instant) -> ReactionPhase {
        match self.poll(now) {
            ReactionPhase::Waiting { .. } => {
                self.phase = ReactionPhase::TooEarly;
            }
            ReactionPhase::Ready { since } => {
                let elapsed = now.saturating_duration_since(since);
                self.phase = ReactionPhase::Clicked {
                    reaction_ms: elapsed.as_millis() as u64,
                };
            }
            ReactionPhase::Idle | ReactionPhase::TooEarly | ReactionPhase::Clicked { .. } => {}
        }
        self.phase
    }
}
