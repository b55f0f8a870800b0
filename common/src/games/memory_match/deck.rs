use crate::games::{Difficulty, SessionRng};

/// Distinct card faces available to a deck.
pub const MAX_PAIRS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    pub pairs: usize,
    pub columns: usize,
}

impl MemoryLayout {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self { pairs: 3, columns: 3 },
            Difficulty::Medium => Self { pairs: 6, columns: 4 },
            Difficulty::Hard => Self { pairs: 8, columns: 4 },
        }
    }

    pub fn card_count(&self) -> usize {
        self.pairs * 2
    }

    pub fn rows(&self) -> usize {
        self.card_count().div_ceil(self.columns)
    }
}

/// Card faces as symbol ids, each appearing exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    symbols: Vec<u8>,
}

impl Deck {
    pub fn ordered(pairs: usize) -> Result<Self, String> {
        if pairs == 0 || pairs > MAX_PAIRS {
            return Err(format!("Pair count must be between 1 and {}", MAX_PAIRS));
        }
        let symbols = (0..pairs as u8).chain(0..pairs as u8).collect();
        Ok(Self { symbols })
    }

    pub fn shuffled(pairs: usize, rng: &mut SessionRng) -> Result<Self, String> {
        let mut deck = Self::ordered(pairs)?;
        rng.shuffle(&mut deck.symbols);
        Ok(deck)
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<u8> {
        self.symbols
    }
}
