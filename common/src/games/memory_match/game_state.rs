use crate::games::{Difficulty, SessionRng};
use super::deck::{Deck, MemoryLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub symbol: u8,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResult {
    /// Card already face up or matched; nothing changed.
    Ignored,
    FirstCard,
    Match,
    Mismatch { first: usize, second: usize },
    Completed { moves: u32 },
}

#[derive(Debug, Clone)]
pub struct MemoryGameState {
    cards: Vec<Card>,
    columns: usize,
    flipped: Vec<usize>,
    moves: u32,
    locked: bool,
}

impl MemoryGameState {
    pub fn new(difficulty: Difficulty, rng: &mut SessionRng) -> Result<Self, String> {
        let layout = MemoryLayout::for_difficulty(difficulty);
        let deck = Deck::shuffled(layout.pairs, rng)?;
        Ok(Self::from_deck(deck, layout.columns))
    }

    pub fn from_deck(deck: Deck, columns: usize) -> Self {
        let cards = deck
            .into_symbols()
            .into_iter()
            .map(|symbol| Card { symbol, matched: false })
            .collect();
        Self {
            cards,
            columns: columns.max(1),
            flipped: Vec::with_capacity(2),
            moves: 0,
            locked: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_finished(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.cards.get(index).is_some_and(|card| card.matched)
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipResult, String> {
        if self.is_finished() {
            return Err("Game is already over".to_string());
        }
        if self.locked {
            return Err("Wait for the unmatched cards to turn back".to_string());
        }
        let card = *self
            .cards
            .get(index)
            .ok_or_else(|| "Card index out of bounds".to_string())?;

        if card.matched || self.flipped.contains(&index) {
            return Ok(FlipResult::Ignored);
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return Ok(FlipResult::FirstCard);
        }

        self.moves += 1;
        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.cards[first].symbol != self.cards[second].symbol {
            self.locked = true;
            return Ok(FlipResult::Mismatch { first, second });
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.flipped.clear();

        if self.is_finished() {
            Ok(FlipResult::Completed { moves: self.moves })
        } else {
            Ok(FlipResult::Match)
        }
    }

    /// Turns a mismatched pair face down again and unlocks the board.
    pub fn hide_mismatched(&mut self) {
        if self.locked {
            self.flipped.clear();
            self.locked = false;
        }
    }
}
