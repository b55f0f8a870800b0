use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row * 3 + self.col
    }
}

/// Board classification. `X` is the human side, `O` the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWon,
    OWon,
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Finished game seen from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Lose,
    Draw,
}

impl MatchResult {
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::XWon => Some(MatchResult::Win),
            Outcome::OWon => Some(MatchResult::Lose),
            Outcome::Draw => Some(MatchResult::Draw),
            Outcome::InProgress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_mapping() {
        for index in 0..9 {
            assert_eq!(Position::from_index(index).to_index(), index);
        }
        assert_eq!(Position::from_index(5), Position::new(1, 2));
        assert_eq!(Position::from_index(6), Position::new(2, 0));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_match_result_from_outcome() {
        assert_eq!(MatchResult::from_outcome(Outcome::XWon), Some(MatchResult::Win));
        assert_eq!(MatchResult::from_outcome(Outcome::OWon), Some(MatchResult::Lose));
        assert_eq!(MatchResult::from_outcome(Outcome::Draw), Some(MatchResult::Draw));
        assert_eq!(MatchResult::from_outcome(Outcome::InProgress), None);
    }
}
