use std::fmt;

use crate::games::{Difficulty, SessionRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

pub fn operators(difficulty: Difficulty) -> &'static [Operator] {
    match difficulty {
        Difficulty::Easy => &[Operator::Add, Operator::Subtract],
        Difficulty::Medium => &[Operator::Add, Operator::Subtract, Operator::Multiply],
        Difficulty::Hard => &[
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathQuestion {
    pub left: i32,
    pub operator: Operator,
    pub right: i32,
    pub answer: i32,
}

impl MathQuestion {
    pub fn check(&self, answer: i32) -> bool {
        self.answer == answer
    }
}

impl fmt::Display for MathQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}

/// Subtraction never goes negative and division is always exact.
pub fn generate_question(difficulty: Difficulty, rng: &mut SessionRng) -> MathQuestion {
    let operator = rng
        .choose(operators(difficulty))
        .copied()
        .unwrap_or(Operator::Add);

    let (left, right, answer) = match operator {
        Operator::Add => {
            let a = rng.random_range(1..=50);
            let b = rng.random_range(1..=50);
            (a, b, a + b)
        }
        Operator::Subtract => {
            let a = rng.random_range(10..=59);
            let b = rng.random_range(1..=a);
            (a, b, a - b)
        }
        Operator::Multiply => {
            let a = rng.random_range(1..=12);
            let b = rng.random_range(1..=12);
            (a, b, a * b)
        }
        Operator::Divide => {
            let b = rng.random_range(2..=11);
            let answer = rng.random_range(1..=10);
            (b * answer, b, answer)
        }
    };

    MathQuestion {
        left,
        operator,
        right,
        answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_uses_only_add_and_subtract() {
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let q = generate_question(Difficulty::Easy, &mut rng);
            assert!(matches!(q.operator, Operator::Add | Operator::Subtract));
        }
    }

    #[test]
    fn test_hard_eventually_uses_division() {
        let mut rng = SessionRng::new(42);
        let divisions = (0..200)
            .filter(|_| generate_question(Difficulty::Hard, &mut rng).operator == Operator::Divide)
            .count();
        assert!(divisions > 0);
    }

    #[test]
    fn test_answers_are_consistent() {
        let mut rng = SessionRng::new(42);
        for difficulty in Difficulty::ALL {
            for _ in 0..300 {
                let q = generate_question(difficulty, &mut rng);
                let expected = match q.operator {
                    Operator::Add => q.left + q.right,
                    Operator::Subtract => q.left - q.right,
                    Operator::Multiply => q.left * q.right,
                    Operator::Divide => {
                        assert_eq!(q.left % q.right, 0);
                        q.left / q.right
                    }
                };
                assert_eq!(q.answer, expected, "{}", q);
                assert!(q.answer >= 0);
                assert!(q.check(expected));
            }
        }
    }

    #[test]
    fn test_display() {
        let q = MathQuestion {
            left: 12,
            operator: Operator::Multiply,
            right: 3,
            answer: 36,
        };
        assert_eq!(q.to_string(), "12 × 3");
        assert!(!q.check(35));
    }
}
