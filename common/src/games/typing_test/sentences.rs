use crate::games::{Difficulty, SessionRng};

const SENTENCES_EASY: [&str; 5] = [
    "The cat sat on the mat.",
    "I love to play games.",
    "The sun is very bright today.",
    "Birds fly high in the sky.",
    "She runs fast every morning.",
];

const SENTENCES_MEDIUM: [&str; 5] = [
    "The quick brown fox jumps over the lazy dog near the riverbank.",
    "A journey of a thousand miles begins with a single step forward.",
    "She sells seashells by the seashore on a sunny afternoon.",
    "Every moment is a fresh beginning if you choose to see it.",
    "Technology is best when it brings people together in harmony.",
];

const SENTENCES_HARD: [&str; 5] = [
    "Innovation distinguishes between a leader and a follower, and those who dare to think differently ultimately change the world.",
    "In the middle of every difficulty lies a hidden opportunity for extraordinary growth and unprecedented transformation.",
    "The boundaries of our imagination are often the only real limitations we face in achieving remarkable success and meaningful progress.",
    "Perseverance combined with strategic patience ultimately enables individuals to overcome seemingly insurmountable challenges throughout their journey.",
    "Creativity requires the courage to let go of established certainties and embrace the beautiful uncertainty of unexplored possibilities.",
];

pub fn sentences(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &SENTENCES_EASY,
        Difficulty::Medium => &SENTENCES_MEDIUM,
        Difficulty::Hard => &SENTENCES_HARD,
    }
}

pub fn pick_sentence(difficulty: Difficulty, rng: &mut SessionRng) -> &'static str {
    rng.choose(sentences(difficulty))
        .copied()
        .unwrap_or(SENTENCES_MEDIUM[0])
}
