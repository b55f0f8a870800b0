mod score;
mod sentences;

pub use score::{TypingResult, count_correct_words, words_per_minute};
pub use sentences::{pick_sentence, sentences};
