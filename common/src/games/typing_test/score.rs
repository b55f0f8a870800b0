use std::time::Duration;

/// Words typed correctly at the same position as in `sentence`. Words are
/// split on single spaces, so an extra space shifts everything after it.
pub fn count_correct_words(sentence: &str, input: &str) -> usize {
    sentence
        .split(' ')
        .zip(input.split(' '))
        .filter(|(expected, typed)| expected == typed)
        .count()
}

/// Correct words per minute, rounded, never below 1.
pub fn words_per_minute(sentence: &str, input: &str, elapsed: Duration) -> u32 {
    let correct = count_correct_words(sentence, input) as f64;
    let minutes = elapsed.max(Duration::from_millis(1)).as_secs_f64() / 60.0;
    let wpm = (correct / minutes).round();
    if wpm < 1.0 { 1 } else { wpm.min(u32::MAX as f64) as u32 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingResult {
    pub wpm: u32,
    pub correct_words: usize,
    pub total_words: usize,
    pub exact: bool,
}

impl TypingResult {
    pub fn measure(sentence: &str, input: &str, elapsed: Duration) -> Self {
        Self {
            wpm: words_per_minute(sentence, input, elapsed),
            correct_words: count_correct_words(sentence, input),
            total_words: sentence.split(' ').count(),
            exact: sentence == input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "The cat sat on the mat.";

    #[test]
    fn test_exact_input_counts_every_word() {
        assert_eq!(count_correct_words(SENTENCE, SENTENCE), 6);
        assert_eq!(words_per_minute(SENTENCE, SENTENCE, Duration::from_secs(6)), 60);
    }

    #[test]
    fn test_partial_input_counts_typed_words() {
        assert_eq!(count_correct_words(SENTENCE, "The cat sat"), 3);
        assert_eq!(words_per_minute(SENTENCE, "The cat sat", Duration::from_secs(60)), 3);
    }

    #[test]
    fn test_words_compared_by_position() {
        // A missing word shifts the rest out of place.
        assert_eq!(count_correct_words(SENTENCE, "The sat on the mat."), 1);
        assert_eq!(count_correct_words(SENTENCE, "the cat sat on the mat"), 4);
    }

    #[test]
    fn test_wpm_never_below_one() {
        assert_eq!(words_per_minute(SENTENCE, "nothing right", Duration::from_secs(30)), 1);
        assert_eq!(words_per_minute(SENTENCE, "The", Duration::from_secs(600)), 1);
    }

    #[test]
    fn test_wpm_rounds_to_nearest() {
        // 5 words in 35 s is about 8.57 wpm.
        assert_eq!(words_per_minute(SENTENCE, "The cat sat on the", Duration::from_secs(35)), 9);
    }

    #[test]
    fn test_zero_elapsed_does_not_divide_by_zero() {
        let wpm = words_per_minute(SENTENCE, SENTENCE, Duration::ZERO);
        assert!(wpm > 1);
    }

    #[test]
    fn test_measure() {
        let result = TypingResult::measure(SENTENCE, "The cat sat", Duration::from_secs(60));
        assert_eq!(
            result,
            TypingResult { wpm: 3, correct_words: 3, total_words: 6, exact: false }
        );
        assert!(TypingResult::measure(SENTENCE, SENTENCE, Duration::from_secs(6)).exact);
    }
}
