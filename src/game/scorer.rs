/// Shortest word the solver looks for and the scorer awards points to
pub const MIN_WORD_LENGTH: usize = 3;

pub struct Scorer;

impl Scorer {
    /// Calculate the score for a word.
    ///
    /// Scoring rules (word hunt):
    /// - Every letter from the third onward adds a step value
    /// - The 3rd letter is worth 100, the 4th 300, the 6th 600
    /// - Every other step (the 5th, 7th and beyond) is worth 400
    ///
    /// So a 6-letter word scores 100 + 300 + 400 + 600 = 1400.
    pub fn score_for_word(word: &str) -> u32 {
        Self::score_for_length(word.chars().count())
    }

    /// Words shorter than the minimum score nothing
    pub fn score_for_length(length: usize) -> u32 {
        (MIN_WORD_LENGTH..=length).map(Self::step_value).sum()
    }

    fn step_value(step: usize) -> u32 {
        match step {
            3 => 100,
            4 => 300,
            6 => 600,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_values() {
        assert_eq!(Scorer::step_value(3), 100);
        assert_eq!(Scorer::step_value(4), 300);
        assert_eq!(Scorer::step_value(5), 400);
        assert_eq!(Scorer::step_value(6), 600);
        assert_eq!(Scorer::step_value(7), 400);
        assert_eq!(Scorer::step_value(12), 400);
    }

    #[test]
    fn test_cumulative_scores() {
        let scores: Vec<u32> = (3..=8).map(Scorer::score_for_length).collect();
        assert_eq!(scores, vec![100, 400, 800, 1400, 1800, 2200]);
    }

    #[test]
    fn test_six_letter_word_is_not_a_lookup() {
        // Cumulative: 100 + 300 + 400 + 600
        assert_eq!(Scorer::score_for_word("planet"), 1400);
    }

    #[test]
    fn test_score_for_word_counts_chars() {
        assert_eq!(Scorer::score_for_word("cat"), 100);
        assert_eq!(Scorer::score_for_word("CATS"), 400);
        assert_eq!(Scorer::score_for_word("crème"), 800);
    }

    #[test]
    fn test_short_words_score_zero() {
        assert_eq!(Scorer::score_for_word(""), 0);
        assert_eq!(Scorer::score_for_word("at"), 0);
    }

    #[test]
    fn test_monotonic_in_length() {
        let mut previous = 0;
        for length in MIN_WORD_LENGTH..=16 {
            let score = Scorer::score_for_length(length);
            assert!(score >= previous, "score dropped at length {}", length);
            previous = score;
        }
    }
}
