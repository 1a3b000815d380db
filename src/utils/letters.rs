use once_cell::sync::Lazy;

/// Letter frequency distribution for English (approximate)
/// Used for weighted random board generation
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('e', 12.70),
        ('t', 9.05),
        ('a', 8.16),
        ('o', 7.50),
        ('i', 6.96),
        ('n', 6.74),
        ('s', 6.32),
        ('h', 6.09),
        ('r', 5.98),
        ('d', 4.25),
        ('l', 4.02),
        ('c', 2.78),
        ('u', 2.75),
        ('m', 2.40),
        ('w', 2.36),
        ('f', 2.22),
        ('g', 2.01),
        ('y', 1.97),
        ('p', 1.92),
        ('b', 1.49),
        ('v', 0.97),
        ('k', 0.77),
        ('j', 0.15),
        ('x', 0.15),
        ('q', 0.09),
        ('z', 0.07),
    ]
});

/// Running totals over `LETTER_DISTRIBUTION`, for weighted random selection
pub static CUMULATIVE_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
});

/// Map a value in `[0, total)` onto a letter of the cumulative distribution
pub fn letter_for(value: f32) -> char {
    CUMULATIVE_DISTRIBUTION
        .iter()
        .find(|(_, cumulative)| value <= *cumulative)
        .map(|(letter, _)| *letter)
        .unwrap_or('e')
}

/// Sum of all weights in the distribution
pub fn total_weight() -> f32 {
    CUMULATIVE_DISTRIBUTION.last().map_or(0.0, |(_, total)| *total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_distribution() {
        assert!(CUMULATIVE_DISTRIBUTION.len() == 26);
        // Last entry should be close to 100%
        assert!((total_weight() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_cumulative_is_increasing() {
        for pair in CUMULATIVE_DISTRIBUTION.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_letter_for() {
        assert_eq!(letter_for(0.0), 'e');
        assert_eq!(letter_for(12.70), 'e');
        assert_eq!(letter_for(12.71), 't');
        assert_eq!(letter_for(total_weight()), 'z');
        // past the end falls back to the most common letter
        assert_eq!(letter_for(1000.0), 'e');
    }
}
