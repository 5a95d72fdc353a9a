pub struct Scorer;

impl Scorer {
    /// Points for a single word, by letter count.
    ///
    /// Scoring rules (classic Boggle):
    /// - 3 or 4 letters: 1 point
    /// - 5 letters: 2 points
    /// - 6 letters: 3 points
    /// - 7 letters: 5 points
    /// - 8 or more letters: 11 points
    ///
    /// Anything shorter scores nothing. A `QU` tile counts as two letters.
    pub fn score_word(word: &str) -> u32 {
        Self::length_score(word.chars().count())
    }

    /// Sum of the scores of every word
    pub fn total<'a>(words: impl IntoIterator<Item = &'a str>) -> u32 {
        words.into_iter().map(Self::score_word).sum()
    }

    fn length_score(length: usize) -> u32 {
        match length {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_score() {
        assert_eq!(Scorer::length_score(2), 0);
        assert_eq!(Scorer::length_score(3), 1);
        assert_eq!(Scorer::length_score(4), 1);
        assert_eq!(Scorer::length_score(5), 2);
        assert_eq!(Scorer::length_score(6), 3);
        assert_eq!(Scorer::length_score(7), 5);
        assert_eq!(Scorer::length_score(8), 11);
        assert_eq!(Scorer::length_score(16), 11);
    }

    #[test]
    fn test_digraph_counts_two_letters() {
        // Q-U-I-T-E is five letters even though QU sits on one tile
        assert_eq!(Scorer::score_word("QUITE"), 2);
    }

    #[test]
    fn test_total() {
        // 1 + 1 + 2 + 0
        assert_eq!(Scorer::total(["CAT", "CATS", "SLATE", "AT"]), 4);
        assert_eq!(Scorer::total(Vec::<&str>::new()), 0);
    }
}
