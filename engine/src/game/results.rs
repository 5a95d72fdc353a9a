use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::{game::scorer::Scorer, utils::join::outer_join};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Entered by the player and on the board
    Found,
    /// On the board but not entered
    Missed,
    /// Entered but not on the board or not a word
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub word: String,
    pub status: WordStatus,
    pub points: u32,
}

/// How a player's list compares to the words the solver found
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub rows: Vec<ResultRow>,
    pub score: u32,
    pub max_score: u32,
}

impl RoundResult {
    /// Compare player entries against the solver's word set.
    /// Entries are trimmed and uppercased; blanks and repeats are dropped.
    pub fn compare<I, S>(player_words: I, found: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entered: Vec<String> = player_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let (accepted, rejected): (Vec<String>, Vec<String>) =
            entered.into_iter().partition(|w| found.contains(w));

        tracing::debug!(
            "Player entered {} valid and {} invalid words",
            accepted.len(),
            rejected.len()
        );

        let mut entered = accepted;
        entered.extend(rejected);
        let solved: Vec<String> = found.iter().cloned().collect();

        let rows: Vec<ResultRow> = outer_join(&entered, &solved)
            .into_iter()
            .filter_map(|pair| {
                let (word, status) = match pair {
                    (Some(word), Some(_)) => (word, WordStatus::Found),
                    (None, Some(word)) => (word, WordStatus::Missed),
                    (Some(word), None) => (word, WordStatus::Rejected),
                    (None, None) => return None,
                };
                let points = match status {
                    WordStatus::Rejected => 0,
                    _ => Scorer::score_word(&word),
                };
                Some(ResultRow {
                    word,
                    status,
                    points,
                })
            })
            .collect();

        let score = rows
            .iter()
            .filter(|row| row.status == WordStatus::Found)
            .map(|row| row.points)
            .sum();
        let max_score = Scorer::total(found.iter().map(String::as_str));

        Self {
            rows,
            score,
            max_score,
        }
    }

    pub fn words_with(&self, status: WordStatus) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(move |row| row.status == status)
            .map(|row| row.word.as_str())
    }
}

/// Two-column table: the player's words on the left, the solver's on the right
impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.word.chars().count())
            .chain(["BOARD".len()])
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<width$}  {:<width$}  PTS", "YOU", "BOARD")?;
        for row in &self.rows {
            let (mine, theirs) = match row.status {
                WordStatus::Found => (row.word.as_str(), row.word.as_str()),
                WordStatus::Missed => ("", row.word.as_str()),
                WordStatus::Rejected => (row.word.as_str(), "-"),
            };
            writeln!(f, "{:<width$}  {:<width$}  {:>3}", mine, theirs, row.points)?;
        }
        write!(f, "Score: {} / {}", self.score, self.max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_compare_classifies_words() {
        let solved = found(&["CAT", "CATS", "SLATE"]);
        let result = RoundResult::compare(["cats", " slate ", "dog", "", "CATS"], &solved);

        assert_eq!(result.words_with(WordStatus::Found).collect::<Vec<_>>(), ["CATS", "SLATE"]);
        assert_eq!(result.words_with(WordStatus::Missed).collect::<Vec<_>>(), ["CAT"]);
        assert_eq!(result.words_with(WordStatus::Rejected).collect::<Vec<_>>(), ["DOG"]);
        assert_eq!(result.rows.len(), 4, "Repeated entries collapse into one row");
    }

    #[test]
    fn test_scores() {
        let solved = found(&["CAT", "CATS", "SLATE"]);
        let result = RoundResult::compare(["SLATE", "DOGS"], &solved);

        assert_eq!(result.score, 2);
        assert_eq!(result.max_score, 4);
        let dogs = result.rows.iter().find(|r| r.word == "DOGS").unwrap();
        assert_eq!(dogs.points, 0, "Rejected words earn nothing");
    }

    #[test]
    fn test_empty_round() {
        let result = RoundResult::compare(Vec::<String>::new(), &HashSet::new());
        assert!(result.rows.is_empty());
        assert_eq!(result.to_string(), "YOU    BOARD  PTS\nScore: 0 / 0");
    }

    #[test]
    fn test_table_rendering() {
        let solved = found(&["CAT", "TEA"]);
        let result = RoundResult::compare(["TEA", "XYZ"], &solved);

        let expected = "\
YOU    BOARD  PTS
       CAT      1
TEA    TEA      1
XYZ    -        0
Score: 1 / 2";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_table_aligns_non_ascii_words() {
        let solved = found(&["CAFÉS"]);
        let result = RoundResult::compare(["CAFÉS", "NAÏVE"], &solved);

        let expected = "\
YOU    BOARD  PTS
CAFÉS  CAFÉS    2
NAÏVE  -        0
Score: 2 / 2";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_serializes_status_lowercase() {
        let result = RoundResult::compare(["CAT"], &found(&["CAT"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rows"][0]["status"], "found");
        assert_eq!(json["score"], 1);
    }
}
