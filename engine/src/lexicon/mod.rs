pub mod trie;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

pub use trie::TrieNode;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Word list answering exact-word and prefix queries.
///
/// Words are stored uppercase in a trie, so every prefix of a stored word is
/// a path from the root and a failed prefix lookup rules out all extensions.
#[derive(Debug, Default)]
pub struct Lexicon {
    root: TrieNode,
    words: usize,
}

impl Lexicon {
    /// Build a lexicon from a source of lines, one word per line.
    /// Lines are trimmed and uppercased; blank lines and lines that are not
    /// valid UTF-8 are skipped. The first read error aborts construction.
    pub fn build<I, L>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = io::Result<L>>,
        L: AsRef<[u8]>,
    {
        let mut lexicon = Self::empty();
        let mut skipped = 0usize;

        for line in lines {
            let added = match std::str::from_utf8(line?.as_ref()) {
                Ok(word) => lexicon.insert(word),
                Err(_) => false,
            };
            if !added {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} blank, undecodable or duplicate lines", skipped);
        }

        Ok(lexicon)
    }

    /// Build a lexicon from anything that reads line by line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        Self::build(reader.split(b'\n'))
    }

    /// Build a lexicon from words already in memory
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::empty();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Load a lexicon from a word list file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read(path)
            .await
            .map_err(|source| LexiconError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let lexicon = Self::build(content.split(|&b| b == b'\n').map(Ok::<_, io::Error>))?;

        tracing::info!("Loaded {} words into lexicon", lexicon.len());

        Ok(lexicon)
    }

    /// Create an empty lexicon (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    fn insert(&mut self, line: &str) -> bool {
        let word = line.trim();
        if word.is_empty() {
            return false;
        }
        let added = self.root.insert(&word.to_uppercase());
        if added {
            self.words += 1;
        }
        added
    }

    /// Check if a word exists in the lexicon
    pub fn is_word(&self, word: &str) -> bool {
        self.root
            .descend(&word.to_uppercase())
            .is_some_and(TrieNode::is_word)
    }

    /// Check if any word in the lexicon starts with `prefix` (the word itself included)
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.root.descend(&prefix.to_uppercase()).is_some()
    }

    /// Root of the underlying trie, for callers that walk it incrementally
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Get the number of distinct words in the lexicon
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert!(!lexicon.is_word("TEST"));
        assert!(!lexicon.has_prefix(""), "Empty lexicon has no prefixes at all");
        assert!(!lexicon.has_prefix("T"));
    }

    #[test]
    fn test_case_is_normalized() {
        let lexicon = Lexicon::from_words(["test", "Set"]);
        assert!(lexicon.is_word("TEST"));
        assert!(lexicon.is_word("test"));
        assert!(lexicon.is_word("sEt"));
        assert!(lexicon.has_prefix("te"));
    }

    #[test]
    fn test_prefix_queries() {
        let lexicon = Lexicon::from_words(["TEST", "TESTS", "SET"]);

        assert!(lexicon.has_prefix(""), "Every word has the empty prefix");
        assert!(lexicon.has_prefix("T"));
        assert!(lexicon.has_prefix("TES"));
        assert!(lexicon.has_prefix("TEST"), "A word is a prefix of itself");
        assert!(!lexicon.has_prefix("TSE"));
        assert!(!lexicon.has_prefix("TESTSS"));

        assert!(!lexicon.is_word(""));
        assert!(!lexicon.is_word("TES"));
        assert!(lexicon.is_word("TESTS"));
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let source = "apple\n\n  banana  \r\n\t\ncherry\napple\n";
        let lexicon = Lexicon::from_reader(Cursor::new(source)).unwrap();

        assert_eq!(lexicon.len(), 3, "Blank lines and duplicates should not count");
        assert!(lexicon.is_word("BANANA"));
        assert!(!lexicon.is_word(""));
    }

    #[test]
    fn test_undecodable_lines_are_skipped() {
        let lexicon = Lexicon::from_reader(Cursor::new(b"TEST\nCAF\xc9\nSET\n")).unwrap();

        assert_eq!(lexicon.len(), 2, "The Latin-1 line should be skipped, not fatal");
        assert!(lexicon.is_word("TEST"));
        assert!(lexicon.is_word("SET"));
        assert!(!lexicon.has_prefix("CAF"));
    }

    #[tokio::test]
    async fn test_load_skips_undecodable_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"TEST\r\nCAF\xc9\r\nSET\r\n").unwrap();
        file.flush().unwrap();

        let lexicon = Lexicon::load(file.path()).await.unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_word("SET"), "Trailing carriage returns are trimmed");
    }

    #[test]
    fn test_build_fails_on_read_error() {
        let lines = vec![
            Ok("WORD".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        ];
        let result = Lexicon::build(lines);
        assert!(matches!(result, Err(LexiconError::Io(_))));
    }

    #[test]
    fn test_collect_into_lexicon() {
        let lexicon: Lexicon = ["A", "B"].into_iter().collect();
        assert_eq!(lexicon.len(), 2);
    }

    #[tokio::test]
    async fn test_load_word_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "TEST\nset\n\n").unwrap();
        file.flush().unwrap();

        let lexicon = Lexicon::load(file.path()).await.unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_word("SET"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = tokio_test::block_on(Lexicon::load("./does-not-exist/words.txt"));
        match result {
            Err(LexiconError::Read { path, .. }) => {
                assert!(path.ends_with("words.txt"));
            }
            other => panic!("Expected a read error, got {:?}", other),
        }
    }
}
