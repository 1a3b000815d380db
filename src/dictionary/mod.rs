use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};
use fst::raw::CompiledAddr;

/// The set of playable words, stored lowercase in a finite state
/// transducer so a board search can walk it one letter at a time and
/// abandon a path as soon as its letters stop leading anywhere.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    set: fst::Set<Vec<u8>>,
}

/// A position in the dictionary's transducer reached by some prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixNode {
    addr: CompiledAddr,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dictionary = Self::parse(&content);

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Load dictionary from a file, falling back to an empty one when
    /// `allow_empty` is set and the file cannot be read
    pub async fn load_or_empty<P: AsRef<Path>>(path: P, allow_empty: bool) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path).await {
            Ok(dictionary) => Ok(dictionary),
            Err(e) if allow_empty => {
                tracing::warn!("Failed to load dictionary: {:#}. Using empty dictionary.", e);
                tracing::warn!(
                    "No word on the board can be credited until a word list is at {}",
                    path.display()
                );
                Ok(Self::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Build a dictionary from a raw word list, one word per line.
    /// Both `\n` and `\r\n` line endings are accepted; blank lines are skipped.
    pub fn parse(raw: &str) -> Self {
        Self::from_words(raw.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        match fst::Set::from_iter(sorted) {
            Ok(set) => Self { set },
            Err(e) => {
                tracing::error!("Failed to build dictionary index: {}", e);
                Self::empty()
            }
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.to_lowercase())
    }

    /// Check if some longer word in the dictionary starts with `prefix`
    pub fn is_prefix(&self, prefix: &str) -> bool {
        let mut node = self.root();
        for letter in prefix.to_lowercase().chars() {
            match self.advance(node, letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.has_longer_words(node)
    }

    /// The node for the empty prefix
    pub fn root(&self) -> PrefixNode {
        PrefixNode {
            addr: self.set.as_fst().root().addr(),
        }
    }

    /// Follow `letter` from `node`, or `None` when no word continues that way.
    /// `letter` is matched as given; callers pass lowercase letters.
    pub fn advance(&self, node: PrefixNode, letter: char) -> Option<PrefixNode> {
        let fst = self.set.as_fst();
        let mut current = fst.node(node.addr);
        let mut buf = [0u8; 4];
        for byte in letter.encode_utf8(&mut buf).bytes() {
            let idx = current.find_input(byte)?;
            current = fst.node(current.transition_addr(idx));
        }
        Some(PrefixNode {
            addr: current.addr(),
        })
    }

    /// Whether the prefix that reached `node` is itself a word
    pub fn is_word_at(&self, node: PrefixNode) -> bool {
        self.set.as_fst().node(node.addr).is_final()
    }

    /// Whether some longer word continues past `node`
    pub fn has_longer_words(&self, node: PrefixNode) -> bool {
        !self.set.as_fst().node(node.addr).is_empty()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("TEST"));
    }

    #[test]
    fn test_parse_accepts_lf_and_crlf() {
        let dict = Dictionary::parse("cat\r\ndog\nbird\r\n\r\n  fish  \n");
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
        assert!(dict.contains("fish"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_case_insensitive() {
        let dict = Dictionary::parse("Cat\nDOG");
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("dOg"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict = Dictionary::parse("cat\nCAT\ncat");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_short_words_are_kept() {
        let dict = Dictionary::parse("a\nat");
        assert!(dict.contains("a"));
        assert!(dict.contains("at"));
    }

    #[test]
    fn test_prefixes() {
        let dict = Dictionary::parse("cat\ncats\ncar");
        assert!(dict.is_prefix("c"));
        assert!(dict.is_prefix("ca"));
        assert!(dict.is_prefix("cat"));
        assert!(dict.is_prefix("CA"));
        assert!(!dict.is_prefix("cats"));
        assert!(!dict.is_prefix("car"));
        assert!(!dict.is_prefix("d"));
        assert!(!dict.is_prefix("cab"));
        assert!(dict.is_prefix(""));
        assert!(!Dictionary::empty().is_prefix(""));
    }

    #[test]
    fn test_walking_nodes() {
        let dict = Dictionary::parse("cat\ncats\ncar");
        let c = dict.advance(dict.root(), 'c').unwrap();
        let ca = dict.advance(c, 'a').unwrap();
        let cat = dict.advance(ca, 't').unwrap();
        let car = dict.advance(ca, 'r').unwrap();

        assert!(!dict.is_word_at(ca));
        assert!(dict.is_word_at(cat));
        assert!(dict.has_longer_words(cat));
        assert!(dict.is_word_at(car));
        assert!(!dict.has_longer_words(car));
        assert_eq!(dict.advance(ca, 'b'), None);
    }

    #[test]
    fn test_multibyte_letters() {
        let dict = Dictionary::parse("éte\nnaïve");
        let e = dict.advance(dict.root(), 'é').unwrap();
        let et = dict.advance(e, 't').unwrap();
        assert!(dict.is_word_at(dict.advance(et, 'e').unwrap()));
        assert_eq!(dict.advance(dict.root(), 'e'), None);
        assert!(dict.is_prefix("NAÏ"));
    }

    #[test]
    fn test_titlecase_letters_match() {
        let dict = Dictionary::parse("ǅab");
        assert!(dict.contains("ǅab"));
        assert!(dict.contains("ǆab"));
        assert!(dict.contains("Ǆab"));
        assert!(dict.is_prefix("ǅa"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("word-hunt-dict-{}.txt", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "tea\r\neat\r\nate\r\n").await.unwrap();

        let dict = Dictionary::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("EAT"));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("word-hunt-missing-{}.txt", uuid::Uuid::new_v4()));
        assert!(Dictionary::load(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_load_or_empty() {
        let path = std::env::temp_dir().join(format!("word-hunt-missing-{}.txt", uuid::Uuid::new_v4()));

        let err = Dictionary::load_or_empty(&path, false).await.unwrap_err();
        assert!(err.to_string().contains("failed to read dictionary"));

        let dict = Dictionary::load_or_empty(&path, true).await.unwrap();
        assert!(dict.is_empty());
    }
}
