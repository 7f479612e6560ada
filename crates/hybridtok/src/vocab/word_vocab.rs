//! # Word Vocabulary

use crate::{
    errors::{HTResult, HybridTokError},
    types::{HTHashMap, TokenType, token_index, try_token},
};

/// A bijective ``{ word <-> T }`` table with contiguous ids `0..len`.
///
/// In a [`crate::vocab::HybridVocab`] the first entries are the special token
/// placeholders at their fixed ids; learned words follow.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    /// Words in id order.
    words: Vec<String>,

    /// The inverse of `words`.
    word_to_id: HTHashMap<String, T>,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            word_to_id: HTHashMap::default(),
        }
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a word table; the word at index `i` receives id `i`.
    ///
    /// ## Arguments
    /// * `words` - the words, in id order.
    ///
    /// ## Returns
    /// An error if a word repeats, or if the ids do not fit in `T`.
    pub fn try_from_words<I, S>(words: I) -> HTResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let mut word_to_id = HTHashMap::default();
        word_to_id.reserve(words.len());
        for (idx, word) in words.iter().enumerate() {
            let token: T = try_token(idx)?;
            if word_to_id.insert(word.clone(), token).is_some() {
                return Err(HybridTokError::malformed(format!(
                    "duplicate word {word:?} in word table"
                )));
            }
        }

        Ok(Self { words, word_to_id })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The id of `word`, if present.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_to_id.get(word).copied()
    }

    /// The word with id `token`, if present.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.words.get(token_index(token)).map(String::as_str)
    }

    /// Words in id order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate `(token, word)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.words.iter().filter_map(|word| {
            self.word_to_id
                .get(word.as_str())
                .map(|&token| (token, word.as_str()))
        })
    }
}
