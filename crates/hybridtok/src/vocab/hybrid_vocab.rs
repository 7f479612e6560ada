//! # Hybrid Vocabulary

use crate::{
    errors::{HTResult, HybridTokError},
    types::{TokenType, try_token, try_vocab_size},
    vocab::{CharVocab, SpecialToken, SpecialVocab, WordVocab},
};

/// Which part of the combined id space a token falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdRegion {
    /// One of the six reserved ids.
    Special(SpecialToken),

    /// A learned word.
    Word,

    /// An offset character id.
    Char,

    /// Outside every table.
    Unassigned,
}

/// The immutable vocabulary snapshot shared by encoders and decoders.
///
/// Every id `t` in the combined space belongs to exactly one region:
/// * `t < 6` - a special token;
/// * `6 <= t < |words|` - a learned word;
/// * `|words| <= t < |words| + |chars|` - the character `t - |words|`.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridVocab<T: TokenType> {
    specials: SpecialVocab<T>,
    words: WordVocab<T>,
    chars: CharVocab<T>,
    max_word_vocab: usize,

    /// `|words|` as a token; added to every local char id.
    char_offset: T,
}

impl<T: TokenType> HybridVocab<T> {
    /// Assemble a vocabulary from its tables.
    ///
    /// ## Arguments
    /// * `words` - the word table; must hold each special placeholder at its fixed id.
    /// * `chars` - the char table.
    /// * `max_word_vocab` - the configured word cap the tables were built with.
    ///
    /// ## Returns
    /// [`HybridTokError::MalformedPersistence`] if the special tokens are misplaced;
    /// [`HybridTokError::VocabSizeOverflow`] if the combined id space does not fit `T`.
    pub fn try_new(
        words: WordVocab<T>,
        chars: CharVocab<T>,
        max_word_vocab: usize,
    ) -> HTResult<Self> {
        let specials = SpecialVocab::try_new()?;
        for (text, token) in specials.iter() {
            if words.lookup_token(text) != Some(token) {
                return Err(HybridTokError::malformed(format!(
                    "word table must map {text} to {token}"
                )));
            }
        }

        let total = words.len() + chars.len();
        try_vocab_size::<T>(total)?;
        let char_offset = try_token(words.len())
            .map_err(|_| HybridTokError::VocabSizeOverflow { size: total })?;

        Ok(Self {
            specials,
            words,
            chars,
            max_word_vocab,
            char_offset,
        })
    }

    /// The special token table.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// The word table (special placeholders included).
    pub fn words(&self) -> &WordVocab<T> {
        &self.words
    }

    /// The char table, with local ids.
    pub fn chars(&self) -> &CharVocab<T> {
        &self.chars
    }

    /// The word cap this vocabulary was built with.
    pub fn max_word_vocab(&self) -> usize {
        self.max_word_vocab
    }

    /// `|words|`, special placeholders included.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The number of learned (non-special) words.
    pub fn learned_word_count(&self) -> usize {
        self.words.len().saturating_sub(SpecialToken::COUNT)
    }

    /// `|chars|`.
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// The total id space size, `|words| + |chars|`.
    ///
    /// This is the embedding table size a consuming model needs.
    pub fn vocab_size(&self) -> usize {
        self.word_count() + self.char_count()
    }

    /// The offset added to local char ids.
    pub fn char_offset(&self) -> T {
        self.char_offset
    }

    /// The token for a special.
    pub fn special(
        &self,
        special: SpecialToken,
    ) -> T {
        self.specials.token(special)
    }

    /// The token of a word fragment, if the word table holds it.
    pub fn word_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.words.lookup_token(word)
    }

    /// The word (or special placeholder) text of a token, if any.
    pub fn token_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.words.lookup_word(token)
    }

    /// The offset token of a character, if the char table holds it.
    pub fn char_token(
        &self,
        c: char,
    ) -> Option<T> {
        self.chars
            .lookup_token(c)
            .map(|local| local + self.char_offset)
    }

    /// The character of an offset token, if any.
    pub fn token_char(
        &self,
        token: T,
    ) -> Option<char> {
        if token < self.char_offset {
            return None;
        }
        self.chars.lookup_char(token - self.char_offset)
    }

    /// Classify a token by id region.
    pub fn region(
        &self,
        token: T,
    ) -> IdRegion {
        if let Some(special) = self.specials.lookup(token) {
            IdRegion::Special(special)
        } else if token < self.char_offset {
            IdRegion::Word
        } else if self.token_char(token).is_some() {
            IdRegion::Char
        } else {
            IdRegion::Unassigned
        }
    }
}
