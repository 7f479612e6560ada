//! # Character Vocabulary

use crate::{
    errors::{HTResult, HybridTokError},
    types::{HTHashMap, TokenType, token_index, try_token},
};

/// A bijective ``{ char <-> T }`` table with its own zero-based ids.
///
/// These ids are *local*; they are offset by the word table size before
/// they appear in an encoded sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab<T: TokenType> {
    /// Characters in id order.
    chars: Vec<char>,

    /// The inverse of `chars`.
    char_to_id: HTHashMap<char, T>,
}

impl<T: TokenType> Default for CharVocab<T> {
    fn default() -> Self {
        Self {
            chars: Vec::new(),
            char_to_id: HTHashMap::default(),
        }
    }
}

impl<T: TokenType> CharVocab<T> {
    /// Build a char table; the char at index `i` receives local id `i`.
    ///
    /// ## Returns
    /// An error if a char repeats, or if the ids do not fit in `T`.
    pub fn try_from_chars<I>(chars: I) -> HTResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();

        let mut char_to_id = HTHashMap::default();
        char_to_id.reserve(chars.len());
        for (idx, &c) in chars.iter().enumerate() {
            let token: T = try_token(idx)?;
            if char_to_id.insert(c, token).is_some() {
                return Err(HybridTokError::malformed(format!(
                    "duplicate char {c:?} in char table"
                )));
            }
        }

        Ok(Self { chars, char_to_id })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The local id of `c`, if present.
    pub fn lookup_token(
        &self,
        c: char,
    ) -> Option<T> {
        self.char_to_id.get(&c).copied()
    }

    /// The char with local id `token`, if present.
    pub fn lookup_char(
        &self,
        token: T,
    ) -> Option<char> {
        self.chars.get(token_index(token)).copied()
    }

    /// Chars in id order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Iterate `(local token, char)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, char)> + '_ {
        self.chars
            .iter()
            .filter_map(|c| self.char_to_id.get(c).map(|&token| (token, *c)))
    }
}
