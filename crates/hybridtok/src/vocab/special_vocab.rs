//! # Special Tokens Vocabulary

use crate::{
    errors::HTResult,
    types::{TokenType, token_index, try_token},
};

/// The text emitted when decoding an unknown token or character.
pub const UNK_TEXT: &str = "<UNK>";

/// The six reserved tokens occupying ids `0..6` in every vocabulary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum SpecialToken {
    /// Padding.
    #[strum(serialize = "<PAD>")]
    Pad = 0,

    /// Unknown character.
    #[strum(serialize = "<UNK>")]
    Unk = 1,

    /// Beginning of sequence.
    #[strum(serialize = "<BOS>")]
    Bos = 2,

    /// End of sequence; also the placeholder for end-of-document markers.
    #[strum(serialize = "<EOS>")]
    Eos = 3,

    /// Opens a character-level fallback span.
    #[strum(serialize = "<CHAR_START>")]
    CharStart = 4,

    /// Closes a character-level fallback span.
    #[strum(serialize = "<CHAR_END>")]
    CharEnd = 5,
}

impl SpecialToken {
    /// The number of special tokens.
    pub const COUNT: usize = 6;

    /// All special tokens, in id order.
    pub const ALL: [SpecialToken; Self::COUNT] = [
        Self::Pad,
        Self::Unk,
        Self::Bos,
        Self::Eos,
        Self::CharStart,
        Self::CharEnd,
    ];

    /// The fixed id of this token.
    pub fn id(self) -> usize {
        self as usize
    }

    /// The textual placeholder, e.g. `"<EOS>"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The special token with the given id, if any.
    pub fn from_id(id: usize) -> Option<Self> {
        u8::try_from(id).ok().and_then(Self::from_repr)
    }

    /// The special token with the given placeholder text, if any.
    pub fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Tokens that decode to no text at all.
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Pad | Self::Bos | Self::Eos)
    }
}

/// Token vocabulary for the special tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    tokens: [T; SpecialToken::COUNT],
}

impl<T: TokenType> SpecialVocab<T> {
    /// Create the special vocab for token type `T`.
    pub fn try_new() -> HTResult<Self> {
        let mut tokens = [T::zero(); SpecialToken::COUNT];
        for special in SpecialToken::ALL {
            tokens[special.id()] = try_token(special.id())?;
        }
        Ok(Self { tokens })
    }

    /// Get the number of special tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; the special vocab is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The token for `special`.
    pub fn token(
        &self,
        special: SpecialToken,
    ) -> T {
        self.tokens[special.id()]
    }

    /// The special token a token id denotes, if any.
    pub fn lookup(
        &self,
        token: T,
    ) -> Option<SpecialToken> {
        SpecialToken::from_id(token_index(token))
    }

    /// Iterate `(placeholder text, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        SpecialToken::ALL
            .into_iter()
            .map(|special| (special.as_str(), self.token(special)))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_special_token_ids() {
        let ids: Vec<usize> = SpecialToken::iter().map(SpecialToken::id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(SpecialToken::iter().collect::<Vec<_>>(), SpecialToken::ALL);

        assert_eq!(SpecialToken::from_id(3), Some(SpecialToken::Eos));
        assert_eq!(SpecialToken::from_id(6), None);
        assert_eq!(SpecialToken::from_id(1 << 20), None);
    }

    #[test]
    fn test_special_token_text() {
        assert_eq!(SpecialToken::CharStart.as_str(), "<CHAR_START>");
        assert_eq!(SpecialToken::Eos.to_string(), "<EOS>");
        assert_eq!(SpecialToken::from_text("<PAD>"), Some(SpecialToken::Pad));
        assert_eq!(SpecialToken::from_text("<pad>"), None);
        assert_eq!(SpecialToken::from_text("pad"), None);
    }

    #[test]
    fn test_silent() {
        let silent: Vec<_> = SpecialToken::iter().filter(|s| s.is_silent()).collect();
        assert_eq!(
            silent,
            vec![SpecialToken::Pad, SpecialToken::Bos, SpecialToken::Eos]
        );
    }

    #[test]
    fn test_special_vocab() {
        type T = u16;
        let vocab: SpecialVocab<T> = SpecialVocab::try_new().unwrap();
        assert_eq!(vocab.len(), 6);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.token(SpecialToken::CharEnd), 5);
        assert_eq!(vocab.lookup(2), Some(SpecialToken::Bos));
        assert_eq!(vocab.lookup(6), None);

        let pairs: Vec<_> = vocab.iter().collect();
        assert_eq!(pairs[0], ("<PAD>", 0));
        assert_eq!(pairs[4], ("<CHAR_START>", 4));
    }
}
