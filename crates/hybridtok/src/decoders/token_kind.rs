//! # Token Kinds

use crate::{types::TokenType, vocab::SpecialToken};

/// A classified unit of an encoded sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<T: TokenType> {
    /// A special token outside any character span.
    ///
    /// Never [`SpecialToken::CharStart`]; that always opens a [`TokenKind::CharSpan`].
    Special(SpecialToken),

    /// A word-table token.
    Word(T),

    /// The tokens between `CHAR_START` and `CHAR_END` (or the end of input).
    CharSpan(Vec<T>),

    /// A token outside the word table, found outside any character span.
    Unknown(T),
}

impl<T: TokenType> TokenKind<T> {
    /// The number of tokens this kind spans in a well-formed sequence.
    ///
    /// A [`TokenKind::CharSpan`] counts its `CHAR_START` and `CHAR_END` markers.
    pub fn token_len(&self) -> usize {
        match self {
            Self::CharSpan(tokens) => tokens.len() + 2,
            _ => 1,
        }
    }
}
