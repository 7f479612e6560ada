//! # Hybrid Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    segmentation::{TextSegmentor, default_segmentor},
    types::TokenType,
    vocab::{HybridVocab, SpecialToken},
};

/// Word-or-characters encoder.
///
/// A fragment in the word table becomes its single word token. Any other
/// fragment becomes a fallback span:
///
/// ```text
/// CHAR_START, char_token(c0), char_token(c1), ..., CHAR_END
/// ```
///
/// where a character missing from the char table becomes UNK (never offset).
#[derive(Debug, Clone)]
pub struct HybridEncoder<T: TokenType> {
    vocab: Arc<HybridVocab<T>>,
    segmentor: TextSegmentor,
}

impl<T: TokenType> HybridEncoder<T> {
    /// Create an encoder over `vocab` with the default segmentor.
    pub fn new(vocab: Arc<HybridVocab<T>>) -> Self {
        Self::with_segmentor(vocab, default_segmentor().clone())
    }

    /// Create an encoder over `vocab` with a custom segmentor.
    pub fn with_segmentor(
        vocab: Arc<HybridVocab<T>>,
        segmentor: TextSegmentor,
    ) -> Self {
        Self { vocab, segmentor }
    }

    /// Append the character fallback span for a fragment.
    pub fn encode_append_chars(
        &self,
        fragment: &str,
        tokens: &mut Vec<T>,
    ) {
        let unk = self.vocab.special(SpecialToken::Unk);

        tokens.push(self.vocab.special(SpecialToken::CharStart));
        tokens.extend(
            fragment
                .chars()
                .map(|c| self.vocab.char_token(c).unwrap_or(unk)),
        );
        tokens.push(self.vocab.special(SpecialToken::CharEnd));
    }
}

impl<T: TokenType> TokenEncoder<T> for HybridEncoder<T> {
    fn vocab(&self) -> &Arc<HybridVocab<T>> {
        &self.vocab
    }

    fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    fn encode_append_fragment(
        &self,
        fragment: &str,
        tokens: &mut Vec<T>,
    ) {
        match self.vocab.word_token(fragment) {
            Some(token) => tokens.push(token),
            None => self.encode_append_chars(fragment, tokens),
        }
    }
}
