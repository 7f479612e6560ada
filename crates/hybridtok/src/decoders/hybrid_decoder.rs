//! # Hybrid Decoder

use std::sync::Arc;

use crate::{
    decoders::{TokenDecoder, TokenKind},
    types::TokenType,
    vocab::{HybridVocab, IdRegion, SpecialToken, UNK_TEXT},
};

/// Decoder for sequences produced by [`crate::HybridEncoder`].
#[derive(Debug, Clone)]
pub struct HybridDecoder<T: TokenType> {
    vocab: Arc<HybridVocab<T>>,
}

impl<T: TokenType> HybridDecoder<T> {
    /// Create a decoder over `vocab`.
    pub fn new(vocab: Arc<HybridVocab<T>>) -> Self {
        Self { vocab }
    }

    /// The vocabulary this decoder reads.
    pub fn vocab(&self) -> &Arc<HybridVocab<T>> {
        &self.vocab
    }

    /// Classify a token sequence, left to right.
    ///
    /// `CHAR_START` opens a span which runs to the next `CHAR_END`, or to the
    /// end of input if the span was cut off.
    pub fn scan(
        &self,
        tokens: &[T],
    ) -> Vec<TokenKind<T>> {
        let char_start = self.vocab.special(SpecialToken::CharStart);
        let char_end = self.vocab.special(SpecialToken::CharEnd);

        let mut kinds = Vec::with_capacity(tokens.len());
        let mut idx = 0;
        while idx < tokens.len() {
            let token = tokens[idx];
            idx += 1;

            if token == char_start {
                let start = idx;
                while idx < tokens.len() && tokens[idx] != char_end {
                    idx += 1;
                }
                kinds.push(TokenKind::CharSpan(tokens[start..idx].to_vec()));

                // Skip the CHAR_END, when present.
                idx += 1;
                continue;
            }

            kinds.push(match self.vocab.region(token) {
                IdRegion::Special(special) => TokenKind::Special(special),
                IdRegion::Word => TokenKind::Word(token),
                IdRegion::Char | IdRegion::Unassigned => TokenKind::Unknown(token),
            });
        }
        kinds
    }

    /// Render one [`TokenKind`] as a fragment.
    ///
    /// ## Returns
    /// `None` for kinds with no text: PAD, BOS, EOS, and empty spans.
    pub fn render(
        &self,
        kind: &TokenKind<T>,
    ) -> Option<String> {
        match kind {
            TokenKind::Special(special) if special.is_silent() => None,
            TokenKind::Special(special) => Some(special.as_str().to_string()),
            TokenKind::Word(token) => Some(
                self.vocab
                    .token_word(*token)
                    .unwrap_or(UNK_TEXT)
                    .to_string(),
            ),
            TokenKind::CharSpan(tokens) => self.render_chars(tokens),
            TokenKind::Unknown(_) => Some(UNK_TEXT.to_string()),
        }
    }

    /// Render the inside of a character span.
    ///
    /// Stray `CHAR_START` markers are dropped; tokens that are not offset
    /// characters become `<UNK>`.
    pub fn render_chars(
        &self,
        tokens: &[T],
    ) -> Option<String> {
        if tokens.is_empty() {
            return None;
        }

        let char_start = self.vocab.special(SpecialToken::CharStart);
        let char_end = self.vocab.special(SpecialToken::CharEnd);

        let mut text = String::with_capacity(tokens.len());
        for &token in tokens {
            if token == char_start || token == char_end {
                continue;
            }
            match self.vocab.token_char(token) {
                Some(c) => text.push(c),
                None => text.push_str(UNK_TEXT),
            }
        }
        Some(text)
    }

    /// Decode tokens into their fragments, in order.
    pub fn decode_fragments(
        &self,
        tokens: &[T],
    ) -> Vec<String> {
        self.scan(tokens)
            .iter()
            .filter_map(|kind| self.render(kind))
            .collect()
    }
}

impl<T: TokenType> TokenDecoder<T> for HybridDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.decode_fragments(tokens).join(" ")
    }
}
