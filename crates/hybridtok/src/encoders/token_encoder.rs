//! # Token Encoder Trait

use std::sync::Arc;

use crate::{
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::{HybridVocab, SpecialToken},
};

/// Trait for text to token encoders.
///
/// Implementors supply fragment encoding; sequence framing and batching
/// are provided.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// The vocabulary this encoder reads.
    fn vocab(&self) -> &Arc<HybridVocab<T>>;

    /// The segmentor used to split text into fragments.
    fn segmentor(&self) -> &TextSegmentor;

    /// Append the tokens for a single fragment.
    ///
    /// ## Arguments
    /// * `fragment` - a normalized, non-empty fragment.
    /// * `tokens` - the target token buffer.
    fn encode_append_fragment(
        &self,
        fragment: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text, optionally framed by BOS and EOS.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    /// * `add_special_tokens` - whether to emit BOS first and EOS last.
    ///
    /// ## Returns
    /// The token sequence; never fails, unknown characters become UNK.
    fn encode_with(
        &self,
        text: &str,
        add_special_tokens: bool,
    ) -> Vec<T> {
        let fragments = self.segmentor().fragments(text);

        let capacity = fragments.iter().map(|f| f.len() + 2).sum::<usize>() + 2;
        let mut tokens = Vec::with_capacity(capacity);

        if add_special_tokens {
            tokens.push(self.vocab().special(SpecialToken::Bos));
        }
        for fragment in &fragments {
            self.encode_append_fragment(fragment, &mut tokens);
        }
        if add_special_tokens {
            tokens.push(self.vocab().special(SpecialToken::Eos));
        }

        tokens
    }

    /// Encode text framed by BOS and EOS.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encode_with(text, true)
    }

    /// Encode a batch of texts.
    ///
    /// ## Arguments
    /// * `batch` - the texts.
    /// * `add_special_tokens` - whether to frame each sequence with BOS and EOS.
    fn encode_batch_with(
        &self,
        batch: &[String],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>> {
        batch
            .iter()
            .map(|text| self.encode_with(text, add_special_tokens))
            .collect()
    }

    /// Encode a batch of texts framed by BOS and EOS.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        self.encode_batch_with(batch, true)
    }
}
