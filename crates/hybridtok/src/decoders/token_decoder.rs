//! # Token Decoder Trait

use crate::types::TokenType;

/// Trait for token to text decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens into text.
    ///
    /// Never fails; tokens with no text decode to an `<UNK>` marker.
    fn decode(
        &self,
        tokens: &[T],
    ) -> String;

    /// Decode a batch of token sequences.
    fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> Vec<String> {
        batch.iter().map(|tokens| self.decode(tokens)).collect()
    }
}
