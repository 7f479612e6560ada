//! # Batch Encoding
//!
//! Padded, masked batches for a downstream sequence model.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hybridtok::{BatchOptions, HybridEncoder, batch::encode_batch, training::HybridVocabBuilderOptions};
//!
//! let vocab = HybridVocabBuilderOptions::new(10)
//!     .build_from_samples::<u32, _>(["the cat sat.", "the dog sat."])
//!     .unwrap();
//! let encoder = HybridEncoder::new(Arc::new(vocab));
//!
//! let batch = encode_batch(
//!     &encoder,
//!     &["the cat".to_string(), "the dog sat.".to_string()],
//!     &BatchOptions::default(),
//! );
//! assert_eq!(batch.ids, vec![vec![2, 6, 9, 3, 0, 0], vec![2, 6, 10, 7, 8, 3]]);
//! assert_eq!(
//!     batch.attention_mask,
//!     Some(vec![vec![1, 1, 1, 1, 0, 0], vec![1, 1, 1, 1, 1, 1]])
//! );
//! ```

use serde::Serialize;

use crate::{
    encoders::TokenEncoder,
    types::TokenType,
    vocab::{HybridVocab, SpecialToken},
};

/// Where a batch may cut a sequence that is longer than `max_length`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum TruncationPolicy {
    /// Cut at exactly `max_length` tokens.
    ///
    /// A character span may be cut open; decoding treats an unterminated
    /// span as running to the end of the sequence.
    #[default]
    Tokens,

    /// Cut at the last fragment boundary at or before `max_length`.
    ///
    /// Character spans are never split; rows may hold fewer real tokens.
    Fragments,
}

/// Options for [`encode_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// The row length; the longest encoded sequence when `None`.
    pub max_length: Option<usize>,

    /// Pad rows to `max_length` and produce an attention mask.
    pub padding: bool,

    /// How over-long sequences are cut.
    pub truncation: TruncationPolicy,

    /// Frame each sequence with BOS and EOS.
    pub add_special_tokens: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            padding: true,
            truncation: TruncationPolicy::Tokens,
            add_special_tokens: true,
        }
    }
}

impl BatchOptions {
    /// Sets the row length.
    pub fn with_max_length<L>(
        self,
        max_length: L,
    ) -> Self
    where
        L: Into<Option<usize>>,
    {
        Self {
            max_length: max_length.into(),
            ..self
        }
    }

    /// Sets whether rows are padded and masked.
    pub fn with_padding(
        self,
        padding: bool,
    ) -> Self {
        Self { padding, ..self }
    }

    /// Sets the truncation policy.
    pub fn with_truncation(
        self,
        truncation: TruncationPolicy,
    ) -> Self {
        Self { truncation, ..self }
    }

    /// Sets whether sequences are framed by BOS and EOS.
    pub fn with_add_special_tokens(
        self,
        add_special_tokens: bool,
    ) -> Self {
        Self {
            add_special_tokens,
            ..self
        }
    }
}

/// A batch of encoded sequences.
///
/// When padded, `ids` and `attention_mask` are both `(batch_size, max_length)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEncoding<T: TokenType> {
    /// Token rows.
    pub ids: Vec<Vec<T>>,

    /// `1` for real tokens, `0` for padding; present only when padded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_mask: Option<Vec<Vec<u8>>>,
}

impl<T: TokenType> BatchEncoding<T> {
    /// Truncate, and optionally pad, already encoded sequences.
    ///
    /// ## Arguments
    /// * `sequences` - encoded sequences.
    /// * `vocab` - the vocabulary they were encoded with.
    /// * `options` - the batch options; `add_special_tokens` is not consulted.
    pub fn from_sequences(
        sequences: Vec<Vec<T>>,
        vocab: &HybridVocab<T>,
        options: &BatchOptions,
    ) -> Self {
        let max_length = options
            .max_length
            .unwrap_or_else(|| sequences.iter().map(Vec::len).max().unwrap_or(0));

        let mut ids = sequences;
        for row in ids.iter_mut() {
            let keep = truncated_len(row, max_length, options.truncation, vocab);
            row.truncate(keep);
        }

        if !options.padding {
            return Self {
                ids,
                attention_mask: None,
            };
        }

        let pad = vocab.special(SpecialToken::Pad);
        let mut mask = Vec::with_capacity(ids.len());
        for row in ids.iter_mut() {
            let mut row_mask = vec![1u8; row.len()];
            row_mask.resize(max_length, 0);
            row.resize(max_length, pad);
            mask.push(row_mask);
        }

        Self {
            ids,
            attention_mask: Some(mask),
        }
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The longest row length; for padded batches, every row's length.
    pub fn max_length(&self) -> usize {
        self.ids.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The number of real (unpadded) tokens in each row.
    pub fn real_lengths(&self) -> Vec<usize> {
        match &self.attention_mask {
            Some(mask) => mask
                .iter()
                .map(|row| row.iter().filter(|&&m| m == 1).count())
                .collect(),
            None => self.ids.iter().map(Vec::len).collect(),
        }
    }
}

/// The length `tokens` is cut to under `policy`.
pub fn truncated_len<T: TokenType>(
    tokens: &[T],
    max_length: usize,
    policy: TruncationPolicy,
    vocab: &HybridVocab<T>,
) -> usize {
    if tokens.len() <= max_length {
        return tokens.len();
    }
    match policy {
        TruncationPolicy::Tokens => max_length,
        TruncationPolicy::Fragments => {
            let char_start = vocab.special(SpecialToken::CharStart);
            let char_end = vocab.special(SpecialToken::CharEnd);

            let mut end = 0;
            while end < tokens.len() {
                let unit_end = if tokens[end] == char_start {
                    tokens[end + 1..]
                        .iter()
                        .position(|&t| t == char_end)
                        .map_or(tokens.len(), |offset| end + offset + 2)
                } else {
                    end + 1
                };
                if unit_end > max_length {
                    break;
                }
                end = unit_end;
            }
            end
        }
    }
}

/// Encode a batch of texts into a [`BatchEncoding`].
///
/// Sequences are encoded with `encoder` (in parallel, for a parallel encoder),
/// then truncated and padded per `options`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(encoder, texts)))]
pub fn encode_batch<T, E>(
    encoder: &E,
    texts: &[String],
    options: &BatchOptions,
) -> BatchEncoding<T>
where
    T: TokenType,
    E: TokenEncoder<T> + ?Sized,
{
    let sequences = encoder.encode_batch_with(texts, options.add_special_tokens);
    let batch = BatchEncoding::from_sequences(sequences, encoder.vocab(), options);
    log::debug!(
        "Encoded batch of {} rows, max length {}",
        batch.len(),
        batch.max_length()
    );
    batch
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{HybridEncoder, training::HybridVocabBuilderOptions};

    type T = u32;

    fn test_encoder() -> HybridEncoder<T> {
        // the=6 sat=7 .=8 cat=9 dog=10; chars ". a c d e g h o s t" from 11.
        let vocab = HybridVocabBuilderOptions::new(10)
            .build_from_samples(["the cat sat.", "the dog sat."])
            .unwrap();
        HybridEncoder::new(Arc::new(vocab))
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_truncation_policy_names() {
        assert_eq!(TruncationPolicy::Fragments.to_string(), "fragments");
        assert_eq!(
            "tokens".parse::<TruncationPolicy>().unwrap(),
            TruncationPolicy::Tokens
        );
    }

    #[test]
    fn test_padding_with_max_length() {
        let encoder = test_encoder();
        let batch = encode_batch(
            &encoder,
            &texts(&["the cat sat.", "dog"]),
            &BatchOptions::default().with_max_length(4),
        );

        assert_eq!(batch.ids, vec![vec![2, 6, 9, 7], vec![2, 10, 3, 0]]);
        assert_eq!(
            batch.attention_mask,
            Some(vec![vec![1, 1, 1, 1], vec![1, 1, 1, 0]])
        );
        assert_eq!(batch.real_lengths(), vec![4, 3]);
        assert_eq!(batch.max_length(), 4);
    }

    #[test]
    fn test_no_padding() {
        let encoder = test_encoder();
        let batch = encode_batch(
            &encoder,
            &texts(&["the cat sat.", "dog"]),
            &BatchOptions::default().with_max_length(5).with_padding(false),
        );

        assert_eq!(batch.ids, vec![vec![2, 6, 9, 7, 8], vec![2, 10, 3]]);
        assert_eq!(batch.attention_mask, None);
        assert_eq!(batch.real_lengths(), vec![5, 3]);
    }

    #[test]
    fn test_token_truncation_cuts_spans() {
        let encoder = test_encoder();
        // "toast" falls back to chars: [2, 4, t, o, a, s, t, 5, 3]
        let batch = encode_batch(
            &encoder,
            &texts(&["toast"]),
            &BatchOptions::default().with_max_length(4),
        );
        assert_eq!(batch.ids, vec![vec![2, 4, 20, 18]]);
    }

    #[test]
    fn test_fragment_truncation_keeps_spans() {
        let encoder = test_encoder();
        let options = BatchOptions::default()
            .with_max_length(6)
            .with_truncation(TruncationPolicy::Fragments);

        let batch = encode_batch(
            &encoder,
            &texts(&["the toast", "the cat sat.", "the cat sat. dog"]),
            &options,
        );
        assert_eq!(
            batch.ids,
            vec![
                vec![2, 6, 0, 0, 0, 0],
                vec![2, 6, 9, 7, 8, 3],
                vec![2, 6, 9, 7, 8, 10],
            ]
        );
        assert_eq!(batch.real_lengths(), vec![2, 6, 6]);
    }

    #[test]
    fn test_fragment_truncation_unterminated_input() {
        let encoder = test_encoder();
        let vocab = encoder.vocab();
        let tokens = [6, 4, 20, 18];
        assert_eq!(
            truncated_len(&tokens, 3, TruncationPolicy::Fragments, vocab),
            1
        );
        assert_eq!(
            truncated_len(&tokens, 3, TruncationPolicy::Tokens, vocab),
            3
        );
        assert_eq!(
            truncated_len(&tokens, 10, TruncationPolicy::Fragments, vocab),
            4
        );
    }

    #[test]
    fn test_inferred_max_length() {
        let encoder = test_encoder();
        let batch = encode_batch(
            &encoder,
            &texts(&["the", "", "the cat sat."]),
            &BatchOptions::default().with_add_special_tokens(false),
        );
        assert_eq!(batch.max_length(), 4);
        assert_eq!(
            batch.ids,
            vec![vec![6, 0, 0, 0], vec![0, 0, 0, 0], vec![6, 9, 7, 8]]
        );
        assert_eq!(batch.real_lengths(), vec![1, 0, 4]);
    }

    #[test]
    fn test_empty_batch() {
        let encoder = test_encoder();
        let batch = encode_batch(&encoder, &[], &BatchOptions::default());
        assert!(batch.is_empty());
        assert_eq!(batch.attention_mask, Some(vec![]));
    }

    #[test]
    fn test_serialize() {
        let encoder = test_encoder();
        let batch = encode_batch(
            &encoder,
            &texts(&["dog"]),
            &BatchOptions::default(),
        );
        assert_eq!(
            serde_json::to_string(&batch).unwrap(),
            r#"{"ids":[[2,10,3]],"attention_mask":[[1,1,1]]}"#
        );

        let unpadded = BatchEncoding::<T> {
            ids: vec![vec![2, 3]],
            attention_mask: None,
        };
        assert_eq!(serde_json::to_string(&unpadded).unwrap(), r#"{"ids":[[2,3]]}"#);
    }
}
