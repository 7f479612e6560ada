//! # Parallel Encoder

use std::{marker::PhantomData, sync::Arc};

use crate::{
    encoders::TokenEncoder,
    segmentation::TextSegmentor,
    types::TokenType,
    vocab::HybridVocab,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn vocab(&self) -> &Arc<HybridVocab<T>> {
        self.inner.vocab()
    }

    fn segmentor(&self) -> &TextSegmentor {
        self.inner.segmentor()
    }

    fn encode_append_fragment(
        &self,
        fragment: &str,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append_fragment(fragment, tokens)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn encode_batch_with(
        &self,
        batch: &[String],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode_with(text, add_special_tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::HybridEncoder,
        training::HybridVocabBuilderOptions,
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_encoder() {
        type T = u16;

        let vocab: Arc<HybridVocab<T>> = HybridVocabBuilderOptions::new(10)
            .build_from_samples(["the cat sat.", "the dog sat."])
            .unwrap()
            .into();

        let encoder = HybridEncoder::new(vocab);
        check_is_send(&encoder);
        check_is_sync(&encoder);

        let parallel = ParallelRayonEncoder::new(encoder.clone());
        check_is_send(&parallel);
        check_is_sync(&parallel);

        let samples: Vec<String> = [
            "the cat sat.",
            "the toad sat!",
            "",
            "dogs, cats; and the zebra",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        for sample in &samples {
            assert_eq!(parallel.encode(sample), encoder.encode(sample));
        }
        assert_eq!(parallel.encode_batch(&samples), encoder.encode_batch(&samples));
        assert_eq!(
            parallel.encode_batch_with(&samples, false),
            encoder.encode_batch_with(&samples, false)
        );
    }
}
