use std::sync::Arc;

use crate::{
    HybridDecoder,
    HybridEncoder,
    TokenDecoder,
    TokenEncoder,
    TokenType,
    Tokenizer,
    vocab::HybridVocab,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Should batches be encoded and decoded in parallel?
    pub parallel: bool,
}

impl TokenizerOptions {
    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations;
    /// it has no effect without the "rayon" feature.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`TokenEncoder`] for the given vocab.
    pub fn build_encoder<T: TokenType>(
        &self,
        vocab: Arc<HybridVocab<T>>,
    ) -> Arc<dyn TokenEncoder<T>> {
        let enc = HybridEncoder::new(vocab);

        #[cfg(feature = "rayon")]
        if self.parallel() {
            return Arc::new(crate::rayon::ParallelRayonEncoder::new(enc));
        }

        Arc::new(enc)
    }

    /// Build a [`TokenDecoder`] for the given vocab.
    pub fn build_decoder<T: TokenType>(
        &self,
        vocab: Arc<HybridVocab<T>>,
    ) -> Arc<dyn TokenDecoder<T>> {
        let dec = HybridDecoder::new(vocab);

        #[cfg(feature = "rayon")]
        if self.parallel() {
            return Arc::new(crate::rayon::ParallelRayonDecoder::new(dec));
        }

        Arc::new(dec)
    }

    /// Build a [`Tokenizer`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<HybridVocab<T>>,
    ) -> Tokenizer<T> {
        Tokenizer::new(
            vocab.clone(),
            self.build_encoder(vocab.clone()),
            self.build_decoder(vocab),
        )
    }
}
