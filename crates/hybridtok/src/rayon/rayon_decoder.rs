//! # Parallel Decoder

use std::marker::PhantomData;

use crate::{decoders::TokenDecoder, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.inner.decode(tokens)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> Vec<String> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.decode(tokens))
            .collect()
    }
}
