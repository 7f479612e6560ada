use std::{path::Path, sync::Arc};

use crate::{
    BatchEncoding,
    BatchOptions,
    HTResult,
    HybridTokError,
    TokenDecoder,
    TokenEncoder,
    TokenType,
    TokenizerOptions,
    batch::encode_batch,
    vocab::{
        HybridVocab,
        io::{load_vocab_path, save_vocab_path},
    },
};

#[derive(Clone)]
struct Codec<T: TokenType> {
    vocab: Arc<HybridVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

/// Unified Tokenizer.
///
/// Combines:
///  * [`HybridVocab`],
///  * [`TokenEncoder`], and
///  * [`TokenDecoder`] wrappers.
///
/// A default `Tokenizer` has no vocabulary; every operation on it fails with
/// [`HybridTokError::VocabularyNotBuilt`] until it is replaced by a built or
/// loaded one.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    codec: Option<Codec<T>>,
}

impl<T: TokenType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self { codec: None }
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: Arc<HybridVocab<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            codec: Some(Codec {
                vocab,
                encoder,
                decoder,
            }),
        }
    }

    /// Create a tokenizer with default options.
    pub fn from_vocab(vocab: Arc<HybridVocab<T>>) -> Self {
        TokenizerOptions::default().build(vocab)
    }

    /// Load a tokenizer from a JSON vocabulary file.
    pub fn load_path<P: AsRef<Path>>(
        path: P,
        options: &TokenizerOptions,
    ) -> HTResult<Self> {
        let vocab = load_vocab_path(path)?;
        Ok(options.build(Arc::new(vocab)))
    }

    /// Save this tokenizer's vocabulary to a JSON file.
    pub fn save_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> HTResult<()> {
        save_vocab_path(self.vocab()?, path)
    }

    fn codec(&self) -> HTResult<&Codec<T>> {
        self.codec.as_ref().ok_or(HybridTokError::VocabularyNotBuilt)
    }

    /// Does this tokenizer hold a vocabulary?
    pub fn is_built(&self) -> bool {
        self.codec.is_some()
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> HTResult<&Arc<HybridVocab<T>>> {
        Ok(&self.codec()?.vocab)
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> HTResult<&Arc<dyn TokenEncoder<T>>> {
        Ok(&self.codec()?.encoder)
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> HTResult<&Arc<dyn TokenDecoder<T>>> {
        Ok(&self.codec()?.decoder)
    }

    /// The total id space size, `|words| + |chars|`.
    pub fn vocab_size(&self) -> HTResult<usize> {
        Ok(self.vocab()?.vocab_size())
    }

    /// Encode text framed by BOS and EOS.
    pub fn try_encode(
        &self,
        text: &str,
    ) -> HTResult<Vec<T>> {
        self.try_encode_with(text, true)
    }

    /// Encode text, optionally framed by BOS and EOS.
    pub fn try_encode_with(
        &self,
        text: &str,
        add_special_tokens: bool,
    ) -> HTResult<Vec<T>> {
        Ok(self.encoder()?.encode_with(text, add_special_tokens))
    }

    /// Decode tokens into text.
    pub fn try_decode(
        &self,
        tokens: &[T],
    ) -> HTResult<String> {
        Ok(self.decoder()?.decode(tokens))
    }

    /// Encode a batch of texts into a padded, masked [`BatchEncoding`].
    pub fn try_encode_batch(
        &self,
        texts: &[String],
        options: &BatchOptions,
    ) -> HTResult<BatchEncoding<T>> {
        Ok(encode_batch(self.encoder()?.as_ref(), texts, options))
    }

    /// Decode a batch of token sequences.
    pub fn try_decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> HTResult<Vec<String>> {
        Ok(self.decoder()?.decode_batch(batch))
    }
}
