//! # Hybrid Vocab Builder

use crate::{
    errors::HTResult,
    segmentation::TextSegmentor,
    training::{CountType, FragmentCounter},
    types::TokenType,
    vocab::{CharVocab, HybridVocab, SpecialToken, WordVocab},
};

/// The default word cap.
pub const DEFAULT_MAX_WORD_VOCAB: usize = 6400;

/// Options for [`HybridVocabBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridVocabBuilderOptions {
    /// The number of top-ranked fragments considered for the word table.
    pub max_word_vocab: usize,
}

impl Default for HybridVocabBuilderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_VOCAB)
    }
}

impl HybridVocabBuilderOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_word_vocab` - The word cap.
    pub fn new(max_word_vocab: usize) -> Self {
        Self { max_word_vocab }
    }

    /// Sets the word cap.
    pub fn with_max_word_vocab(
        self,
        max_word_vocab: usize,
    ) -> Self {
        Self { max_word_vocab }
    }

    /// Initializes a [`HybridVocabBuilder`] from these options.
    pub fn init<C: CountType>(self) -> HybridVocabBuilder<C> {
        HybridVocabBuilder::new(self)
    }

    /// Build a vocabulary from an in-memory corpus in one call.
    ///
    /// ## Arguments
    /// * `samples` - the corpus documents.
    pub fn build_from_samples<T, I>(
        self,
        samples: I,
    ) -> HTResult<HybridVocab<T>>
    where
        T: TokenType,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = self.init::<u64>();
        builder.update_from_samples(samples);
        builder.build()
    }
}

/// Builder for [`HybridVocab`]s.
///
/// # Parameters
/// * `C` - the type used to store fragment counts.
#[derive(Debug, Clone)]
pub struct HybridVocabBuilder<C: CountType = u64> {
    /// Builder options.
    pub options: HybridVocabBuilderOptions,

    /// The fragment counter.
    pub counter: FragmentCounter<C>,
}

impl<C: CountType> HybridVocabBuilder<C> {
    /// Initializes a [`HybridVocabBuilder`].
    pub fn new(options: HybridVocabBuilderOptions) -> Self {
        Self {
            options,
            counter: FragmentCounter::new(TextSegmentor::default()),
        }
    }

    /// Update counts inplace from one document.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.counter.update_from_text(text);
    }

    /// Update counts inplace from a document iterator.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.counter.update_from_samples(samples);
    }

    /// Freeze the accumulated counts into a [`HybridVocab`].
    ///
    /// The top `max_word_vocab` fragments (by count, ties by first occurrence)
    /// follow the specials in the word table. A top fragment which is itself a
    /// special placeholder (`<EOS>` from an end-of-text marker) is skipped, and
    /// still uses up its slot. Characters are assigned in code point order.
    ///
    /// An empty corpus yields a vocabulary of only the specials.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build<T: TokenType>(self) -> HTResult<HybridVocab<T>> {
        let max_word_vocab = self.options.max_word_vocab;
        let ranked = self.counter.ranked();
        log::info!("Total unique words: {}", ranked.len());

        let mut words: Vec<String> = SpecialToken::ALL
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        for (fragment, _) in ranked.into_iter().take(max_word_vocab) {
            if let Some(special) = SpecialToken::from_text(fragment) {
                log::debug!("Skipping special fragment {special}");
                continue;
            }
            words.push(fragment.to_string());
        }
        log::info!("Word vocabulary size: {}", words.len());

        let chars = self.counter.chars().iter().copied().collect::<Vec<_>>();
        log::info!("Character vocabulary size: {}", chars.len());

        let vocab = HybridVocab::try_new(
            WordVocab::try_from_words(words)?,
            CharVocab::try_from_chars(chars)?,
            max_word_vocab,
        )?;
        log::info!("Total vocabulary size: {}", vocab.vocab_size());

        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HybridTokError;

    #[test]
    fn test_build_ranking() {
        let vocab: HybridVocab<u32> = HybridVocabBuilderOptions::new(10)
            .build_from_samples(["the cat sat.", "the dog sat."])
            .unwrap();

        let learned: Vec<&str> = vocab.words().words()[SpecialToken::COUNT..]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(learned, vec!["the", "sat", ".", "cat", "dog"]);
        assert_eq!(vocab.word_token("the"), Some(6));
        assert_eq!(vocab.word_token("dog"), Some(10));

        let chars: String = vocab.chars().chars().iter().collect();
        assert_eq!(chars, ".acdeghost");
        assert_eq!(vocab.char_offset(), 11);
    }

    #[test]
    fn test_build_cap() {
        let vocab: HybridVocab<u32> = HybridVocabBuilderOptions::new(2)
            .build_from_samples(["a a a b b c"])
            .unwrap();
        assert_eq!(vocab.learned_word_count(), 2);
        assert_eq!(vocab.word_token("c"), None);
        // capped words still contribute characters.
        assert!(vocab.char_token('c').is_some());
        assert_eq!(vocab.max_word_vocab(), 2);
    }

    #[test]
    fn test_build_never_pads() {
        let vocab: HybridVocab<u32> = HybridVocabBuilderOptions::default()
            .build_from_samples(["one two"])
            .unwrap();
        assert_eq!(vocab.word_count(), SpecialToken::COUNT + 2);
        assert_eq!(vocab.max_word_vocab(), DEFAULT_MAX_WORD_VOCAB);
    }

    #[test]
    fn test_build_empty_corpus() {
        let vocab: HybridVocab<u32> = HybridVocabBuilderOptions::default()
            .build_from_samples(Vec::<String>::new())
            .unwrap();
        assert_eq!(vocab.word_count(), SpecialToken::COUNT);
        assert_eq!(vocab.char_count(), 0);
        assert_eq!(vocab.vocab_size(), SpecialToken::COUNT);
    }

    #[test]
    fn test_build_skips_special_fragment() {
        let vocab: HybridVocab<u32> = HybridVocabBuilderOptions::new(3)
            .build_from_samples(["a. <|endoftext|> b. <|endoftext|> <|endoftext|>"])
            .unwrap();

        // "<EOS>" ranks first and burns a slot.
        assert_eq!(vocab.learned_word_count(), 2);
        assert_eq!(vocab.word_token("<EOS>"), Some(3));
        assert_eq!(vocab.word_token("."), Some(6));
        assert_eq!(vocab.word_token("a"), Some(7));
        assert_eq!(vocab.word_token("b"), None);
    }

    #[test]
    fn test_build_incremental() {
        let mut builder = HybridVocabBuilderOptions::new(10).init::<u32>();
        builder.update_from_text("x y");
        builder.update_from_samples(["y z"]);
        assert_eq!(builder.counter.samples(), 2);

        let vocab: HybridVocab<u16> = builder.build().unwrap();
        assert_eq!(vocab.word_token("y"), Some(6));
        assert_eq!(vocab.word_token("x"), Some(7));
        assert_eq!(vocab.word_token("z"), Some(8));
    }

    #[test]
    fn test_build_overflow() {
        let corpus: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        let err = HybridVocabBuilderOptions::new(400)
            .build_from_samples::<u8, _>(corpus)
            .unwrap_err();
        assert!(matches!(err, HybridTokError::VocabSizeOverflow { .. }));
    }
}
