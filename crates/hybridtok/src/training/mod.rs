//! # Vocabulary Building
//!
//! A [`HybridVocabBuilder`] accumulates fragment frequencies and the set of
//! observed characters over a corpus, then freezes them into an immutable
//! [`crate::vocab::HybridVocab`].
//!
//! Building is single-pass and synchronous; callers wanting progress or
//! cancellation feed the corpus in chunks through
//! [`HybridVocabBuilder::update_from_samples`].
//!
//! ```rust
//! use hybridtok::{HybridVocab, training::HybridVocabBuilderOptions};
//!
//! let mut builder = HybridVocabBuilderOptions::new(6400).init::<u64>();
//! for chunk in [["Once upon a time."], ["The end.<|endoftext|>"]] {
//!     builder.update_from_samples(chunk);
//! }
//!
//! let vocab: HybridVocab<u32> = builder.build().unwrap();
//! assert_eq!(vocab.word_token("."), Some(6));
//! ```

mod fragment_counter;
mod training_types;
mod vocab_builder;

#[doc(inline)]
pub use fragment_counter::*;
#[doc(inline)]
pub use training_types::*;
#[doc(inline)]
pub use vocab_builder::*;
