//! # `hybridtok` Hybrid Word/Character Tokenizer
//!
//! A reversible text to token-id codec with a bounded word vocabulary and a
//! character-level fallback for any word the vocabulary does not hold.
//!
//! See:
//! * [`training`] to build a [`vocab::HybridVocab`] from a corpus.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`batch`] to encode padded batches for a downstream model.
//! * [`vocab::io`] to save and load vocabularies.
//!
//! ## Identifier Space
//!
//! ```text
//! 0..6                   special tokens (PAD, UNK, BOS, EOS, CHAR_START, CHAR_END)
//! 6..|words|             learned words, most frequent first
//! |words|..|words|+|chars|  characters, offset by the word table size
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use hybridtok::{Tokenizer, TokenizerOptions, training::HybridVocabBuilderOptions};
//!
//! let corpus = ["the cat sat.", "the dog sat."];
//! let vocab = HybridVocabBuilderOptions::default()
//!     .with_max_word_vocab(10)
//!     .build_from_samples::<u32, _>(corpus)
//!     .unwrap();
//!
//! let tokenizer: Tokenizer<u32> = TokenizerOptions::default().build(vocab.into());
//! let tokens = tokenizer.try_encode("the cat sat.").unwrap();
//! assert_eq!(tokenizer.try_decode(&tokens).unwrap(), "the cat sat .");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batch;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batch::{BatchEncoding, BatchOptions, TruncationPolicy};
#[doc(inline)]
pub use decoders::{HybridDecoder, TokenDecoder, TokenKind};
#[doc(inline)]
pub use encoders::{HybridEncoder, TokenEncoder};
#[doc(inline)]
pub use errors::{HTResult, HybridTokError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{HybridVocab, SpecialToken};
