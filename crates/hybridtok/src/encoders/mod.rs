//! # Token Encoders
//!
//! Encoder clients should use:
//!
//! * [`HybridEncoder`] - the word-or-characters [`TokenEncoder`].
//! * `ParallelRayonEncoder` - a batch parallelism wrapper around any [`TokenEncoder`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hybridtok::{HybridEncoder, SpecialToken, TokenEncoder, training::HybridVocabBuilderOptions};
//!
//! let vocab = HybridVocabBuilderOptions::new(10)
//!     .build_from_samples::<u32, _>(["the cat sat.", "the dog sat."])
//!     .unwrap();
//! let encoder = HybridEncoder::new(Arc::new(vocab));
//!
//! let tokens = encoder.encode("the zzz.");
//! assert_eq!(tokens[2], encoder.vocab().special(SpecialToken::CharStart));
//! ```

mod hybrid_encoder;
mod token_encoder;

#[doc(inline)]
pub use hybrid_encoder::*;
#[doc(inline)]
pub use token_encoder::*;
