//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`HybridDecoder`] - the [`TokenDecoder`] for [`crate::HybridVocab`]s.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any [`TokenDecoder`].
//!
//! Decoding first classifies the token stream into [`TokenKind`]s, then
//! renders each kind to a fragment and joins fragments with single spaces.
//! The text is fragment-faithful, not spacing-faithful: `"sat."` decodes as `"sat ."`.

mod hybrid_decoder;
mod token_decoder;
mod token_kind;

#[doc(inline)]
pub use hybrid_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
#[doc(inline)]
pub use token_kind::*;
