//! # Vocabulary
//!
//! A [`HybridVocab`] is the immutable snapshot every codec reads from. It holds:
//! * `specials` - a [`SpecialVocab`], the six reserved tokens at ids `0..6`,
//! * `words` - a [`WordVocab`] ``{ String <-> T }`` table, specials included,
//! * `chars` - a [`CharVocab`] ``{ char <-> T }`` table with its own zero-based ids.
//!
//! Character ids share the combined id space by being offset by the
//! word table size; see [`HybridVocab::char_offset`].
pub mod io;

mod char_vocab;
mod hybrid_vocab;
mod special_vocab;
mod word_vocab;

#[doc(inline)]
pub use char_vocab::CharVocab;
#[doc(inline)]
pub use hybrid_vocab::{HybridVocab, IdRegion};
#[doc(inline)]
pub use special_vocab::{SpecialToken, SpecialVocab, UNK_TEXT};
#[doc(inline)]
pub use word_vocab::WordVocab;
