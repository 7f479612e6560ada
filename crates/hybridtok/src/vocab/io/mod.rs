//! # Vocabulary IO
//!
//! Vocabularies persist as a pretty-printed UTF-8 JSON [`VocabDocument`]:
//!
//! ```json
//! {
//!   "word_to_id": { "<PAD>": 0, "the": 6, ... },
//!   "id_to_word": { "0": "<PAD>", "6": "the", ... },
//!   "char_to_id": { ".": 0, "a": 1, ... },
//!   "id_to_char": { "0": ".", "1": "a", ... },
//!   "vocab_size": 6400,
//!   "special_tokens": { "<PAD>": 0, ... }
//! }
//! ```
//!
//! ## Saving and Loading
//!
//! ```rust,no_run
//! use hybridtok::vocab::{HybridVocab, io::{load_vocab_path, save_vocab_path}};
//!
//! fn example(vocab: &HybridVocab<u32>) -> hybridtok::HTResult<HybridVocab<u32>> {
//!     save_vocab_path(vocab, "vocab.json")?;
//!     load_vocab_path("vocab.json")
//! }
//! ```

mod json_vocab;

#[doc(inline)]
pub use json_vocab::*;
