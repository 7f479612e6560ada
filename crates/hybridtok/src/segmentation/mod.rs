//! # Text Segmentation
//!
//! Text is normalized ([`normalize`]) and then split into fragments
//! ([`segment`]): words, and punctuation characters standing alone.
//!
//! ```rust
//! use hybridtok::segmentation::{normalize, segment};
//!
//! let text = normalize("Hello, World!<|endoftext|>");
//! assert_eq!(text, "hello, world!<EOS>");
//! assert_eq!(segment(&text), vec!["hello", ",", "world", "!", "<EOS>"]);
//! ```

mod text_segmentor;

#[doc(inline)]
pub use text_segmentor::*;
