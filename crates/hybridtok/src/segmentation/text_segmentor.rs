//! # Text Segmentor

use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::SpecialToken;

/// The end-of-document marker found in raw corpora.
///
/// Normalization rewrites it to the [`SpecialToken::Eos`] placeholder.
pub const END_OF_TEXT_MARKER: &str = "<|endoftext|>";

/// The punctuation class; each member always becomes its own fragment.
pub const PUNCTUATION_PATTERN: &str = r#"[.,!?;:"'\-()\[\]{}]"#;

/// Characters which never enter the character vocabulary.
pub const SKIPPED_CHARS: [char; 3] = [' ', '\n', '\t'];

/// Lowercase + marker replacement + punctuation splitting.
#[derive(Debug, Clone)]
pub struct TextSegmentor {
    punct_re: Regex,
}

impl Default for TextSegmentor {
    fn default() -> Self {
        Self::from_pattern(PUNCTUATION_PATTERN).expect("punctuation pattern is valid")
    }
}

impl TextSegmentor {
    /// Build a segmentor isolating the characters matched by `pattern`.
    ///
    /// ## Arguments
    /// * `pattern` - a regex matching single punctuation characters.
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            punct_re: Regex::new(pattern)?,
        })
    }

    /// Lowercase `text` and replace every end-of-document marker with the EOS placeholder.
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        text.to_lowercase()
            .replace(END_OF_TEXT_MARKER, SpecialToken::Eos.as_str())
    }

    /// Split normalized text into fragments.
    ///
    /// Punctuation is padded with spaces; the result is split on whitespace runs.
    /// Every fragment is non-empty and order is preserved.
    pub fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.punct_re
            .replace_all(text, " $0 ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// [`normalize`](Self::normalize) then [`segment`](Self::segment).
    pub fn fragments(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.segment(&self.normalize(text))
    }

    /// Iterate the characters of normalized text which belong in a character vocabulary.
    pub fn vocab_chars(text: &str) -> impl Iterator<Item = char> + '_ {
        text.chars().filter(|c| !SKIPPED_CHARS.contains(c))
    }
}

static DEFAULT_SEGMENTOR: LazyLock<TextSegmentor> = LazyLock::new(TextSegmentor::default);

/// The shared default [`TextSegmentor`].
pub fn default_segmentor() -> &'static TextSegmentor {
    &DEFAULT_SEGMENTOR
}

/// Normalize text with the default segmentor.
///
/// See [`TextSegmentor::normalize`].
pub fn normalize(text: &str) -> String {
    DEFAULT_SEGMENTOR.normalize(text)
}

/// Segment text with the default segmentor.
///
/// See [`TextSegmentor::segment`].
pub fn segment(text: &str) -> Vec<String> {
    DEFAULT_SEGMENTOR.segment(text)
}
