//! # Fragment Counter

use std::collections::BTreeSet;

use crate::{
    segmentation::TextSegmentor,
    training::CountType,
    types::HTHashMap,
};

/// The count of one fragment, and when it was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentCount<C: CountType> {
    /// Occurrences across the corpus.
    pub count: C,

    /// Rank of first occurrence across the corpus; breaks frequency ties.
    pub first_seen: usize,
}

/// Fragment frequency and character set accumulator.
#[derive(Debug, Clone)]
pub struct FragmentCounter<C: CountType = u64> {
    /// The segmentor used for every sample.
    pub segmentor: TextSegmentor,

    counts: HTHashMap<String, FragmentCount<C>>,
    chars: BTreeSet<char>,
    samples: usize,
}

impl<C: CountType> Default for FragmentCounter<C> {
    fn default() -> Self {
        Self::new(TextSegmentor::default())
    }
}

impl<C: CountType> FragmentCounter<C> {
    /// Create a new counter.
    pub fn new(segmentor: TextSegmentor) -> Self {
        Self {
            segmentor,
            counts: HTHashMap::default(),
            chars: BTreeSet::new(),
            samples: 0,
        }
    }

    /// The number of distinct fragments seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Has nothing been counted?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The number of samples consumed.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The count record for a fragment.
    pub fn get(
        &self,
        fragment: &str,
    ) -> Option<&FragmentCount<C>> {
        self.counts.get(fragment)
    }

    /// The distinct vocabulary characters seen, in code point order.
    pub fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// Update counts inplace from one sample.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let normalized = self.segmentor.normalize(text.as_ref());
        self.chars.extend(TextSegmentor::vocab_chars(&normalized));

        for fragment in self.segmentor.segment(&normalized) {
            let next = self.counts.len();
            self.counts
                .entry(fragment)
                .or_insert(FragmentCount {
                    count: C::zero(),
                    first_seen: next,
                })
                .count += C::one();
        }
        self.samples += 1;
    }

    /// Update counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Fragments by descending count; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, C)> {
        let mut ranked: Vec<(&str, &FragmentCount<C>)> = self
            .counts
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        ranked.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        ranked
            .into_iter()
            .map(|(fragment, fc)| (fragment, fc.count))
            .collect()
    }

    /// Release the counts and characters.
    pub fn release(self) -> (HTHashMap<String, FragmentCount<C>>, BTreeSet<char>) {
        (self.counts, self.chars)
    }
}
