//! # Word Counter

use core::{cmp::Ordering, hash::Hash, ops::AddAssign};

use num_traits::PrimInt;

use crate::{
    cleaning::TextCleaner,
    types::{WVHashMap, hash_map_with_capacity},
};

/// A counter key built from a cleaned word; ranks by the word's text.
pub trait WordKey: for<'a> From<&'a str> + AsRef<str> + Clone + Eq + Hash + Ord {}

impl<K> WordKey for K where K: for<'a> From<&'a str> + AsRef<str> + Clone + Eq + Hash + Ord {}

/// An occurrence count.
pub trait WordCount: PrimInt + AddAssign + Default {}

impl<C> WordCount for C where C: PrimInt + AddAssign + Default {}

/// Counts cleaned words across text samples.
pub struct WordCounter<K, C>
where
    K: WordKey,
    C: WordCount,
{
    /// The text cleaner.
    pub cleaner: TextCleaner,

    /// The word counts.
    pub word_counts: WVHashMap<K, C>,
}

impl<K, C> Default for WordCounter<K, C>
where
    K: WordKey,
    C: WordCount,
{
    fn default() -> Self {
        Self::new(TextCleaner::default())
    }
}

impl<K, C> WordCounter<K, C>
where
    K: WordKey,
    C: WordCount,
{
    /// Create a new word counter.
    pub fn new(cleaner: TextCleaner) -> Self {
        Self {
            cleaner,
            word_counts: hash_map_with_capacity(1024),
        }
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WVHashMap<K, C> {
        self.word_counts
    }

    /// The number of distinct words seen.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Have no words been seen?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in self.cleaner.split_words(text.as_ref()) {
            let k: K = word.as_str().into();
            *self.word_counts.entry(k).or_default() += C::one();
        }
    }

    /// Update word counts inplace from a sample iterator.
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

    /// The distinct words with their counts, in rank order.
    ///
    /// Rank: descending count; ties broken by ascending word order.
    /// Distinct words never compare equal, so the order is total.
    pub fn ranked_words(&self) -> Vec<(K, C)> {
        let mut ranked: Vec<(K, C)> = self
            .word_counts
            .iter()
            .map(|(k, &c)| (k.clone(), c))
            .collect();
        ranked.sort_unstable_by(rank_order);
        ranked
    }
}

fn rank_order<K: Ord, C: Ord>(
    a: &(K, C),
    b: &(K, C),
) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;

    #[test]
    fn test_key_and_count_types() {
        fn count_all<K: WordKey, C: WordCount>(text: &str) -> usize {
            let mut counter: WordCounter<K, C> = WordCounter::default();
            counter.update_from_text(text);
            counter.ranked_words().len()
        }

        assert_eq!(count_all::<String, u8>("a b a"), 2);
        assert_eq!(count_all::<CompactString, u32>("a b a"), 2);
        assert_eq!(count_all::<String, usize>(""), 0);
    }

    #[test]
    fn test_counts() {
        let mut counter: WordCounter<String, u32> = WordCounter::default();
        assert!(counter.is_empty());

        counter.update_from_samples(["The cat. the DOG!", "a cat"]);
        assert_eq!(counter.len(), 4);
        assert_eq!(counter.word_counts.get("the"), Some(&2));
        assert_eq!(counter.word_counts.get("cat"), Some(&2));
        assert_eq!(counter.word_counts.get("dog"), Some(&1));

        let counts = counter.release();
        assert_eq!(counts.get("a"), Some(&1));
    }

    #[test]
    fn test_ranked_words() {
        let mut counter: WordCounter<CompactString, u64> = WordCounter::default();
        counter.update_from_text("b a c b a d b");

        let ranked: Vec<(String, u64)> = counter
            .ranked_words()
            .into_iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }
}
