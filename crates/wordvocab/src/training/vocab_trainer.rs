//! # Vocab Trainer

use crate::{
    cleaning::TextCleaner,
    errors::WVResult,
    training::{WordCount, WordCounter, WordKey},
    types::TokenType,
    vocab::{SPECIAL_TOKEN_COUNT, WordVocab, validators::try_max_vocab_size},
};

/// Options for [`VocabTrainer`].
#[derive(Debug, Clone, Default)]
pub struct VocabTrainerOptions {
    /// Optional cap on the vocabulary size, special tokens included.
    ///
    /// When set, only the highest-ranked words are kept.
    pub max_vocab_size: Option<usize>,
}

impl VocabTrainerOptions {
    /// Sets the vocab size cap.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - The cap; must be >= 4 (room for the special tokens).
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: Option<usize>,
    ) -> Self {
        Self { max_vocab_size }
    }

    /// Initializes a [`VocabTrainer`] from these options.
    pub fn init<K, C>(self) -> VocabTrainer<K, C>
    where
        K: WordKey,
        C: WordCount,
    {
        VocabTrainer::new(self)
    }
}

/// Learns a [`WordVocab`] from word frequencies.
///
/// Samples are accumulated first; [`train`](Self::train) then builds the
/// whole vocabulary in one shot.
pub struct VocabTrainer<K, C>
where
    K: WordKey,
    C: WordCount,
{
    /// Trainer options.
    pub options: VocabTrainerOptions,

    /// The word counter.
    pub counter: WordCounter<K, C>,
}

impl<K, C> VocabTrainer<K, C>
where
    K: WordKey,
    C: WordCount,
{
    /// Create a new trainer.
    pub fn new(options: VocabTrainerOptions) -> Self {
        Self::with_cleaner(options, TextCleaner::default())
    }

    /// Create a new trainer with an explicit cleaner.
    pub fn with_cleaner(
        options: VocabTrainerOptions,
        cleaner: TextCleaner,
    ) -> Self {
        Self {
            options,
            counter: WordCounter::new(cleaner),
        }
    }

    /// Update word counts from a text sample.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.counter.update_from_text(text);
    }

    /// Update word counts from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.counter.update_from_samples(samples);
    }

    /// Build the vocabulary.
    ///
    /// The special tokens take ids `0..4`; the counted words follow
    /// in rank order: descending count, then ascending word.
    ///
    /// ## Errors
    /// * the `max_vocab_size` option is below 4, or too large for `T`.
    /// * the vocabulary does not fit in `T`.
    pub fn train<T: TokenType>(self) -> WVResult<WordVocab<T>> {
        let ranked = self.counter.ranked_words();
        let total = ranked.len();

        let limit = match self.options.max_vocab_size {
            Some(max) => try_max_vocab_size::<T>(max)? - SPECIAL_TOKEN_COUNT,
            None => total,
        };

        let vocab = WordVocab::from_ranked_words(ranked.iter().take(limit).map(|(k, _)| k.as_ref()))?;

        log::debug!(
            "trained vocab: {} entries from {} distinct words",
            vocab.len(),
            total
        );
        Ok(vocab)
    }
}
