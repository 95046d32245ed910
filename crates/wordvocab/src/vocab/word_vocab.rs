//! # Word Vocabulary

use strum::IntoEnumIterator;

use crate::{
    errors::{WVResult, WordVocabError},
    types::{TokenType, WVHashMap, hash_map_with_capacity},
    vocab::{
        special_tokens::{SPECIAL_TOKEN_COUNT, SpecialToken},
        validators::try_token,
    },
};

/// Bidirectional ``{ word <-> T }`` vocabulary.
///
/// Invariants:
/// * ids are dense: exactly `0..len()`.
/// * `word_for_token(token_for_word(w)) == w` for every word.
/// * the [`SpecialToken`]s occupy ids `0..4`, in order.
///
/// A vocabulary is never edited in place once built;
/// learning builds a new one which replaces the old wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    word_to_id: WVHashMap<String, T>,
    id_to_word: Vec<String>,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Create a vocabulary holding only the special tokens.
    pub fn new() -> Self {
        let mut vocab = Self {
            word_to_id: hash_map_with_capacity(SPECIAL_TOKEN_COUNT),
            id_to_word: Vec::with_capacity(SPECIAL_TOKEN_COUNT),
        };
        for special in SpecialToken::iter() {
            vocab.word_to_id.insert(special.as_str().to_string(), special.token());
            vocab.id_to_word.push(special.as_str().to_string());
        }
        vocab
    }

    /// Build a vocabulary from words in rank order.
    ///
    /// The special tokens take ids `0..4`; each word then takes the next free id.
    /// Words already present are skipped.
    ///
    /// ## Errors
    /// [`WordVocabError::VocabSizeOverflow`] if an id does not fit in `T`.
    pub fn from_ranked_words<I, S>(words: I) -> WVResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for word in words {
            vocab.push_word(word.as_ref())?;
        }
        Ok(vocab)
    }

    /// Build a vocabulary from both lookup directions, checking that they agree.
    ///
    /// ## Errors
    /// [`WordVocabError::VocabConflict`] if the maps disagree, the ids are not dense,
    /// or the special tokens are missing from `0..4`.
    pub fn from_parts(
        word_to_id: WVHashMap<String, T>,
        id_to_word: Vec<String>,
    ) -> WVResult<Self> {
        let vocab = Self {
            word_to_id,
            id_to_word,
        };
        vocab.validate()?;
        Ok(vocab)
    }

    fn push_word(
        &mut self,
        word: &str,
    ) -> WVResult<Option<T>> {
        if self.word_to_id.contains_key(word) {
            return Ok(None);
        }
        let token = try_token::<T>(self.id_to_word.len())?;
        self.word_to_id.insert(word.to_string(), token);
        self.id_to_word.push(word.to_string());
        Ok(Some(token))
    }

    /// Check the bidirectional invariants.
    pub fn validate(&self) -> WVResult<()> {
        if self.word_to_id.len() != self.id_to_word.len() {
            return Err(WordVocabError::VocabConflict(format!(
                "word map has {} entries, id list has {}",
                self.word_to_id.len(),
                self.id_to_word.len()
            )));
        }

        for (word, token) in &self.word_to_id {
            match token.to_usize().and_then(|idx| self.id_to_word.get(idx)) {
                Some(w) if w == word => (),
                Some(w) => {
                    return Err(WordVocabError::VocabConflict(format!(
                        "word {word:?} maps to {token}, but {token} maps to {w:?}"
                    )));
                }
                None => {
                    return Err(WordVocabError::VocabConflict(format!(
                        "word {word:?} maps to out of range id {token}"
                    )));
                }
            }
        }

        for special in SpecialToken::iter() {
            if self.id_to_word.get(special.index()).map(String::as_str) != Some(special.as_str()) {
                return Err(WordVocabError::VocabConflict(format!(
                    "special token {} is not at id {}",
                    special.as_str(),
                    special.index()
                )));
            }
        }

        Ok(())
    }

    /// The number of entries, special tokens included.
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Always false; the special tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }

    /// The id of `special`.
    pub fn special_token(
        &self,
        special: SpecialToken,
    ) -> T {
        special.token()
    }

    /// Look up the id of a word.
    pub fn token_for_word(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_to_id.get(word).copied()
    }

    /// Look up the word for an id.
    pub fn word_for_token(
        &self,
        token: T,
    ) -> Option<&str> {
        token
            .to_usize()
            .and_then(|idx| self.id_to_word.get(idx))
            .map(String::as_str)
    }

    /// The ``{ word -> T }`` direction.
    pub fn word_to_id(&self) -> &WVHashMap<String, T> {
        &self.word_to_id
    }

    /// The ``{ T -> word }`` direction; indexed by id.
    pub fn id_to_word(&self) -> &[String] {
        &self.id_to_word
    }

    /// Iterate ``(T, word)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.id_to_word
            .iter()
            .enumerate()
            .filter_map(|(idx, w)| T::from_usize(idx).map(|t| (t, w.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_only_specials() {
        let vocab: WordVocab<u32> = WordVocab::new();
        assert_eq!(vocab.len(), SPECIAL_TOKEN_COUNT);
        assert_eq!(vocab.id_to_word(), &["[PAD]", "[UNK]", "[SOS]", "[EOS]"]);
        assert_eq!(vocab.token_for_word("[EOS]"), Some(3));
        assert_eq!(vocab.special_token(SpecialToken::Unk), 1);
        vocab.validate().unwrap();
    }

    #[test]
    fn test_from_ranked_words() {
        let vocab: WordVocab<u32> = WordVocab::from_ranked_words(["the", "fox", "the", "[PAD]"]).unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.token_for_word("the"), Some(4));
        assert_eq!(vocab.token_for_word("fox"), Some(5));
        assert_eq!(vocab.word_for_token(5), Some("fox"));
        assert_eq!(vocab.word_for_token(6), None);
        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![
                (0, "[PAD]"),
                (1, "[UNK]"),
                (2, "[SOS]"),
                (3, "[EOS]"),
                (4, "the"),
                (5, "fox")
            ]
        );
        vocab.validate().unwrap();
    }

    #[test]
    fn test_overflow() {
        let words: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        assert!(matches!(
            WordVocab::<u8>::from_ranked_words(&words),
            Err(WordVocabError::VocabSizeOverflow { size: 257 })
        ));
        assert_eq!(WordVocab::<u16>::from_ranked_words(&words).unwrap().len(), 304);
    }

    #[test]
    fn test_from_parts_rejects_conflicts() {
        let good: WordVocab<u32> = WordVocab::from_ranked_words(["a", "b"]).unwrap();
        let rebuilt =
            WordVocab::from_parts(good.word_to_id().clone(), good.id_to_word().to_vec()).unwrap();
        assert_eq!(rebuilt, good);

        // swapped ids.
        let mut word_to_id = good.word_to_id().clone();
        word_to_id.insert("a".to_string(), 5);
        word_to_id.insert("b".to_string(), 4);
        assert!(WordVocab::from_parts(word_to_id, good.id_to_word().to_vec()).is_err());

        // size mismatch.
        let mut id_to_word = good.id_to_word().to_vec();
        id_to_word.push("c".to_string());
        assert!(WordVocab::from_parts(good.word_to_id().clone(), id_to_word).is_err());

        // missing specials.
        let word_to_id: WVHashMap<String, u32> =
            [("a".to_string(), 0), ("b".to_string(), 1)].into_iter().collect();
        assert!(WordVocab::from_parts(word_to_id, vec!["a".to_string(), "b".to_string()]).is_err());
    }
}
