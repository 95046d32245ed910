//! # Vocabulary Records
//!
//! A vocabulary is persisted as three string records:
//!
//! | Key                    | Content                                     |
//! | ---------------------- | ------------------------------------------- |
//! | `tokenizerWordToIndex` | JSON object, word to integer id             |
//! | `tokenizerIndexToWord` | JSON array of words, indexed by id          |
//! | `tokenizerVocabSize`   | total vocabulary size, as a decimal string  |

use serde_json::{Map, Value};

use crate::{
    errors::{WVResult, WordVocabError},
    types::{TokenType, WVHashMap, hash_map_with_capacity},
    vocab::{WordVocab, io::KeyValueStore},
};

/// Store key of the ``{ word -> id }`` record.
pub const WORD_TO_INDEX_KEY: &str = "tokenizerWordToIndex";

/// Store key of the ``[ word ]`` record.
pub const INDEX_TO_WORD_KEY: &str = "tokenizerIndexToWord";

/// Store key of the vocabulary size record.
pub const VOCAB_SIZE_KEY: &str = "tokenizerVocabSize";

/// The serialized form of a [`WordVocab`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRecords {
    /// JSON object mapping word to id.
    pub word_to_index: String,

    /// JSON array of words indexed by id.
    pub index_to_word: String,

    /// Vocabulary size as a decimal string.
    pub vocab_size: String,
}

fn malformed(
    key: &'static str,
    reason: impl ToString,
) -> WordVocabError {
    WordVocabError::MalformedRecord {
        key,
        reason: reason.to_string(),
    }
}

impl VocabRecords {
    /// Serialize a vocabulary.
    pub fn from_vocab<T: TokenType>(vocab: &WordVocab<T>) -> WVResult<Self> {
        let mut word_to_index = Map::new();
        for (token, word) in vocab.iter() {
            let id = token
                .to_u64()
                .ok_or(WordVocabError::VocabSizeOverflow { size: vocab.len() })?;
            word_to_index.insert(word.to_string(), Value::from(id));
        }

        Ok(Self {
            word_to_index: serde_json::to_string(&Value::Object(word_to_index))?,
            index_to_word: serde_json::to_string(vocab.id_to_word())?,
            vocab_size: vocab.len().to_string(),
        })
    }

    /// Parse and validate the records into a vocabulary.
    ///
    /// Ids must be JSON integers which fit in `T`; floats, strings and
    /// negative numbers are rejected rather than coerced.
    ///
    /// ## Errors
    /// * [`WordVocabError::MalformedRecord`] if a record does not parse.
    /// * [`WordVocabError::VocabConflict`] if the records disagree with each other.
    pub fn to_vocab<T: TokenType>(&self) -> WVResult<WordVocab<T>> {
        let word_to_id = parse_word_to_index::<T>(&self.word_to_index)?;

        let id_to_word: Vec<String> = serde_json::from_str(&self.index_to_word)
            .map_err(|e| malformed(INDEX_TO_WORD_KEY, e))?;

        let vocab_size: usize = self
            .vocab_size
            .trim()
            .parse()
            .map_err(|e| malformed(VOCAB_SIZE_KEY, e))?;

        if vocab_size != id_to_word.len() {
            return Err(WordVocabError::VocabConflict(format!(
                "vocab size record is {vocab_size}, but {} words are stored",
                id_to_word.len()
            )));
        }

        WordVocab::from_parts(word_to_id, id_to_word)
    }

    /// The records as ``(key, value)`` store entries.
    pub fn to_entries(&self) -> [(&'static str, String); 3] {
        [
            (WORD_TO_INDEX_KEY, self.word_to_index.clone()),
            (INDEX_TO_WORD_KEY, self.index_to_word.clone()),
            (VOCAB_SIZE_KEY, self.vocab_size.clone()),
        ]
    }
}

fn parse_word_to_index<T: TokenType>(data: &str) -> WVResult<WVHashMap<String, T>> {
    let value: Value = serde_json::from_str(data).map_err(|e| malformed(WORD_TO_INDEX_KEY, e))?;
    let Value::Object(object) = value else {
        return Err(malformed(WORD_TO_INDEX_KEY, "expected a JSON object"));
    };

    let mut word_to_id = hash_map_with_capacity(object.len());
    for (word, id) in object {
        let token = id
            .as_u64()
            .and_then(T::from_u64)
            .ok_or_else(|| malformed(WORD_TO_INDEX_KEY, format!("bad id {id} for word {word:?}")))?;
        word_to_id.insert(word, token);
    }
    Ok(word_to_id)
}

/// Write a vocabulary's records to a store.
pub fn write_vocab_records<T: TokenType>(
    store: &dyn KeyValueStore,
    vocab: &WordVocab<T>,
) -> WVResult<()> {
    let records = VocabRecords::from_vocab(vocab)?;
    store.set_all(&records.to_entries())
}

/// Read the vocabulary records from a store.
///
/// ## Returns
/// `Ok(None)` if any of the three keys is absent.
pub fn read_vocab_records(store: &dyn KeyValueStore) -> WVResult<Option<VocabRecords>> {
    let (Some(word_to_index), Some(index_to_word), Some(vocab_size)) = (
        store.get(WORD_TO_INDEX_KEY)?,
        store.get(INDEX_TO_WORD_KEY)?,
        store.get(VOCAB_SIZE_KEY)?,
    ) else {
        return Ok(None);
    };

    Ok(Some(VocabRecords {
        word_to_index,
        index_to_word,
        vocab_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::io::MemoryStore;

    fn sample_vocab() -> WordVocab<u32> {
        WordVocab::from_ranked_words(["the", "quick", "fox"]).unwrap()
    }

    #[test]
    fn test_record_format() {
        let records = VocabRecords::from_vocab(&sample_vocab()).unwrap();

        assert_eq!(records.vocab_size, "7");
        assert_eq!(
            records.index_to_word,
            r#"["[PAD]","[UNK]","[SOS]","[EOS]","the","quick","fox"]"#
        );

        let object: Value = serde_json::from_str(&records.word_to_index).unwrap();
        assert_eq!(object["[PAD]"], Value::from(0));
        assert_eq!(object["the"], Value::from(4));
        assert_eq!(object["fox"], Value::from(6));
        assert_eq!(object.as_object().unwrap().len(), 7);

        assert_eq!(records.to_vocab::<u32>().unwrap(), sample_vocab());
    }

    #[test]
    fn test_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(read_vocab_records(&store).unwrap(), None);

        write_vocab_records(&store, &sample_vocab()).unwrap();
        assert_eq!(store.len(), 3);

        let records = read_vocab_records(&store).unwrap().unwrap();
        assert_eq!(records.to_vocab::<u16>().unwrap().len(), 7);
    }

    #[test]
    fn test_partial_records_are_absent() {
        let store = MemoryStore::new();
        write_vocab_records(&store, &sample_vocab()).unwrap();
        store.remove(VOCAB_SIZE_KEY);
        assert_eq!(read_vocab_records(&store).unwrap(), None);
    }

    #[test]
    fn test_rejects_malformed() {
        let good = VocabRecords::from_vocab(&sample_vocab()).unwrap();

        let bad_json = VocabRecords {
            word_to_index: "{not json".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            bad_json.to_vocab::<u32>(),
            Err(WordVocabError::MalformedRecord {
                key: WORD_TO_INDEX_KEY,
                ..
            })
        ));

        let float_id = VocabRecords {
            word_to_index: good.word_to_index.replace(r#""the":4"#, r#""the":4.0"#),
            ..good.clone()
        };
        assert!(float_id.to_vocab::<u32>().is_err());

        let string_id = VocabRecords {
            word_to_index: good.word_to_index.replace(r#""the":4"#, r#""the":"4""#),
            ..good.clone()
        };
        assert!(string_id.to_vocab::<u32>().is_err());

        let not_array = VocabRecords {
            index_to_word: "{}".to_string(),
            ..good.clone()
        };
        assert!(not_array.to_vocab::<u32>().is_err());

        let bad_size = VocabRecords {
            vocab_size: "seven".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            bad_size.to_vocab::<u32>(),
            Err(WordVocabError::MalformedRecord {
                key: VOCAB_SIZE_KEY,
                ..
            })
        ));

        let wrong_size = VocabRecords {
            vocab_size: "8".to_string(),
            ..good.clone()
        };
        assert!(matches!(
            wrong_size.to_vocab::<u32>(),
            Err(WordVocabError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_rejects_ids_too_large_for_token_type() {
        let words: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        let vocab: WordVocab<u32> = WordVocab::from_ranked_words(&words).unwrap();
        let records = VocabRecords::from_vocab(&vocab).unwrap();

        assert!(records.to_vocab::<u8>().is_err());
        assert_eq!(records.to_vocab::<u16>().unwrap().len(), 304);
    }
}
