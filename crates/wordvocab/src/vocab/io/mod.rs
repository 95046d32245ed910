//! # Vocabulary IO
//!
//! Vocabularies persist through the [`KeyValueStore`] port,
//! as the three string records described in [`vocab_records`].
//!
//! Two stores are provided:
//! * [`MemoryStore`] - a shared in-memory map.
//! * `FileStore` (feature ``store``) - a JSON file written atomically.
//!
//! ## Saving and Loading
//!
//! ```rust
//! use wordvocab::vocab::{
//!     WordVocab,
//!     io::{MemoryStore, read_vocab_records, write_vocab_records},
//! };
//!
//! let store = MemoryStore::new();
//! let vocab: WordVocab<u32> = WordVocab::from_ranked_words(["hello", "world"]).unwrap();
//! write_vocab_records(&store, &vocab).unwrap();
//!
//! let loaded: WordVocab<u32> = read_vocab_records(&store)
//!     .unwrap()
//!     .expect("records present")
//!     .to_vocab()
//!     .unwrap();
//! assert_eq!(loaded, vocab);
//! ```

mod kv_store;
mod memory_store;
pub mod vocab_records;

#[cfg(feature = "store")]
mod file_store;

#[doc(inline)]
pub use kv_store::KeyValueStore;
#[doc(inline)]
pub use memory_store::MemoryStore;
#[doc(inline)]
pub use vocab_records::{
    INDEX_TO_WORD_KEY,
    VOCAB_SIZE_KEY,
    VocabRecords,
    WORD_TO_INDEX_KEY,
    read_vocab_records,
    write_vocab_records,
};
