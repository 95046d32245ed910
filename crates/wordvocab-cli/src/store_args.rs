use std::sync::Arc;

use wordvocab::{
    Tokenizer,
    store::{FileStore, FileStoreOptions},
};

/// Vocabulary store argument group.
#[derive(clap::Args, Debug)]
pub struct StoreArgs {
    /// Store directory; overrides ``WORDVOCAB_DATA_DIR`` and the platform default.
    #[arg(long, default_value = None)]
    store_dir: Option<String>,
}

impl StoreArgs {
    /// Open the file store.
    pub fn open_store(&self) -> Result<FileStore, Box<dyn std::error::Error>> {
        let options = FileStoreOptions::default().with_data_dir(self.store_dir.as_ref());
        Ok(FileStore::new(options)?)
    }

    /// Open a tokenizer over the file store, without loading.
    pub fn open_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let store = self.open_store()?;
        log::debug!("vocabulary store: {}", store.path().display());

        Ok(Tokenizer::new(Arc::new(store)))
    }

    /// Open a tokenizer and load the saved vocabulary.
    ///
    /// Falls back to the special-tokens-only vocabulary, with a warning.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let mut tokenizer = self.open_tokenizer()?;
        if !tokenizer.load_vocab() {
            log::warn!("no usable saved vocabulary; using special tokens only");
        }
        Ok(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use wordvocab::{TokenEncoder, VocabSource};

    use super::*;

    #[test]
    fn test_learned_vocab_is_reloaded() {
        let dir = tempdir::TempDir::new("wordvocab_cli_store").unwrap();
        let args = StoreArgs {
            store_dir: Some(dir.path().to_string_lossy().to_string()),
        };

        let fresh = args.load_tokenizer().unwrap();
        assert_eq!(fresh.vocab_size(), 4);

        let mut tokenizer = args.open_tokenizer().unwrap();
        tokenizer.learn_vocab("red green green").unwrap();

        let reloaded = args.load_tokenizer().unwrap();
        assert_eq!(reloaded.vocab(), tokenizer.vocab());
        assert_eq!(reloaded.encode("green red blue", false), vec![4, 5, 1]);
        assert!(args.open_store().unwrap().path().starts_with(dir.path()));
    }
}
