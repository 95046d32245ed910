//! # File Store Binding

use wordvocab_store::FileStore;

use crate::{
    errors::{WVResult, WordVocabError},
    vocab::io::KeyValueStore,
};

fn store_error<E: core::fmt::Display>(err: E) -> WordVocabError {
    WordVocabError::Store(format!("{err:#}"))
}

impl KeyValueStore for FileStore {
    fn get(
        &self,
        key: &str,
    ) -> WVResult<Option<String>> {
        FileStore::get(self, key).map_err(store_error)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> WVResult<()> {
        FileStore::set(self, key, value).map_err(store_error)
    }

    fn set_all(
        &self,
        entries: &[(&str, String)],
    ) -> WVResult<()> {
        FileStore::set_all(self, entries.iter().map(|(k, v)| (*k, v.as_str()))).map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use wordvocab_store::FileStoreOptions;

    use super::*;

    #[test]
    fn test_file_store_port() {
        let dir = tempdir::TempDir::new("file_store_port").unwrap();
        let store = FileStore::new(FileStoreOptions::default().with_data_dir(Some(dir.path()))).unwrap();
        let port: &dyn KeyValueStore = &store;

        assert_eq!(port.get("a").unwrap(), None);
        port.set("a", "1").unwrap();
        port.set_all(&[("b", "2".to_string()), ("c", "3".to_string())])
            .unwrap();

        assert_eq!(port.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(port.get("c").unwrap().as_deref(), Some("3"));
    }
}
