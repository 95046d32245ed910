//! # wordvocab-store
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod file_store;
pub mod path_resolver;

pub use file_store::{FileStore, FileStoreOptions};

/// Environment variable key to override the default data directory.
pub const WORDVOCAB_DATA_DIR: &str = "WORDVOCAB_DATA_DIR";

/// Default store file name, inside the data directory.
pub const DEFAULT_STORE_FILE: &str = "vocab_store.json";

/// Default [`PathResolver`] for wordvocab.
pub const WORDVOCAB_PATH_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.wordvocab",
    organization: "",
    application: "wordvocab",
    data_env_vars: &[WORDVOCAB_DATA_DIR],
};
