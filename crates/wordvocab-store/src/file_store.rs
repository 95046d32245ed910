//! # File Store
//!
//! A key-value store kept as a single JSON object file:
//!
//! ```json
//! { "key": "value", ... }
//! ```
//!
//! Every write replaces the whole file by writing a sibling temp file
//! and renaming it over the target, so readers never observe a partial write.
//! The temp file name carries the process id; concurrent writers in
//! different processes never share one.

use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use parking_lot::Mutex;

use crate::{DEFAULT_STORE_FILE, WORDVOCAB_PATH_CONFIG};

/// Options for [`FileStore`].
#[derive(Clone, Default, Debug)]
pub struct FileStoreOptions {
    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional store file name; defaults to [`DEFAULT_STORE_FILE`].
    pub file_name: Option<String>,
}

impl FileStoreOptions {
    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the store file name.
    pub fn with_file_name<S: Into<String>>(
        mut self,
        file_name: Option<S>,
    ) -> Self {
        self.file_name = file_name.map(Into::into);
        self
    }
}

/// File-backed key-value store.
///
/// The file is created lazily on first write.
#[derive(Debug)]
pub struct FileStore {
    /// Path to the store file.
    path: PathBuf,

    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Construct a new [`FileStore`].
    ///
    /// Does not touch the filesystem.
    pub fn new(options: FileStoreOptions) -> anyhow::Result<Self> {
        let data_dir = WORDVOCAB_PATH_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let file_name = options
            .file_name
            .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());

        Ok(Self::at_path(data_dir.join(file_name)))
    }

    /// Construct a [`FileStore`] over an explicit file path.
    pub fn at_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value for `key`; `None` if absent.
    pub fn get(
        &self,
        key: &str,
    ) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    /// Write a single entry.
    pub fn set(
        &self,
        key: &str,
        value: &str,
    ) -> anyhow::Result<()> {
        self.set_all([(key, value)])
    }

    /// Write several entries in one atomic file replacement.
    pub fn set_all<'a, I>(
        &self,
        entries: I,
    ) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let _guard = self.lock.lock();
        let mut current = self.read_entries()?;
        current.extend(entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self.write_entries(&current)
    }

    /// Remove a key, returning its old value.
    pub fn remove(
        &self,
        key: &str,
    ) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock();
        let mut current = self.read_entries()?;
        let old = current.remove(key);
        if old.is_some() {
            self.write_entries(&current)?;
        }
        Ok(old)
    }

    fn read_entries(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read store file: {}", self.path.display()))?;

        serde_json::from_str(&data)
            .with_context(|| format!("malformed store file: {}", self.path.display()))
    }

    fn write_entries(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .context("store path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create store directory: {}", dir.display()))?;

        let tmp_path = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp_path)
                .with_context(|| format!("failed to create {}", tmp_path.display()))?;
            file.write_all(serde_json::to_string(entries)?.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "failed to move {} into place at {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        log::debug!(
            "wrote {} entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}
