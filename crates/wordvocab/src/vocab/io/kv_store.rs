//! # Key-Value Store Port

use crate::errors::WVResult;

/// A string key-value persistence backend.
///
/// Vocabulary persistence only needs ``get`` and ``set``;
/// backends which can write several keys at once should
/// override [`set_all`](Self::set_all) to make that write atomic.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`.
    ///
    /// ## Returns
    /// `Ok(None)` if the key is absent.
    fn get(
        &self,
        key: &str,
    ) -> WVResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> WVResult<()>;

    /// Write several entries.
    ///
    /// The default writes each entry in turn, and may leave a prefix
    /// of `entries` written on failure.
    fn set_all(
        &self,
        entries: &[(&str, String)],
    ) -> WVResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
