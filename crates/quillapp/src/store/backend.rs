use crate::error::Result;

/// Abstract interface for raw storage I/O, the sole I/O boundary of the
/// crate. This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::post_store::PostStore`] and the keyed tables handle the
/// "what".
///
/// All operations are synchronous string key/value accesses; callers treat a
/// completed `write` as durable. Values are opaque strings: most keys hold
/// JSON documents, the like counter holds a bare integer string.
pub trait KvBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key is absent. Absence is meaningful: it is
    /// what distinguishes a cold start from an explicitly emptied collection.
    /// Returns Err only on actual I/O errors.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never
    /// observe a partial document.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// List every stored key, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;
}
