//! Modify definitions
//!
//! One write intent against the engine.

use bytes::Bytes;

/// A single write intent, consumed exactly once by [`Storage::write`].
///
/// The variant set is closed: applying code matches exhaustively, so an
/// unhandled write intent is a compile error rather than a silent no-op.
///
/// [`Storage::write`]: super::Storage::write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modify {
    /// Set `key` in column family `cf` to `value`
    Put { cf: String, key: Bytes, value: Bytes },

    /// Remove `key` from column family `cf`
    Delete { cf: String, key: Bytes },
}

impl Modify {
    /// Build a put intent
    pub fn put(cf: impl Into<String>, key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Modify::Put {
            cf: cf.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a delete intent
    pub fn delete(cf: impl Into<String>, key: impl Into<Bytes>) -> Self {
        Modify::Delete {
            cf: cf.into(),
            key: key.into(),
        }
    }

    /// The column family this intent targets
    pub fn cf(&self) -> &str {
        match self {
            Modify::Put { cf, .. } | Modify::Delete { cf, .. } => cf,
        }
    }

    /// The key this intent targets
    pub fn key(&self) -> &[u8] {
        match self {
            Modify::Put { key, .. } | Modify::Delete { key, .. } => key,
        }
    }
}
