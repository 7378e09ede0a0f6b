//! Response definitions
//!
//! Represents responses shaped by the raw request handlers.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Response to a get request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGetResponse {
    /// The stored value; empty when `not_found` is set
    pub value: Bytes,

    /// Set when the key is absent from the column family
    pub not_found: bool,
}

impl RawGetResponse {
    /// Response for a key that is present
    pub fn found(value: Bytes) -> Self {
        Self {
            value,
            not_found: false,
        }
    }

    /// Response for an absent key
    pub fn not_found() -> Self {
        Self {
            value: Bytes::new(),
            not_found: true,
        }
    }
}

/// Empty success response to a put request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPutResponse;

/// Empty success response to a delete request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeleteResponse;

/// One key-value pair returned by a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: Bytes,
    pub value: Bytes,
}

impl KvPair {
    pub fn new(key: Bytes, value: Bytes) -> Self {
        Self { key, value }
    }
}

/// Response to a scan request
///
/// Pairs are in ascending key order; fewer than `limit` pairs is normal
/// termination, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScanResponse {
    pub kvs: Vec<KvPair>,
}
