//! Request definitions
//!
//! Represents raw requests from the external RPC layer.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Opaque routing/session context carried by every request.
///
/// This core does not interpret it; it is threaded through to the storage
/// layer unexamined. A richer deployment may use it for distributed routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Region the request is routed to (unused by the standalone backend)
    pub region_id: u64,

    /// Routing term (unused by the standalone backend)
    pub term: u64,

    /// Optional peer tag of the originating client
    pub peer: Option<String>,
}

/// Get the value stored under a key in one column family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGetRequest {
    pub context: RequestContext,
    pub cf: String,
    pub key: Bytes,
}

/// Store a key-value pair in one column family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPutRequest {
    pub context: RequestContext,
    pub cf: String,
    pub key: Bytes,
    pub value: Bytes,
}

/// Remove a key from one column family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeleteRequest {
    pub context: RequestContext,
    pub cf: String,
    pub key: Bytes,
}

/// Scan up to `limit` pairs from one column family, ascending from the
/// first key >= `start_key`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScanRequest {
    pub context: RequestContext,
    pub cf: String,
    pub start_key: Bytes,
    pub limit: u32,
}
