//! Protocol Module
//!
//! Request and response records exchanged with the external RPC layer.
//!
//! Only the semantic contract lives here; wire framing belongs to the
//! transport that embeds this crate. Every record is serde-serializable so
//! a transport can pick its own encoding.
//!
//! | Operation | Input fields              | Output fields            |
//! |-----------|---------------------------|--------------------------|
//! | Get       | cf, key                   | value, not_found         |
//! | Put       | cf, key, value            | (empty success)          |
//! | Delete    | cf, key                   | (empty success)          |
//! | Scan      | cf, start_key, limit      | kvs (ascending, ≤ limit) |
//!
//! All requests additionally carry an opaque [`RequestContext`] passed
//! through unexamined to the storage layer.

mod request;
mod response;

pub use request::{
    RawDeleteRequest, RawGetRequest, RawPutRequest, RawScanRequest, RequestContext,
};
pub use response::{
    KvPair, RawDeleteResponse, RawGetResponse, RawPutResponse, RawScanResponse,
};
