//! Server Module
//!
//! The raw request handlers: stateless translation of external
//! get/put/delete/scan requests into operations against the storage
//! contract.
//!
//! ## Failure semantics
//! Any error propagated from the storage layer aborts the handler and
//! surfaces verbatim to the caller; no retries happen at this layer, and a
//! failing handler never returns a partial payload alongside an error.
//! Readers and iterators are scoped to the handler body, so they are
//! released on every path, including error paths.

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::{
    KvPair, RawDeleteRequest, RawDeleteResponse, RawGetRequest, RawGetResponse, RawPutRequest,
    RawPutResponse, RawScanRequest, RawScanResponse,
};
use crate::storage::{CfIterator, Modify, Storage, StorageReader};

/// Raw request server over one storage handle.
///
/// Handlers share no mutable state beyond the storage handle they close
/// over; multiple requests may execute concurrently against the same
/// instance.
pub struct Server<S> {
    storage: S,
}

impl<S: Storage> Server<S> {
    /// Create a server over the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage handle
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the value stored under the request's cf/key.
    ///
    /// Absence is reported through the `not_found` flag, not an error.
    pub fn raw_get(&self, req: RawGetRequest) -> Result<RawGetResponse> {
        let reader = self.storage.reader(&req.context)?;
        let value = reader.get_cf(&req.cf, &req.key)?;
        reader.close();

        Ok(match value {
            Some(value) => RawGetResponse::found(value),
            None => RawGetResponse::not_found(),
        })
    }

    /// Store the request's key-value pair in its cf.
    pub fn raw_put(&self, req: RawPutRequest) -> Result<RawPutResponse> {
        let modify = Modify::put(req.cf, req.key, req.value);
        self.storage.write(&req.context, vec![modify])?;
        Ok(RawPutResponse)
    }

    /// Remove the request's key from its cf.
    pub fn raw_delete(&self, req: RawDeleteRequest) -> Result<RawDeleteResponse> {
        let modify = Modify::delete(req.cf, req.key);
        self.storage.write(&req.context, vec![modify])?;
        Ok(RawDeleteResponse)
    }

    /// Scan ascending from the first key >= `start_key`, collecting up to
    /// `limit` pairs.
    ///
    /// Fewer than `limit` pairs is normal termination. Each returned pair
    /// is an independent copy, never aliased to engine-internal buffers.
    pub fn raw_scan(&self, req: RawScanRequest) -> Result<RawScanResponse> {
        let reader = self.storage.reader(&req.context)?;
        let mut iter = reader.iter_cf(&req.cf)?;
        iter.seek(&req.start_key)?;

        let mut kvs = Vec::new();
        while kvs.len() < req.limit as usize {
            let Some((key, value)) = iter.current() else {
                break;
            };
            kvs.push(KvPair::new(
                Bytes::copy_from_slice(key),
                Bytes::copy_from_slice(value),
            ));
            iter.next()?;
        }

        tracing::debug!("raw_scan cf={} returned {} pairs", req.cf, kvs.len());

        drop(iter);
        reader.close();
        Ok(RawScanResponse { kvs })
    }
}
