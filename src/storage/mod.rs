//! Storage Module
//!
//! The uniform contract any storage backend must satisfy, and the
//! standalone backend implementing it over an embedded engine.
//!
//! ## Responsibilities
//! - Point reads and ordered scans against a point-in-time snapshot
//! - Batched writes applied in order against live engine state
//! - Keyspace (column family) scoping: byte-identical keys in different
//!   column families never collide
//!
//! ## Concurrency Model
//!
//! Readers own a consistent snapshot as of acquisition: writes issued after
//! a reader was acquired are never visible through it. Writers do not block
//! on open readers and readers do not block writers; no locking discipline
//! is imposed by this layer beyond what the engine does internally.

mod modify;
mod standalone;

pub use modify::Modify;
pub use standalone::{StandaloneIter, StandaloneReader, StandaloneStorage};

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::RequestContext;

/// Process-wide entry point to a storage backend.
pub trait Storage {
    /// The snapshot reader type for this backend.
    type Reader<'a>: StorageReader
    where
        Self: 'a;

    /// Lifecycle hook bracketing the start of use.
    fn start(&self) -> Result<()>;

    /// Lifecycle hook releasing the owned engine handle. After `stop`,
    /// every other operation fails with [`crate::KvError::Stopped`].
    fn stop(&self) -> Result<()>;

    /// Produce a snapshot view of the engine.
    ///
    /// Fails only if the engine cannot produce a read transaction
    /// (stopped or unavailable engine).
    fn reader(&self, ctx: &RequestContext) -> Result<Self::Reader<'_>>;

    /// Apply each modification against current engine state, in order.
    ///
    /// Not atomic as a whole: each [`Modify`] is an independent engine
    /// operation. If an intermediate operation fails, prior operations in
    /// the same call remain applied and the first failure is returned.
    /// Callers needing all-or-nothing semantics must issue single-Modify
    /// batches.
    fn write(&self, ctx: &RequestContext, batch: Vec<Modify>) -> Result<()>;
}

/// A consistent, read-only view of the engine as of the moment it was
/// acquired.
///
/// Readers are caller-owned scoped resources; consuming [`close`] or
/// dropping the reader releases the underlying engine snapshot, so release
/// happens on every exit path including error paths.
///
/// [`close`]: StorageReader::close
pub trait StorageReader {
    /// The iterator type for this reader.
    type Iter<'a>: CfIterator
    where
        Self: 'a;

    /// Return the value stored under `key` in column family `cf`.
    ///
    /// Absence is not an error: a missing key (or a column family never
    /// written to) yields `Ok(None)`. Any other engine failure propagates.
    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Bytes>>;

    /// Return a fresh ascending iterator over `cf`, backed by this
    /// reader's snapshot. A column family never written to iterates as
    /// empty.
    fn iter_cf(&self, cf: &str) -> Result<Self::Iter<'_>>;

    /// Release the snapshot. Consuming `self` makes double-release
    /// unrepresentable; dropping the reader is equivalent.
    fn close(self);
}

/// Ascending cursor over one column family within a reader's snapshot.
///
/// The views returned by [`current`] are valid only until the next
/// `seek`/`next` call or drop; consumers must copy eagerly. The backend may
/// reuse internal buffers across advances, so copying is mandatory for
/// correctness, not an optimization.
///
/// [`current`]: CfIterator::current
pub trait CfIterator {
    /// Position the cursor at the first key >= `start`.
    fn seek(&mut self, start: &[u8]) -> Result<()>;

    /// Advance to the next key. Advancing an exhausted or unpositioned
    /// cursor leaves it invalid.
    fn next(&mut self) -> Result<()>;

    /// The current key-value pair, or `None` when the cursor is invalid.
    fn current(&self) -> Option<(&[u8], &[u8])>;

    /// Whether the cursor is positioned on a pair.
    fn valid(&self) -> bool {
        self.current().is_some()
    }
}
