//! Standalone storage backend
//!
//! A [`Storage`] implementation for a single-node instance. It does not
//! coordinate with other nodes; all data lives in one local embedded engine
//! handle (redb), consumed as a black box.
//!
//! ## Mapping onto the engine
//! - Column family -> engine table named by the cf string
//! - Reader        -> engine read transaction (point-in-time snapshot)
//! - One `Modify`  -> one engine write transaction (apply + commit)
//!
//! A put into a column family that does not exist yet creates it; reads,
//! deletes and scans against a missing column family see absence/emptiness,
//! never an error.

use std::path::Path;

use bytes::Bytes;
use parking_lot::RwLock;
use redb::{Database, Range, ReadOnlyTable, ReadTransaction, TableDefinition, TableError};

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::RequestContext;

use super::{CfIterator, Modify, Storage, StorageReader};

/// Engine table definition for one column family.
fn cf_table(cf: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(cf)
}

/// The standalone backend, owning one embedded engine handle for the
/// lifetime of the process.
///
/// ## Concurrency
/// - The handle sits behind a `RwLock<Option<..>>` so `stop` can take it
///   out and release it; readers and writers share the read side.
/// - Snapshot isolation and writer/reader independence come from the
///   engine's MVCC; this layer adds no locking of its own around
///   individual operations.
pub struct StandaloneStorage {
    /// Instance configuration
    config: Config,

    /// The engine handle; `None` once stopped
    db: RwLock<Option<Database>>,
}

impl StandaloneStorage {
    const ENGINE_FILENAME: &'static str = "kv.redb";

    /// Open or create the engine under `config.data_dir`.
    pub fn open(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let engine_path = config.data_dir.join(Self::ENGINE_FILENAME);

        let mut builder = Database::builder();
        if let Some(cache_size) = config.cache_size_bytes {
            builder.set_cache_size(cache_size);
        }
        let db = builder.create(&engine_path)?;

        tracing::info!("engine opened at {}", engine_path.display());

        Ok(Self {
            config,
            db: RwLock::new(Some(db)),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_dir = path.to_path_buf();
        Self::open(config)
    }

    /// Create a backend over an in-memory engine, for tests.
    ///
    /// All data is lost when the backend is dropped.
    pub fn in_memory() -> Result<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())?;

        Ok(Self {
            config: Config::default(),
            db: RwLock::new(Some(db)),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn put_cf(db: &Database, cf: &str, key: &[u8], value: &[u8]) -> Result<()> {
        let tx = db.begin_write()?;
        {
            let mut table = tx.open_table(cf_table(cf))?;
            table.insert(key, value)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn delete_cf(db: &Database, cf: &str, key: &[u8]) -> Result<()> {
        let tx = db.begin_write()?;
        {
            // open_table creates the cf if missing; deleting an absent key
            // from it is a no-op either way
            let mut table = tx.open_table(cf_table(cf))?;
            table.remove(key)?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl Storage for StandaloneStorage {
    type Reader<'a>
        = StandaloneReader
    where
        Self: 'a;

    fn start(&self) -> Result<()> {
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        // Idempotent: a second stop finds the handle already gone
        if self.db.write().take().is_some() {
            tracing::info!("storage stopped, engine handle released");
        }
        Ok(())
    }

    fn reader(&self, _ctx: &RequestContext) -> Result<Self::Reader<'_>> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(KvError::Stopped)?;
        let tx = db.begin_read()?;
        Ok(StandaloneReader { tx })
    }

    fn write(&self, _ctx: &RequestContext, batch: Vec<Modify>) -> Result<()> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(KvError::Stopped)?;

        // Each Modify is an independent engine transaction, applied in
        // list order. The first failure aborts the remainder; prior
        // operations stay applied.
        for modify in batch {
            match modify {
                Modify::Put { cf, key, value } => Self::put_cf(db, &cf, &key, &value)?,
                Modify::Delete { cf, key } => Self::delete_cf(db, &cf, &key)?,
            }
        }
        Ok(())
    }
}

/// A snapshot view of the standalone backend.
///
/// Owns one engine read transaction; writes committed after this reader was
/// acquired are not visible through it. Dropping the reader releases the
/// transaction.
pub struct StandaloneReader {
    tx: ReadTransaction,
}

impl StorageReader for StandaloneReader {
    type Iter<'a>
        = StandaloneIter
    where
        Self: 'a;

    fn get_cf(&self, cf: &str, key: &[u8]) -> Result<Option<Bytes>> {
        match self.tx.open_table(cf_table(cf)) {
            Ok(table) => {
                let value = table.get(key)?;
                Ok(value.map(|guard| Bytes::copy_from_slice(guard.value())))
            }
            // A cf never written to holds no keys
            Err(TableError::TableDoesNotExist(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn iter_cf(&self, cf: &str) -> Result<Self::Iter<'_>> {
        match self.tx.open_table(cf_table(cf)) {
            Ok(table) => Ok(StandaloneIter::new(Some(table))),
            Err(TableError::TableDoesNotExist(_)) => Ok(StandaloneIter::new(None)),
            Err(e) => Err(e.into()),
        }
    }

    fn close(self) {
        // Dropping the read transaction releases the snapshot
    }
}

/// Ascending iterator over one column family of the standalone backend.
///
/// Each advance copies the engine's key/value guards into owned buffers, so
/// the views handed out by `current` stay stable until the next advance.
pub struct StandaloneIter {
    /// `None` when the column family does not exist; iterates as empty
    table: Option<ReadOnlyTable<&'static [u8], &'static [u8]>>,
    range: Option<Range<'static, &'static [u8], &'static [u8]>>,
    current: Option<(Vec<u8>, Vec<u8>)>,
}

impl StandaloneIter {
    fn new(table: Option<ReadOnlyTable<&'static [u8], &'static [u8]>>) -> Self {
        Self {
            table,
            range: None,
            current: None,
        }
    }

    fn advance(&mut self) -> Result<()> {
        match self.range.as_mut().and_then(Iterator::next) {
            Some(Ok((key, value))) => {
                self.current = Some((key.value().to_vec(), value.value().to_vec()));
                Ok(())
            }
            Some(Err(e)) => {
                self.current = None;
                Err(e.into())
            }
            None => {
                self.current = None;
                Ok(())
            }
        }
    }
}

impl CfIterator for StandaloneIter {
    fn seek(&mut self, start: &[u8]) -> Result<()> {
        let Some(table) = self.table.as_ref() else {
            self.current = None;
            return Ok(());
        };
        self.range = Some(table.range(start..)?);
        self.advance()
    }

    fn next(&mut self) -> Result<()> {
        if self.range.is_none() {
            // Never positioned; stays invalid
            return Ok(());
        }
        self.advance()
    }

    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.current
            .as_ref()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }
}
