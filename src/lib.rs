//! # RawKV
//!
//! A single-node, column-family key-value storage core:
//! - A uniform storage contract (point reads, ordered scans, batched writes),
//!   scoped by named keyspaces (column families)
//! - A standalone backend adapting an embedded, durable, sorted engine
//! - A raw request layer translating get/put/delete/scan requests into
//!   operations against that contract
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     External RPC Layer                       │
//! │              (framing/transport out of scope)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Raw Request Handlers                      │
//! │              (Get / Put / Delete / Scan)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   Storage   │          │StorageReader │
//!   │   (Write)   │          │  (snapshot)  │
//!   └──────┬──────┘          └──────┬───────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌──────────────┐
//!              │  Embedded    │
//!              │ Engine (redb)│
//!              └──────────────┘
//! ```
//!
//! Readers hold a consistent point-in-time snapshot of the engine; writes
//! issued after a reader was acquired are never visible through it, and
//! writers never block on open readers.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod protocol;
pub mod server;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{KvError, Result};
pub use server::Server;
pub use storage::{CfIterator, Modify, StandaloneStorage, Storage, StorageReader};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RawKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
