//! Session persistence across reloads.
//!
//! The repository locator, the resolved repository, its file tree and the
//! panel weights are written to a single record after each relevant change
//! and read back on startup. A record that cannot be parsed is ignored for
//! the session and reported through the session error channel.
//!
//! Sub-modules:
//! - [`store`]       : `PersistenceStore` trait, `FileStore`, `MemoryStore`
//! - [`codec`]       : JSON record encode/decode with corruption detection
//! - [`persistence`] : hydration, write-back and removal

pub mod codec;
pub mod persistence;
pub mod store;

pub use codec::{CodecError, SessionRecord, SessionSnapshot};
pub use persistence::{SaveError, SessionPersistence, persisted_fields_changed};
pub use store::{FileStore, MemoryStore, PersistenceStore, StoreError};
