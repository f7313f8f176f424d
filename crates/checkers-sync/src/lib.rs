//! Session synchronizer for networked checkers.
//!
//! Two remote peers share one authoritative [`RoomRecord`] in a
//! key-value store with subscriptions. The store surface is the
//! [`StateStore`] trait; [`MemoryStore`] is the in-process
//! implementation (and the test fake), [`RemoteStore`] speaks the relay
//! wire protocol over a websocket.
//!
//! [`SyncSession`] holds the per-peer logic: the first occupant of a
//! room seeds it and plays Green, the second claims White, and each peer
//! commits moves only on its own turn. Every incoming record fully
//! replaces local state; there is no merging and no conflict resolution
//! beyond last-write-wins.

mod memory;
pub mod protocol;
mod remote;
mod session;
mod store;

pub use memory::MemoryStore;
pub use protocol::{ClientFrame, ServerFrame};
pub use remote::RemoteStore;
pub use session::{SyncError, SyncSession};
pub use store::{RecordPatch, RoomRecord, StateStore, StoreError};
