//! The shared-state store abstraction.

use checkers_engine::Game;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors surfaced by a state store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("room '{0}' does not exist")]
    NoSuchRoom(String),

    #[error("store connection closed")]
    Disconnected,

    #[error("transport error: {0}")]
    Transport(String),
}

/// The authoritative record shared by the two peers of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// The full game state; always replaced wholesale, never merged.
    pub game: Game,
    /// Set once a second peer has claimed the White role.
    pub guest_joined: bool,
}

impl RoomRecord {
    /// Creates the record a first occupant seeds a room with.
    pub fn new() -> Self {
        RoomRecord {
            game: Game::new(),
            guest_joined: false,
        }
    }
}

impl Default for RoomRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A field-level partial update to a [`RoomRecord`].
///
/// Omitted fields are left untouched; `None` fields are skipped on the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_joined: Option<bool>,
}

impl RecordPatch {
    /// A patch replacing only the game state.
    pub fn game(game: Game) -> Self {
        RecordPatch {
            game: Some(game),
            ..Default::default()
        }
    }

    /// A patch setting only the guest flag.
    pub fn guest_joined(joined: bool) -> Self {
        RecordPatch {
            guest_joined: Some(joined),
            ..Default::default()
        }
    }

    /// Applies this patch to a record.
    pub fn apply_to(&self, record: &mut RoomRecord) {
        if let Some(game) = &self.game {
            record.game = game.clone();
        }
        if let Some(joined) = self.guest_joined {
            record.guest_joined = joined;
        }
    }
}

/// A key-value store with per-room subscriptions.
///
/// This is the whole surface the core needs from the synchronization
/// backend: existence check, one-shot read, full write, partial update,
/// and a subscription that always delivers the full current record.
/// Implementations make no timing guarantees; in particular the first
/// snapshot after [`subscribe`](StateStore::subscribe) may take
/// arbitrarily long to arrive.
#[allow(async_fn_in_trait)]
pub trait StateStore {
    /// Returns true if the room has a record.
    async fn exists(&self, room: &str) -> Result<bool, StoreError>;

    /// Reads the current record once, if the room has one.
    async fn read_once(&self, room: &str) -> Result<Option<RoomRecord>, StoreError>;

    /// Writes (or creates) the full record for a room.
    async fn write_full(&self, room: &str, record: RoomRecord) -> Result<(), StoreError>;

    /// Applies a partial update to an existing room record.
    async fn update(&self, room: &str, patch: RecordPatch) -> Result<(), StoreError>;

    /// Subscribes to record changes for a room. Every delivery is the
    /// full record after a write or update.
    async fn subscribe(&self, room: &str) -> Result<broadcast::Receiver<RoomRecord>, StoreError>;
}
