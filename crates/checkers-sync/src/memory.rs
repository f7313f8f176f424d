//! In-process state store.

use crate::store::{RecordPatch, RoomRecord, StateStore, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Capacity of each room's broadcast channel before slow subscribers
/// start missing intermediate records. Subscribers always want the
/// latest record, so lagging is harmless.
const CHANNEL_CAPACITY: usize = 100;

#[derive(Debug)]
struct RoomEntry {
    record: Option<RoomRecord>,
    tx: broadcast::Sender<RoomRecord>,
}

impl RoomEntry {
    fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        RoomEntry { record: None, tx }
    }
}

/// An in-memory [`StateStore`].
///
/// Backs the relay's room registry and serves as the injected fake for
/// tests and for local play, where the synchronizer degenerates to plain
/// process memory. Clones share the same underlying rooms.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rooms: Arc<Mutex<HashMap<String, RoomEntry>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    async fn exists(&self, room: &str) -> Result<bool, StoreError> {
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms.get(room).is_some_and(|e| e.record.is_some()))
    }

    async fn read_once(&self, room: &str) -> Result<Option<RoomRecord>, StoreError> {
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms.get(room).and_then(|e| e.record.clone()))
    }

    async fn write_full(&self, room: &str, record: RoomRecord) -> Result<(), StoreError> {
        let mut rooms = self.rooms.lock().unwrap();
        let entry = rooms.entry(room.to_string()).or_insert_with(RoomEntry::new);
        entry.record = Some(record.clone());
        // Send fails only when nobody subscribes, which is fine.
        let _ = entry.tx.send(record);
        Ok(())
    }

    async fn update(&self, room: &str, patch: RecordPatch) -> Result<(), StoreError> {
        let mut rooms = self.rooms.lock().unwrap();
        let entry = rooms
            .get_mut(room)
            .ok_or_else(|| StoreError::NoSuchRoom(room.to_string()))?;
        let record = entry
            .record
            .as_mut()
            .ok_or_else(|| StoreError::NoSuchRoom(room.to_string()))?;
        patch.apply_to(record);
        let _ = entry.tx.send(record.clone());
        Ok(())
    }

    async fn subscribe(&self, room: &str) -> Result<broadcast::Receiver<RoomRecord>, StoreError> {
        let mut rooms = self.rooms.lock().unwrap();
        let entry = rooms.entry(room.to_string()).or_insert_with(RoomEntry::new);
        Ok(entry.tx.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exists_after_write() {
        let store = MemoryStore::new();
        assert!(!store.exists("room-1").await.unwrap());
        assert_eq!(store.read_once("room-1").await.unwrap(), None);

        store
            .write_full("room-1", RoomRecord::new())
            .await
            .unwrap();
        assert!(store.exists("room-1").await.unwrap());
        assert_eq!(
            store.read_once("room-1").await.unwrap(),
            Some(RoomRecord::new())
        );
    }

    #[tokio::test]
    async fn update_requires_existing_record() {
        let store = MemoryStore::new();
        let err = store
            .update("nowhere", RecordPatch::guest_joined(true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NoSuchRoom(_)));
    }

    #[tokio::test]
    async fn update_patches_and_broadcasts() {
        let store = MemoryStore::new();
        store.write_full("r", RoomRecord::new()).await.unwrap();
        let mut rx = store.subscribe("r").await.unwrap();

        store
            .update("r", RecordPatch::guest_joined(true))
            .await
            .unwrap();

        let record = rx.recv().await.unwrap();
        assert!(record.guest_joined);
        assert_eq!(store.read_once("r").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn subscribe_before_first_write() {
        // Subscribing to a not-yet-seeded room is allowed; the first
        // snapshot arrives whenever the peer writes it.
        let store = MemoryStore::new();
        let mut rx = store.subscribe("r").await.unwrap();
        assert!(!store.exists("r").await.unwrap());

        store.write_full("r", RoomRecord::new()).await.unwrap();
        let record = rx.recv().await.unwrap();
        assert_eq!(record, RoomRecord::new());
    }

    #[tokio::test]
    async fn clones_share_rooms() {
        let store = MemoryStore::new();
        let peer = store.clone();
        store.write_full("r", RoomRecord::new()).await.unwrap();
        assert!(peer.exists("r").await.unwrap());
    }
}
