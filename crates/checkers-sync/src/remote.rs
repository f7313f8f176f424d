//! Websocket-backed state store.
//!
//! [`RemoteStore`] speaks the relay wire protocol (see
//! [`protocol`](crate::protocol)): requests go out through a writer
//! task, answers and `changed` broadcasts come back through a reader
//! task. There is no timeout or retry anywhere; a peer that joins an
//! empty room simply waits for the first snapshot, however long it
//! takes.

use crate::protocol::{ClientFrame, ServerFrame};
use crate::store::{RecordPatch, RoomRecord, StateStore, StoreError};
use futures_util::{SinkExt, StreamExt};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;

/// Capacity of the per-room rebroadcast channels.
const CHANNEL_CAPACITY: usize = 100;

#[derive(Default)]
struct Pending {
    /// Outstanding `exists` requests, answered in order.
    exists: VecDeque<oneshot::Sender<bool>>,
    /// Outstanding `read` requests, answered in order.
    reads: VecDeque<oneshot::Sender<Option<RoomRecord>>>,
    /// Per-room rebroadcast of `changed` frames.
    subs: HashMap<String, broadcast::Sender<RoomRecord>>,
}

/// A [`StateStore`] client talking to a relay over a websocket.
#[derive(Clone)]
pub struct RemoteStore {
    to_relay: mpsc::Sender<ClientFrame>,
    pending: Arc<Mutex<Pending>>,
}

impl RemoteStore {
    /// Connects to a relay (e.g. `ws://127.0.0.1:9090`).
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let (ws, _) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let (mut sink, mut stream) = ws.split();

        let (to_relay, mut outgoing) = mpsc::channel::<ClientFrame>(100);
        let pending = Arc::new(Mutex::new(Pending::default()));

        // Writer task: serialize and send every outgoing frame.
        tokio::spawn(async move {
            while let Some(frame) = outgoing.recv().await {
                let json = match serde_json::to_string(&frame) {
                    Ok(json) => json,
                    Err(_) => continue,
                };
                if sink.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
        });

        // Reader task: dispatch answers and rebroadcast changes.
        let pending_clone = Arc::clone(&pending);
        tokio::spawn(async move {
            while let Some(Ok(msg)) = stream.next().await {
                let Message::Text(text) = msg else { continue };
                let Ok(frame) = serde_json::from_str::<ServerFrame>(&text) else {
                    continue;
                };
                dispatch(frame, &pending_clone);
            }
            // Connection gone: wake every waiter with a closed channel.
            let mut pending = pending_clone.lock().unwrap();
            pending.exists.clear();
            pending.reads.clear();
            pending.subs.clear();
        });

        Ok(RemoteStore { to_relay, pending })
    }

    async fn send(&self, frame: ClientFrame) -> Result<(), StoreError> {
        self.to_relay
            .send(frame)
            .await
            .map_err(|_| StoreError::Disconnected)
    }
}

fn dispatch(frame: ServerFrame, pending: &Mutex<Pending>) {
    let mut pending = pending.lock().unwrap();
    match frame {
        ServerFrame::Exists { exists, .. } => {
            if let Some(tx) = pending.exists.pop_front() {
                let _ = tx.send(exists);
            }
        }
        ServerFrame::Record { record, .. } => {
            if let Some(tx) = pending.reads.pop_front() {
                let _ = tx.send(record);
            }
        }
        ServerFrame::Changed { room, record } => {
            if let Some(tx) = pending.subs.get(&room) {
                let _ = tx.send(record);
            }
        }
        ServerFrame::Error { .. } => {
            // The relay rejected a request; requests carrying answers
            // get woken by their matching frame or by disconnect, so
            // nothing to correlate here.
        }
    }
}

impl StateStore for RemoteStore {
    async fn exists(&self, room: &str) -> Result<bool, StoreError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().exists.push_back(tx);
        self.send(ClientFrame::Exists {
            room: room.to_string(),
        })
        .await?;
        rx.await.map_err(|_| StoreError::Disconnected)
    }

    async fn read_once(&self, room: &str) -> Result<Option<RoomRecord>, StoreError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().reads.push_back(tx);
        self.send(ClientFrame::Read {
            room: room.to_string(),
        })
        .await?;
        rx.await.map_err(|_| StoreError::Disconnected)
    }

    async fn write_full(&self, room: &str, record: RoomRecord) -> Result<(), StoreError> {
        self.send(ClientFrame::Write {
            room: room.to_string(),
            record,
        })
        .await
    }

    async fn update(&self, room: &str, patch: RecordPatch) -> Result<(), StoreError> {
        self.send(ClientFrame::Update {
            room: room.to_string(),
            patch,
        })
        .await
    }

    async fn subscribe(&self, room: &str) -> Result<broadcast::Receiver<RoomRecord>, StoreError> {
        let rx = {
            let mut pending = self.pending.lock().unwrap();
            pending
                .subs
                .entry(room.to_string())
                .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
                .subscribe()
        };
        self.send(ClientFrame::Subscribe {
            room: room.to_string(),
        })
        .await?;
        Ok(rx)
    }
}
