//! Per-peer session logic for a shared room.

use crate::store::{RecordPatch, RoomRecord, StateStore, StoreError};
use checkers_core::{Color, Pos};
use checkers_engine::{Activation, Game};
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors surfaced while joining or driving a session.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("room '{0}' already has two players")]
    RoomFull(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One peer's view of a shared game room.
///
/// The first occupant seeds the room record and plays Green; the second
/// claims White and marks the room dual-occupied. Each peer refuses to
/// commit moves when it is not its claimed turn; that voluntary refusal
/// is the only mutual exclusion there is. Every record received through
/// the subscription replaces the local game wholesale.
#[derive(Debug)]
pub struct SyncSession<S: StateStore> {
    store: S,
    room: String,
    role: Color,
    game: Game,
}

impl<S: StateStore> SyncSession<S> {
    /// Joins a room, claiming the first free role.
    pub async fn join(store: S, room: &str) -> Result<Self, SyncError> {
        let (role, game) = match store.read_once(room).await? {
            None => {
                let record = RoomRecord::new();
                let game = record.game.clone();
                store.write_full(room, record).await?;
                (Color::Green, game)
            }
            Some(record) if !record.guest_joined => {
                store.update(room, RecordPatch::guest_joined(true)).await?;
                (Color::White, record.game)
            }
            Some(_) => return Err(SyncError::RoomFull(room.to_string())),
        };

        Ok(SyncSession {
            store,
            room: room.to_string(),
            role,
            game,
        })
    }

    /// Returns the color this peer plays.
    pub fn role(&self) -> Color {
        self.role
    }

    /// Returns the room identifier.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Subscribes to record changes for this room.
    ///
    /// The receiver is the only path by which the peer's moves become
    /// visible; feed every delivery to [`apply_remote`](Self::apply_remote).
    pub async fn subscribe(&self) -> Result<broadcast::Receiver<RoomRecord>, SyncError> {
        Ok(self.store.subscribe(&self.room).await?)
    }

    /// Handles a local cell activation.
    ///
    /// Out-of-turn input is ignored before it reaches the validator.
    /// When a move commits, the resulting state is pushed to the shared
    /// record for the other peer.
    pub async fn activate(&mut self, pos: Pos) -> Result<Activation, SyncError> {
        if self.game.turn() != self.role {
            return Ok(Activation::Ignored);
        }

        let outcome = self.game.activate(pos);
        if matches!(outcome, Activation::Moved(_)) {
            self.push().await?;
        }
        Ok(outcome)
    }

    /// Applies a remote record as a total overwrite of local state.
    pub fn apply_remote(&mut self, record: RoomRecord) {
        self.game = record.game;
    }

    /// Replaces the game with a fresh one and pushes it.
    ///
    /// The new authoritative state supersedes anything in flight; there
    /// is no way to cancel a pending remote update, it simply loses.
    pub async fn reset(&mut self) -> Result<(), SyncError> {
        self.game.reset();
        self.push().await
    }

    async fn push(&self) -> Result<(), SyncError> {
        self.store
            .update(&self.room, RecordPatch::game(self.game.clone()))
            .await?;
        Ok(())
    }
}
