//! Shared-state broadcast relay for networked checkers.
//!
//! Clients connect over a websocket and exchange the frames defined in
//! `checkers_sync::protocol`. The relay keeps one record per room and
//! broadcasts the full record to every subscriber after each write or
//! update; it knows nothing about the game inside the record.

mod config;

use checkers_sync::{ClientFrame, MemoryStore, ServerFrame, StateStore};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tokio_tungstenite::tungstenite::Message;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::load().await?;
    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("relay listening on ws://{}", addr);

    let rooms = MemoryStore::new();

    while let Ok((stream, peer)) = listener.accept().await {
        let rooms = rooms.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer, rooms).await {
                tracing::warn!("connection error from {}: {}", peer, e);
            }
        });
    }

    Ok(())
}

async fn handle_connection(
    stream: tokio::net::TcpStream,
    peer: SocketAddr,
    rooms: MemoryStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::info!("new connection from {}", peer);

    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // All outgoing frames funnel through one channel so request answers
    // and subscription broadcasts cannot interleave mid-frame.
    let (out_tx, mut out_rx) = mpsc::channel::<ServerFrame>(100);
    let writer = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            let json = match serde_json::to_string(&frame) {
                Ok(json) => json,
                Err(_) => continue,
            };
            if ws_sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    // One forwarding task per subscribed room.
    let mut forwarders = Vec::new();

    while let Some(Ok(msg)) = ws_receiver.next().await {
        let Message::Text(text) = msg else { continue };
        let frame = match serde_json::from_str::<ClientFrame>(&text) {
            Ok(frame) => frame,
            Err(e) => {
                let _ = out_tx
                    .send(ServerFrame::Error {
                        message: format!("bad frame: {}", e),
                    })
                    .await;
                continue;
            }
        };

        match frame {
            ClientFrame::Exists { room } => {
                let exists = rooms.exists(&room).await.unwrap_or(false);
                if out_tx
                    .send(ServerFrame::Exists { room, exists })
                    .await
                    .is_err()
                {
                    break;
                }
            }
            ClientFrame::Read { room } => {
                let record = rooms.read_once(&room).await.unwrap_or(None);
                if out_tx
                    .send(ServerFrame::Record { room, record })
                    .await
                    .is_err()
                {
                    break;
                }
            }
            ClientFrame::Write { room, record } => {
                tracing::debug!("{} writes room '{}'", peer, room);
                if rooms.write_full(&room, record).await.is_err() {
                    let _ = out_tx
                        .send(ServerFrame::Error {
                            message: format!("write to room '{}' failed", room),
                        })
                        .await;
                }
            }
            ClientFrame::Update { room, patch } => {
                tracing::debug!("{} updates room '{}'", peer, room);
                if let Err(e) = rooms.update(&room, patch).await {
                    let _ = out_tx
                        .send(ServerFrame::Error {
                            message: e.to_string(),
                        })
                        .await;
                }
            }
            ClientFrame::Subscribe { room } => {
                tracing::debug!("{} subscribes to room '{}'", peer, room);
                let mut rx = match rooms.subscribe(&room).await {
                    Ok(rx) => rx,
                    Err(e) => {
                        let _ = out_tx
                            .send(ServerFrame::Error {
                                message: e.to_string(),
                            })
                            .await;
                        continue;
                    }
                };
                let out = out_tx.clone();
                forwarders.push(tokio::spawn(async move {
                    loop {
                        match rx.recv().await {
                            Ok(record) => {
                                let frame = ServerFrame::Changed {
                                    room: room.clone(),
                                    record,
                                };
                                if out.send(frame).await.is_err() {
                                    break;
                                }
                            }
                            // A lagged subscriber only cares about the
                            // latest record anyway.
                            Err(broadcast::error::RecvError::Lagged(_)) => continue,
                            Err(broadcast::error::RecvError::Closed) => break,
                        }
                    }
                }));
            }
        }
    }

    tracing::info!("connection from {} closed", peer);
    for task in forwarders {
        task.abort();
    }
    writer.abort();
    Ok(())
}
