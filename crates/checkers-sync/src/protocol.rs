//! Relay wire protocol.
//!
//! JSON frames exchanged between a [`RemoteStore`](crate::RemoteStore)
//! and the relay service. All frames use snake_case tag names.

use crate::store::{RecordPatch, RoomRecord};
use serde::{Deserialize, Serialize};

/// Frames sent from a client to the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Ask whether a room has a record.
    Exists { room: String },
    /// Read the current record once.
    Read { room: String },
    /// Write (or create) the full record.
    Write { room: String, record: RoomRecord },
    /// Apply a partial update to an existing record.
    Update { room: String, patch: RecordPatch },
    /// Subscribe to record changes for a room.
    Subscribe { room: String },
}

/// Frames sent from the relay to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Answer to [`ClientFrame::Exists`].
    Exists { room: String, exists: bool },
    /// Answer to [`ClientFrame::Read`].
    Record {
        room: String,
        record: Option<RoomRecord>,
    },
    /// A record changed; delivered to every subscriber of the room,
    /// always carrying the full current record.
    Changed { room: String, record: RoomRecord },
    /// A request could not be served.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_frame_serialization() {
        let frame = ClientFrame::Exists {
            room: "lobby".to_string(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"type":"exists","room":"lobby"}"#);
    }

    #[test]
    fn subscribe_frame_serialization() {
        let frame = ClientFrame::Subscribe {
            room: "room-7".to_string(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"type\":\"subscribe\""));
        assert!(json.contains("\"room\":\"room-7\""));
    }

    #[test]
    fn write_frame_round_trip() {
        let frame = ClientFrame::Write {
            room: "r".to_string(),
            record: RoomRecord::new(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"type\":\"write\""));
        assert!(json.contains("\"guest_joined\":false"));

        match serde_json::from_str::<ClientFrame>(&json).unwrap() {
            ClientFrame::Write { room, record } => {
                assert_eq!(room, "r");
                assert_eq!(record, RoomRecord::new());
            }
            other => panic!("expected Write frame, got {:?}", other),
        }
    }

    #[test]
    fn update_frame_skips_empty_fields() {
        let frame = ClientFrame::Update {
            room: "r".to_string(),
            patch: RecordPatch::guest_joined(true),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"guest_joined\":true"));
        assert!(!json.contains("\"game\""));
    }

    #[test]
    fn changed_frame_round_trip() {
        let frame = ServerFrame::Changed {
            room: "r".to_string(),
            record: RoomRecord::new(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"type\":\"changed\""));

        match serde_json::from_str::<ServerFrame>(&json).unwrap() {
            ServerFrame::Changed { room, record } => {
                assert_eq!(room, "r");
                assert!(!record.guest_joined);
            }
            other => panic!("expected Changed frame, got {:?}", other),
        }
    }

    #[test]
    fn missing_record_is_null() {
        let frame = ServerFrame::Record {
            room: "r".to_string(),
            record: None,
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"record\":null"));
    }

    #[test]
    fn error_frame_deserialization() {
        let json = r#"{"type":"error","message":"room 'x' does not exist"}"#;
        match serde_json::from_str::<ServerFrame>(json).unwrap() {
            ServerFrame::Error { message } => {
                assert!(message.contains("does not exist"));
            }
            other => panic!("expected Error frame, got {:?}", other),
        }
    }
}
