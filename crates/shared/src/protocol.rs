//! Wire protocol between clients and the game server
//!
//! Every envelope is a JSON object tagged by `type`, with an optional
//! `roomId` and an optional `payload` object. The tags and field names
//! here are the protocol; both message enums are exhaustively matched by
//! the server's dispatcher.

use serde::{Deserialize, Serialize};
use xiangqi_engine::{Board, Move, Pos, Side};

/// Client → Server envelopes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    GetRoomList,
    CreateRoom {
        payload: IdentityPayload,
    },
    JoinRoom {
        room_id: String,
        payload: IdentityPayload,
    },
    LeaveRoom {
        room_id: String,
    },
    Move {
        room_id: String,
        payload: MovePayload,
    },
    Undo {
        room_id: String,
    },
    Restart {
        room_id: String,
    },
    #[serde(rename = "toggleAI")]
    ToggleAi {
        room_id: String,
    },
}

/// Server → Client envelopes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Broadcast to every connection whenever the room directory changes
    RoomList {
        rooms: Vec<String>,
    },
    /// Reply to the creator or joiner of a room
    RoomJoined {
        room_id: String,
        player_color: Side,
        state: RoomStateView,
    },
    /// Room broadcast; when the second seat fills this is the game start
    PlayerJoined {
        player_color: Side,
        state: RoomStateView,
    },
    PlayerLeft {
        player: PlayerView,
        state: RoomStateView,
    },
    PlayerDisconnected,
    Move {
        state: RoomStateView,
    },
    Undo {
        state: RoomStateView,
    },
    Restart {
        state: RoomStateView,
    },
    AiModeChanged {
        state: RoomStateView,
    },
    Error {
        message: String,
    },
}

/// `createRoom` / `joinRoom` payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdentityPayload {
    pub nickname: String,
}

/// `move` payload. Clients name the displacement only; the server derives
/// the resulting board through the rule engine and never trusts a
/// client-computed position.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MovePayload {
    pub from: Pos,
    pub to: Pos,
}

/// The room state carried by every room-scoped notification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoomStateView {
    pub pieces: Board,
    pub turn: Side,
    pub history: Vec<Move>,
    #[serde(rename = "isAIMode")]
    pub is_ai_mode: bool,
    pub players: Vec<PlayerView>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub nickname: String,
    pub color: Side,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use xiangqi_engine::Pos;

    #[test]
    fn client_envelope_tags_match_the_wire() {
        let msg: ClientMessage = serde_json::from_value(json!({
            "type": "joinRoom",
            "roomId": "17",
            "payload": { "nickname": "A" },
        }))
        .unwrap();
        assert_eq!(
            msg,
            ClientMessage::JoinRoom {
                room_id: "17".into(),
                payload: IdentityPayload { nickname: "A".into() },
            }
        );

        let msg: ClientMessage = serde_json::from_value(json!({ "type": "getRoomList" })).unwrap();
        assert_eq!(msg, ClientMessage::GetRoomList);
    }

    #[test]
    fn toggle_ai_tag_is_verbatim() {
        let json = serde_json::to_value(ClientMessage::ToggleAi { room_id: "3".into() }).unwrap();
        assert_eq!(json, json!({ "type": "toggleAI", "roomId": "3" }));
    }

    #[test]
    fn move_payload_is_from_to_only() {
        let msg: ClientMessage = serde_json::from_value(json!({
            "type": "move",
            "roomId": "1",
            "payload": { "from": "3-0", "to": "4-0" },
        }))
        .unwrap();
        assert_eq!(
            msg,
            ClientMessage::Move {
                room_id: "1".into(),
                payload: MovePayload {
                    from: Pos::new(3, 0),
                    to: Pos::new(4, 0),
                },
            }
        );
    }

    #[test]
    fn malformed_positions_fail_to_parse() {
        let result: Result<ClientMessage, _> = serde_json::from_value(json!({
            "type": "move",
            "roomId": "1",
            "payload": { "from": "12-0", "to": "4-0" },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn room_state_view_field_names_match_the_wire() {
        let state = RoomStateView {
            pieces: Board::opening(),
            turn: Side::Red,
            history: Vec::new(),
            is_ai_mode: false,
            players: vec![PlayerView {
                nickname: "A".into(),
                color: Side::Red,
            }],
        };
        let json = serde_json::to_value(ServerMessage::Move { state }).unwrap();
        assert_eq!(json["type"], "move");
        assert_eq!(json["state"]["turn"], "red");
        assert_eq!(json["state"]["isAIMode"], false);
        assert_eq!(json["state"]["pieces"]["0-4"], "帥");
        assert_eq!(json["state"]["players"][0]["color"], "red");
    }

    #[test]
    fn server_envelopes_round_trip() {
        let original = ServerMessage::RoomJoined {
            room_id: "5".into(),
            player_color: Side::Black,
            state: RoomStateView {
                pieces: Board::opening(),
                turn: Side::Red,
                history: Vec::new(),
                is_ai_mode: true,
                players: Vec::new(),
            },
        };
        let text = serde_json::to_string(&original).unwrap();
        let decoded: ServerMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, original);

        let json = serde_json::to_value(&original).unwrap();
        assert_eq!(json["type"], "roomJoined");
        assert_eq!(json["roomId"], "5");
        assert_eq!(json["playerColor"], "black");
    }

    #[test]
    fn error_envelope_shape() {
        let json = serde_json::to_value(ServerMessage::Error {
            message: "room is full".into(),
        })
        .unwrap();
        assert_eq!(json, json!({ "type": "error", "message": "room is full" }));
    }
}
