//! Room table, seats and the operations on them
//!
//! The `RoomManager` is the only writer of room state. It is plain owned
//! data with no interior locking: the dispatcher task holds it exclusively,
//! and tests construct their own isolated instance. Seats hold a send-only
//! capability into a connection's outbound queue, never the transport
//! itself; the transport's closure is observed via `disconnect`, not
//! caused here.

use crate::error::{RoomError, RoomResult};
use rand::Rng;
use shared::protocol::{PlayerView, RoomStateView, ServerMessage};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::info;
use xiangqi_engine::{ai, rules, GameState, Move, Pos, Side};

pub type ConnId = u64;

/// Send-only handle to one connection's outbound queue.
/// Sends are fire-and-forget: a closed peer just drops the message.
#[derive(Clone, Debug)]
pub struct ConnHandle {
    id: ConnId,
    tx: mpsc::UnboundedSender<ServerMessage>,
}

impl ConnHandle {
    pub fn new(id: ConnId, tx: mpsc::UnboundedSender<ServerMessage>) -> ConnHandle {
        ConnHandle { id, tx }
    }

    pub fn id(&self) -> ConnId {
        self.id
    }

    pub fn send(&self, msg: ServerMessage) {
        let _ = self.tx.send(msg);
    }
}

/// One of the at most two player slots in a room
pub struct Seat {
    pub handle: ConnHandle,
    pub side: Side,
    pub nickname: String,
}

impl Seat {
    fn view(&self) -> PlayerView {
        PlayerView {
            nickname: self.nickname.clone(),
            color: self.side,
        }
    }
}

pub struct Room {
    pub id: String,
    pub seats: Vec<Seat>,
    pub state: GameState,
}

impl Room {
    fn view(&self) -> RoomStateView {
        RoomStateView {
            pieces: self.state.board.clone(),
            turn: self.state.turn,
            history: self.state.history.clone(),
            is_ai_mode: self.state.ai_mode,
            players: self.seats.iter().map(Seat::view).collect(),
        }
    }

    fn seat_of(&self, conn: ConnId) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.handle.id() == conn)
    }

    fn side_taken(&self, side: Side) -> bool {
        self.seats.iter().any(|seat| seat.side == side)
    }

    fn broadcast(&self, msg: &ServerMessage) {
        for seat in &self.seats {
            seat.handle.send(msg.clone());
        }
    }
}

/// Owns the room directory. Room ids are monotonic tokens.
pub struct RoomManager {
    rooms: BTreeMap<String, Room>,
    next_room_id: u64,
}

impl RoomManager {
    pub fn new() -> RoomManager {
        RoomManager {
            rooms: BTreeMap::new(),
            next_room_id: 1,
        }
    }

    pub fn room_ids(&self) -> Vec<String> {
        self.rooms.keys().cloned().collect()
    }

    fn identity_taken(&self, nickname: &str) -> bool {
        self.rooms
            .values()
            .flat_map(|room| room.seats.iter())
            .any(|seat| seat.nickname == nickname)
    }

    /// Open a new room with the requester seated as red.
    /// The nickname must be free across every room.
    pub fn create_room(&mut self, handle: ConnHandle, nickname: String) -> RoomResult<()> {
        if self.identity_taken(&nickname) {
            return Err(RoomError::DuplicateIdentity(nickname));
        }

        let id = self.next_room_id.to_string();
        self.next_room_id += 1;

        let room = Room {
            id: id.clone(),
            seats: vec![Seat {
                handle: handle.clone(),
                side: Side::Red,
                nickname: nickname.clone(),
            }],
            state: GameState::new(),
        };
        handle.send(ServerMessage::RoomJoined {
            room_id: id.clone(),
            player_color: Side::Red,
            state: room.view(),
        });
        info!(room = %id, %nickname, "room created");
        self.rooms.insert(id, room);
        Ok(())
    }

    /// Seat the requester on the free side of an existing room. The
    /// `playerJoined` broadcast doubles as the game-start signal when this
    /// fills the second seat.
    pub fn join_room(&mut self, room_id: &str, handle: ConnHandle, nickname: String) -> RoomResult<()> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.to_string()))?;
        if room.seats.len() >= 2 {
            return Err(RoomError::RoomFull(room_id.to_string()));
        }
        if room.seats.iter().any(|seat| seat.nickname == nickname) {
            return Err(RoomError::DuplicateIdentity(nickname));
        }

        let side = if room.side_taken(Side::Red) {
            Side::Black
        } else {
            Side::Red
        };
        room.seats.push(Seat {
            handle: handle.clone(),
            side,
            nickname: nickname.clone(),
        });

        handle.send(ServerMessage::RoomJoined {
            room_id: room_id.to_string(),
            player_color: side,
            state: room.view(),
        });
        room.broadcast(&ServerMessage::PlayerJoined {
            player_color: side,
            state: room.view(),
        });
        info!(room = %room_id, %nickname, color = %side, "player joined");
        Ok(())
    }

    /// Vacate the requester's seat. Returns true when the room was
    /// destroyed (the directory changed). A connection with no seat in the
    /// room, or an already-destroyed room, is a silent no-op.
    pub fn leave_room(&mut self, room_id: &str, conn: ConnId) -> RoomResult<bool> {
        let Some(room) = self.rooms.get_mut(room_id) else {
            return Ok(false);
        };
        let Some(idx) = room.seats.iter().position(|seat| seat.handle.id() == conn) else {
            return Ok(false);
        };

        let seat = room.seats.remove(idx);
        info!(room = %room_id, nickname = %seat.nickname, "player left");
        if room.seats.is_empty() {
            self.rooms.remove(room_id);
            return Ok(true);
        }

        let msg = ServerMessage::PlayerLeft {
            player: seat.view(),
            state: room.view(),
        };
        room.broadcast(&msg);
        seat.handle.send(msg);
        Ok(false)
    }

    /// Transport-loss cleanup: sweep every room for seats bound to the
    /// connection. Never fails, even for connections that never sat down.
    /// Returns true when any room was destroyed.
    pub fn disconnect(&mut self, conn: ConnId) -> bool {
        let mut destroyed = Vec::new();
        for (id, room) in self.rooms.iter_mut() {
            let before = room.seats.len();
            room.seats.retain(|seat| seat.handle.id() != conn);
            if room.seats.len() == before {
                continue;
            }
            if room.seats.is_empty() {
                destroyed.push(id.clone());
            } else {
                room.broadcast(&ServerMessage::PlayerDisconnected);
            }
        }
        for id in &destroyed {
            self.rooms.remove(id);
            info!(room = %id, "room destroyed after disconnect");
        }
        !destroyed.is_empty()
    }

    /// Validate and play a move for the seated player. The resulting board
    /// is derived here through the rule engine; clients only name the
    /// displacement.
    pub fn player_move(&mut self, room_id: &str, conn: ConnId, from: Pos, to: Pos) -> RoomResult<()> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.to_string()))?;
        if !room.state.ai_mode && room.seats.len() < 2 {
            return Err(RoomError::NotEnoughPlayers);
        }
        let seat = room.seat_of(conn).ok_or(RoomError::NotSeated)?;
        if seat.side != room.state.turn {
            return Err(RoomError::NotYourTurn);
        }
        let piece = room.state.board.get(from).ok_or(RoomError::NoPieceAt(from))?;
        if piece.side() != seat.side {
            return Err(RoomError::NotYourPiece(from));
        }
        if !rules::is_legal(from, to, piece, &room.state.board) {
            return Err(RoomError::IllegalMove { from, to });
        }

        let side = seat.side;
        room.state.apply(Move {
            pieces: room.state.board.moved(from, to),
            turn: side.opponent(),
            from: Some(from),
            to: Some(to),
        });
        room.broadcast(&ServerMessage::Move { state: room.view() });
        Ok(())
    }

    /// Take back the newest move. An empty history is a silent no-op with
    /// no broadcast.
    pub fn undo(&mut self, room_id: &str) -> RoomResult<()> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.to_string()))?;
        if room.state.undo() {
            room.broadcast(&ServerMessage::Undo { state: room.view() });
        }
        Ok(())
    }

    pub fn restart(&mut self, room_id: &str) -> RoomResult<()> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.to_string()))?;
        room.state.restart();
        room.broadcast(&ServerMessage::Restart { state: room.view() });
        Ok(())
    }

    /// Flip the computer opponent. Only the founding (red) seat may.
    pub fn toggle_ai(&mut self, room_id: &str, conn: ConnId) -> RoomResult<()> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| RoomError::RoomNotFound(room_id.to_string()))?;
        match room.seat_of(conn) {
            Some(seat) if seat.side == Side::Red => {}
            _ => return Err(RoomError::Unauthorized),
        }

        let enabled = room.state.toggle_ai_mode();
        info!(room = %room_id, enabled, "ai mode toggled");
        room.broadcast(&ServerMessage::AiModeChanged { state: room.view() });
        Ok(())
    }

    /// Should the computer play next in this room? True while AI mode is
    /// on, the game is not decided, and the side to move has no seat.
    pub fn ai_turn_pending(&self, room_id: &str) -> bool {
        let Some(room) = self.rooms.get(room_id) else {
            return false;
        };
        room.state.ai_mode
            && room.state.winner().is_none()
            && !room.seats.is_empty()
            && !room.side_taken(room.state.turn)
    }

    /// Play one computer move if one is still pending. Re-checks the
    /// conditions because the room may have changed since the tick was
    /// scheduled.
    pub fn ai_move<R: Rng + ?Sized>(&mut self, room_id: &str, rng: &mut R) -> bool {
        if !self.ai_turn_pending(room_id) {
            return false;
        }
        let Some(room) = self.rooms.get_mut(room_id) else {
            return false;
        };
        let Some(mv) = ai::choose_move(&room.state, room.state.turn, rng) else {
            return false;
        };
        room.state.apply(mv);
        room.broadcast(&ServerMessage::Move { state: room.view() });
        true
    }
}

impl Default for RoomManager {
    fn default() -> RoomManager {
        RoomManager::new()
    }
}
