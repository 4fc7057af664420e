//! Per-connection message intake and routing
//!
//! One task owns the `RoomManager` and drains a single event queue, so
//! every inbound message is handled to completion, outbound notifications
//! included, before the next one is looked at. Handlers never observe a
//! half-updated room, and no locks exist anywhere in the game core.
//!
//! Computer moves run as deferred ticks: a state change that leaves an
//! AI-controlled side to move enqueues an `AiTurn` event after a short
//! think delay instead of recursing inline, so player traffic is never
//! starved behind the search.

use crate::rooms::{ConnHandle, ConnId, RoomManager};
use shared::protocol::{ClientMessage, ServerMessage};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How long the computer "thinks" before its move is played
const AI_THINK_DELAY: Duration = Duration::from_millis(500);

/// Everything the dispatcher reacts to
#[derive(Debug)]
pub enum Event {
    Connected {
        id: ConnId,
        tx: mpsc::UnboundedSender<ServerMessage>,
    },
    Inbound {
        id: ConnId,
        text: String,
    },
    Closed {
        id: ConnId,
    },
    AiTurn {
        room_id: String,
    },
}

pub struct Dispatcher {
    manager: RoomManager,
    connections: HashMap<ConnId, ConnHandle>,
    events: mpsc::UnboundedSender<Event>,
}

impl Dispatcher {
    pub fn new(events: mpsc::UnboundedSender<Event>) -> Dispatcher {
        Dispatcher {
            manager: RoomManager::new(),
            connections: HashMap::new(),
            events,
        }
    }

    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Event>) {
        while let Some(event) = rx.recv().await {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Connected { id, tx } => {
                debug!(conn = id, "connection registered");
                self.connections.insert(id, ConnHandle::new(id, tx));
            }
            Event::Closed { id } => {
                info!(conn = id, "connection closed");
                self.connections.remove(&id);
                if self.manager.disconnect(id) {
                    self.broadcast_room_list();
                }
            }
            Event::Inbound { id, text } => self.handle_inbound(id, &text),
            Event::AiTurn { room_id } => {
                let mut rng = rand::rng();
                if self.manager.ai_move(&room_id, &mut rng) {
                    // an AI-vs-AI room keeps ticking until a human's turn
                    self.maybe_schedule_ai(&room_id);
                }
            }
        }
    }

    fn handle_inbound(&mut self, id: ConnId, text: &str) {
        let Some(handle) = self.connections.get(&id).cloned() else {
            return;
        };

        // classify the envelope before routing so a malformed frame and an
        // unknown kind are told apart in the logs; both are dropped and the
        // connection stays open
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                debug!(conn = id, %err, "malformed envelope dropped");
                return;
            }
        };
        if value.get("type").and_then(|t| t.as_str()).is_none() {
            debug!(conn = id, "envelope without a type dropped");
            return;
        }
        let msg: ClientMessage = match serde_json::from_value(value) {
            Ok(msg) => msg,
            Err(err) => {
                warn!(conn = id, %err, "unrecognized message dropped");
                return;
            }
        };

        let result = match msg {
            ClientMessage::GetRoomList => {
                handle.send(ServerMessage::RoomList {
                    rooms: self.manager.room_ids(),
                });
                Ok(None)
            }
            ClientMessage::CreateRoom { payload } => self
                .manager
                .create_room(handle.clone(), payload.nickname)
                .map(|()| {
                    self.broadcast_room_list();
                    None
                }),
            ClientMessage::JoinRoom { room_id, payload } => self
                .manager
                .join_room(&room_id, handle.clone(), payload.nickname)
                .map(|()| Some(room_id)),
            ClientMessage::LeaveRoom { room_id } => {
                self.manager.leave_room(&room_id, id).map(|destroyed| {
                    if destroyed {
                        self.broadcast_room_list();
                    }
                    None
                })
            }
            ClientMessage::Move { room_id, payload } => self
                .manager
                .player_move(&room_id, id, payload.from, payload.to)
                .map(|()| Some(room_id)),
            ClientMessage::Undo { room_id } => {
                self.manager.undo(&room_id).map(|()| Some(room_id))
            }
            ClientMessage::Restart { room_id } => {
                self.manager.restart(&room_id).map(|()| Some(room_id))
            }
            ClientMessage::ToggleAi { room_id } => {
                self.manager.toggle_ai(&room_id, id).map(|()| Some(room_id))
            }
        };

        match result {
            Ok(Some(room_id)) => self.maybe_schedule_ai(&room_id),
            Ok(None) => {}
            Err(err) => {
                debug!(conn = id, %err, "request rejected");
                handle.send(ServerMessage::Error {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Broadcast the room directory to every connection
    fn broadcast_room_list(&self) {
        let msg = ServerMessage::RoomList {
            rooms: self.manager.room_ids(),
        };
        for handle in self.connections.values() {
            handle.send(msg.clone());
        }
    }

    /// Queue a deferred computer move if one is due in this room
    fn maybe_schedule_ai(&self, room_id: &str) {
        if !self.manager.ai_turn_pending(room_id) {
            return;
        }
        let events = self.events.clone();
        let room_id = room_id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(AI_THINK_DELAY).await;
            let _ = events.send(Event::AiTurn { room_id });
        });
    }
}
