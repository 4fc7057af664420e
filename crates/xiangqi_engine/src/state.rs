//! Per-room game state and its move ledger
//!
//! `GameState` is a pure state-holder: `apply` records a move that callers
//! have already validated through the rule engine. Every history entry
//! carries the *resulting* board and turn, never a delta, which is what
//! makes undo a matter of looking one entry down.

use crate::board::Board;
use crate::types::{Pos, Side};
use serde::{Deserialize, Serialize};

/// A played move: the board and turn after it, plus the displacement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Move {
    pub pieces: Board,
    pub turn: Side,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from: Option<Pos>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<Pos>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub history: Vec<Move>,
    pub ai_mode: bool,
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            board: Board::opening(),
            turn: Side::Red,
            history: Vec::new(),
            ai_mode: false,
        }
    }

    /// Record a validated move: replace board and turn, append to history.
    pub fn apply(&mut self, mv: Move) {
        self.board = mv.pieces.clone();
        self.turn = mv.turn;
        self.history.push(mv);
    }

    /// Take back the newest move. Returns false (and broadcasts nothing at
    /// the call site) when there is no history. Popping the only entry
    /// resets to the opening position; otherwise the position before the
    /// popped move is recovered from the entry just beneath it.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        match self.history.last() {
            Some(prev) => {
                self.board = prev.pieces.clone();
                self.turn = prev.turn;
            }
            None => {
                self.board = Board::opening();
                self.turn = Side::Red;
            }
        }
        true
    }

    /// Reset the match to the opening position. The AI-mode flag is room
    /// configuration and survives a restart.
    pub fn restart(&mut self) {
        self.board = Board::opening();
        self.turn = Side::Red;
        self.history.clear();
    }

    pub fn toggle_ai_mode(&mut self) -> bool {
        self.ai_mode = !self.ai_mode;
        self.ai_mode
    }

    pub fn winner(&self) -> Option<Side> {
        self.board.winner()
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
