//! Error taxonomy for room operations
//!
//! Every variant surfaces to the offending connection as an
//! `error { message }` envelope; none of them terminate the connection
//! or the process.

use thiserror::Error;
use xiangqi_engine::Pos;

/// Errors that room operations report back to the requesting client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("room {0} not found")]
    RoomNotFound(String),

    #[error("room {0} is full")]
    RoomFull(String),

    #[error("nickname {0:?} is already taken")]
    DuplicateIdentity(String),

    #[error("you are not seated in this room")]
    NotSeated,

    #[error("waiting for an opponent to join")]
    NotEnoughPlayers,

    #[error("not your turn")]
    NotYourTurn,

    #[error("no piece at {0}")]
    NoPieceAt(Pos),

    #[error("the piece at {0} is not yours")]
    NotYourPiece(Pos),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Pos, to: Pos },

    #[error("only the red player can toggle the computer opponent")]
    Unauthorized,
}

pub type RoomResult<T> = Result<T, RoomError>;
