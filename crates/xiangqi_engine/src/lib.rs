//! Xiangqi (Chinese Chess) game core
//!
//! Pure game logic with no I/O or transport knowledge:
//! - Board, piece and position types shared with the wire protocol
//! - Per-piece move legality (the rule engine)
//! - Game state transitions (apply / undo / restart) with a move ledger
//! - A heuristic computer opponent
//!
//! The board is a 10x9 grid. Red owns rows 0..=4 at game start and its
//! soldiers advance toward increasing rows; Black mirrors from the other
//! bank of the river.

pub mod ai;
pub mod board;
pub mod constants;
pub mod error;
pub mod rules;
pub mod state;
pub mod types;

pub use ai::choose_move;
pub use board::Board;
pub use error::{ParsePieceError, ParsePosError};
pub use rules::is_legal;
pub use state::{GameState, Move};
pub use types::{Piece, Pos, Role, Side};
