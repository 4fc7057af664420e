//! Error types for the xiangqi engine
//!
//! Parsing the wire forms of positions and pieces is the only fallible
//! surface here; the rule engine itself answers with plain booleans.

use thiserror::Error;

/// Errors from parsing a `"row-col"` position key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePosError {
    #[error("position key must look like \"row-col\", got {0:?}")]
    Malformed(String),

    #[error("position {row}-{col} is off the board (rows 0-9, columns 0-8)")]
    OutOfRange { row: u32, col: u32 },
}

/// Error from parsing a piece symbol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown piece symbol {0:?}")]
pub struct ParsePieceError(pub String);
