//! Board geometry and evaluation constants
//!
//! Centralizes the fixed numbers of the game: board dimensions, the palace
//! and river bounds that constrain generals, advisors, elephants and
//! soldiers, the piece values the computer opponent scores with, and the
//! canonical opening layout.
//!
//! Rows run 0..=9 from Red's back rank toward Black's; columns run 0..=8.
//! The river lies between rows 4 and 5: Red pieces stand on the 0..=4 bank,
//! Black on 5..=9.

use crate::types::{Piece, Role, Side};

pub const BOARD_ROWS: u8 = 10;
pub const BOARD_COLS: u8 = 9;

/// Palace column bounds, shared by both sides
pub const PALACE_COL_MIN: u8 = 3;
pub const PALACE_COL_MAX: u8 = 5;

/// Inclusive palace row bounds for a side
pub const fn palace_rows(side: Side) -> (u8, u8) {
    match side {
        Side::Red => (0, 2),
        Side::Black => (7, 9),
    }
}

/// Has a piece of `side` starting from `row` already crossed the river?
pub const fn crossed_river(side: Side, row: u8) -> bool {
    match side {
        Side::Red => row >= 5,
        Side::Black => row <= 4,
    }
}

/// May an elephant of `side` stand on `row`? They never cross the river.
pub const fn on_own_bank(side: Side, row: u8) -> bool {
    match side {
        Side::Red => row <= 4,
        Side::Black => row >= 5,
    }
}

/// Piece values used by the computer opponent's scoring
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::General => 10_000,
        Role::Chariot => 900,
        Role::Cannon => 450,
        Role::Horse => 400,
        Role::Advisor => 200,
        Role::Elephant => 200,
        Role::Soldier => 100,
    }
}

/// Capture value multiplier when scoring a candidate move
pub const CAPTURE_WEIGHT: i32 = 2;
/// Bonus for a soldier standing across the river
pub const CROSSED_SOLDIER_BONUS: i32 = 50;
/// Bonus for a destination in the three central columns
pub const CENTER_BONUS: i32 = 10;
/// Bonus for an advisor or elephant retreating toward the central columns
pub const SCREEN_GENERAL_BONUS: i32 = 30;
/// The opponent picks uniformly among this many best-scored candidates
pub const TOP_CANDIDATES: usize = 3;

/// Canonical opening layout, Red on rows 0..=3 and Black on rows 6..=9
pub const OPENING: &[(u8, u8, Piece)] = &[
    (0, 0, Piece::RedChariot),
    (0, 1, Piece::RedHorse),
    (0, 2, Piece::RedElephant),
    (0, 3, Piece::RedAdvisor),
    (0, 4, Piece::RedGeneral),
    (0, 5, Piece::RedAdvisor),
    (0, 6, Piece::RedElephant),
    (0, 7, Piece::RedHorse),
    (0, 8, Piece::RedChariot),
    (2, 1, Piece::RedCannon),
    (2, 7, Piece::RedCannon),
    (3, 0, Piece::RedSoldier),
    (3, 2, Piece::RedSoldier),
    (3, 4, Piece::RedSoldier),
    (3, 6, Piece::RedSoldier),
    (3, 8, Piece::RedSoldier),
    (6, 0, Piece::BlackSoldier),
    (6, 2, Piece::BlackSoldier),
    (6, 4, Piece::BlackSoldier),
    (6, 6, Piece::BlackSoldier),
    (6, 8, Piece::BlackSoldier),
    (7, 1, Piece::BlackCannon),
    (7, 7, Piece::BlackCannon),
    (9, 0, Piece::BlackChariot),
    (9, 1, Piece::BlackHorse),
    (9, 2, Piece::BlackElephant),
    (9, 3, Piece::BlackAdvisor),
    (9, 4, Piece::BlackGeneral),
    (9, 5, Piece::BlackAdvisor),
    (9, 6, Piece::BlackElephant),
    (9, 7, Piece::BlackHorse),
    (9, 8, Piece::BlackChariot),
];
