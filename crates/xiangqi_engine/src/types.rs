//! Core types: sides, pieces and board positions
//!
//! Pieces carry their traditional character on the wire, one symbol set per
//! side, so a piece's side is derived from its variant rather than stored
//! next to it. Positions serialize as the `"row-col"` string keys the wire
//! format uses for board maps.

use crate::error::{ParsePieceError, ParsePosError};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the two opposing factions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a forward step for this side
    pub const fn forward(self) -> i16 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// The seven piece roles, shared by both sides' symbol sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    General,
    Advisor,
    Elephant,
    Chariot,
    Horse,
    Cannon,
    Soldier,
}

/// A piece on the board, one variant per (side, role) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    RedGeneral,
    RedAdvisor,
    RedElephant,
    RedChariot,
    RedHorse,
    RedCannon,
    RedSoldier,
    BlackGeneral,
    BlackAdvisor,
    BlackElephant,
    BlackChariot,
    BlackHorse,
    BlackCannon,
    BlackSoldier,
}

impl Piece {
    pub const fn side(self) -> Side {
        match self {
            Piece::RedGeneral
            | Piece::RedAdvisor
            | Piece::RedElephant
            | Piece::RedChariot
            | Piece::RedHorse
            | Piece::RedCannon
            | Piece::RedSoldier => Side::Red,
            _ => Side::Black,
        }
    }

    pub const fn role(self) -> Role {
        match self {
            Piece::RedGeneral | Piece::BlackGeneral => Role::General,
            Piece::RedAdvisor | Piece::BlackAdvisor => Role::Advisor,
            Piece::RedElephant | Piece::BlackElephant => Role::Elephant,
            Piece::RedChariot | Piece::BlackChariot => Role::Chariot,
            Piece::RedHorse | Piece::BlackHorse => Role::Horse,
            Piece::RedCannon | Piece::BlackCannon => Role::Cannon,
            Piece::RedSoldier | Piece::BlackSoldier => Role::Soldier,
        }
    }

    /// The traditional character used on the wire
    pub const fn symbol(self) -> char {
        match self {
            Piece::RedGeneral => '帥',
            Piece::RedAdvisor => '仕',
            Piece::RedElephant => '相',
            Piece::RedChariot => '車',
            Piece::RedHorse => '馬',
            Piece::RedCannon => '炮',
            Piece::RedSoldier => '卒',
            Piece::BlackGeneral => '将',
            Piece::BlackAdvisor => '士',
            Piece::BlackElephant => '象',
            Piece::BlackChariot => '车',
            Piece::BlackHorse => '马',
            Piece::BlackCannon => '砲',
            Piece::BlackSoldier => '兵',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Piece> {
        Some(match symbol {
            '帥' => Piece::RedGeneral,
            '仕' => Piece::RedAdvisor,
            '相' => Piece::RedElephant,
            '車' => Piece::RedChariot,
            '馬' => Piece::RedHorse,
            '炮' => Piece::RedCannon,
            '卒' => Piece::RedSoldier,
            '将' => Piece::BlackGeneral,
            '士' => Piece::BlackAdvisor,
            '象' => Piece::BlackElephant,
            '车' => Piece::BlackChariot,
            '马' => Piece::BlackHorse,
            '砲' => Piece::BlackCannon,
            '兵' => Piece::BlackSoldier,
            _ => return None,
        })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_symbol(c).ok_or_else(|| ParsePieceError(s.to_string())),
            _ => Err(ParsePieceError(s.to_string())),
        }
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol().encode_utf8(&mut [0; 4]))
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PieceVisitor;

        impl Visitor<'_> for PieceVisitor {
            type Value = Piece;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a single xiangqi piece character")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Piece, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PieceVisitor)
    }
}

/// A board cell: row 0..=9, column 0..=8
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePosError::Malformed(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(malformed)?;
        let row: u32 = row.parse().map_err(|_| malformed())?;
        let col: u32 = col.parse().map_err(|_| malformed())?;
        if row > 9 || col > 8 {
            return Err(ParsePosError::OutOfRange { row, col });
        }
        Ok(Pos::new(row as u8, col as u8))
    }
}

impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PosVisitor;

        impl Visitor<'_> for PosVisitor {
            type Value = Pos;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a \"row-col\" position key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Pos, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PosVisitor)
    }
}
