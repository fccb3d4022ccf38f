use super::uci;
use crate::types::{Coord, Piece};

use std::fmt;
use std::str::FromStr;

/// Target piece for promotion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotePiece {
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl PromotePiece {
    /// All the promotion targets, in the order they are generated
    pub const ALL: [PromotePiece; 4] = [
        PromotePiece::Queen,
        PromotePiece::Rook,
        PromotePiece::Bishop,
        PromotePiece::Knight,
    ];
}

impl From<PromotePiece> for Piece {
    #[inline]
    fn from(p: PromotePiece) -> Self {
        match p {
            PromotePiece::Knight => Piece::Knight,
            PromotePiece::Bishop => Piece::Bishop,
            PromotePiece::Rook => Piece::Rook,
            PromotePiece::Queen => Piece::Queen,
        }
    }
}

impl TryFrom<Piece> for PromotePiece {
    type Error = ();

    #[inline]
    fn try_from(p: Piece) -> Result<Self, Self::Error> {
        match p {
            Piece::Knight => Ok(PromotePiece::Knight),
            Piece::Bishop => Ok(PromotePiece::Bishop),
            Piece::Rook => Ok(PromotePiece::Rook),
            Piece::Queen => Ok(PromotePiece::Queen),
            _ => Err(()),
        }
    }
}

/// Chess move
///
/// A move is just a pair of squares plus an optional promotion target. It carries no
/// information about the position it was made in, so the same value may be legal in one
/// position and illegal in another. Castling is represented as a king move by two squares,
/// the rook relocation is implied.
///
/// Moves compare equal iff all three fields are equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
    promote: Option<PromotePiece>,
}

impl Move {
    /// Creates a move without promotion
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move {
            src,
            dst,
            promote: None,
        }
    }

    /// Creates a move with the given promotion target
    #[inline]
    pub const fn with_promote(src: Coord, dst: Coord, promote: PromotePiece) -> Move {
        Move {
            src,
            dst,
            promote: Some(promote),
        }
    }

    /// Creates a move from its raw parts
    #[inline]
    pub const fn from_parts(src: Coord, dst: Coord, promote: Option<PromotePiece>) -> Move {
        Move { src, dst, promote }
    }

    /// Returns the move source square
    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    /// Returns the move destination square
    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Returns the promotion target, if any
    #[inline]
    pub const fn promote(&self) -> Option<PromotePiece> {
        self.promote
    }

    /// Converts this move into its coordinate notation
    #[inline]
    pub fn uci(&self) -> uci::Move {
        (*self).into()
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.uci().fmt(f)
    }
}

impl FromStr for Move {
    type Err = uci::ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Move, Self::Err> {
        Ok(uci::Move::from_str(s)?.into())
    }
}
