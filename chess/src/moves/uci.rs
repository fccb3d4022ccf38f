//! Utilities to work with moves in coordinate notation (like `e2e4` or `e7e8q`)

use super::base::{self, PromotePiece};
use crate::types::{Coord, CoordParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move in coordinate notation
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
    /// Bad promote character
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

/// Parsed move in coordinate notation
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// Source square
    pub src: Coord,
    /// Destination square
    pub dst: Coord,
    /// Piece to promote, if any
    pub promote: Option<PromotePiece>,
}

impl From<base::Move> for Move {
    #[inline]
    fn from(mv: base::Move) -> Move {
        Move {
            src: mv.src(),
            dst: mv.dst(),
            promote: mv.promote(),
        }
    }
}

impl From<Move> for base::Move {
    #[inline]
    fn from(mv: Move) -> base::Move {
        base::Move::from_parts(mv.src, mv.dst, mv.promote)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)?;
        match self.promote {
            Some(PromotePiece::Knight) => write!(f, "n")?,
            Some(PromotePiece::Bishop) => write!(f, "b")?,
            Some(PromotePiece::Rook) => write!(f, "r")?,
            Some(PromotePiece::Queen) => write!(f, "q")?,
            None => {}
        };
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(ParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(ParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(ParseError::BadDst)?;
        let promote = if s.len() == 5 {
            Some(match s.as_bytes()[4] {
                b'n' => PromotePiece::Knight,
                b'b' => PromotePiece::Bishop,
                b'r' => PromotePiece::Rook,
                b'q' => PromotePiece::Queen,
                b => return Err(ParseError::BadPromote(b as char)),
            })
        } else {
            None
        };
        Ok(Move { src, dst, promote })
    }
}
