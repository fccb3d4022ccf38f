//! Board and related things

use crate::types::{Cell, Color, Coord, File, Piece, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the piece placement part of FEN
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Chess board
///
/// The board is a passive grid which maps each square to its contents. It doesn't know whose
/// turn it is and enforces no invariants: there may be any number of kings, pawns on the last
/// ranks, and so on. Chess rules live in [`Game`](crate::game::Game), which owns a board.
///
/// Cloning the board yields a fully independent copy, so a clone may be freely modified to
/// test hypothetical moves.
///
/// # Example
///
/// ```
/// # use chessrules::{Board, Cell, Color, Coord, File, Piece, Rank};
/// #
/// let mut b = Board::empty();
/// b.put2(File::B, Rank::R2, Cell::from_parts(Color::White, Piece::King));
/// b.put2(File::D, Rank::R5, Cell::from_parts(Color::Black, Piece::King));
/// assert_eq!(b.as_fen_cells(), "8/8/8/3k4/8/8/1K6/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Returns an empty board
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        res.reset();
        res
    }

    /// Replaces the contents of the board with the initial position
    pub fn reset(&mut self) {
        self.cells = [Cell::EMPTY; 64];
        for file in File::iter() {
            self.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            self.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            self.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            self.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            self.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            self.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            self.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            self.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            self.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            self.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
    }

    /// Parses a board from the piece placement part of FEN
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_fen_cells(s: &str) -> Result<Board, CellsParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    ///
    /// Putting [`Cell::EMPTY`] clears the square.
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Iterates over all the occupied squares together with their contents
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, cell)| cell.is_occupied())
    }

    /// Returns the position of the king of color `c`
    ///
    /// If there are several such kings, the one on the lowest square index is returned. If
    /// there are none, returns `None`.
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        let king = Cell::from_parts(c, Piece::King);
        Coord::iter().find(|&p| self.get(p) == king)
    }

    /// Converts the board into the piece placement part of FEN
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_fen_cells(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

fn parse_cells(s: &str) -> Result<[Cell; 64], CellsParseError> {
    type Error = CellsParseError;

    // FEN lists ranks from the eighth to the first
    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut cells = [Cell::EMPTY; 64];
    let rank_of = |idx: usize| Rank::from_index(7 - idx);
    for b in s.bytes() {
        match b {
            b'1'..=b'8' => {
                let add = (b - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(rank_of(rank)));
                }
                file += add;
            }
            b'/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(rank_of(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(rank_of(rank)));
                }
                let cell = Cell::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                cells[Coord::from_parts(File::from_index(file), rank_of(rank)).index()] = cell;
                file += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(rank_of(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = CellsParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(Board {
            cells: parse_cells(s)?,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            if rank != Rank::R8 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let cell = self.get2(file, rank);
                if cell.is_free() {
                    empty += 1;
                    continue;
                }
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", cell)?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}
