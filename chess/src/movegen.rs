//! Pseudo-legal move generation
//!
//! Functions in this module only look at the piece geometry and the occupancy of the board.
//! They don't check whether the king of the moving side remains under attack; see
//! [`legal`](crate::legal) for that.

use crate::board::Board;
use crate::geometry;
use crate::moves::{Move, PromotePiece};
use crate::types::{Color, Coord, Piece};

use std::slice;

use arrayvec::ArrayVec;
use derive_more::{Deref, DerefMut};

const DIAG_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const LINE_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_DELTAS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Maximum number of moves a single piece can have
///
/// A queen in the center has 27 moves, and a pawn may have up to 12 because of promotions.
/// Castling adds two more moves to the king's eight.
pub const MAX_PIECE_MOVES: usize = 32;

/// List of moves of a single piece
#[derive(Default, Debug, Clone, Eq, PartialEq, Deref, DerefMut)]
pub struct MoveList(ArrayVec<Move, MAX_PIECE_MOVES>);

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_PIECE_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        Vec::push(self, m);
    }
}

struct MoveGen<'a, P> {
    board: &'a Board,
    color: Color,
    src: Coord,
    dst: &'a mut P,
}

impl<'a, P: MovePush> MoveGen<'a, P> {
    fn add_move(&mut self, dst: Coord) {
        self.dst.push(Move::new(self.src, dst));
    }

    fn gen_slide(&mut self, dirs: &[(isize, isize)]) {
        for &(df, dr) in dirs {
            let mut cur = self.src;
            while let Some(next) = cur.try_shift(df, dr) {
                let cell = self.board.get(next);
                if cell.is_free() {
                    self.add_move(next);
                    cur = next;
                    continue;
                }
                if !cell.has_color(self.color) {
                    self.add_move(next);
                }
                break;
            }
        }
    }

    fn gen_leap(&mut self, deltas: &[(isize, isize)]) {
        for &(df, dr) in deltas {
            if let Some(next) = self.src.try_shift(df, dr) {
                if !self.board.get(next).has_color(self.color) {
                    self.add_move(next);
                }
            }
        }
    }

    fn add_pawn_move(&mut self, dst: Coord) {
        if dst.rank() == geometry::promote_dst_rank(self.color) {
            for p in PromotePiece::ALL {
                self.dst.push(Move::with_promote(self.src, dst, p));
            }
        } else {
            self.add_move(dst);
        }
    }

    fn gen_pawn(&mut self) {
        let forward = geometry::pawn_forward_delta(self.color);

        if let Some(single) = self.src.try_shift(0, forward) {
            if self.board.get(single).is_free() {
                self.add_pawn_move(single);
                if self.src.rank() == geometry::double_move_src_rank(self.color) {
                    if let Some(double) = single.try_shift(0, forward) {
                        if self.board.get(double).is_free() {
                            self.add_move(double);
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            if let Some(dst) = self.src.try_shift(side, forward) {
                if self.board.get(dst).has_color(self.color.inv()) {
                    self.add_pawn_move(dst);
                }
            }
        }
    }

    fn gen(&mut self, piece: Piece) {
        match piece {
            Piece::Bishop => self.gen_slide(&DIAG_DIRS),
            Piece::Rook => self.gen_slide(&LINE_DIRS),
            Piece::Queen => {
                self.gen_slide(&DIAG_DIRS);
                self.gen_slide(&LINE_DIRS);
            }
            Piece::Knight => self.gen_leap(&KNIGHT_DELTAS),
            Piece::King => self.gen_leap(&KING_DELTAS),
            Piece::Pawn => self.gen_pawn(),
        }
    }
}

/// Generates pseudo-legal moves of the piece on `src` into `dst`
///
/// Nothing is generated if `src` is empty. Castling is never generated here, as it depends on
/// the game history rather than on the board only.
pub fn piece_moves_into<P: MovePush>(b: &Board, src: Coord, dst: &mut P) {
    let Some((color, piece)) = piece_at(b, src) else {
        return;
    };
    MoveGen {
        board: b,
        color,
        src,
        dst,
    }
    .gen(piece);
}

/// Returns pseudo-legal moves of the piece on `src`
///
/// The order of the moves is unspecified.
pub fn piece_moves(b: &Board, src: Coord) -> MoveList {
    let mut res = MoveList::new();
    piece_moves_into(b, src, &mut res);
    res
}

/// Returns pseudo-legal moves of all the pieces of color `c`
pub fn side_moves(b: &Board, c: Color) -> Vec<Move> {
    let mut res = Vec::new();
    for (p, cell) in b.iter() {
        if cell.has_color(c) {
            piece_moves_into(b, p, &mut res);
        }
    }
    res
}

/// Returns `true` if some piece of color `c` has a pseudo-legal move to `dst`
pub fn is_reachable_by(b: &Board, dst: Coord, c: Color) -> bool {
    b.iter()
        .filter(|(_, cell)| cell.has_color(c))
        .any(|(p, _)| piece_moves(b, p).iter().any(|mv| mv.dst() == dst))
}

/// Returns the color and the kind of the piece on `p`, or `None` if the square is empty
pub fn piece_at(b: &Board, p: Coord) -> Option<(Color, Piece)> {
    let cell = b.get(p);
    Some((cell.color()?, cell.piece()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, File, Rank};
    use std::collections::BTreeSet;

    fn lone(cell: Cell, p: Coord) -> Board {
        let mut b = Board::empty();
        b.put(p, cell);
        b
    }

    fn move_strs(ml: &MoveList) -> BTreeSet<String> {
        ml.iter().map(ToString::to_string).collect()
    }

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn test_lone_rook() {
        let rook = Cell::from_parts(Color::White, Piece::Rook);
        for p in Coord::iter() {
            assert_eq!(piece_moves(&lone(rook, p), p).len(), 14);
        }
    }

    #[test]
    fn test_lone_bishop() {
        let bishop = Cell::from_parts(Color::Black, Piece::Bishop);
        let d4 = Coord::from_numbers(4, 4);
        assert_eq!(piece_moves(&lone(bishop, d4), d4).len(), 13);
        let a1 = Coord::from_parts(File::A, Rank::R1);
        assert_eq!(piece_moves(&lone(bishop, a1), a1).len(), 7);
    }

    #[test]
    fn test_lone_queen() {
        let queen = Cell::from_parts(Color::White, Piece::Queen);
        let d4 = coord("d4");
        assert_eq!(piece_moves(&lone(queen, d4), d4).len(), 27);
    }

    #[test]
    fn test_knight() {
        let knight = Cell::from_parts(Color::White, Piece::Knight);
        let b1 = Coord::from_numbers(1, 2);
        assert_eq!(piece_moves(&lone(knight, b1), b1).len(), 3);
        let c2 = Coord::from_numbers(2, 3);
        assert_eq!(piece_moves(&lone(knight, c2), c2).len(), 6);

        let d4 = coord("d4");
        assert_eq!(piece_moves(&lone(knight, d4), d4).len(), 8);

        let mut b = lone(knight, d4);
        for dst in piece_moves(&b, d4) {
            b.put(dst.dst(), Cell::from_parts(Color::White, Piece::Pawn));
        }
        assert!(piece_moves(&b, d4).is_empty());

        b.put(coord("e6"), Cell::from_parts(Color::Black, Piece::Pawn));
        assert_eq!(move_strs(&piece_moves(&b, d4)), BTreeSet::from(["d4e6".to_string()]));
    }

    #[test]
    fn test_king() {
        let b = Board::from_fen_cells("8/8/8/8/8/8/3pP3/3K4").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("d1"))),
            ["d1c1", "d1c2", "d1d2", "d1e1"]
                .into_iter()
                .map(String::from)
                .collect()
        );
    }

    #[test]
    fn test_blocking() {
        let b = Board::from_fen_cells("8/8/3p4/8/1P1R2p1/8/8/3N4").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("d4"))),
            ["d4c4", "d4e4", "d4f4", "d4g4", "d4d5", "d4d6", "d4d3", "d4d2"]
                .into_iter()
                .map(String::from)
                .collect()
        );
    }

    #[test]
    fn test_pawns() {
        let b = Board::initial();
        for file in File::iter() {
            assert_eq!(piece_moves(&b, Coord::from_parts(file, Rank::R2)).len(), 2);
            assert_eq!(piece_moves(&b, Coord::from_parts(file, Rank::R7)).len(), 2);
        }

        let b = Board::from_fen_cells("8/8/8/8/8/4p3/4P3/8").unwrap();
        assert!(piece_moves(&b, coord("e2")).is_empty());
        assert!(piece_moves(&b, coord("e3")).is_empty());

        let b = Board::from_fen_cells("8/8/8/8/4p3/8/4P3/8").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("e2"))),
            BTreeSet::from(["e2e3".to_string()])
        );

        let b = Board::from_fen_cells("8/8/8/8/8/3p1P2/4P3/8").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("e2"))),
            ["e2e3", "e2e4", "e2d3"].into_iter().map(String::from).collect()
        );

        let b = Board::from_fen_cells("8/4p3/3P1P2/8/8/8/8/8").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("e7"))),
            ["e7e6", "e7e5", "e7d6", "e7f6"].into_iter().map(String::from).collect()
        );
    }

    #[test]
    fn test_promote() {
        let b = Board::from_fen_cells("8/4P3/8/8/8/8/8/8").unwrap();
        let moves = piece_moves(&b, coord("e7"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.dst() == coord("e8")));
        assert!(moves.iter().all(|mv| mv.promote().is_some()));

        let b = Board::from_fen_cells("3r1n2/4P3/8/8/8/8/8/8").unwrap();
        assert_eq!(piece_moves(&b, coord("e7")).len(), 12);

        let b = Board::from_fen_cells("3rrn2/4P3/8/8/8/8/8/8").unwrap();
        assert_eq!(piece_moves(&b, coord("e7")).len(), 8);

        let b = Board::from_fen_cells("8/8/8/8/8/8/1p6/R7").unwrap();
        assert_eq!(
            move_strs(&piece_moves(&b, coord("b2"))),
            [
                "b2b1q", "b2b1r", "b2b1b", "b2b1n", "b2a1q", "b2a1r", "b2a1b", "b2a1n"
            ]
            .into_iter()
            .map(String::from)
            .collect()
        );
    }

    #[test]
    fn test_side_moves() {
        let b = Board::initial();
        assert_eq!(side_moves(&b, Color::White).len(), 20);
        assert_eq!(side_moves(&b, Color::Black).len(), 20);
        assert!(piece_moves(&b, coord("e4")).is_empty());
    }

    #[test]
    fn test_reachable() {
        let b = Board::from_fen_cells("8/8/8/8/8/8/4p3/3K4").unwrap();
        assert!(is_reachable_by(&b, coord("d1"), Color::Black));
        assert!(!is_reachable_by(&b, coord("f1"), Color::Black));
        assert!(!is_reachable_by(&b, coord("f3"), Color::Black));
        assert!(is_reachable_by(&b, coord("e2"), Color::White));
    }
}
