//! Legal move generation
//!
//! A move is legal if it is pseudo-legal and the king of the moving side is not attacked after
//! the move is made. Each candidate is tried on a local copy of the board, so the board passed
//! by the caller is never changed.

use crate::attack;
use crate::board::Board;
use crate::castling::{self, CastlingRights};
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::{CastlingSide, Cell, Color, Coord, Piece};

use thiserror::Error;

/// Error indicating that a move cannot be made
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum InvalidMove {
    /// There is no piece on the given square
    #[error("no piece on square {0}")]
    EmptySquare(Coord),
    /// The piece belongs to the side which is not on move
    #[error("piece of color {actual:?} cannot move while {expected:?} is to move")]
    WrongSide { expected: Color, actual: Color },
    /// The move is not among the legal moves of the piece
    #[error("move {0} is not legal")]
    NotLegal(Move),
}

/// Applies `mv` to board `b`, ignoring castling
///
/// The piece on the source square is moved to the destination (or replaced with the promoted
/// piece), and the source square is cleared.
pub(crate) fn apply_simple(b: &mut Board, mv: Move) {
    let cell = b.get(mv.src());
    let placed = match (cell.color(), mv.promote()) {
        (Some(color), Some(p)) => Cell::from_parts(color, p.into()),
        _ => cell,
    };
    b.put(mv.src(), Cell::EMPTY);
    b.put(mv.dst(), placed);
}

/// Returns `true` if the king of color `c` is not attacked after `mv`
pub fn is_safe(b: &Board, c: Color, mv: Move) -> bool {
    let mut scratch = *b;
    apply_simple(&mut scratch, mv);
    !attack::is_in_check(&scratch, c)
}

/// Returns `true` if color `c` may castle to side `s` now
pub fn can_castle(b: &Board, rights: &CastlingRights, c: Color, s: CastlingSide) -> bool {
    let king_src = castling::king_src(c);
    if !rights.has(c, s)
        || b.get(king_src) != Cell::from_parts(c, Piece::King)
        || b.get(castling::rook_src(c, s)) != Cell::from_parts(c, Piece::Rook)
    {
        return false;
    }
    if castling::pass(c, s).any(|p| b.get(p).is_occupied()) {
        return false;
    }
    !attack::is_in_check(b, c)
        && !attack::is_king_step_attacked(b, c, king_src, castling::transit(c, s))
        && !attack::is_king_step_attacked(b, c, king_src, castling::king_dst(c, s))
}

/// Returns legal moves of the piece on `src`
///
/// Castling moves are included for the king standing on its initial square if `rights` and the
/// position allow them.
///
/// Returns [`InvalidMove::EmptySquare`] if there is no piece on `src`.
pub fn legal_moves(
    b: &Board,
    rights: &CastlingRights,
    src: Coord,
) -> Result<MoveList, InvalidMove> {
    let (color, piece) = movegen::piece_at(b, src).ok_or(InvalidMove::EmptySquare(src))?;

    let mut res = movegen::piece_moves(b, src);
    res.retain(|mv| is_safe(b, color, *mv));

    if piece == Piece::King && src == castling::king_src(color) {
        for s in CastlingSide::iter() {
            if can_castle(b, rights, color, s) {
                res.push(castling::make_move(color, s));
            }
        }
    }

    Ok(res)
}

/// Returns `true` if color `c` has at least one legal move
pub fn has_legal_moves(b: &Board, rights: &CastlingRights, c: Color) -> bool {
    b.iter()
        .filter(|(_, cell)| cell.has_color(c))
        .any(|(p, _)| matches!(legal_moves(b, rights, p), Ok(ml) if !ml.is_empty()))
}

/// Returns legal moves of all the pieces of color `c`
pub fn side_legal_moves(b: &Board, rights: &CastlingRights, c: Color) -> Vec<Move> {
    let mut res = Vec::new();
    for (p, cell) in b.iter() {
        if !cell.has_color(c) {
            continue;
        }
        if let Ok(ml) = legal_moves(b, rights, p) {
            res.extend(ml);
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    fn legal_strs(b: &Board, p: &str) -> BTreeSet<String> {
        legal_moves(b, &CastlingRights::FULL, coord(p))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn strs(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        let b = Board::initial();
        assert_eq!(
            legal_moves(&b, &CastlingRights::FULL, coord("e4")),
            Err(InvalidMove::EmptySquare(coord("e4")))
        );
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        let rights = CastlingRights::FULL;
        assert_eq!(side_legal_moves(&b, &rights, Color::White).len(), 20);
        assert_eq!(side_legal_moves(&b, &rights, Color::Black).len(), 20);
        assert!(has_legal_moves(&b, &rights, Color::White));
        assert!(legal_strs(&b, "e1").is_empty());
        assert_eq!(legal_strs(&b, "g1"), strs(&["g1f3", "g1h3"]));
    }

    #[test]
    fn test_pinned() {
        // The knight on d2 is pinned by the bishop on b4
        let b = Board::from_fen_cells("4k3/8/8/8/1b6/8/3N4/4K3").unwrap();
        assert_eq!(movegen::piece_moves(&b, coord("d2")).len(), 6);
        assert!(legal_strs(&b, "d2").is_empty());

        // The rook is pinned along the file, but still may slide along it
        let b = Board::from_fen_cells("4r1k1/8/8/8/8/8/4R3/4K3").unwrap();
        assert_eq!(
            legal_strs(&b, "e2"),
            strs(&["e2e3", "e2e4", "e2e5", "e2e6", "e2e7", "e2e8"])
        );
    }

    #[test]
    fn test_evasions() {
        // Only capturing the checker or blocking helps
        let b = Board::from_fen_cells("4r1k1/8/8/8/8/8/8/B3K2R").unwrap();
        assert!(legal_strs(&b, "h1").is_empty());
        assert_eq!(
            legal_strs(&b, "e1"),
            strs(&["e1d1", "e1d2", "e1f1", "e1f2"])
        );
        assert_eq!(legal_strs(&b, "a1"), strs(&["a1e5"]));

        let b = Board::from_fen_cells("4r1k1/8/8/8/8/8/5N2/4K3").unwrap();
        assert_eq!(legal_strs(&b, "f2"), strs(&["f2e4"]));
    }

    #[test]
    fn test_king_cannot_capture_guarded() {
        let b = Board::from_fen_cells("6k1/8/8/8/8/8/3rr3/4K3").unwrap();
        assert_eq!(legal_strs(&b, "e1"), strs(&["e1f1"]));
    }

    #[test]
    fn test_promote_legal() {
        let b = Board::from_fen_cells("7k/4P3/8/8/8/8/8/K7").unwrap();
        let moves = legal_moves(&b, &CastlingRights::FULL, coord("e7")).unwrap();
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.dst() == coord("e8") && mv.promote().is_some()));
    }

    #[test]
    fn test_castling() {
        let b = Board::from_fen_cells("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let rights = CastlingRights::FULL;
        let white = legal_strs(&b, "e1");
        assert!(white.contains("e1g1"));
        assert!(white.contains("e1c1"));
        let black = legal_strs(&b, "e8");
        assert!(black.contains("e8g8"));
        assert!(black.contains("e8c8"));

        let mut lost = rights;
        lost.mark_rook_moved(Color::White, CastlingSide::King);
        let ml = legal_moves(&b, &lost, coord("e1")).unwrap();
        assert!(!ml.contains(&castling::make_move(Color::White, CastlingSide::King)));
        assert!(ml.contains(&castling::make_move(Color::White, CastlingSide::Queen)));

        lost.mark_king_moved(Color::White);
        assert!(!can_castle(&b, &lost, Color::White, CastlingSide::Queen));
        assert!(can_castle(&b, &lost, Color::Black, CastlingSide::Queen));
    }

    #[test]
    fn test_castling_blocked() {
        let rights = CastlingRights::FULL;

        // Piece between king and rook; b1 matters for queenside even though the king doesn't
        // pass it
        let b = Board::from_fen_cells("4k3/8/8/8/8/8/8/RN2K1NR").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::Queen));
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));

        // Transit square attacked
        let b = Board::from_fen_cells("4kr2/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));
        assert!(can_castle(&b, &rights, Color::White, CastlingSide::Queen));

        // Destination attacked
        let b = Board::from_fen_cells("2r1k3/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::Queen));
        assert!(can_castle(&b, &rights, Color::White, CastlingSide::King));

        // Only the rook passes the attacked square b1, which is fine
        let b = Board::from_fen_cells("1r2k3/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(can_castle(&b, &rights, Color::White, CastlingSide::Queen));

        // King in check
        let b = Board::from_fen_cells("4r1k1/8/8/8/8/8/8/R3K2R").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::Queen));
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));

        // Pawn attacks on the transit square count, pawn pushes don't
        let b = Board::from_fen_cells("4k3/8/8/8/8/8/4p3/R3K2R").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::Queen));
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));
        let b = Board::from_fen_cells("4k3/8/8/8/8/8/6p1/R3K2R").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));
        let b = Board::from_fen_cells("4k3/8/8/8/8/6p1/8/R3K2R").unwrap();
        assert!(can_castle(&b, &rights, Color::White, CastlingSide::King));

        // No rook on its initial square
        let b = Board::from_fen_cells("4k3/8/8/8/8/8/8/4K1R1").unwrap();
        assert!(!can_castle(&b, &rights, Color::White, CastlingSide::King));
    }
}
