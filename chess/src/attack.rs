//! Check detection

use crate::board::Board;
use crate::movegen;
use crate::types::{Cell, Color, Coord, Piece};

/// Returns `true` if the king of color `c` is attacked on board `b`
///
/// The king is attacked if some piece of the opposite color has a pseudo-legal move onto its
/// square. If `c` has no king on the board, it is never in check.
pub fn is_in_check(b: &Board, c: Color) -> bool {
    match b.king_pos(c) {
        Some(king) => movegen::is_reachable_by(b, king, c.inv()),
        None => false,
    }
}

/// Returns `true` if the king of color `c` would be attacked after stepping from `src` onto
/// the empty square `dst`
///
/// The board itself is not modified; the step is made on a local copy.
pub fn is_king_step_attacked(b: &Board, c: Color, src: Coord, dst: Coord) -> bool {
    let mut scratch = *b;
    scratch.put(src, Cell::EMPTY);
    scratch.put(dst, Cell::from_parts(c, Piece::King));
    is_in_check(&scratch, c)
}
