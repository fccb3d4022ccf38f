//! Castling rights and the squares involved in castling

use crate::geometry;
use crate::moves::Move;
use crate::types::{CastlingSide, Color, Coord, File};

use std::fmt;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
struct SideHistory {
    king_moved: bool,
    queen_rook_moved: bool,
    king_rook_moved: bool,
}

/// Castling rights of both sides
///
/// For each color it remembers whether the king, the queenside rook and the kingside rook have
/// ever left their initial squares. Once such a flag is set, it is never cleared, so a right lost
/// once stays lost for the rest of the game.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CastlingRights([SideHistory; 2]);

impl CastlingRights {
    /// Rights of a fresh game, where nothing has moved yet
    pub const FULL: CastlingRights = CastlingRights([SideHistory {
        king_moved: false,
        queen_rook_moved: false,
        king_rook_moved: false,
    }; 2]);

    /// Returns `true` if the king of color `c` has moved
    #[inline]
    pub const fn king_moved(&self, c: Color) -> bool {
        self.0[c.index()].king_moved
    }

    /// Returns `true` if the rook of color `c` on side `s` has moved
    #[inline]
    pub const fn rook_moved(&self, c: Color, s: CastlingSide) -> bool {
        let h = &self.0[c.index()];
        match s {
            CastlingSide::Queen => h.queen_rook_moved,
            CastlingSide::King => h.king_rook_moved,
        }
    }

    /// Returns `true` if neither the king nor the rook of side `s` has moved for color `c`
    ///
    /// Note that it doesn't mean that castling is legal now: the squares between king and rook
    /// may be occupied or attacked.
    #[inline]
    pub const fn has(&self, c: Color, s: CastlingSide) -> bool {
        !self.king_moved(c) && !self.rook_moved(c, s)
    }

    pub(crate) fn mark_king_moved(&mut self, c: Color) {
        self.0[c.index()].king_moved = true;
    }

    pub(crate) fn mark_rook_moved(&mut self, c: Color, s: CastlingSide) {
        let h = &mut self.0[c.index()];
        match s {
            CastlingSide::Queen => h.queen_rook_moved = true,
            CastlingSide::King => h.king_rook_moved = true,
        }
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "CastlingRights({})", self)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let mut any = false;
        for (c, s, ch) in [
            (Color::White, CastlingSide::King, 'K'),
            (Color::White, CastlingSide::Queen, 'Q'),
            (Color::Black, CastlingSide::King, 'k'),
            (Color::Black, CastlingSide::Queen, 'q'),
        ] {
            if self.has(c, s) {
                write!(f, "{}", ch)?;
                any = true;
            }
        }
        if !any {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[inline]
pub const fn king_src(c: Color) -> Coord {
    Coord::from_parts(File::E, geometry::castling_rank(c))
}

#[inline]
pub const fn king_dst(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(
        geometry::castling_king_dst_file(s),
        geometry::castling_rank(c),
    )
}

#[inline]
pub const fn rook_src(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(
        geometry::castling_rook_src_file(s),
        geometry::castling_rank(c),
    )
}

#[inline]
pub const fn rook_dst(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(
        geometry::castling_rook_dst_file(s),
        geometry::castling_rank(c),
    )
}

/// Squares strictly between the king and the rook, which must be empty to castle
pub fn pass(c: Color, s: CastlingSide) -> impl Iterator<Item = Coord> {
    let rank = geometry::castling_rank(c);
    let files = match s {
        CastlingSide::Queen => 1..4,
        CastlingSide::King => 5..7,
    };
    files.map(move |f| Coord::from_parts(File::from_index(f), rank))
}

/// Square the king crosses on its way to the destination
#[inline]
pub fn transit(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(
        File::from_index(
            (File::E.index() as isize + geometry::castling_file_delta(s)) as usize,
        ),
        geometry::castling_rank(c),
    )
}

/// Castling move made by `c` with side `s`
#[inline]
pub fn make_move(c: Color, s: CastlingSide) -> Move {
    Move::new(king_src(c), king_dst(c, s))
}

/// Returns the castling side if `mv` is one of the king moves of color `c` which represent
/// castling
pub fn side_of(c: Color, mv: Move) -> Option<CastlingSide> {
    if mv.src() != king_src(c) || mv.promote().is_some() {
        return None;
    }
    CastlingSide::iter().find(|&s| mv.dst() == king_dst(c, s))
}

/// Returns the rook which is bound to the home square `p`, if any
pub fn rook_at(p: Coord) -> Option<(Color, CastlingSide)> {
    [Color::White, Color::Black]
        .into_iter()
        .flat_map(|c| CastlingSide::iter().map(move |s| (c, s)))
        .find(|&(c, s)| rook_src(c, s) == p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rank;

    #[test]
    fn test_rights() {
        let mut rights = CastlingRights::FULL;
        assert_eq!(rights, CastlingRights::default());
        assert_eq!(rights.to_string(), "KQkq");

        rights.mark_rook_moved(Color::White, CastlingSide::King);
        assert!(!rights.has(Color::White, CastlingSide::King));
        assert!(rights.has(Color::White, CastlingSide::Queen));
        assert_eq!(rights.to_string(), "Qkq");

        rights.mark_king_moved(Color::Black);
        assert!(!rights.has(Color::Black, CastlingSide::King));
        assert!(!rights.has(Color::Black, CastlingSide::Queen));
        assert!(!rights.rook_moved(Color::Black, CastlingSide::Queen));
        assert_eq!(rights.to_string(), "Q");

        rights.mark_king_moved(Color::White);
        assert_eq!(rights.to_string(), "-");
    }

    #[test]
    fn test_squares() {
        assert_eq!(king_src(Color::White), Coord::from_parts(File::E, Rank::R1));
        assert_eq!(
            king_dst(Color::Black, CastlingSide::Queen),
            Coord::from_parts(File::C, Rank::R8)
        );
        assert_eq!(
            rook_dst(Color::White, CastlingSide::King),
            Coord::from_parts(File::F, Rank::R1)
        );
        assert_eq!(
            transit(Color::White, CastlingSide::Queen),
            Coord::from_parts(File::D, Rank::R1)
        );
        assert_eq!(
            transit(Color::Black, CastlingSide::King),
            Coord::from_parts(File::F, Rank::R8)
        );
        assert_eq!(
            pass(Color::White, CastlingSide::Queen)
                .map(|c| c.to_string())
                .collect::<Vec<_>>(),
            vec!["b1", "c1", "d1"]
        );
        assert_eq!(
            pass(Color::Black, CastlingSide::King)
                .map(|c| c.to_string())
                .collect::<Vec<_>>(),
            vec!["f8", "g8"]
        );
    }

    #[test]
    fn test_side_of() {
        for c in [Color::White, Color::Black] {
            for s in CastlingSide::iter() {
                assert_eq!(side_of(c, make_move(c, s)), Some(s));
                assert_eq!(side_of(c.inv(), make_move(c, s)), None);
                assert_eq!(rook_at(rook_src(c, s)), Some((c, s)));
            }
        }
        let e1 = Coord::from_parts(File::E, Rank::R1);
        let f1 = Coord::from_parts(File::F, Rank::R1);
        assert_eq!(side_of(Color::White, Move::new(e1, f1)), None);
        assert_eq!(rook_at(e1), None);
    }
}
