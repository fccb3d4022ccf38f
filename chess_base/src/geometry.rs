use crate::types::{CastlingSide, Color, File, Rank};

pub const fn castling_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn castling_rook_src_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::A,
        CastlingSide::King => File::H,
    }
}

pub const fn castling_rook_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::D,
        CastlingSide::King => File::F,
    }
}

pub const fn castling_king_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::C,
        CastlingSide::King => File::G,
    }
}

pub const fn castling_file_delta(s: CastlingSide) -> isize {
    match s {
        CastlingSide::Queen => -1,
        CastlingSide::King => 1,
    }
}

pub const fn double_move_src_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

pub const fn promote_dst_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}
