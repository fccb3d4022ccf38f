//! Game state: the board, the side to move and castling rights

use crate::attack;
use crate::board::Board;
use crate::castling::{self, CastlingRights};
use crate::legal::{self, InvalidMove};
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::{Cell, Color, Coord, Piece};

use log::{debug, trace};

/// Status of the side to move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, and there are legal moves
    Running,
    /// In check, but there are legal moves
    Check,
    /// In check, and there are no legal moves
    Checkmate,
    /// Not in check, and there are no legal moves
    Stalemate,
}

/// Chess game
///
/// The game owns a [`Board`], remembers whose turn it is and tracks castling rights. All the
/// queries (legal moves, check, checkmate, stalemate) are computed from scratch on each call and
/// never change the game. The only way to advance the game is [`Game::make_move()`].
///
/// The game never stops by itself: after checkmate or stalemate it is up to the caller to stop
/// making moves.
///
/// # Example
///
/// ```
/// # use chessrules::{Game, GameStatus, Color, Move};
/// #
/// let mut game = Game::new();
/// for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
///     game.make_move(mv.parse::<Move>().unwrap()).unwrap();
/// }
/// assert!(game.is_in_checkmate(Color::White));
/// assert_eq!(game.status(), GameStatus::Checkmate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    side: Color,
    castling: CastlingRights,
}

impl Game {
    /// Creates a game with the initial position and White to move
    pub fn new() -> Game {
        Game::with_board(Board::initial(), Color::White)
    }

    /// Creates a game with the given position and side to move
    ///
    /// The position is not validated. Castling rights are full, so castling is possible as soon
    /// as the kings and the rooks stand on their initial squares.
    pub fn with_board(board: Board, side: Color) -> Game {
        Game {
            board,
            side,
            castling: CastlingRights::FULL,
        }
    }

    /// Returns the current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board
    ///
    /// This is a raw setter: neither the position is validated nor castling rights are
    /// restored. Once a king or a rook has moved in this game, it cannot castle again, even if
    /// the new board puts it back to its initial square.
    #[inline]
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns the side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.side
    }

    /// Sets the side to move, without any validation
    #[inline]
    pub fn set_turn(&mut self, side: Color) {
        self.side = side;
    }

    /// Returns castling rights
    #[inline]
    pub fn castling(&self) -> &CastlingRights {
        &self.castling
    }

    /// Returns legal moves of the piece on `src`
    ///
    /// Moves are returned for the piece of any color, not only for the side to move. Returns
    /// [`InvalidMove::EmptySquare`] if there is no piece on `src`.
    pub fn legal_moves(&self, src: Coord) -> Result<MoveList, InvalidMove> {
        legal::legal_moves(&self.board, &self.castling, src)
    }

    /// Returns legal moves of all the pieces of the side to move
    pub fn all_legal_moves(&self) -> Vec<Move> {
        legal::side_legal_moves(&self.board, &self.castling, self.side)
    }

    /// Returns `true` if the king of color `c` is in check
    pub fn is_in_check(&self, c: Color) -> bool {
        attack::is_in_check(&self.board, c)
    }

    /// Returns `true` if color `c` is in check and has no legal moves
    pub fn is_in_checkmate(&self, c: Color) -> bool {
        self.is_in_check(c) && !legal::has_legal_moves(&self.board, &self.castling, c)
    }

    /// Returns `true` if color `c` is not in check and has no legal moves
    pub fn is_in_stalemate(&self, c: Color) -> bool {
        !self.is_in_check(c) && !legal::has_legal_moves(&self.board, &self.castling, c)
    }

    /// Returns the status of the side to move
    pub fn status(&self) -> GameStatus {
        let check = self.is_in_check(self.side);
        let has_moves = legal::has_legal_moves(&self.board, &self.castling, self.side);
        match (check, has_moves) {
            (false, true) => GameStatus::Running,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    fn validate(&self, mv: Move) -> Result<Piece, InvalidMove> {
        let (color, piece) =
            movegen::piece_at(&self.board, mv.src()).ok_or(InvalidMove::EmptySquare(mv.src()))?;
        if color != self.side {
            return Err(InvalidMove::WrongSide {
                expected: self.side,
                actual: color,
            });
        }
        if !self.legal_moves(mv.src())?.contains(&mv) {
            return Err(InvalidMove::NotLegal(mv));
        }
        Ok(piece)
    }

    fn mark_rook_moved(&mut self, p: Coord, c: Color) {
        if let Some((color, side)) = castling::rook_at(p) {
            if color == c && !self.castling.rook_moved(color, side) {
                trace!("{:?} loses {:?}side castling", color, side);
                self.castling.mark_rook_moved(color, side);
            }
        }
    }

    fn do_make_move(&mut self, mv: Move, piece: Piece) {
        let side = self.side;
        let captured = self.board.get(mv.dst());

        legal::apply_simple(&mut self.board, mv);
        match piece {
            Piece::King => {
                if let Some(s) = castling::side_of(side, mv) {
                    let rook_src = castling::rook_src(side, s);
                    let rook = self.board.get(rook_src);
                    self.board.put(rook_src, Cell::EMPTY);
                    self.board.put(castling::rook_dst(side, s), rook);
                    self.mark_rook_moved(rook_src, side);
                }
                if !self.castling.king_moved(side) {
                    trace!("{:?} loses castling", side);
                    self.castling.mark_king_moved(side);
                }
            }
            Piece::Rook => self.mark_rook_moved(mv.src(), side),
            _ => {}
        }
        if captured == Cell::from_parts(side.inv(), Piece::Rook) {
            self.mark_rook_moved(mv.dst(), side.inv());
        }

        #[cfg(feature = "selftest")]
        assert!(
            !attack::is_in_check(&self.board, side),
            "king is attacked after move {}",
            mv
        );

        self.side = side.inv();
    }

    /// Makes the move `mv`
    ///
    /// The move must be made by the side to move and must be among the legal moves of its
    /// piece. On success, the board and castling rights are updated and the turn passes to the
    /// other side. On failure, the game is left unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let piece = match self.validate(mv) {
            Ok(piece) => piece,
            Err(e) => {
                debug!("rejected move {}: {}", mv, e);
                return Err(e);
            }
        };
        self.do_make_move(mv, piece);
        debug!("{:?} played {}", self.side.inv(), mv);
        Ok(())
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Game::new()
    }
}
