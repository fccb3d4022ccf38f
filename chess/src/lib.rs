//! # Chess rules engine
//!
//! This crate implements the rules of chess: it generates moves for every piece, filters out
//! the moves which leave the own king in check, detects check, checkmate and stalemate, and
//! tracks whose turn it is and which castling moves are still allowed.
//!
//! The main entry point is [`Game`]. It owns a [`Board`] and advances only via
//! [`Game::make_move()`], which either applies a legal move or rejects it with
//! [`InvalidMove`] leaving the game intact.
//!
//! En passant captures are not supported.
//!
//! # Example
//!
//! ```
//! use chessrules::{Color, Coord, Game, GameStatus, Move};
//!
//! let mut game = Game::new();
//! let e2: Coord = "e2".parse().unwrap();
//! assert_eq!(game.legal_moves(e2).unwrap().len(), 2);
//!
//! game.make_move("e2e4".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(game.make_move("d2d4".parse::<Move>().unwrap()).is_err());
//! assert_eq!(game.status(), GameStatus::Running);
//! ```
//!
//! # Logging
//!
//! The crate reports applied and rejected moves through the [`log`](https://docs.rs/log)
//! facade. Install any logger in your application to see them.

pub use chessrules_base::{geometry, types};

pub mod attack;
pub mod board;
pub mod castling;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;

pub use board::Board;
pub use castling::CastlingRights;
pub use game::{Game, GameStatus};
pub use legal::InvalidMove;
pub use movegen::MoveList;
pub use moves::{Move, PromotePiece};
pub use types::{CastlingSide, Cell, Color, Coord, File, Piece, Rank};
