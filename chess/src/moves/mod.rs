//! Chess moves and their text representation

mod base;

pub mod uci;

pub use base::*;
