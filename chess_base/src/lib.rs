//! # Base types for chessrules
//!
//! This is an auxiliary crate for `chessrules`, which contains the plain value types: squares,
//! colors, pieces and the like. Everything here is freely copyable and has no behavior beyond
//! construction, comparison and text conversion.
//!
//! Normally you don't want to use this crate directly. Use `chessrules` instead.

pub mod geometry;
pub mod types;
