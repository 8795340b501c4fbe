//! The puzzle solvers, one module per puzzle.
//!
//! Each solver is pure and deterministic; everything about terminals, output
//! formats, and input validation lives a layer up in the command functions.

pub mod balance;
pub mod cards;
pub mod coins;
pub mod distance;
pub mod scrabble;
pub mod train;
