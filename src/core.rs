//! Puzzle solvers and the command layer that drives them.

pub(crate) mod commands;
pub mod puzzles;
