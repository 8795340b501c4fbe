//! Card flipping (MPMP 4).
//!
//! Four cards start in unknown orientations. A flip sequence wins if the
//! cards are guaranteed to pass through all-face-down at some point, whatever
//! the starting orientation. Equivalently, the states reached from one fixed
//! start must cover all 2^n orientations, which the binary-reflected Gray
//! code does in the minimum number of flips. When a win also counts all
//! face up, one fewer bit suffices because every missed state is the
//! complement of a visited one.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/card-puzzle>

use std::collections::HashSet;

use serde::Serialize;

/// A flip sequence and the state walk it produces from the all-down start.
///
/// States are bitfields: bit i set means card i + 1 is flipped from its
/// starting orientation.
#[derive(Debug, Serialize)]
pub struct FlipCheck {
    pub cards: usize,
    pub up_or_down: bool,
    /// Cards flipped, in order, numbered from 1.
    pub flips: Vec<u32>,
    /// State after each flip, the starting state first.
    pub states: Vec<u32>,
    /// Whether every orientation is covered.
    pub success: bool,
}

/// The binary-reflected Gray-code flip sequence over `bits` cards: step i
/// flips card `trailing_zeros(i) + 1`, visiting all 2^bits states once.
pub fn gray_flips(bits: u32) -> Vec<u32> {
    (1..(1u32 << bits)).map(|i| i.trailing_zeros() + 1).collect()
}

/// States after each flip, starting from `start_state` (which is included).
pub fn run_flips(flips: &[u32], start_state: u32) -> Vec<u32> {
    let mut states = Vec::with_capacity(flips.len() + 1);
    let mut state = start_state;
    states.push(state);
    for &card in flips {
        state ^= 1 << (card - 1);
        states.push(state);
    }
    states
}

/// The cards flipped in `state`, ascending, numbered from 1.
pub fn flipped_cards(state: u32) -> Vec<u32> {
    (1..=32).filter(|card| state & (1 << (card - 1)) != 0).collect()
}

/// Walks `flips` over `cards` cards and checks whether the walk covers every
/// orientation. With `up_or_down`, each visited state also covers its
/// complement.
pub fn check_flips(flips: Vec<u32>, cards: usize, up_or_down: bool) -> FlipCheck {
    let states = run_flips(&flips, 0);
    let mut visited: HashSet<u32> = states.iter().copied().collect();
    if up_or_down {
        let mask = (1u32 << cards) - 1;
        let complements: Vec<u32> = visited.iter().map(|state| state ^ mask).collect();
        visited.extend(complements);
    }
    let all_states: HashSet<u32> = (0..1u32 << cards).collect();
    let success = visited == all_states;
    FlipCheck {
        cards,
        up_or_down,
        flips,
        states,
        success,
    }
}
