//! Scrabble hand counting (MPMP 3).
//!
//! How many ways can you choose seven of the 100 standard Scrabble tiles so
//! the hand totals exactly 46 points? Hands are multisets of letters: tiles
//! of the same letter are interchangeable, and a hand may not use more copies
//! of a letter than the set contains. The two blanks count zero points.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/scrabble-puzzle>

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::Serialize;

/// The full English tile set: letter, point value, number of tiles.
/// `_` is the blank.
pub const TILES: [(char, u32, u32); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    ('_', 0, 2),
];

/// Number of hands hitting a point total, with the inputs that produced it.
#[derive(Debug, Serialize)]
pub struct HandCount {
    pub target_value: u32,
    pub hand_size: usize,
    pub hands: u64,
}

lazy_static! {
    /// Tiles grouped by point value, ascending. For each group, `counts[r]`
    /// is the number of distinct ways to pick r tiles from that group's
    /// letters, honoring per-letter availability.
    static ref VALUE_GROUPS: Vec<(u32, Vec<u64>)> = {
        let mut points: Vec<u32> = TILES.iter().map(|&(_, p, _)| p).collect();
        points.sort_unstable();
        points.dedup();
        points
            .into_iter()
            .map(|p| {
                let counts: Vec<u32> = TILES
                    .iter()
                    .filter(|&&(_, points, _)| points == p)
                    .map(|&(_, _, count)| count)
                    .collect();
                (p, distinct_combinations(&counts))
            })
            .collect()
    };
}

/// Coefficients of the product of `1 + x + ... + x^count` over a group of
/// letters. Coefficient r is the number of distinct r-tile selections.
fn distinct_combinations(counts: &[u32]) -> Vec<u64> {
    let mut coeffs = vec![1u64];
    for &count in counts {
        let mut product = vec![0u64; coeffs.len() + count as usize];
        for (i, &c) in coeffs.iter().enumerate() {
            for slot in &mut product[i..=i + count as usize] {
                *slot += c;
            }
        }
        coeffs = product;
    }
    coeffs
}

/// Counts the hands of `hand_size` tiles worth exactly `value` points.
///
/// Enumerates multisets of point values rather than of letters. There are
/// only eight distinct point values, so the outer loop is tiny; each matching
/// value multiset contributes the product, over its distinct values, of the
/// precomputed selection counts for that value's letters.
pub fn hand_count(value: u32, hand_size: usize) -> u64 {
    let groups = &*VALUE_GROUPS;
    let mut total = 0u64;
    for combo in (0..groups.len()).combinations_with_replacement(hand_size) {
        let sum: u32 = combo.iter().map(|&g| groups[g].0).sum();
        if sum != value {
            continue;
        }
        let mut product = 1u64;
        let mut i = 0;
        while i < combo.len() && product > 0 {
            let group = combo[i];
            let mut picked = 1;
            while i + picked < combo.len() && combo[i + picked] == group {
                picked += 1;
            }
            // Out-of-range means the group hasn't that many tiles at all.
            product *= groups[group].1.get(picked).copied().unwrap_or(0);
            i += picked;
        }
        total += product;
    }
    total
}

/// Counts hands by brute force over letter multisets. Much slower than
/// [`hand_count`]; kept as a cross-check for the grouped algorithm.
pub fn hand_count_naive(value: u32, hand_size: usize) -> u64 {
    let mut total = 0u64;
    for hand in (0..TILES.len()).combinations_with_replacement(hand_size) {
        let sum: u32 = hand.iter().map(|&t| TILES[t].1).sum();
        if sum != value {
            continue;
        }
        let mut valid = true;
        let mut i = 0;
        while i < hand.len() {
            let tile = hand[i];
            let mut picked = 1;
            while i + picked < hand.len() && hand[i + picked] == tile {
                picked += 1;
            }
            if picked as u32 > TILES[tile].2 {
                valid = false;
                break;
            }
            i += picked;
        }
        if valid {
            total += 1;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_counts_honor_availability() {
        // Two letters with one tile each: one way to take both, none to take three.
        assert_eq!(distinct_combinations(&[1, 1]), vec![1, 2, 1]);
        // A single letter with two tiles: exactly one way to take 0, 1, or 2.
        assert_eq!(distinct_combinations(&[2]), vec![1, 1, 1]);
    }

    #[test]
    fn headline_forty_six_with_seven_tiles() {
        assert_eq!(hand_count(46, 7), 138);
    }

    #[test]
    fn assorted_totals() {
        assert_eq!(hand_count(49, 7), 15);
        assert_eq!(hand_count(7, 7), 18790);
        assert_eq!(hand_count(24, 5), 3030);
        assert_eq!(hand_count(5, 3), 309);
        assert_eq!(hand_count(10, 1), 2);
        assert_eq!(hand_count(1, 2), 10);
    }

    #[test]
    fn blanks_are_the_only_zero_point_tiles() {
        // Two blanks exist, so a zero-point pair is possible but not a trio.
        assert_eq!(hand_count(0, 2), 1);
        assert_eq!(hand_count(0, 3), 0);
        assert_eq!(hand_count(0, 7), 0);
    }

    #[test]
    fn unreachable_totals_count_zero() {
        assert_eq!(hand_count(30, 3), 0);
        assert_eq!(hand_count(1000, 7), 0);
    }

    #[test]
    fn two_tiles_worth_twenty_is_only_the_two_tens() {
        assert_eq!(hand_count(20, 2), 1);
    }

    #[test]
    fn naive_count_agrees_on_small_hands() {
        for &(value, hand_size) in &[(5, 3), (10, 2), (24, 5), (0, 3), (12, 4)] {
            assert_eq!(
                hand_count(value, hand_size),
                hand_count_naive(value, hand_size),
                "value={} hand_size={}",
                value,
                hand_size
            );
        }
    }

    #[test]
    fn naive_count_agrees_on_the_headline_case() {
        assert_eq!(hand_count_naive(46, 7), 138);
    }
}
