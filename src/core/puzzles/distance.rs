//! Unique distancing (MPMP 7).
//!
//! Place n counters on an n×n grid so that the distances between every pair
//! of counters are all different. Distances are kept squared: uniqueness is
//! all that matters, and it keeps the arithmetic in integers.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/uniquedistance>

use std::collections::BTreeSet;

/// Squared distance between two cells.
fn dist(p1: (usize, usize), p2: (usize, usize)) -> u64 {
    let dy = p1.0 as i64 - p2.0 as i64;
    let dx = p1.1 as i64 - p2.1 as i64;
    (dy * dy + dx * dx) as u64
}

/// An n×n board holding some counters and the distances between them.
#[derive(Debug, Clone)]
pub struct Grid {
    n: usize,
    /// Occupied cells in row-major order.
    pieces: Vec<(usize, usize)>,
    distances: BTreeSet<u64>,
}

impl Grid {
    /// An empty board of side length `n`.
    pub fn new(n: usize) -> Self {
        Grid {
            n,
            pieces: Vec::new(),
            distances: BTreeSet::new(),
        }
    }

    pub fn pieces(&self) -> &[(usize, usize)] {
        &self.pieces
    }

    /// The pairwise squared distances, ascending.
    pub fn distances(&self) -> Vec<u64> {
        self.distances.iter().copied().collect()
    }

    /// The board with a counter added at `piece`, or None if any distance it
    /// creates repeats an existing one. Counters are added in row-major
    /// order, so `piece` must come after every current counter.
    fn try_place(&self, piece: (usize, usize)) -> Option<Grid> {
        let mut distances = self.distances.clone();
        for &other in &self.pieces {
            if !distances.insert(dist(piece, other)) {
                return None;
            }
        }
        let mut pieces = self.pieces.clone();
        pieces.push(piece);
        Some(Grid {
            n: self.n,
            pieces,
            distances,
        })
    }

    /// Every board with one more counter, in row-major placement order.
    /// Placing only after the last counter generates each board once.
    fn moves(&self) -> Vec<Grid> {
        let first = match self.pieces.last() {
            Some(&(y, x)) => y * self.n + x + 1,
            None => 0,
        };
        (first..self.n * self.n)
            .filter_map(|cell| self.try_place((cell / self.n, cell % self.n)))
            .collect()
    }

    /// All ways to finish placing n counters from this position, depth first,
    /// so complete boards arrive in row-major lexicographic order.
    pub fn solve(&self) -> Vec<Grid> {
        let mut found = Vec::new();
        self.solve_into(&mut found);
        found
    }

    fn solve_into(&self, found: &mut Vec<Grid>) {
        if self.pieces.len() == self.n {
            found.push(self.clone());
            return;
        }
        for grid in self.moves() {
            grid.solve_into(found);
        }
    }

    /// Whether two boards count as the same solution: their distance sets
    /// match.
    pub fn same_distances(&self, other: &Grid) -> bool {
        self.distances == other.distances
    }

    /// ASCII drawing of the board.
    pub fn render(&self) -> String {
        let sep = format!("{}+", "+-".repeat(self.n));
        let mut lines = vec![sep.clone()];
        for y in 0..self.n {
            let row: Vec<&str> = (0..self.n)
                .map(|x| if self.pieces.contains(&(y, x)) { "O" } else { " " })
                .collect();
            lines.push(format!("|{}|", row.join("|")));
            lines.push(sep.clone());
        }
        lines.join("\n")
    }
}
