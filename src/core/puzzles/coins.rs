//! Triangular coin solitaire (MPMP 5).
//!
//! Ten coins fill a four-row triangle. The first move removes one coin; every
//! move after that jumps a coin over an adjacent one into an empty cell and
//! takes the jumped coin off the board. Consecutive jumps by the same coin
//! chain into a single move. The puzzle asks for the fewest moves that leave
//! exactly one coin, so the solver enumerates every solution and reports the
//! shortest first.
//!
//! Cells are numbered 1-based, row by row: row 0 is cell 1, row 1 is cells 2
//! and 3, and so on.
//!
//! Puzzle statement: <https://www.think-maths.co.uk/coin-puzzle>

use std::fmt;

/// Converts a 1-based cell index to a (row, column) coordinate.
pub fn index_to_coord(index: usize) -> (usize, usize) {
    debug_assert!(index > 0);
    let mut y = 0;
    while (y + 1) * (y + 2) / 2 < index {
        y += 1;
    }
    (y, index - 1 - (y + 1) * y / 2)
}

/// Converts a (row, column) coordinate to a 1-based cell index.
pub fn coord_to_index(y: usize, x: usize) -> usize {
    debug_assert!(x <= y);
    (y + 1) * y / 2 + x + 1
}

/// One move: the opening removal, or a chain of jumps by a single coin
/// listing its starting cell and every cell it lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Remove(usize),
    Jump(Vec<usize>),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Remove(cell) => write!(f, "{}", cell),
            Move::Jump(cells) => {
                let cells: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
                write!(f, "{}", cells.join("-"))
            }
        }
    }
}

/// A board state: which cells still hold coins, and the moves that got here.
#[derive(Clone)]
pub struct Triangle {
    rows: Vec<Vec<bool>>,
    moves: Vec<Move>,
}

impl Triangle {
    /// A full board with `rows` rows.
    pub fn new(rows: usize) -> Self {
        Triangle {
            rows: (1..=rows).map(|len| vec![true; len]).collect(),
            moves: Vec::new(),
        }
    }

    /// A full board with the opening removal at `start` already made.
    pub fn with_removed(rows: usize, start: usize) -> Self {
        let mut tri = Triangle::new(rows);
        let (y, x) = index_to_coord(start);
        tri.rows[y][x] = false;
        tri.moves.push(Move::Remove(start));
        tri
    }

    /// Number of cells on the board.
    pub fn cells(&self) -> usize {
        let rows = self.rows.len();
        (rows + 1) * rows / 2
    }

    fn coin_at(&self, index: usize) -> bool {
        let (y, x) = index_to_coord(index);
        self.rows[y][x]
    }

    /// Cells a coin at `src` can jump to: two steps along any of the six
    /// triangle directions, over a coin, into an empty cell.
    fn jumps_from(&self, src: usize) -> Vec<usize> {
        let rows = self.rows.len() as isize;
        let (y, x) = index_to_coord(src);
        let (y, x) = (y as isize, x as isize);
        let mut dests = Vec::new();
        for &(dy, dx) in &[
            (y - 2, x),     // up and right
            (y + 2, x),     // down and left
            (y, x - 2),     // left
            (y, x + 2),     // right
            (y - 2, x - 2), // up and left
            (y + 2, x + 2), // down and right
        ] {
            if dy < 0 || dy >= rows || dx < 0 || dx > dy {
                continue;
            }
            // The jumped coin sits halfway; both offsets are even, so the
            // midpoint is exact.
            let (jy, jx) = (((y + dy) / 2) as usize, ((x + dx) / 2) as usize);
            if self.rows[jy][jx] && !self.rows[dy as usize][dx as usize] {
                dests.push(coord_to_index(dy as usize, dx as usize));
            }
        }
        dests
    }

    /// The board after jumping the coin at `src` to `dest`. A jump continuing
    /// from the previous move's landing cell extends that chain.
    fn jump(&self, src: usize, dest: usize) -> Triangle {
        let mut next = self.clone();
        let (sy, sx) = index_to_coord(src);
        let (dy, dx) = index_to_coord(dest);
        next.rows[sy][sx] = false;
        next.rows[(sy + dy) / 2][(sx + dx) / 2] = false;
        next.rows[dy][dx] = true;
        let chains = next.moves.len() > 1
            && matches!(next.moves.last(), Some(Move::Jump(cells)) if cells.last() == Some(&src));
        if chains {
            if let Some(Move::Jump(cells)) = next.moves.last_mut() {
                cells.push(dest);
            }
        } else {
            next.moves.push(Move::Jump(vec![src, dest]));
        }
        next
    }

    /// Every board state one move away. On the untouched board the only
    /// moves are opening removals; `ignore_symmetry` then keeps one removal
    /// per symmetry class (cells along the first half of the top-left edge of
    /// each nested triangle).
    fn next_states(&self, ignore_symmetry: bool) -> Vec<Triangle> {
        let mut states = Vec::new();
        if self.moves.is_empty() {
            for src in 1..=self.cells() {
                if ignore_symmetry {
                    let (y, x) = index_to_coord(src);
                    if x > y / 2 || y > (self.rows.len() + x - 1) / 2 {
                        continue;
                    }
                }
                states.push(Triangle::with_removed(self.rows.len(), src));
            }
        } else {
            for src in 1..=self.cells() {
                if self.coin_at(src) {
                    for dest in self.jumps_from(src) {
                        states.push(self.jump(src, dest));
                    }
                }
            }
        }
        states
    }

    /// Whether exactly one coin remains.
    pub fn solved(&self) -> bool {
        self.rows.iter().flatten().filter(|&&coin| coin).count() == 1
    }

    /// Finds every move sequence that ends with one coin, shortest first.
    ///
    /// Depth-first over the whole move tree; within one length, solutions
    /// keep the order the search found them in.
    pub fn solve(self, ignore_symmetry: bool) -> Vec<Vec<Move>> {
        let mut solutions = Vec::new();
        let mut states = vec![self];
        while let Some(state) = states.pop() {
            if state.solved() {
                solutions.push(state.moves);
            } else {
                states.extend(state.next_states(ignore_symmetry));
            }
        }
        solutions.sort_by_key(|moves| moves.len());
        solutions
    }
}
