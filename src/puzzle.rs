use arrayvec::ArrayVec;
use std::fmt;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 16;
pub const BLANK: u8 = 0;

/// Cell coordinates as (row, col).
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which moves are generated. Search traces depend on it.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Slide the tile at (row, col) into the blank. Only meaningful while the
/// cell is adjacent to the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    pub fn position(&self) -> Position {
        (self.row, self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// At most one move per direction.
pub type Moves = ArrayVec<Move, 4>;

/// Error type for puzzle construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Side length outside `MIN_SIZE..=MAX_SIZE`
    InvalidSize(usize),
    /// Input grid is not an N×N permutation of `0..N²`
    Malformed(String),
    /// Destination is not adjacent to the blank
    InvalidMove(Move),
    /// Scrambler gave up after this many rejected shuffles
    ShuffleExhausted(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidSize(size) => write!(
                f,
                "Invalid size {} (must be between {} and {})",
                size, MIN_SIZE, MAX_SIZE
            ),
            PuzzleError::Malformed(msg) => write!(f, "Malformed grid: {}", msg),
            PuzzleError::InvalidMove(m) => write!(f, "Invalid move: {}", m),
            PuzzleError::ShuffleExhausted(attempts) => {
                write!(f, "No solvable shuffle found after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// An N×N sliding-tile grid. Label 0 is the blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    // Row-major labels
    cells: Vec<u8>,
    blank: Position,
}

impl Puzzle {
    /// Create a puzzle of the given side length in the solved configuration.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidSize(size));
        }
        let mut puzzle = Puzzle {
            size,
            cells: vec![BLANK; size * size],
            blank: (size - 1, size - 1),
        };
        puzzle.reset();
        Ok(puzzle)
    }

    /// Parse a grid from text: one row per line, labels separated by
    /// whitespace. This is the inverse of the `Display` output.
    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<u8>()
                        .map_err(|_| PuzzleError::Malformed(format!("bad label '{}'", token)))
                })
                .collect::<Result<Vec<u8>, PuzzleError>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(PuzzleError::Malformed("empty grid".to_string()));
        }

        let mut puzzle = Puzzle::new(rows.len())?;
        puzzle.restore(&rows)?;
        Ok(puzzle)
    }

    /// Overwrite the grid with the solved configuration.
    pub fn reset(&mut self) {
        let last = self.cells.len() - 1;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = if index == last { BLANK } else { index as u8 + 1 };
        }
        self.blank = (self.size - 1, self.size - 1);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank(&self) -> Position {
        self.blank
    }

    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Move from `pos` one cell in `dir`, or None if that leaves the grid.
    pub fn move_position(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.0.checked_add_signed(dr)?;
        let col = pos.1.checked_add_signed(dc)?;
        if row < self.size && col < self.size {
            Some((row, col))
        } else {
            None
        }
    }

    /// Cells adjacent to the blank, in up, down, left, right order.
    pub fn legal_moves(&self) -> Moves {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.move_position(self.blank, dir))
            .map(|(row, col)| Move::new(row, col))
            .collect()
    }

    fn is_adjacent(&self, m: Move) -> bool {
        m.row < self.size
            && m.col < self.size
            && self.blank.0.abs_diff(m.row) + self.blank.1.abs_diff(m.col) == 1
    }

    /// Slide the tile at `m` into the blank. Returns the move that undoes it.
    pub fn apply_move(&mut self, m: Move) -> Result<Move, PuzzleError> {
        if !self.is_adjacent(m) {
            return Err(PuzzleError::InvalidMove(m));
        }
        Ok(self.slide(m))
    }

    /// Undo a move previously applied with `apply_move`.
    /// Panics if `undo` is not adjacent to the blank.
    pub fn undo_move(&mut self, undo: Move) {
        assert!(self.is_adjacent(undo), "Cannot undo to {}: not adjacent", undo);
        self.slide(undo);
    }

    /// Unchecked slide for callers that took `m` from `legal_moves`.
    pub(crate) fn slide(&mut self, m: Move) -> Move {
        let (blank_row, blank_col) = self.blank;
        let from = m.row * self.size + m.col;
        let to = blank_row * self.size + blank_col;
        self.cells[to] = self.cells[from];
        self.cells[from] = BLANK;
        self.blank = m.position();
        Move::new(blank_row, blank_col)
    }

    /// Swap two arbitrary cells, keeping the blank position in sync.
    /// This does not preserve solvability.
    pub(crate) fn swap_cells(&mut self, a: Position, b: Position) {
        let a_idx = a.0 * self.size + a.1;
        let b_idx = b.0 * self.size + b.1;
        self.cells.swap(a_idx, b_idx);
        if self.cells[a_idx] == BLANK {
            self.blank = a;
        } else if self.cells[b_idx] == BLANK {
            self.blank = b;
        }
    }

    /// Replace the whole grid from an N×N matrix of labels.
    pub fn restore(&mut self, rows: &[Vec<u8>]) -> Result<(), PuzzleError> {
        if rows.len() != self.size {
            return Err(PuzzleError::Malformed(format!(
                "expected {} rows, found {}",
                self.size,
                rows.len()
            )));
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.size)
        {
            return Err(PuzzleError::Malformed(format!(
                "row {} has {} labels, expected {}",
                index,
                row.len(),
                self.size
            )));
        }

        let cells: Vec<u8> = rows.iter().flatten().copied().collect();
        Self::validate_labels(&cells)?;
        self.restore_cells(&cells);
        Ok(())
    }

    fn validate_labels(cells: &[u8]) -> Result<(), PuzzleError> {
        let mut seen = vec![false; cells.len()];
        for &label in cells {
            let index = label as usize;
            if index >= cells.len() {
                return Err(PuzzleError::Malformed(format!(
                    "label {} out of range 0..{}",
                    label,
                    cells.len()
                )));
            }
            if seen[index] {
                return Err(PuzzleError::Malformed(format!("duplicate label {}", label)));
            }
            seen[index] = true;
        }
        Ok(())
    }

    /// Trusted restore from a row-major snapshot of a grid of the same size.
    pub(crate) fn restore_cells(&mut self, cells: &[u8]) {
        self.cells.copy_from_slice(cells);
        if let Some(index) = self.cells.iter().position(|&label| label == BLANK) {
            self.blank = (index / self.size, index % self.size);
        }
    }

    /// Check if every tile is in its home cell and the blank is last.
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last] == BLANK
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(index, &label)| label as usize == index + 1)
    }

    /// Number of out-of-order pairs among the non-blank labels in row-major order.
    pub fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != BLANK)
            .map(|(index, &label)| {
                self.cells[index + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < label)
                    .count()
            })
            .sum()
    }

    /// Parity test for reachability of the solved grid.
    ///
    /// Odd N: solvable iff inversions are even. Even N: if the blank's row
    /// (from the top, 0-indexed) is even, solvable iff inversions are odd;
    /// otherwise iff they are even.
    pub fn is_solvable(&self) -> bool {
        let inversions_even = self.inversions() % 2 == 0;
        if self.size % 2 == 1 {
            inversions_even
        } else if self.blank.0 % 2 == 0 {
            !inversions_even
        } else {
            inversions_even
        }
    }

    /// Content fingerprint: every label in row-major order joined with '-'.
    pub fn key(&self) -> String {
        self.cells
            .iter()
            .map(|label| label.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Puzzles reachable in one slide, in `legal_moves` order.
    pub fn successors(&self) -> impl Iterator<Item = Puzzle> + '_ {
        self.legal_moves().into_iter().map(move |m| {
            let mut next = self.clone();
            next.slide(m);
            next
        })
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.cells.chunks(self.size) {
            let line = row
                .iter()
                .map(|label| format!("{:>width$}", label, width = width))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
