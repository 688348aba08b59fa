use crate::puzzle::{Puzzle, PuzzleError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Random cell swaps, rejected until solvable and unsolved
    Swap,
    /// Random legal slides from the current grid
    Walk,
}

/// Scrambles puzzles with an owned, seedable random source.
pub struct Shuffler {
    rng: ChaCha8Rng,
    max_attempts: usize,
}

impl Shuffler {
    pub fn new(seed: u64) -> Self {
        Shuffler {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn from_entropy() -> Self {
        Shuffler {
            rng: ChaCha8Rng::from_entropy(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn scramble(&mut self, puzzle: &mut Puzzle, mode: ShuffleMode) -> Result<(), PuzzleError> {
        match mode {
            ShuffleMode::Swap => self.shuffle(puzzle),
            ShuffleMode::Walk => {
                let size = puzzle.size();
                self.random_walk(puzzle, 2 * size * size * size)
            }
        }
    }

    /// Swap every cell with a uniformly random cell, repeating until the grid
    /// is solvable and not already solved.
    pub fn shuffle(&mut self, puzzle: &mut Puzzle) -> Result<(), PuzzleError> {
        let size = puzzle.size();
        for _ in 0..self.max_attempts {
            for row in 0..size {
                for col in 0..size {
                    let other = (self.rng.gen_range(0..size), self.rng.gen_range(0..size));
                    puzzle.swap_cells((row, col), other);
                }
            }

            if puzzle.is_solvable() && !puzzle.is_solved() {
                return Ok(());
            }
        }
        Err(PuzzleError::ShuffleExhausted(self.max_attempts))
    }

    /// Make `moves` random legal slides, repeating while the grid ends up
    /// solved. Solvability holds because only legal slides are applied.
    pub fn random_walk(&mut self, puzzle: &mut Puzzle, moves: usize) -> Result<(), PuzzleError> {
        for _ in 0..self.max_attempts {
            for _ in 0..moves {
                let legal = puzzle.legal_moves();
                let m = legal[self.rng.gen_range(0..legal.len())];
                puzzle.slide(m);
            }

            if !puzzle.is_solved() {
                return Ok(());
            }
        }
        Err(PuzzleError::ShuffleExhausted(self.max_attempts))
    }
}
