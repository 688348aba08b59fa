use crate::puzzle::{BLANK, Move, Puzzle};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Zobrist hash for grid contents
pub struct Zobrist {
    // keys[cell * num_cells + label]
    keys: Vec<u64>,
    size: usize,
}

impl Zobrist {
    pub fn new(size: usize) -> Self {
        // Use a seeded PRNG for reproducible Zobrist hashes
        let mut rng = ChaCha8Rng::seed_from_u64(0x123456789abcdef0);

        let num_cells = size * size;
        let keys = (0..num_cells * num_cells).map(|_| rng.next_u64()).collect();

        Zobrist { keys, size }
    }

    /// Get hash value for `label` sitting in cell `index` (row-major)
    fn key(&self, index: usize, label: u8) -> u64 {
        self.keys[index * self.size * self.size + label as usize]
    }

    /// Compute the hash of a row-major snapshot from scratch
    pub fn compute_hash(&self, cells: &[u8]) -> u64 {
        debug_assert_eq!(cells.len(), self.size * self.size);
        cells
            .iter()
            .enumerate()
            .fold(0u64, |hash, (index, &label)| hash ^ self.key(index, label))
    }

    /// Hash after sliding the tile at `m` into the blank of `puzzle`, given the
    /// hash of `puzzle` before the slide. `puzzle` must not have moved yet.
    pub fn slide_hash(&self, hash: u64, puzzle: &Puzzle, m: Move) -> u64 {
        let (blank_row, blank_col) = puzzle.blank();
        let blank_idx = blank_row * self.size + blank_col;
        let from_idx = m.row * self.size + m.col;
        let tile = puzzle.tile(m.row, m.col);

        hash ^ self.key(from_idx, tile)
            ^ self.key(from_idx, BLANK)
            ^ self.key(blank_idx, BLANK)
            ^ self.key(blank_idx, tile)
    }
}
