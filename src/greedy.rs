use crate::heuristic::Heuristic;
use crate::history::TrackedPuzzle;
use crate::puzzle::{Move, Puzzle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyResult {
    Solved { moves: usize },
    Cutoff { moves: usize },
}

/// Greedy descent: always slide to the unvisited neighbour with the lowest
/// estimate, falling back to a random slide when every neighbour has been
/// visited. Cheap per step, but the paths it finds are far from optimal.
pub struct GreedySolver<H: Heuristic> {
    heuristic: H,
    rng: ChaCha8Rng,
    closed: HashSet<String>,
    max_moves: usize,
}

impl<H: Heuristic> GreedySolver<H> {
    pub fn new(heuristic: H, seed: u64) -> Self {
        GreedySolver {
            heuristic,
            rng: ChaCha8Rng::seed_from_u64(seed),
            closed: HashSet::new(),
            max_moves: 0,
        }
    }

    /// Give up after this many moves (0 = no limit).
    pub fn max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Play moves on `tracked` until it is solved. The move history is
    /// cleared first, so the returned count covers this call only.
    pub fn solve(&mut self, tracked: &mut TrackedPuzzle) -> GreedyResult {
        self.closed.clear();
        tracked.clear_history();

        loop {
            let moves = tracked.moves_made();
            if tracked.puzzle().is_solved() {
                return GreedyResult::Solved { moves };
            }
            if self.max_moves > 0 && moves >= self.max_moves {
                return GreedyResult::Cutoff { moves };
            }

            let legal = tracked.puzzle().legal_moves();

            // First strictly smallest estimate wins ties
            let mut best: Option<(Move, String, f64)> = None;
            for &m in &legal {
                tracked.play_legal(m);
                let key = tracked.puzzle().key();
                if !self.closed.contains(&key) {
                    let estimate = self.heuristic.estimate(tracked.puzzle());
                    if best.as_ref().is_none_or(|(_, _, lowest)| estimate < *lowest) {
                        best = Some((m, key, estimate));
                    }
                }
                tracked.undo();
            }

            match best {
                Some((m, key, _)) => {
                    tracked.play_legal(m);
                    self.closed.insert(key);
                }
                None => {
                    // Boxed in by visited grids; wander without marking
                    let m = legal[self.rng.gen_range(0..legal.len())];
                    tracked.play_legal(m);
                }
            }
        }
    }

    /// Mean move count over `starts`, rounded down. None if `starts` is
    /// empty or any run hits the move limit.
    pub fn average_moves(&mut self, starts: &[Puzzle]) -> Option<usize> {
        if starts.is_empty() {
            return None;
        }

        let mut total = 0;
        for start in starts {
            let mut tracked = TrackedPuzzle::new(start.clone());
            match self.solve(&mut tracked) {
                GreedyResult::Solved { moves } => total += moves,
                GreedyResult::Cutoff { .. } => return None,
            }
        }
        Some(total / starts.len())
    }
}
