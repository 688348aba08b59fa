use crate::puzzle::{BLANK, Puzzle};
use crate::zobrist::Zobrist;

/// Trait for estimating the number of slides needed to solve a puzzle.
pub trait Heuristic {
    /// Estimated distance from the current grid to the solved grid.
    fn estimate(&self, puzzle: &Puzzle) -> f64;

    fn name(&self) -> &'static str;
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        (**self).estimate(puzzle)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Goal (row, col) of a non-blank tile.
fn goal_position(label: u8, size: usize) -> (usize, usize) {
    let index = label as usize - 1;
    (index / size, index % size)
}

/// Visit every non-blank tile with its current and goal positions.
fn tiles(puzzle: &Puzzle) -> impl Iterator<Item = ((usize, usize), (usize, usize))> + '_ {
    let size = puzzle.size();
    puzzle
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &label)| label != BLANK)
        .map(move |(index, &label)| ((index / size, index % size), goal_position(label, size)))
}

/// Always zero. Turns A* into uniform-cost search.
pub struct NullHeuristic;

impl NullHeuristic {
    pub fn new() -> Self {
        NullHeuristic
    }
}

impl Heuristic for NullHeuristic {
    fn estimate(&self, _puzzle: &Puzzle) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Number of tiles not in their home cell.
pub struct Hamming;

impl Heuristic for Hamming {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        tiles(puzzle).filter(|(pos, goal)| pos != goal).count() as f64
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Sum of straight-line distances from each tile to its home cell.
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        tiles(puzzle)
            .map(|((row, col), (goal_row, goal_col))| {
                let a = row.abs_diff(goal_row) as f64;
                let b = col.abs_diff(goal_col) as f64;
                (a * a + b * b).sqrt()
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Sum of grid distances from each tile to its home cell.
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        tiles(puzzle)
            .map(|((row, col), (goal_row, goal_col))| {
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum::<usize>() as f64
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// A fixed pseudo-random value in [0, 1) per grid, taken from its Zobrist
/// hash. Not an estimate at all; serves as a baseline for greedy descent.
pub struct RandomHeuristic {
    zobrist: Zobrist,
}

impl RandomHeuristic {
    pub fn new(size: usize) -> Self {
        RandomHeuristic {
            zobrist: Zobrist::new(size),
        }
    }
}

impl Heuristic for RandomHeuristic {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        // Top 53 bits fill an f64 mantissa exactly
        let hash = self.zobrist.compute_hash(puzzle.cells());
        (hash >> 11) as f64 / (1u64 << 53) as f64
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Runtime selection between the heuristics above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Manhattan,
    Euclidean,
    Hamming,
    Null,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(puzzle),
            HeuristicKind::Euclidean => Euclidean.estimate(puzzle),
            HeuristicKind::Hamming => Hamming.estimate(puzzle),
            HeuristicKind::Null => NullHeuristic.estimate(puzzle),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => Manhattan.name(),
            HeuristicKind::Euclidean => Euclidean.name(),
            HeuristicKind::Hamming => Hamming.name(),
            HeuristicKind::Null => NullHeuristic.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph;

    const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
        HeuristicKind::Hamming,
        HeuristicKind::Null,
    ];

    #[test]
    fn test_solved_is_zero() {
        for size in 2..=5 {
            let puzzle = Puzzle::new(size).unwrap();
            for heuristic in ALL {
                assert_eq!(heuristic.estimate(&puzzle), 0.0, "{}", heuristic.name());
            }
        }
    }

    #[test]
    fn test_one_slide_from_solved() {
        let puzzle = Puzzle::from_text("1 2 3\n4 5 6\n7 0 8").unwrap();
        assert_eq!(Hamming.estimate(&puzzle), 1.0);
        assert_eq!(Manhattan.estimate(&puzzle), 1.0);
        assert_eq!(Euclidean.estimate(&puzzle), 1.0);
    }

    #[test]
    fn test_diagonal_displacement() {
        // 1 and 5 swapped across the diagonal: both are (1, 1) away
        let puzzle = Puzzle::from_text("5 2 3\n4 1 6\n7 8 0").unwrap();
        assert_eq!(Hamming.estimate(&puzzle), 2.0);
        assert_eq!(Manhattan.estimate(&puzzle), 4.0);
        let expected = 2.0 * 2.0f64.sqrt();
        assert!((Euclidean.estimate(&puzzle) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_blank_is_ignored() {
        // 7 and 8 each one cell right of home; the blank is not counted
        let puzzle = Puzzle::from_text("1 2 3\n4 5 6\n0 7 8").unwrap();
        assert_eq!(Hamming.estimate(&puzzle), 2.0);
        assert_eq!(Manhattan.estimate(&puzzle), 2.0);
    }

    #[test]
    fn test_reversed_grid() {
        let puzzle = Puzzle::from_text("8 7 6\n5 4 3\n2 1 0").unwrap();
        // 8:(0,0)->(2,1)=3, 7:(0,1)->(2,0)=3, 6:(0,2)->(1,2)=1, 5:(1,0)->(1,1)=1,
        // 4:(1,1)->(1,0)=1, 3:(1,2)->(0,2)=1, 2:(2,0)->(0,1)=3, 1:(2,1)->(0,0)=3
        assert_eq!(Manhattan.estimate(&puzzle), 16.0);
        assert_eq!(Hamming.estimate(&puzzle), 8.0);
    }

    #[test]
    fn test_ordering_between_heuristics() {
        let puzzle = Puzzle::from_text("8 6 7\n2 5 4\n3 0 1").unwrap();
        let hamming = Hamming.estimate(&puzzle);
        let euclidean = Euclidean.estimate(&puzzle);
        let manhattan = Manhattan.estimate(&puzzle);
        assert!(hamming <= euclidean);
        assert!(euclidean <= manhattan);
    }

    #[test]
    fn test_repeated_calls_have_no_side_effects() {
        let puzzle = Puzzle::from_text("8 6 7\n2 5 4\n3 0 1").unwrap();
        let before = puzzle.clone();
        for heuristic in ALL {
            let first = heuristic.estimate(&puzzle);
            let second = heuristic.estimate(&puzzle);
            assert_eq!(first, second);
        }
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_random_is_stable_per_grid() {
        let heuristic = RandomHeuristic::new(3);
        let solved = Puzzle::new(3).unwrap();
        let puzzle = Puzzle::from_text("8 6 7\n2 5 4\n3 0 1").unwrap();

        let value = heuristic.estimate(&puzzle);
        assert!((0.0..1.0).contains(&value));
        assert_eq!(value, heuristic.estimate(&puzzle));
        assert_eq!(value, RandomHeuristic::new(3).estimate(&puzzle));
        assert_ne!(value, heuristic.estimate(&solved));
    }

    #[test]
    fn test_boxed_heuristics() {
        let puzzle = Puzzle::from_text("8 7 6\n5 4 3\n2 1 0").unwrap();
        let boxed: Vec<Box<dyn Heuristic>> = vec![
            Box::new(Manhattan),
            Box::new(HeuristicKind::Hamming),
            Box::new(RandomHeuristic::new(3)),
        ];
        assert_eq!(boxed[0].estimate(&puzzle), 16.0);
        assert_eq!(boxed[1].estimate(&puzzle), 8.0);
        let names: Vec<&str> = boxed.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["manhattan", "hamming", "random"]);
    }

    #[test]
    fn test_admissible_on_every_2x2_state() {
        let start = Puzzle::new(2).unwrap();
        let depths = graph::distances(&start);
        assert_eq!(depths.len(), 12);

        for (puzzle, depth) in &depths {
            for heuristic in [
                HeuristicKind::Manhattan,
                HeuristicKind::Euclidean,
                HeuristicKind::Hamming,
            ] {
                assert!(
                    heuristic.estimate(puzzle) <= *depth as f64,
                    "{} overestimates {} (depth {})",
                    heuristic.name(),
                    puzzle.key(),
                    depth
                );
            }
        }
    }
}
