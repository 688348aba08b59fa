use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::pqueue::PriorityQueue;
use crate::puzzle::Puzzle;
use crate::zobrist::Zobrist;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Solved { iterations: usize, path_len: usize },
    Cutoff,
    Impossible,
}

/// Hook called once per node taken off the open list.
pub trait Tracer {
    fn trace(&self, puzzle: &Puzzle, iterations: usize, node: &Node);
}

impl Tracer for () {
    fn trace(&self, _puzzle: &Puzzle, _iterations: usize, _node: &Node) {}
}

/// Weighted A* over puzzle grids.
///
/// `bound` scales the heuristic: 1.0 is plain A* (optimal with an admissible
/// heuristic), larger values favour h and trade optimality for speed, smaller
/// values favour g.
pub struct Solver<H: Heuristic, T: Tracer = ()> {
    heuristic: H,
    bound: f64,
    max_nodes: usize,
    tracer: T,
    iterations: usize,
}

impl<H: Heuristic> Solver<H> {
    pub fn new(heuristic: H, bound: f64) -> Self {
        assert!(
            bound.is_finite() && bound >= 0.0,
            "bound must be finite and non-negative"
        );
        Solver {
            heuristic,
            bound,
            max_nodes: 0,
            tracer: (),
            iterations: 0,
        }
    }
}

impl<H: Heuristic, T: Tracer> Solver<H, T> {
    /// Give up after expanding this many nodes (0 = no limit).
    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn tracer<U: Tracer>(self, tracer: U) -> Solver<H, U> {
        Solver {
            heuristic: self.heuristic,
            bound: self.bound,
            max_nodes: self.max_nodes,
            tracer,
            iterations: 0,
        }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Nodes taken off the open list during the last `solve`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn estimate(&self, puzzle: &Puzzle) -> f64 {
        self.heuristic.estimate(puzzle) * self.bound
    }

    /// Search from the current grid of `puzzle` to the solved grid.
    ///
    /// `puzzle` is used as the working buffer; on return it holds the grid of
    /// the last node examined (the solved grid on success). An unsolvable
    /// start exhausts the reachable half of the state space before returning
    /// `Impossible`, which is only practical for small sizes or with
    /// `max_nodes` set.
    pub fn solve(&mut self, puzzle: &mut Puzzle) -> SolveResult {
        self.iterations = 0;

        let zobrist = Zobrist::new(puzzle.size());
        let mut open = PriorityQueue::new();
        let mut closed: HashSet<Rc<Node>> = HashSet::new();

        let root = Node::root(
            puzzle,
            self.estimate(puzzle),
            zobrist.compute_hash(puzzle.cells()),
        );
        open.push(root.f(), Rc::new(root));

        while let Some(node) = open.pop_min() {
            // Stale duplicate of a grid expanded through a cheaper path
            if closed.contains(&node) {
                continue;
            }

            if self.max_nodes > 0 && self.iterations >= self.max_nodes {
                return SolveResult::Cutoff;
            }

            self.iterations += 1;
            closed.insert(Rc::clone(&node));

            puzzle.restore_cells(node.cells());
            self.tracer.trace(puzzle, self.iterations, &node);

            if puzzle.is_solved() {
                return SolveResult::Solved {
                    iterations: self.iterations,
                    path_len: node.path_len(),
                };
            }

            self.expand(&node, puzzle, &zobrist, &closed, &mut open);
        }

        SolveResult::Impossible
    }

    /// Push every unclosed child of `node` onto `open`. Each move is applied to
    /// the shared working grid, captured, then undone before the next one.
    fn expand(
        &self,
        node: &Rc<Node>,
        puzzle: &mut Puzzle,
        zobrist: &Zobrist,
        closed: &HashSet<Rc<Node>>,
        open: &mut PriorityQueue<Rc<Node>>,
    ) {
        for m in puzzle.legal_moves() {
            let hash = zobrist.slide_hash(node.hash_value(), puzzle, m);
            let undo = puzzle.slide(m);

            let child = Node::child(node, puzzle, self.estimate(puzzle), hash);
            if !closed.contains(&child) {
                open.push(child.f(), Rc::new(child));
            }

            puzzle.slide(undo);
        }
    }
}
