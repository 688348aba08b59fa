use crate::puzzle::Puzzle;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A search node: an owned snapshot of the grid plus its A* costs.
///
/// Two nodes are equal iff their grids are equal. Costs and parent links are
/// not part of identity, so a closed set of nodes deduplicates by grid.
#[derive(Debug)]
pub struct Node {
    cells: Box<[u8]>,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<Rc<Node>>,
    // Zobrist hash of `cells`
    hash: u64,
}

impl Node {
    /// Root node for the current grid of `puzzle`.
    pub fn root(puzzle: &Puzzle, h: f64, hash: u64) -> Self {
        Node {
            cells: puzzle.cells().into(),
            g: 0.0,
            h,
            f: h,
            parent: None,
            hash,
        }
    }

    /// Child of `parent` capturing the current grid of `puzzle`. The grid is
    /// copied, so `puzzle` may be mutated afterwards.
    pub fn child(parent: &Rc<Node>, puzzle: &Puzzle, h: f64, hash: u64) -> Self {
        let g = parent.g + 1.0;
        Node {
            cells: puzzle.cells().into(),
            g,
            h,
            f: g + h,
            parent: Some(Rc::clone(parent)),
            hash,
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.f
    }

    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    /// Number of parent links back to the root.
    pub fn path_len(&self) -> usize {
        let mut len = 0;
        let mut next = self.parent.as_deref();
        while let Some(node) = next {
            len += 1;
            next = node.parent.as_deref();
        }
        len
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.cells == other.cells
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
