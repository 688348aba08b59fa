use crate::puzzle::Puzzle;
use std::collections::{HashMap, HashSet, VecDeque};

/// States and one-slide transitions discovered from a starting grid.
#[derive(Debug, Default)]
pub struct StateGraph {
    /// State keys in discovery order
    pub states: Vec<String>,
    /// Directed transitions as (from key, to key)
    pub edges: Vec<(String, String)>,
}

/// Walk transitions breadth-first from `start` until `max_edges` distinct
/// edges are recorded or every reachable state has been expanded.
pub fn explore(start: &Puzzle, max_edges: usize) -> StateGraph {
    let mut graph = StateGraph::default();
    let mut seen = HashSet::new();
    let mut edges_seen = HashSet::new();
    let mut queue = VecDeque::new();

    let start_key = start.key();
    seen.insert(start_key.clone());
    graph.states.push(start_key.clone());
    queue.push_back((start.clone(), start_key));

    while let Some((puzzle, key)) = queue.pop_front() {
        for next in puzzle.successors() {
            if graph.edges.len() >= max_edges {
                return graph;
            }

            let next_key = next.key();
            if edges_seen.insert((key.clone(), next_key.clone())) {
                graph.edges.push((key.clone(), next_key.clone()));
            }

            if seen.insert(next_key.clone()) {
                graph.states.push(next_key.clone());
                queue.push_back((next, next_key));
            }
        }
    }

    graph
}

/// Every state reachable from `start` with its slide distance, in BFS order.
/// Slides are reversible, so this is also the distance back to `start`.
pub fn distances(start: &Puzzle) -> Vec<(Puzzle, usize)> {
    let mut depths: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::new();
    let mut queue = VecDeque::new();

    depths.insert(start.key(), 0);
    queue.push_back((start.clone(), 0));

    while let Some((puzzle, depth)) = queue.pop_front() {
        for next in puzzle.successors() {
            let next_key = next.key();
            if !depths.contains_key(&next_key) {
                depths.insert(next_key, depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
        result.push((puzzle, depth));
    }

    result
}
