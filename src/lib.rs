pub mod graph;
pub mod greedy;
pub mod heuristic;
pub mod history;
pub mod node;
pub mod pqueue;
pub mod puzzle;
pub mod shuffle;
pub mod solver;
pub mod zobrist;
