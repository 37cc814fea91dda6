//! The computer opponent: a greedy one-move heuristic with random
//! tie-breaking.

mod heuristic;

pub use heuristic::{best_columns, HeuristicAi};
