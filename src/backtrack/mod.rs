//! Visiting-sequence planning via backtracking.
//!
//! Depth-first search over permutations of the given stops, looking
//! for the visiting order that maximizes accumulated priority while
//! staying under a cost ceiling and a distance ceiling. Two prunes
//! keep the `O(n!)` worst case at bay: a hard prune on either ceiling
//! and an optimistic prune on the best still-achievable priority.

mod config;
mod runner;
mod types;

pub use config::SequenceConfig;
pub use runner::SequenceRunner;
pub use types::{SequenceProblem, SequenceSolution};
