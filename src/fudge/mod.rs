//! Fudged candidate generation
//!
//! Pure, synchronous pipeline: lookalike table -> label permutations ->
//! TLD expansion -> deduplicated candidate list.

pub mod generator;
pub mod lookalike;
pub mod permute;
pub mod tld;

// Re-export main functionality
pub use generator::generate_candidates;
pub use lookalike::LookalikeTable;
pub use permute::permute_label;
pub use tld::{resolve_tlds, TldSelection};
