//! Pfannkuchen Core
//!
//! The fannkuch permutation kernel: permutation state, the flip counter,
//! Tompkin-Paige generation and a parallel block runner over the
//! permutation index space.

pub mod blocks;
pub mod generator;
pub mod perm;
pub mod size;

pub use blocks::{run_blocks, BlockPlan, DEFAULT_BLOCKS};
pub use generator::{Generator, Tally};
pub use perm::{FlipCounter, Permutation};
pub use size::{PermSize, SizeError, MAX_SIZE, MIN_SIZE, SLOTS};

/// Run the serial generator over every permutation of `size` elements.
pub fn pfannkuchen(size: PermSize) -> Tally {
    Generator::new(size).run()
}
