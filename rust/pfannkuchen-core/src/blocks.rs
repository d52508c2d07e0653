//! Parallel evaluation over disjoint ranges of the permutation index space.
//!
//! The checksum is a sum and the flip maximum a max, so ranges can be
//! counted independently and merged in any order. Each range seeds its own
//! generator directly at its first index.

use rayon::prelude::*;
use tracing::debug;

use crate::generator::{Generator, Tally};
use crate::size::PermSize;

/// Preferred number of ranges when the caller has no opinion.
pub const DEFAULT_BLOCKS: u64 = 24;

/// How `n!` permutations are cut into contiguous ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    pub total: u64,
    pub block_len: u64,
    pub blocks: u64,
}

impl BlockPlan {
    /// Split into at most `preferred` ranges of equal length; only the
    /// last range may be shorter. A single range is used when there are
    /// fewer permutations than `preferred`.
    pub fn new(size: PermSize, preferred: u64) -> Self {
        let preferred = preferred.max(1);
        let total = size.permutations();
        let (blocks, block_len) = if total < preferred {
            (1, total)
        } else {
            let block_len = total.div_ceil(preferred);
            (total.div_ceil(block_len), block_len)
        };
        Self {
            total,
            block_len,
            blocks,
        }
    }

    /// `(first index, length)` of range `block`.
    pub fn range(&self, block: u64) -> (u64, u64) {
        let start = block * self.block_len;
        let end = (start + self.block_len).min(self.total);
        (start, end - start)
    }
}

/// Count every permutation of `size` using up to `preferred` ranges
/// evaluated on the rayon pool.
pub fn run_blocks(size: PermSize, preferred: u64) -> Tally {
    let plan = BlockPlan::new(size, preferred);
    debug!(
        n = size.get(),
        blocks = plan.blocks,
        block_len = plan.block_len,
        "block plan"
    );

    (0..plan.blocks)
        .into_par_iter()
        .map(|block| {
            let (start, len) = plan.range(block);
            Generator::at(size, start).map_or_else(Tally::default, |mut gen| gen.tally(len))
        })
        .reduce(Tally::default, Tally::merge)
}
