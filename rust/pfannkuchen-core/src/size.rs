//! Validated permutation sizes.

use thiserror::Error;

/// Number of slots in every fixed-size permutation buffer.
pub const SLOTS: usize = 16;
/// Smallest accepted permutation size.
pub const MIN_SIZE: usize = 3;
/// Largest accepted permutation size. The last buffer slot stays unused.
pub const MAX_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("size {0} is outside 3..=15")]
    OutOfRange(i64),
}

/// A permutation size known to fit the fixed buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermSize(usize);

impl PermSize {
    pub fn new(n: i64) -> Result<Self, SizeError> {
        if n < MIN_SIZE as i64 || n > MAX_SIZE as i64 {
            return Err(SizeError::OutOfRange(n));
        }
        Ok(Self(n as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// `k!` for every `k` in `0..=n`; entries past `n` are left at 1.
    pub fn factorials(self) -> [u64; SLOTS] {
        let mut table = [1u64; SLOTS];
        for k in 1..=self.0 {
            table[k] = table[k - 1] * k as u64;
        }
        table
    }

    /// Total number of permutations, `n!`.
    pub fn permutations(self) -> u64 {
        self.factorials()[self.0]
    }
}

impl TryFrom<i64> for PermSize {
    type Error = SizeError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl std::fmt::Display for PermSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
