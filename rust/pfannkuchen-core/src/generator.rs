//! Tompkin-Paige permutation generation.
//!
//! Permutations are produced by an odometer of per-position counters that
//! decides, after every rotation, whether to carry into the next position
//! or to emit the current arrangement. Each emitted permutation toggles a
//! parity flag that signs its contribution to the checksum.

use crate::perm::{FlipCounter, Permutation};
use crate::size::{PermSize, SLOTS};

/// Aggregate results of a run, or of one block of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Flip counts summed with alternating sign.
    pub checksum: i64,
    /// Largest flip count seen.
    pub max_flips: u32,
    /// Permutations visited, flip-counted or not.
    pub permutations: u64,
}

impl Tally {
    /// Fold in one flip count; `odd` selects the sign.
    pub fn record(&mut self, flips: u32, odd: bool) {
        if flips > self.max_flips {
            self.max_flips = flips;
        }
        self.checksum += if odd { -(flips as i64) } else { flips as i64 };
    }

    /// Combine results from disjoint parts of the permutation space.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            checksum: self.checksum + other.checksum,
            max_flips: self.max_flips.max(other.max_flips),
            permutations: self.permutations + other.permutations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    perm: Permutation,
    counters: [u8; SLOTS],
    pos: usize,
    odd: bool,
    flips: FlipCounter,
}

impl Generator {
    /// Start from the identity permutation with all counters at zero.
    pub fn new(size: PermSize) -> Self {
        Self {
            perm: Permutation::identity(size),
            counters: [0; SLOTS],
            pos: 0,
            odd: false,
            flips: FlipCounter::new(),
        }
    }

    /// Jump straight to the permutation the generator would emit at
    /// `index` (counting the identity as 0).
    ///
    /// Counter `i` holds the `i`-th factorial-base digit of `index`, and
    /// the prefix `s[0..=i]` is rotated left by that digit, working down
    /// from the highest position. Returns `None` when `index` is not
    /// below `n!`.
    pub fn at(size: PermSize, index: u64) -> Option<Self> {
        let factorials = size.factorials();
        if index >= factorials[size.get()] {
            return None;
        }

        let mut gen = Self::new(size);
        let mut rest = index;
        for i in (1..size.get()).rev() {
            let digit = rest / factorials[i];
            rest %= factorials[i];
            gen.counters[i] = digit as u8;
            gen.perm.rotate_by(i, digit as usize);
        }
        gen.pos = 1;
        gen.odd = index % 2 == 1;
        Some(gen)
    }

    pub fn current(&self) -> &Permutation {
        &self.perm
    }

    pub fn is_odd(&self) -> bool {
        self.odd
    }

    /// Step to the next permutation. Returns `false` once every
    /// permutation has been produced.
    pub fn advance(&mut self) -> bool {
        let n = self.perm.len();
        while self.pos < n {
            let i = self.pos;
            // Rotate first, then decide whether this position carries.
            self.perm.rotate(i);
            if self.counters[i] as usize >= i {
                self.counters[i] = 0;
                self.pos += 1;
                continue;
            }
            self.counters[i] += 1;
            self.pos = 1;
            self.odd = !self.odd;
            return true;
        }
        false
    }

    /// Count the current permutation into `tally`.
    pub fn observe(&mut self, tally: &mut Tally) {
        tally.permutations += 1;
        if self.perm.first() != 0 {
            let flips = self.flips.count(&self.perm);
            tally.record(flips, self.odd);
        }
    }

    /// Observe the current permutation and up to `count - 1` successors.
    pub fn tally(&mut self, count: u64) -> Tally {
        let mut tally = Tally::default();
        if count == 0 {
            return tally;
        }
        self.observe(&mut tally);
        for _ in 1..count {
            if !self.advance() {
                break;
            }
            self.observe(&mut tally);
        }
        tally
    }

    /// Run to exhaustion from the current state.
    pub fn run(mut self) -> Tally {
        let mut tally = Tally::default();
        self.observe(&mut tally);
        while self.advance() {
            self.observe(&mut tally);
        }
        tally
    }
}

impl Iterator for Generator {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        self.advance().then_some(self.perm)
    }
}
