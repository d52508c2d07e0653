//! Permutation state and the flip counter.

use crate::size::{PermSize, SLOTS};

/// A permutation of `0..len` stored in a fixed 16-slot buffer.
///
/// Slots at `len..` are unused and stay untouched by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation {
    slots: [u8; SLOTS],
    len: usize,
}

impl Permutation {
    /// The identity permutation `[0, 1, …, n-1]`.
    pub fn identity(size: PermSize) -> Self {
        let mut slots = [0u8; SLOTS];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            slots,
            len: size.get(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub fn first(&self) -> usize {
        self.slots[0] as usize
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.slots[..self.len]
    }

    /// Cyclic left rotation of `s[0..=i]`: `s[0]` moves to `s[i]` and
    /// everything in between shifts down by one.
    pub fn rotate(&mut self, i: usize) {
        debug_assert!(i < self.len);
        self.slots[..=i].rotate_left(1);
    }

    /// Rotate `s[0..=i]` left by `by` places in one step.
    pub(crate) fn rotate_by(&mut self, i: usize, by: usize) {
        debug_assert!(by <= i);
        self.slots[..=i].rotate_left(by);
    }

    pub fn is_valid(&self) -> bool {
        let mut seen = [false; SLOTS];
        for &v in self.as_slice() {
            let v = v as usize;
            if v >= self.len || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}

/// Counts prefix reversals on a scratch copy so the source permutation
/// is never disturbed.
#[derive(Debug, Clone, Default)]
pub struct FlipCounter {
    scratch: [u8; SLOTS],
}

impl FlipCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of flips needed before 0 reaches the front of `perm`.
    ///
    /// A flip reverses the prefix of length `s[0] + 1`.
    pub fn count(&mut self, perm: &Permutation) -> u32 {
        let s = &perm.slots;
        if s[0] == 0 {
            return 0;
        }
        if s[s[0] as usize] == 0 {
            return 1;
        }

        let t = &mut self.scratch;
        t[..perm.len].copy_from_slice(perm.as_slice());
        // The final flip, which lands 0 at the front, is counted up front.
        let mut flips = 1;
        loop {
            let k = t[0] as usize;
            t[..=k].reverse();
            flips += 1;
            if t[t[0] as usize] == 0 {
                return flips;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(values: &[u8]) -> Permutation {
        let mut slots = [0u8; SLOTS];
        slots[..values.len()].copy_from_slice(values);
        Permutation {
            slots,
            len: values.len(),
        }
    }

    fn naive_flips(values: &[u8]) -> u32 {
        let mut v = values.to_vec();
        let mut flips = 0;
        while v[0] != 0 {
            let k = v[0] as usize;
            v[..=k].reverse();
            flips += 1;
        }
        flips
    }

    #[test]
    fn identity_is_valid() {
        let p = Permutation::identity(PermSize::new(5).unwrap());
        assert_eq!(p.as_slice(), &[0, 1, 2, 3, 4]);
        assert!(p.is_valid());
        assert_eq!(p.first(), 0);
    }

    #[test]
    fn rotate_moves_head_to_position() {
        let mut p = perm(&[0, 1, 2, 3, 4]);
        p.rotate(3);
        assert_eq!(p.as_slice(), &[1, 2, 3, 0, 4]);
        p.rotate(0);
        assert_eq!(p.as_slice(), &[1, 2, 3, 0, 4]);
    }

    #[test]
    fn rotate_cycles_back_after_i_plus_one_steps() {
        let start = perm(&[4, 2, 0, 3, 1, 5]);
        for i in 0..start.len() {
            let mut p = start;
            for _ in 0..=i {
                p.rotate(i);
                assert!(p.is_valid());
            }
            assert_eq!(p, start, "rotation at {}", i);
        }
    }

    #[test]
    fn rotate_by_matches_repeated_rotate() {
        let start = perm(&[3, 0, 4, 1, 2]);
        for by in 0..5 {
            let mut stepped = start;
            for _ in 0..by {
                stepped.rotate(4);
            }
            let mut jumped = start;
            jumped.rotate_by(4, by);
            assert_eq!(stepped, jumped);
        }
    }

    #[test]
    fn flip_count_trivial_cases() {
        let mut counter = FlipCounter::new();
        assert_eq!(counter.count(&perm(&[0, 2, 1])), 0);
        assert_eq!(counter.count(&perm(&[1, 0, 2])), 1);
        assert_eq!(counter.count(&perm(&[2, 1, 0])), 1);
    }

    #[test]
    fn flip_count_known_sequence() {
        // [3,1,0,2] -> [2,0,1,3] -> [1,0,2,3] -> [0,1,2,3]
        let mut counter = FlipCounter::new();
        assert_eq!(counter.count(&perm(&[3, 1, 0, 2])), 3);
    }

    #[test]
    fn flip_count_leaves_input_alone() {
        let p = perm(&[2, 4, 0, 1, 3, 5]);
        let copy = p;
        let mut counter = FlipCounter::new();
        let first = counter.count(&p);
        let second = counter.count(&p);
        assert_eq!(first, second);
        assert_eq!(p, copy);
    }

    #[test]
    fn flip_count_agrees_with_direct_reversal() {
        let size = PermSize::new(6).unwrap();
        let mut p = Permutation::identity(size);
        let mut counter = FlipCounter::new();
        // Nested rotations reach a broad spread of permutations.
        for _ in 0..4 {
            p.rotate(3);
            for _ in 0..6 {
                p.rotate(5);
                for _ in 0..3 {
                    p.rotate(2);
                    assert_eq!(counter.count(&p), naive_flips(p.as_slice()), "{:?}", p);
                }
            }
        }
    }
}
