//! Published fannkuch results, checked through both the serial generator
//! and the block runner.

use pfannkuchen_core::{pfannkuchen, run_blocks, Generator, PermSize, DEFAULT_BLOCKS};

fn size(n: i64) -> PermSize {
    PermSize::new(n).expect("valid size")
}

#[test]
fn seven() {
    let tally = pfannkuchen(size(7));
    assert_eq!(tally.checksum, 228);
    assert_eq!(tally.max_flips, 16);
    assert_eq!(tally.permutations, 5040);
}

#[test]
fn eight() {
    let tally = pfannkuchen(size(8));
    assert_eq!(tally.checksum, 1616);
    assert_eq!(tally.max_flips, 22);
}

#[test]
fn nine_in_blocks() {
    let tally = run_blocks(size(9), DEFAULT_BLOCKS);
    assert_eq!(tally.checksum, 8629);
    assert_eq!(tally.max_flips, 30);
    assert_eq!(tally.permutations, 362_880);
}

#[test]
fn ten_in_blocks() {
    let tally = run_blocks(size(10), DEFAULT_BLOCKS);
    assert_eq!(tally.checksum, 73196);
    assert_eq!(tally.max_flips, 38);
}

#[test]
fn repeat_runs_agree() {
    assert_eq!(pfannkuchen(size(6)), pfannkuchen(size(6)));
}

#[test]
fn largest_size_ends_on_last_index() {
    let s = size(15);
    let mut gen = Generator::at(s, s.permutations() - 1).expect("last index");
    assert!(gen.current().is_valid());
    assert_eq!(gen.current().as_slice().len(), 15);
    let tally = gen.tally(1);
    assert_eq!(tally.permutations, 1);
    assert!(!gen.advance());
}

#[test]
fn largest_size_rejects_index_past_the_end() {
    let s = size(15);
    assert!(Generator::at(s, s.permutations()).is_none());
}

#[test]
fn largest_size_first_block_is_valid() {
    let s = size(15);
    let mut gen = Generator::new(s);
    for _ in 0..1000 {
        assert!(gen.advance());
        assert!(gen.current().is_valid());
    }
}
