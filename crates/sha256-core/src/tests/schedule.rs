// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Expected words from the FIPS 180-4 "abc" worked example
// https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf

use crate::framer::pad;
use crate::schedule::MessageSchedule;

fn abc_schedule() -> MessageSchedule {
    let padded = pad(b"abc").expect("Failed to pad(..)");
    let block = padded.blocks().next().expect("Failed to get first block");
    MessageSchedule::expand(block)
}

#[test]
fn test_first_sixteen_words_are_big_endian_block() {
    let schedule = abc_schedule();

    assert_eq!(schedule.word(0), Some(0x6162_6380));
    for t in 1..15 {
        assert_eq!(schedule.word(t), Some(0), "W[{t}]");
    }
    assert_eq!(schedule.word(15), Some(0x0000_0018));
}

#[test]
fn test_expanded_words_abc() {
    let schedule = abc_schedule();

    assert_eq!(schedule.word(16), Some(0x6162_6380));
    assert_eq!(schedule.word(17), Some(0x000f_0000));
    assert_eq!(schedule.word(18), Some(0x7da8_6405));
    assert_eq!(schedule.word(19), Some(0x6000_03c6));
    assert_eq!(schedule.word(63), Some(0x12b1_edeb));
}

#[test]
fn test_expanded_words_follow_recurrence() {
    let block: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
    let schedule = MessageSchedule::expand(&block);

    let w = |t: usize| schedule.word(t).expect("Failed to get word");
    let ssig0 = |x: u32| x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3);
    let ssig1 = |x: u32| x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10);

    for t in 16..64 {
        let expected = w(t - 16)
            .wrapping_add(ssig0(w(t - 15)))
            .wrapping_add(w(t - 7))
            .wrapping_add(ssig1(w(t - 2)));
        assert_eq!(w(t), expected, "W[{t}]");
    }
}

#[test]
fn test_word_out_of_range() {
    assert_eq!(abc_schedule().word(64), None);
}

#[test]
fn test_schedule_is_independent_per_block() {
    let block = [0xa5u8; 64];

    let first = MessageSchedule::expand(&block);
    let _other = MessageSchedule::expand(&[0u8; 64]);
    let again = MessageSchedule::expand(&block);

    for t in 0..64 {
        assert_eq!(first.word(t), again.word(t), "W[{t}]");
    }
}

#[test]
fn test_debug_is_redacted() {
    assert_eq!(format!("{:?}", abc_schedule()), "[REDACTED MessageSchedule]");
}
