// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::Word32;

const TEST_VALUES: [u32; 6] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
    0x8000_0001,
];

fn w(x: u32) -> Word32 {
    Word32::new(x)
}

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (!x & z);
                assert_eq!(
                    Word32::ch(w(x), w(y), w(z)).get(),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (x & z) ^ (y & z);
                assert_eq!(
                    Word32::maj(w(x), w(y), w(z)).get(),
                    expected,
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn sigmas_match_reference() {
    for &x in &TEST_VALUES {
        assert_eq!(
            w(x).bsig0().get(),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22),
            "Σ0 mismatch for x={x:#010x}"
        );
        assert_eq!(
            w(x).bsig1().get(),
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25),
            "Σ1 mismatch for x={x:#010x}"
        );
        assert_eq!(
            w(x).ssig0().get(),
            x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3),
            "σ0 mismatch for x={x:#010x}"
        );
        assert_eq!(
            w(x).ssig1().get(),
            x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10),
            "σ1 mismatch for x={x:#010x}"
        );
    }
}

#[test]
fn rotr_is_circular() {
    assert_eq!(w(0x0000_0001).rotr(1).get(), 0x8000_0000);
    assert_eq!(w(0x1234_5678).rotr(8).get(), 0x7812_3456);
    assert_eq!(w(0xdead_beef).rotr(32 - 1).rotr(1).get(), 0xdead_beef);
}

#[test]
fn shr_is_logical() {
    assert_eq!(w(0x8000_0000).shr(3).get(), 0x1000_0000);
    assert_eq!(w(0xffff_ffff).shr(10).get(), 0x003f_ffff);
}

#[test]
fn addition_wraps_modulo_2_pow_32() {
    assert_eq!((w(0xffff_ffff) + w(1)).get(), 0);
    assert_eq!((w(0xffff_fff0) + 0x20u32).get(), 0x10);

    let mut acc = w(0x8000_0000);
    acc += w(0x8000_0000);
    assert_eq!(acc.get(), 0);
}

#[test]
fn big_endian_roundtrip_order() {
    let word = Word32::from_be_bytes([0x61, 0x62, 0x63, 0x80]);
    assert_eq!(word.get(), 0x6162_6380);
    assert_eq!(word.to_be_bytes(), [0x61, 0x62, 0x63, 0x80]);
}

#[test]
fn debug_shows_hex() {
    assert_eq!(format!("{:?}", w(0xab)), "Word32(0x000000ab)");
}
