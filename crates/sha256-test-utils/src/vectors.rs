// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 known-answer vectors.
//!
//! References:
//! [1] FIPS 180-4 / NIST SHA-256 examples
//!     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
//! [2] RFC 6234 Section 8.5 test harness (TEST1, TEST2_1, TEST3)

/// A message and its expected lowercase hex digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Short label used in assertion messages
    pub name: &'static str,
    /// Input message
    pub message: &'static [u8],
    /// Expected digest, 64 lowercase hex characters
    pub digest: &'static str,
}

/// Known answers covering empty input, single block, and every padding boundary.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: b"",
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: b"abc",
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    // 448 bits: padding spills into a second block
    KnownAnswer {
        name: "448-bit",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "quick brown fox",
        message: b"The quick brown fox jumps over the lazy dog",
        digest: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    // 55 bytes: largest message whose padding fits in one block
    KnownAnswer {
        name: "55 x 'a'",
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    },
    // 56 bytes: smallest message whose padding needs a second block
    KnownAnswer {
        name: "56 x 'a'",
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
    },
    KnownAnswer {
        name: "63 x 'a'",
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34",
    },
    // 64 bytes: a whole block of message, padding is a full extra block
    KnownAnswer {
        name: "64 x 'a'",
        message: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        digest: "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    },
];

/// RFC 6234 TEST3: one million repetitions of `a`.
///
/// Returns the message and its expected digest.
pub fn million_a() -> (Vec<u8>, &'static str) {
    (
        vec![b'a'; 1_000_000],
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    )
}
