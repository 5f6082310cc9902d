// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for block-order tests.

/// Calls `callback` once for every permutation of `[0, 1, .., len-1]`.
///
/// Iterative Heap's algorithm; the identity permutation comes first.
///
/// # Example
/// ```
/// use sha256_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_perm| count += 1);
/// assert_eq!(count, 6);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            indices.swap(j, i);
            callback(&indices);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

/// Returns a copy of `items` reordered so that position `i` holds `items[perm[i]]`.
///
/// # Panics
///
/// Panics if `perm` is not the same length as `items` or indexes out of range.
///
/// # Example
/// ```
/// use sha256_test_utils::permuted;
///
/// assert_eq!(permuted(&['a', 'b', 'c'], &[2, 0, 1]), vec!['c', 'a', 'b']);
/// ```
pub fn permuted<T: Clone>(items: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), perm.len(), "permutation length mismatch");
    perm.iter().map(|&i| items[i].clone()).collect()
}
