// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Portable compression function per RFC 7693 Section 3.2

use rampart_zero::FastZeroizable;

use crate::consts::{BLOCK_LEN, IV, SIGMA};
use crate::counter::Counter;

/// Mixing function G per RFC 7693 Section 3.1
#[inline(always)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

#[inline(always)]
fn round(v: &mut [u32; 16], m: &[u32; 16], s: &[usize; 16]) {
    // Columns
    g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

    // Diagonals
    g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
}

/// Compresses one block into the chaining value `h`.
///
/// Message words and the working vector are erased before returning.
pub(crate) fn compress(
    h: &mut [u32; 8],
    block: &[u8; BLOCK_LEN],
    counter: &Counter,
    flags: &[u32; 2],
) {
    let mut m = [0u32; 16];
    let mut v = [0u32; 16];

    rampart_util::load_le_words(&mut m, block);

    v[..8].copy_from_slice(h);
    v[8..12].copy_from_slice(&IV[..4]);
    v[12] = counter.low() ^ IV[4];
    v[13] = counter.high() ^ IV[5];
    v[14] = flags[0] ^ IV[6];
    v[15] = flags[1] ^ IV[7];

    for s in SIGMA.iter() {
        round(&mut v, &m, s);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }

    m.fast_zeroize();
    v.fast_zeroize();
}
