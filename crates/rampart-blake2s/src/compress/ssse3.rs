// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SSSE3 compression function.
//!
//! The sixteen-word working vector lives in four row registers; the diagonal
//! step is performed by rotating rows two to four into column position and
//! back. Byte-aligned rotations (16 and 8) use `pshufb`.

use core::arch::x86_64::*;

use rampart_zero::FastZeroizable;

use crate::consts::{BLOCK_LEN, IV, SIGMA};
use crate::counter::Counter;

#[inline(always)]
unsafe fn set4(a: u32, b: u32, c: u32, d: u32) -> __m128i {
    unsafe { _mm_setr_epi32(a as i32, b as i32, c as i32, d as i32) }
}

#[inline(always)]
unsafe fn add(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_add_epi32(a, b) }
}

#[inline(always)]
unsafe fn xor(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_xor_si128(a, b) }
}

#[inline(always)]
unsafe fn rot16(a: __m128i) -> __m128i {
    unsafe {
        _mm_shuffle_epi8(
            a,
            _mm_set_epi8(13, 12, 15, 14, 9, 8, 11, 10, 5, 4, 7, 6, 1, 0, 3, 2),
        )
    }
}

#[inline(always)]
unsafe fn rot12(a: __m128i) -> __m128i {
    unsafe { _mm_or_si128(_mm_srli_epi32(a, 12), _mm_slli_epi32(a, 32 - 12)) }
}

#[inline(always)]
unsafe fn rot8(a: __m128i) -> __m128i {
    unsafe {
        _mm_shuffle_epi8(
            a,
            _mm_set_epi8(12, 15, 14, 13, 8, 11, 10, 9, 4, 7, 6, 5, 0, 3, 2, 1),
        )
    }
}

#[inline(always)]
unsafe fn rot7(a: __m128i) -> __m128i {
    unsafe { _mm_or_si128(_mm_srli_epi32(a, 7), _mm_slli_epi32(a, 32 - 7)) }
}

/// First half of G on all four columns (or diagonals) at once.
#[inline(always)]
unsafe fn g1(
    row1: &mut __m128i,
    row2: &mut __m128i,
    row3: &mut __m128i,
    row4: &mut __m128i,
    m: __m128i,
) {
    unsafe {
        *row1 = add(add(*row1, m), *row2);
        *row4 = xor(*row4, *row1);
        *row4 = rot16(*row4);
        *row3 = add(*row3, *row4);
        *row2 = xor(*row2, *row3);
        *row2 = rot12(*row2);
    }
}

/// Second half of G.
#[inline(always)]
unsafe fn g2(
    row1: &mut __m128i,
    row2: &mut __m128i,
    row3: &mut __m128i,
    row4: &mut __m128i,
    m: __m128i,
) {
    unsafe {
        *row1 = add(add(*row1, m), *row2);
        *row4 = xor(*row4, *row1);
        *row4 = rot8(*row4);
        *row3 = add(*row3, *row4);
        *row2 = xor(*row2, *row3);
        *row2 = rot7(*row2);
    }
}

// `core::arch::x86_64::_MM_SHUFFLE` is not stable as a const fn.
macro_rules! _MM_SHUFFLE {
    ($z:expr, $y:expr, $x:expr, $w:expr) => {
        ($z << 6) | ($y << 4) | ($x << 2) | $w
    };
}

// Lines the diagonals (0,5,10,15) (1,6,11,12) (2,7,8,13) (3,4,9,14) up as
// columns. Row 1 stays in place.
#[inline(always)]
pub(crate) unsafe fn diagonalize(row2: &mut __m128i, row3: &mut __m128i, row4: &mut __m128i) {
    unsafe {
        *row2 = _mm_shuffle_epi32(*row2, _MM_SHUFFLE!(0, 3, 2, 1));
        *row3 = _mm_shuffle_epi32(*row3, _MM_SHUFFLE!(1, 0, 3, 2));
        *row4 = _mm_shuffle_epi32(*row4, _MM_SHUFFLE!(2, 1, 0, 3));
    }
}

#[inline(always)]
pub(crate) unsafe fn undiagonalize(row2: &mut __m128i, row3: &mut __m128i, row4: &mut __m128i) {
    unsafe {
        *row2 = _mm_shuffle_epi32(*row2, _MM_SHUFFLE!(2, 1, 0, 3));
        *row3 = _mm_shuffle_epi32(*row3, _MM_SHUFFLE!(1, 0, 3, 2));
        *row4 = _mm_shuffle_epi32(*row4, _MM_SHUFFLE!(0, 3, 2, 1));
    }
}

/// Compresses one block into the chaining value `h`.
///
/// # Safety
///
/// The CPU must support SSSE3.
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn compress(
    h: &mut [u32; 8],
    block: &[u8; BLOCK_LEN],
    counter: &Counter,
    flags: &[u32; 2],
) {
    let mut m = [0u32; 16];
    rampart_util::load_le_words(&mut m, block);

    unsafe {
        let h_ptr = h.as_mut_ptr() as *mut __m128i;
        let h_lo = _mm_loadu_si128(h_ptr as *const __m128i);
        let h_hi = _mm_loadu_si128(h_ptr.add(1) as *const __m128i);

        let mut row1 = h_lo;
        let mut row2 = h_hi;
        let mut row3 = set4(IV[0], IV[1], IV[2], IV[3]);
        let mut row4 = xor(
            set4(IV[4], IV[5], IV[6], IV[7]),
            set4(counter.low(), counter.high(), flags[0], flags[1]),
        );

        for s in SIGMA.iter() {
            let buf = set4(m[s[0]], m[s[2]], m[s[4]], m[s[6]]);
            g1(&mut row1, &mut row2, &mut row3, &mut row4, buf);
            let buf = set4(m[s[1]], m[s[3]], m[s[5]], m[s[7]]);
            g2(&mut row1, &mut row2, &mut row3, &mut row4, buf);

            diagonalize(&mut row2, &mut row3, &mut row4);

            let buf = set4(m[s[8]], m[s[10]], m[s[12]], m[s[14]]);
            g1(&mut row1, &mut row2, &mut row3, &mut row4, buf);
            let buf = set4(m[s[9]], m[s[11]], m[s[13]], m[s[15]]);
            g2(&mut row1, &mut row2, &mut row3, &mut row4, buf);

            undiagonalize(&mut row2, &mut row3, &mut row4);
        }

        _mm_storeu_si128(h_ptr, xor(h_lo, xor(row1, row3)));
        _mm_storeu_si128(h_ptr.add(1), xor(h_hi, xor(row2, row4)));
    }

    m.fast_zeroize();
}
