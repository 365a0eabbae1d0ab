// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte conversion and erasure helpers.
//!
//! Conversion functions erase their source after reading so key-derived words
//! and bytes do not linger in stack temporaries.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("48a8997d"), vec![0x48, 0xa8, 0x99, 0x7d]);
/// ```
#[cfg(feature = "test-utils")]
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Reads a little-endian `u32` from `bytes`, erasing the source bytes.
///
/// The word is assembled with shifts directly into `dst`, so no intermediate
/// copy of the bytes is left on the stack.
///
/// # Example
///
/// ```
/// use rampart_util::u32_from_le;
///
/// let mut word = 0u32;
/// let mut bytes = [0x01, 0x02, 0x03, 0x04];
///
/// u32_from_le(&mut word, &mut bytes);
///
/// assert_eq!(word, 0x0403_0201);
/// assert_eq!(bytes, [0, 0, 0, 0]);
/// ```
#[inline(always)]
pub fn u32_from_le(dst: &mut u32, bytes: &mut [u8; 4]) {
    *dst = 0;
    for (i, byte) in bytes.iter_mut().enumerate() {
        *dst |= (*byte as u32) << (8 * i);
        *byte = 0;
    }
}

/// Writes `src` as little-endian bytes, erasing `src`.
///
/// # Example
///
/// ```
/// use rampart_util::u32_to_le;
///
/// let mut word = 0x0403_0201u32;
/// let mut bytes = [0u8; 4];
///
/// u32_to_le(&mut word, &mut bytes);
///
/// assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(word, 0);
/// ```
#[inline(always)]
pub fn u32_to_le(src: &mut u32, bytes: &mut [u8; 4]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (*src >> (8 * i)) as u8;
    }
    *src = 0;
}

/// Loads sixteen little-endian words from a 64-byte block.
///
/// The block itself is left untouched: it is caller-owned input.
#[inline(always)]
pub fn load_le_words(words: &mut [u32; 16], block: &[u8; 64]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = (chunk[0] as u32)
            | ((chunk[1] as u32) << 8)
            | ((chunk[2] as u32) << 16)
            | ((chunk[3] as u32) << 24);
    }
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Zeroizes a single primitive value using a volatile write.
///
/// Valid for every primitive where all-zeros is a valid representation
/// (integers, `bool`, floats, `char`).
///
/// # Example
///
/// ```
/// use rampart_util::zeroize_primitive;
///
/// let mut counter = 0xFFFF_FFFFu32;
/// zeroize_primitive(&mut counter);
/// assert_eq!(counter, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T>(val: &mut T) {
    // SAFETY: callers only pass primitives, for which all-zero bytes are valid.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) followed by a volatile read so the optimizer
/// cannot elide the store. Treats the slice as raw bytes, so `T` must be a type
/// for which all-zero bytes are valid.
///
/// # Example
///
/// ```
/// use rampart_util::fast_zeroize_slice;
///
/// let mut words = [0xDEAD_BEEFu32; 8];
/// fast_zeroize_slice(&mut words);
/// assert!(words.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the pointer covers exactly `byte_len` bytes of the slice.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}
