// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Partial-block input buffer.

use core::fmt;

use rampart_zero::{FastZeroizable, RampartZero};

use crate::consts::BLOCK_LEN;

/// Up to one block of pending input.
///
/// The length never exceeds [`BLOCK_LEN`]. A full block stays buffered until
/// more input arrives, because only the final block is compressed with the
/// last-block flag.
#[derive(RampartZero)]
pub(crate) struct BlockBuffer {
    bytes: [u8; BLOCK_LEN],
    len: usize,
}

impl BlockBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0u8; BLOCK_LEN],
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Bytes that still fit before the block is full.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        BLOCK_LEN - self.len
    }

    /// Appends `data`, which must fit in the remaining space.
    #[inline(always)]
    pub fn extend(&mut self, data: &[u8]) {
        debug_assert!(data.len() <= self.remaining());

        self.bytes[self.len..self.len + data.len()].copy_from_slice(data);
        self.len += data.len();
    }

    /// Zero-fills the unused tail so the block can be compressed.
    pub fn pad(&mut self) {
        self.bytes[self.len..].fast_zeroize();
    }

    pub fn block(&self) -> &[u8; BLOCK_LEN] {
        &self.bytes
    }

    /// Erases the contents and empties the buffer.
    pub fn clear(&mut self) {
        self.bytes.fast_zeroize();
        self.len = 0;
    }
}

impl fmt::Debug for BlockBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED BlockBuffer len={}]", self.len)
    }
}
