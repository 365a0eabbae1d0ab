// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 64-bit byte counter split into two 32-bit halves.

use rampart_zero::RampartZero;

/// Number of bytes compressed so far, as `(t0, t1)` with carry from
/// `t0` into `t1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, RampartZero)]
pub(crate) struct Counter {
    t: [u32; 2],
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_words(t0: u32, t1: u32) -> Self {
        Self { t: [t0, t1] }
    }

    /// Adds `inc` bytes, carrying into the high word on overflow.
    #[inline(always)]
    pub fn increment(&mut self, inc: u32) {
        self.t[0] = self.t[0].wrapping_add(inc);
        if self.t[0] < inc {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }

    #[inline(always)]
    pub fn low(&self) -> u32 {
        self.t[0]
    }

    #[inline(always)]
    pub fn high(&self) -> u32 {
        self.t[1]
    }
}
