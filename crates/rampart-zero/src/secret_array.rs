// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size byte buffer that erases itself when dropped.

use core::fmt;
use core::ops::{Deref, DerefMut};

use super::traits::{FastZeroizable, ZeroizationProbe};

/// A `[u8; N]` holding key material or an intermediate secret.
///
/// Unlike a bare array, every exit path (normal return, `?` propagation,
/// panic unwind) runs the [`Drop`] impl, which overwrites the bytes.
///
/// ```rust
/// use rampart_zero::{FastZeroizable, SecretArray, ZeroizationProbe};
///
/// let mut prk = SecretArray::<32>::new();
/// prk[0] = 0xAA;
/// assert!(!prk.is_zeroized());
///
/// prk.fast_zeroize();
/// assert!(prk.is_zeroized());
/// ```
pub struct SecretArray<const N: usize>([u8; N]);

impl<const N: usize> SecretArray<N> {
    /// Creates an all-zero buffer.
    pub const fn new() -> Self {
        Self([0u8; N])
    }

    /// Length of the buffer in bytes.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` when `N == 0`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for SecretArray<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for SecretArray<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for SecretArray<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED SecretArray<{}>]", N)
    }
}

impl<const N: usize> FastZeroizable for SecretArray<N> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        self.0.fast_zeroize();
    }
}

impl<const N: usize> ZeroizationProbe for SecretArray<N> {
    fn is_zeroized(&self) -> bool {
        rampart_util::is_slice_zeroized(&self.0)
    }
}

impl<const N: usize> Drop for SecretArray<N> {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}
