// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Erasure contract shared by hash states, MAC states and key buffers.

use super::sentinel::ZeroizeOnDropSentinel;

/// In-place erasure of secret material.
///
/// After `fast_zeroize` every secret-bearing field reads as zero. For a hash
/// state this also means the state is spent: it holds no chaining value to
/// continue from.
///
/// Dyn-compatible, so mixed fields can be erased through
/// `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites all secret bytes with zeros.
    fn fast_zeroize(&mut self);
}

/// Inspection counterpart of [`FastZeroizable`].
///
/// ```rust
/// use rampart_zero::{FastZeroizable, ZeroizationProbe};
///
/// let mut chaining_value = [0x6A09_E667u32; 8];
/// assert!(!chaining_value.is_zeroized());
///
/// chaining_value.fast_zeroize();
/// assert!(chaining_value.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// `true` when every secret-bearing byte is zero.
    fn is_zeroized(&self) -> bool;
}

/// Drop-time check for types that embed a [`ZeroizeOnDropSentinel`].
pub trait AssertZeroizeOnDrop {
    /// A handle observing the embedded sentinel.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Consumes `self` and panics unless dropping it erased the value.
    fn assert_zeroize_on_drop(self);
}
