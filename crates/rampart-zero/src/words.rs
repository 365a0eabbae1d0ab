// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Erasure of the scalar storage hash states are built from: message and
//! key bytes, 32-bit state words, buffer lengths and flags.

use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe};

mod sealed {
    pub trait Sealed {}
}

/// Integer storage for secret data.
///
/// All-zero is a valid value of every `Word`, so slices and arrays of words
/// are cleared with a single memset instead of element by element.
pub trait Word: sealed::Sealed + FastZeroizable + ZeroizationProbe + Copy {}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {}

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    rampart_util::zeroize_primitive(self);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_word!(u8, u32, usize);

impl FastZeroizable for bool {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        rampart_util::zeroize_primitive(self);
    }
}

impl ZeroizationProbe for bool {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        !*self
    }
}

impl<W: Word> FastZeroizable for [W] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        rampart_util::fast_zeroize_slice(self);
        compiler_fence(Ordering::SeqCst);
    }
}

impl<W: Word> ZeroizationProbe for [W] {
    fn is_zeroized(&self) -> bool {
        self.iter().all(W::is_zeroized)
    }
}

impl<W: Word, const N: usize> FastZeroizable for [W; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        self.as_mut_slice().fast_zeroize();
    }
}

impl<W: Word, const N: usize> ZeroizationProbe for [W; N] {
    fn is_zeroized(&self) -> bool {
        self.as_slice().is_zeroized()
    }
}
