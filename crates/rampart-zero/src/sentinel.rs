// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop witness for secret-holding states.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{FastZeroizable, ZeroizationProbe};

/// Records whether the state that owns it has been erased.
///
/// Erasing the owner erases the sentinel with it. Clones share one flag, so
/// a clone taken before the owner is dropped still answers afterwards.
///
/// ```rust
/// use rampart_zero::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let witness = sentinel.clone();
///
/// assert!(!witness.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(witness.is_zeroized());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZeroizeOnDropSentinel {
    erased: Arc<AtomicBool>,
}

impl ZeroizeOnDropSentinel {
    /// Forgets earlier erasures, so only the next one is observed.
    pub fn reset(&mut self) {
        self.erased.store(false, Ordering::SeqCst);
    }
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.erased.store(true, Ordering::SeqCst);
    }
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        self.erased.load(Ordering::SeqCst)
    }
}
