// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::traits::{AssertZeroizeOnDrop, ZeroizationProbe};

/// Drops `value` and panics unless its sentinel was erased during the drop.
///
/// The sentinel is reset first, so an erasure that already happened (a
/// finalized hash state, for instance) does not count.
///
/// # Panics
///
/// Panics if dropping `value` left its sentinel untouched.
pub fn assert_zeroize_on_drop<T: AssertZeroizeOnDrop>(value: T) {
    let mut witness = value.clone_sentinel();
    witness.reset();

    drop(value);

    assert!(
        witness.is_zeroized(),
        "value was dropped without erasing its secrets"
    );
}
