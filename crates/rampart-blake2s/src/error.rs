// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// BLAKE2s / HMAC / HKDF error.
///
/// Every variant is a precondition violation detected before any state or
/// output buffer is modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blake2sError {
    /// Output length outside `1..=32`.
    #[error("output length must be between 1 and 32 bytes")]
    InvalidLength,

    /// Key length outside the accepted range for the operation.
    #[error("key length must be between 1 and 32 bytes for keyed hashing")]
    InvalidKey,

    /// Operation not allowed in the current state (already finalized, or a
    /// third derivation output requested without a second one).
    #[error("operation not allowed in the current state")]
    IllegalState,

    /// Destination buffer shorter than the declared digest length.
    #[error("output buffer is smaller than the digest length")]
    BufferTooSmall,
}
