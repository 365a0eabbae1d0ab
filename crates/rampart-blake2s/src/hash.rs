// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{KEY_LEN, OUT_LEN};
use crate::error::Blake2sError;
use crate::params::HashParameters;
use crate::state::Blake2sState;

/// One-shot BLAKE2s.
///
/// Hashes `input` into `out`; the digest length is `out.len()`. An empty
/// `key` selects unkeyed hashing.
///
/// # Errors
///
/// - [`Blake2sError::InvalidLength`] if `out.len()` is not in `1..=32`
/// - [`Blake2sError::InvalidKey`] if `key` is longer than 32 bytes
///
/// # Example
///
/// ```rust
/// use rampart_blake2s::blake2s;
///
/// let key: Vec<u8> = (0u8..32).collect();
/// let mut out = [0u8; 32];
///
/// blake2s(&mut out, b"", &key)?;
///
/// assert_eq!(out[..4], [0x48, 0xa8, 0x99, 0x7d]);
/// # Ok::<(), rampart_blake2s::Blake2sError>(())
/// ```
pub fn blake2s(out: &mut [u8], input: &[u8], key: &[u8]) -> Result<(), Blake2sError> {
    if out.is_empty() || out.len() > OUT_LEN {
        return Err(Blake2sError::InvalidLength);
    }

    if key.len() > KEY_LEN {
        return Err(Blake2sError::InvalidKey);
    }

    let params = HashParameters::new(out.len(), key.len())?;
    let mut state = Blake2sState::with_parameters(params, key)?;
    state.update(input)?;
    state.finalize(out)
}
