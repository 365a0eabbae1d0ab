// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Parameter block per RFC 7693 Section 2.5

use crate::consts::{IV, KEY_LEN, OUT_LEN};
use crate::error::Blake2sError;

/// Parameter block length in bytes.
pub const PARAM_BLOCK_LEN: usize = 32;

/// Sequential-mode hashing parameters.
///
/// Fanout and depth are fixed at 1; the only tree-mode knob kept is the
/// last-node flag.
///
/// # Example
///
/// ```rust
/// use rampart_blake2s::HashParameters;
///
/// let params = HashParameters::new(32, 0).expect("valid").last_node(true);
/// let block = params.to_bytes();
///
/// assert_eq!(&block[..4], &[32, 0, 1, 1]);
/// assert!(params.is_last_node());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParameters {
    digest_len: u8,
    key_len: u8,
    last_node: bool,
}

impl HashParameters {
    /// Builds parameters for a `digest_len`-byte digest and a `key_len`-byte key.
    ///
    /// # Errors
    ///
    /// - [`Blake2sError::InvalidLength`] if `digest_len` is not in `1..=32`
    /// - [`Blake2sError::InvalidKey`] if `key_len` exceeds 32
    pub fn new(digest_len: usize, key_len: usize) -> Result<Self, Blake2sError> {
        if digest_len == 0 || digest_len > OUT_LEN {
            return Err(Blake2sError::InvalidLength);
        }

        if key_len > KEY_LEN {
            return Err(Blake2sError::InvalidKey);
        }

        Ok(Self {
            digest_len: digest_len as u8,
            key_len: key_len as u8,
            last_node: false,
        })
    }

    /// Sets the last-node flag (`f[1]` on the final block).
    #[must_use]
    pub fn last_node(mut self, last_node: bool) -> Self {
        self.last_node = last_node;
        self
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest_len as usize
    }

    /// Key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len as usize
    }

    /// Whether the final block is flagged as the last node.
    pub fn is_last_node(&self) -> bool {
        self.last_node
    }

    /// Serializes the 32-byte parameter block.
    pub fn to_bytes(&self) -> [u8; PARAM_BLOCK_LEN] {
        let mut block = [0u8; PARAM_BLOCK_LEN];
        block[0] = self.digest_len;
        block[1] = self.key_len;
        // fanout
        block[2] = 1;
        // depth
        block[3] = 1;
        block
    }

    /// IV XORed with the parameter block, read as little-endian words.
    pub(crate) fn initial_chaining_value(&self) -> [u32; 8] {
        let block = self.to_bytes();
        let mut h = IV;
        let mut param = 0u32;

        for (word, chunk) in h.iter_mut().zip(block.chunks_exact(4)) {
            let mut bytes = [chunk[0], chunk[1], chunk[2], chunk[3]];
            rampart_util::u32_from_le(&mut param, &mut bytes);
            *word ^= param;
        }

        h
    }
}
