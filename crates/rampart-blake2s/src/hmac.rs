// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-BLAKE2s per RFC 2104

use core::fmt;

use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

use crate::consts::{BLOCK_LEN, IPAD, OPAD, OUT_LEN};
use crate::error::Blake2sError;
use crate::state::Blake2sState;

/// HMAC-BLAKE2s state with all intermediate buffers.
///
/// All sensitive data lives in this struct for guaranteed zeroization on drop.
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub(crate) struct HmacState {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Key zero-padded to a block (hashed first when longer than a block)
    key_block: [u8; BLOCK_LEN],
    /// Inner hash result: H(K ⊕ ipad || message)
    inner_hash: [u8; OUT_LEN],
    /// Outer hash result: H(K ⊕ opad || inner_hash)
    outer_hash: [u8; OUT_LEN],

    __sentinel: ZeroizeOnDropSentinel,
}

impl HmacState {
    pub fn new() -> Self {
        Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            key_block: [0u8; BLOCK_LEN],
            inner_hash: [0u8; OUT_LEN],
            outer_hash: [0u8; OUT_LEN],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Computes HMAC(key, data) and copies its first `out.len()` bytes.
    pub fn mac(&mut self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), Blake2sError> {
        if out.is_empty() || out.len() > OUT_LEN {
            return Err(Blake2sError::InvalidLength);
        }

        // A shorter key must not inherit bytes from the previous call.
        self.key_block.fast_zeroize();

        if key.len() > BLOCK_LEN {
            let mut reducer = Blake2sState::new(OUT_LEN)?;
            reducer.update(key)?;
            reducer.finalize(&mut self.key_block[..OUT_LEN])?;
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
        }

        for ((ipad, opad), k) in self
            .k_ipad
            .iter_mut()
            .zip(self.k_opad.iter_mut())
            .zip(self.key_block.iter())
        {
            *ipad = k ^ IPAD;
            *opad = k ^ OPAD;
        }

        // Inner hash: H(k_ipad || data)
        let mut inner = Blake2sState::new(OUT_LEN)?;
        inner.update(&self.k_ipad)?;
        inner.update(data)?;
        inner.finalize(&mut self.inner_hash)?;

        // Outer hash: H(k_opad || inner_hash)
        let mut outer = Blake2sState::new(OUT_LEN)?;
        outer.update(&self.k_opad)?;
        outer.update(&self.inner_hash)?;
        outer.finalize(&mut self.outer_hash)?;

        out.copy_from_slice(&self.outer_hash[..out.len()]);

        // Nothing key-derived outlives the call.
        self.erase();
        Ok(())
    }

    fn erase(&mut self) {
        self.k_ipad.fast_zeroize();
        self.k_opad.fast_zeroize();
        self.key_block.fast_zeroize();
        self.inner_hash.fast_zeroize();
        self.outer_hash.fast_zeroize();
    }
}

impl fmt::Debug for HmacState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED HmacState]")
    }
}

/// HMAC-BLAKE2s.
///
/// Keys longer than 64 bytes are first hashed to 32 bytes. The first
/// `out.len()` bytes of the 32-byte tag are written.
///
/// # Errors
///
/// [`Blake2sError::InvalidLength`] if `out.len()` is not in `1..=32`.
///
/// # Example
///
/// ```rust
/// use rampart_blake2s::blake2s_hmac;
///
/// let mut tag = [0u8; 32];
/// blake2s_hmac(&mut tag, b"The quick brown fox jumps over the lazy dog", b"key")?;
///
/// assert_eq!(tag[..4], [0xf9, 0x32, 0x15, 0xbb]);
/// # Ok::<(), rampart_blake2s::Blake2sError>(())
/// ```
pub fn blake2s_hmac(out: &mut [u8], input: &[u8], key: &[u8]) -> Result<(), Blake2sError> {
    let mut state = HmacState::new();
    state.mac(key, input, out)
}
