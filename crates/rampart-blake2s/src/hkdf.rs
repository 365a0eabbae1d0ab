// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Three-output HKDF over HMAC-BLAKE2s (Noise protocol `HKDF`)

use core::fmt;

use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

use crate::consts::OUT_LEN;
use crate::error::Blake2sError;
use crate::hmac::HmacState;

/// HKDF state with all intermediate buffers.
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub(crate) struct HkdfState {
    hmac: HmacState,
    /// PRK = HMAC(key, data)
    prk: [u8; OUT_LEN],
    /// T(i) || counter byte for the next step
    chain: [u8; OUT_LEN + 1],

    __sentinel: ZeroizeOnDropSentinel,
}

impl HkdfState {
    pub fn new() -> Self {
        Self {
            hmac: HmacState::new(),
            prk: [0u8; OUT_LEN],
            chain: [0u8; OUT_LEN + 1],
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    pub fn derive(
        &mut self,
        out1: &mut [u8],
        out2: Option<&mut [u8]>,
        out3: Option<&mut [u8]>,
        data: &[u8],
        key: &[u8],
    ) -> Result<(), Blake2sError> {
        check_len(out1)?;
        if let Some(out) = out2.as_deref() {
            check_len(out)?;
        }
        if let Some(out) = out3.as_deref() {
            check_len(out)?;
        }
        if out3.is_some() && out2.is_none() {
            return Err(Blake2sError::IllegalState);
        }

        self.hmac.mac(key, data, &mut self.prk)?;

        // T1 = HMAC(prk, 0x01)
        self.step(0, 0x01, out1)?;

        if let Some(out2) = out2 {
            // T2 = HMAC(prk, T1 || 0x02)
            self.step(OUT_LEN, 0x02, out2)?;

            if let Some(out3) = out3 {
                // T3 = HMAC(prk, T2 || 0x03)
                self.step(OUT_LEN, 0x03, out3)?;
            }
        }

        self.erase();
        Ok(())
    }

    /// Hashes `chain[..prev_len]` followed by `counter`; the result replaces
    /// the head of `chain`.
    fn step(&mut self, prev_len: usize, counter: u8, out: &mut [u8]) -> Result<(), Blake2sError> {
        let mut t = [0u8; OUT_LEN];

        self.chain[prev_len] = counter;
        let result = self.hmac.mac(&self.prk, &self.chain[..prev_len + 1], &mut t);

        if result.is_ok() {
            self.chain[..OUT_LEN].copy_from_slice(&t);
            out.copy_from_slice(&t[..out.len()]);
        }

        t.fast_zeroize();
        result
    }

    fn erase(&mut self) {
        self.prk.fast_zeroize();
        self.chain.fast_zeroize();
    }
}

fn check_len(out: &[u8]) -> Result<(), Blake2sError> {
    if out.is_empty() || out.len() > OUT_LEN {
        return Err(Blake2sError::InvalidLength);
    }

    Ok(())
}

impl fmt::Debug for HkdfState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED HkdfState]")
    }
}

/// Derives up to three keys from `data` keyed by `key`.
///
/// ```text
/// prk = HMAC(key, data)
/// T1  = HMAC(prk, 0x01)        -> out1
/// T2  = HMAC(prk, T1 || 0x02)  -> out2
/// T3  = HMAC(prk, T2 || 0x03)  -> out3
/// ```
///
/// Each destination receives the first `len` bytes of its block. All
/// arguments are checked before anything is written.
///
/// # Errors
///
/// - [`Blake2sError::InvalidLength`] if a destination length is not in `1..=32`
/// - [`Blake2sError::IllegalState`] if `out3` is given without `out2`
///
/// # Example
///
/// ```rust
/// use rampart_blake2s::blake2s_hkdf;
///
/// let chaining_key = [0u8; 32];
/// let mut next_chaining_key = [0u8; 32];
/// let mut session_key = [0u8; 32];
///
/// blake2s_hkdf(
///     &mut next_chaining_key,
///     Some(&mut session_key),
///     None,
///     b"",
///     &chaining_key,
/// )?;
///
/// assert_eq!(next_chaining_key[..4], [0x83, 0x87, 0xb4, 0x6b]);
/// # Ok::<(), rampart_blake2s::Blake2sError>(())
/// ```
pub fn blake2s_hkdf(
    out1: &mut [u8],
    out2: Option<&mut [u8]>,
    out3: Option<&mut [u8]>,
    data: &[u8],
    key: &[u8],
) -> Result<(), Blake2sError> {
    let mut state = HkdfState::new();
    state.derive(out1, out2, out3, data, key)
}
