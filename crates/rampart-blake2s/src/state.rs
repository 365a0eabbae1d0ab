// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental BLAKE2s per RFC 7693 Section 3.3

use core::fmt;

use rampart_zero::{FastZeroizable, RampartZero, SecretArray, ZeroizeOnDropSentinel};

use crate::block_buffer::BlockBuffer;
use crate::consts::{BLOCK_LEN, KEY_LEN, OUT_LEN};
use crate::counter::Counter;
use crate::dispatch::{self, Backend, CompressBackend};
use crate::error::Blake2sError;
use crate::params::HashParameters;

/// Incremental BLAKE2s hasher.
///
/// Created by [`new`](Self::new), [`new_keyed`](Self::new_keyed),
/// [`new_keyed_with_len`](Self::new_keyed_with_len) or
/// [`with_parameters`](Self::with_parameters), fed with any number of
/// [`update`](Self::update) calls and consumed once by
/// [`finalize`](Self::finalize). Chaining value and buffer are erased after
/// finalization, on [`fast_zeroize`](FastZeroizable::fast_zeroize) and on
/// drop; an erased state is spent.
///
/// # Example
///
/// ```rust
/// use rampart_blake2s::Blake2sState;
///
/// let mut state = Blake2sState::new(32)?;
/// state.update(b"a")?;
/// state.update(b"bc")?;
///
/// let mut digest = [0u8; 32];
/// state.finalize(&mut digest)?;
///
/// assert_eq!(digest[..4], [0x50, 0x8c, 0x5e, 0x8c]);
/// # Ok::<(), rampart_blake2s::Blake2sError>(())
/// ```
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct Blake2sState {
    h: [u32; 8],
    counter: Counter,
    flags: [u32; 2],
    buffer: BlockBuffer,
    /// Cleared by finalization and erasure.
    live: bool,
    #[fast_zeroize(skip)]
    out_len: usize,
    #[fast_zeroize(skip)]
    last_node: bool,
    #[fast_zeroize(skip)]
    backend: Backend,

    __sentinel: ZeroizeOnDropSentinel,
}

impl Blake2sState {
    /// Unkeyed hasher producing `out_len` bytes.
    ///
    /// # Errors
    ///
    /// [`Blake2sError::InvalidLength`] if `out_len` is not in `1..=32`.
    pub fn new(out_len: usize) -> Result<Self, Blake2sError> {
        Self::with_parameters(HashParameters::new(out_len, 0)?, &[])
    }

    /// Keyed hasher producing a 32-byte digest.
    ///
    /// # Errors
    ///
    /// [`Blake2sError::InvalidKey`] if `key` is empty or longer than 32 bytes.
    pub fn new_keyed(key: &[u8]) -> Result<Self, Blake2sError> {
        Self::new_keyed_with_len(OUT_LEN, key)
    }

    /// Keyed hasher producing `out_len` bytes.
    ///
    /// # Errors
    ///
    /// - [`Blake2sError::InvalidLength`] if `out_len` is not in `1..=32`
    /// - [`Blake2sError::InvalidKey`] if `key` is empty or longer than 32 bytes
    pub fn new_keyed_with_len(out_len: usize, key: &[u8]) -> Result<Self, Blake2sError> {
        if key.is_empty() || key.len() > KEY_LEN {
            // Length errors take precedence, as in `HashParameters::new`.
            HashParameters::new(out_len, 0)?;
            return Err(Blake2sError::InvalidKey);
        }

        Self::with_parameters(HashParameters::new(out_len, key.len())?, key)
    }

    /// Hasher for an explicit parameter block.
    ///
    /// A non-empty `key` is absorbed as a zero-padded first block.
    ///
    /// # Errors
    ///
    /// [`Blake2sError::InvalidKey`] if `key.len()` differs from
    /// `params.key_len()`.
    pub fn with_parameters(params: HashParameters, key: &[u8]) -> Result<Self, Blake2sError> {
        Self::init(params, key, dispatch::selected_backend())
    }

    #[cfg(test)]
    pub(crate) fn with_backend(
        params: HashParameters,
        key: &[u8],
        backend: Backend,
    ) -> Result<Self, Blake2sError> {
        Self::init(params, key, backend)
    }

    fn init(params: HashParameters, key: &[u8], backend: Backend) -> Result<Self, Blake2sError> {
        if key.len() != params.key_len() {
            return Err(Blake2sError::InvalidKey);
        }

        let mut state = Self {
            h: params.initial_chaining_value(),
            counter: Counter::new(),
            flags: [0u32; 2],
            buffer: BlockBuffer::new(),
            live: true,
            out_len: params.digest_len(),
            last_node: params.is_last_node(),
            backend,
            __sentinel: ZeroizeOnDropSentinel::default(),
        };

        if !key.is_empty() {
            let mut block = SecretArray::<BLOCK_LEN>::new();
            block[..key.len()].copy_from_slice(key);
            state.absorb(&block[..]);
        }

        Ok(state)
    }

    /// Absorbs `data`.
    ///
    /// Any split of the same input across calls yields the same digest.
    ///
    /// # Errors
    ///
    /// [`Blake2sError::IllegalState`] after [`finalize`](Self::finalize).
    pub fn update(&mut self, data: &[u8]) -> Result<(), Blake2sError> {
        if !self.live {
            return Err(Blake2sError::IllegalState);
        }

        self.absorb(data);
        Ok(())
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let fill = self.buffer.remaining();

        // The buffered block is only compressed once more input follows it.
        if data.len() > fill {
            let (head, rest) = data.split_at(fill);
            self.buffer.extend(head);
            self.counter.increment(BLOCK_LEN as u32);
            self.backend
                .compress(&mut self.h, self.buffer.block(), &self.counter, &self.flags);
            self.buffer.clear();
            data = rest;

            while data.len() > BLOCK_LEN {
                let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() else {
                    break;
                };
                self.counter.increment(BLOCK_LEN as u32);
                self.backend
                    .compress(&mut self.h, block, &self.counter, &self.flags);
                data = rest;
            }
        }

        self.buffer.extend(data);
        debug_assert!(self.buffer.len() <= BLOCK_LEN);
    }

    /// Writes the digest into `out[..output_len()]`.
    ///
    /// Bytes of `out` past the digest length are left untouched.
    ///
    /// # Errors
    ///
    /// - [`Blake2sError::IllegalState`] if already finalized (`out` untouched)
    /// - [`Blake2sError::BufferTooSmall`] if `out` is shorter than the digest
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), Blake2sError> {
        if !self.live {
            return Err(Blake2sError::IllegalState);
        }

        if out.len() < self.out_len {
            return Err(Blake2sError::BufferTooSmall);
        }

        self.counter.increment(self.buffer.len() as u32);
        self.flags[0] = u32::MAX;
        if self.last_node {
            self.flags[1] = u32::MAX;
        }

        self.buffer.pad();
        self.backend
            .compress(&mut self.h, self.buffer.block(), &self.counter, &self.flags);

        let mut digest = SecretArray::<OUT_LEN>::new();
        for (word, chunk) in self.h.iter_mut().zip(digest.chunks_exact_mut(4)) {
            let mut bytes = [0u8; 4];
            rampart_util::u32_to_le(word, &mut bytes);
            chunk.copy_from_slice(&bytes);
            bytes.fast_zeroize();
        }

        out[..self.out_len].copy_from_slice(&digest[..self.out_len]);

        self.fast_zeroize();
        Ok(())
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.out_len
    }

    /// Whether [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        !self.live
    }

    /// Name of the compression kernel this state uses.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    #[cfg(test)]
    pub(crate) fn chaining_value(&self) -> &[u32; 8] {
        &self.h
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    #[cfg(test)]
    pub(crate) fn counter(&self) -> Counter {
        self.counter
    }
}

impl fmt::Debug for Blake2sState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2sState")
            .field("output_len", &self.out_len)
            .field("last_node", &self.last_node)
            .field("finalized", &!self.live)
            .field("backend", &self.backend.name())
            .field("state", &"[REDACTED]")
            .finish()
    }
}
