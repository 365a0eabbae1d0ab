// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2s hashing, HMAC-BLAKE2s and three-output HKDF with erasure of
//! intermediate state.
//!
//! Implementation per RFC 7693 (BLAKE2s) and RFC 2104 (HMAC). The HKDF
//! chain is the one used by the Noise/WireGuard key schedule. Chaining
//! values, key blocks, pads and derivation temporaries are zeroized after
//! use and on drop.
//!
//! The compression function runs on a portable kernel or, on x86_64 CPUs
//! with SSSE3, on a vectorized one. The kernel is picked once per process;
//! enable the `portable-only` feature to pin the portable kernel.
//!
//! References:
//! - RFC 7693: The BLAKE2 Cryptographic Hash and Message Authentication Code
//!   <https://datatracker.ietf.org/doc/html/rfc7693>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! # Example
//!
//! ```rust
//! use rampart_blake2s::{blake2s, blake2s_hkdf, blake2s_hmac, OUT_LEN};
//!
//! let mut digest = [0u8; OUT_LEN];
//! blake2s(&mut digest, b"abc", &[])?;
//!
//! let mut tag = [0u8; OUT_LEN];
//! blake2s_hmac(&mut tag, b"message", &digest)?;
//!
//! let (mut send, mut recv) = ([0u8; 32], [0u8; 32]);
//! blake2s_hkdf(&mut send, Some(&mut recv), None, b"", &tag)?;
//! assert_ne!(send, recv);
//! # Ok::<(), rampart_blake2s::Blake2sError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod block_buffer;
mod compress;
mod consts;
mod counter;
mod dispatch;
mod error;
#[cfg(is_simd_eligible)]
mod feature_detector;
mod hash;
mod hkdf;
mod hmac;
mod params;
mod state;

pub use consts::{BLOCK_LEN, KEY_LEN, OUT_LEN};
pub use dispatch::backend_name;
pub use error::Blake2sError;
pub use hash::blake2s;
pub use hkdf::blake2s_hkdf;
pub use hmac::blake2s_hmac;
pub use params::{HashParameters, PARAM_BLOCK_LEN};
pub use state::Blake2sState;
