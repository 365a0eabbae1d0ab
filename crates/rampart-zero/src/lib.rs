// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart-zero
//!
//! Erasure of hash states and key material.
//!
//! - **Traits**: [`FastZeroizable`], [`ZeroizationProbe`], [`AssertZeroizeOnDrop`]
//! - **Storage**: byte, word, length and flag scalars plus arrays of [`Word`]
//! - **Sentinel**: [`ZeroizeOnDropSentinel`] lets a test prove that a state
//!   erased itself while being dropped
//! - **Scoped secrets**: [`SecretArray`] overwrites its bytes on every drop
//! - **Derive**: `#[derive(RampartZero)]` writes the trait impls (and `Drop`
//!   with `#[fast_zeroize(drop)]`) for structs built from the above
//!
//! ## Quick Start
//!
//! The impls below are what the derive generates for a keyed state:
//!
//! ```rust
//! use rampart_zero::{
//!     AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel,
//!     assert_zeroize_on_drop,
//! };
//!
//! struct MacKey {
//!     key_block: [u8; 64],
//!     __sentinel: ZeroizeOnDropSentinel,
//! }
//!
//! impl FastZeroizable for MacKey {
//!     fn fast_zeroize(&mut self) {
//!         self.key_block.fast_zeroize();
//!         self.__sentinel.fast_zeroize();
//!     }
//! }
//!
//! impl Drop for MacKey {
//!     fn drop(&mut self) {
//!         self.fast_zeroize();
//!     }
//! }
//!
//! impl AssertZeroizeOnDrop for MacKey {
//!     fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
//!         self.__sentinel.clone()
//!     }
//!
//!     fn assert_zeroize_on_drop(self) {
//!         assert_zeroize_on_drop(self);
//!     }
//! }
//!
//! let key = MacKey {
//!     key_block: [0x36; 64],
//!     __sentinel: ZeroizeOnDropSentinel::default(),
//! };
//! assert!(!key.key_block.is_zeroized());
//! key.assert_zeroize_on_drop();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod assert;
mod secret_array;
mod sentinel;
mod traits;
mod words;

pub use assert::assert_zeroize_on_drop;
pub use rampart_zero_derive::RampartZero;
pub use secret_array::SecretArray;
pub use sentinel::ZeroizeOnDropSentinel;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, ZeroizationProbe};
pub use words::Word;
