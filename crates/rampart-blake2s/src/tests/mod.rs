// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod hkdf;
mod hmac;

use crate::dispatch::{Backend, Portable};
use crate::params::HashParameters;
use crate::state::Blake2sState;

#[cfg(is_simd_eligible)]
fn accelerated_backends() -> Vec<Backend> {
    use crate::dispatch::Ssse3;
    use crate::feature_detector::FeatureDetector;

    Ssse3::detect(&FeatureDetector::new())
        .map(Backend::Ssse3)
        .into_iter()
        .collect()
}

#[cfg(not(is_simd_eligible))]
fn accelerated_backends() -> Vec<Backend> {
    Vec::new()
}

/// Every kernel this machine can run, portable first.
pub(crate) fn available_backends() -> Vec<Backend> {
    let mut backends = vec![Backend::Portable(Portable)];
    backends.extend(accelerated_backends());
    backends
}

/// Hashes `chunks` in order with an explicit kernel.
pub(crate) fn hash_chunks<'a>(
    backend: Backend,
    params: HashParameters,
    key: &[u8],
    chunks: impl IntoIterator<Item = &'a [u8]>,
) -> Vec<u8> {
    let mut state =
        Blake2sState::with_backend(params, key, backend).expect("Failed to create state");

    for chunk in chunks {
        state.update(chunk).expect("Failed to update(..)");
    }

    let mut out = vec![0u8; params.digest_len()];
    state.finalize(&mut out).expect("Failed to finalize(..)");
    out
}

/// `00 01 02 ..` of length `len` (wrapping).
pub(crate) fn sequence(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}
