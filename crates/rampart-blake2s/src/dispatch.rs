// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime selection of the compression kernel.
//!
//! The kernel is chosen once per process and cached in a static. Concurrent
//! first callers race on a compare-exchange; the loser spins until the winner
//! publishes its choice.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::compress;
use crate::consts::BLOCK_LEN;
use crate::counter::Counter;

#[cfg(is_simd_eligible)]
use crate::feature_detector::FeatureDetector;

/// A compression function implementation.
pub(crate) trait CompressBackend {
    /// Short, stable identifier.
    fn name(&self) -> &'static str;

    /// Compresses one block into `h`.
    fn compress(
        &self,
        h: &mut [u32; 8],
        block: &[u8; BLOCK_LEN],
        counter: &Counter,
        flags: &[u32; 2],
    );
}

/// Scalar kernel, available everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Portable;

impl CompressBackend for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    #[inline(always)]
    fn compress(
        &self,
        h: &mut [u32; 8],
        block: &[u8; BLOCK_LEN],
        counter: &Counter,
        flags: &[u32; 2],
    ) {
        compress::portable::compress(h, block, counter, flags);
    }
}

/// SSSE3 kernel. Only obtainable once the CPU has been seen to support it.
#[cfg(is_simd_eligible)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ssse3 {
    _detected: (),
}

#[cfg(is_simd_eligible)]
impl Ssse3 {
    pub fn detect(detector: &FeatureDetector) -> Option<Self> {
        if detector.has_ssse3() {
            Some(Self { _detected: () })
        } else {
            None
        }
    }
}

#[cfg(is_simd_eligible)]
impl CompressBackend for Ssse3 {
    fn name(&self) -> &'static str {
        "ssse3"
    }

    #[inline(always)]
    fn compress(
        &self,
        h: &mut [u32; 8],
        block: &[u8; BLOCK_LEN],
        counter: &Counter,
        flags: &[u32; 2],
    ) {
        // SAFETY: an Ssse3 value only exists after SSSE3 support was detected.
        unsafe {
            compress::ssse3::compress(h, block, counter, flags);
        }
    }
}

/// The kernel a hash state compresses with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Portable(Portable),
    #[cfg(is_simd_eligible)]
    Ssse3(Ssse3),
}

impl CompressBackend for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Portable(backend) => backend.name(),
            #[cfg(is_simd_eligible)]
            Backend::Ssse3(backend) => backend.name(),
        }
    }

    #[inline(always)]
    fn compress(
        &self,
        h: &mut [u32; 8],
        block: &[u8; BLOCK_LEN],
        counter: &Counter,
        flags: &[u32; 2],
    ) {
        match self {
            Backend::Portable(backend) => backend.compress(h, block, counter, flags),
            #[cfg(is_simd_eligible)]
            Backend::Ssse3(backend) => backend.compress(h, block, counter, flags),
        }
    }
}

/// Selection state: not yet attempted
const STATE_UNINIT: u8 = 0;
/// Selection state: in progress by another thread
const STATE_IN_PROGRESS: u8 = 1;
/// Selection state: completed
const STATE_DONE: u8 = 2;

const BACKEND_PORTABLE: u8 = 0;
#[cfg(is_simd_eligible)]
const BACKEND_SSSE3: u8 = 1;

static INIT_STATE: AtomicU8 = AtomicU8::new(STATE_UNINIT);
static SELECTED: AtomicU8 = AtomicU8::new(BACKEND_PORTABLE);

/// Picks the best kernel the detector reports.
#[cfg(is_simd_eligible)]
pub(crate) fn select(detector: &FeatureDetector) -> Backend {
    match Ssse3::detect(detector) {
        Some(ssse3) => Backend::Ssse3(ssse3),
        None => Backend::Portable(Portable),
    }
}

#[cfg(not(is_simd_eligible))]
fn select_platform() -> Backend {
    Backend::Portable(Portable)
}

#[cfg(is_simd_eligible)]
fn select_platform() -> Backend {
    select(&FeatureDetector::new())
}

/// Returns the process-wide kernel, selecting it on first use.
#[inline]
pub(crate) fn selected_backend() -> Backend {
    // Fast path: already selected
    if INIT_STATE.load(Ordering::Acquire) == STATE_DONE {
        return from_tag(SELECTED.load(Ordering::Relaxed));
    }

    init_slow();
    selected_backend()
}

#[cold]
#[inline(never)]
fn init_slow() {
    match INIT_STATE.compare_exchange(
        STATE_UNINIT,
        STATE_IN_PROGRESS,
        Ordering::Acquire,
        Ordering::Relaxed,
    ) {
        Ok(_) => {
            SELECTED.store(to_tag(select_platform()), Ordering::Relaxed);
            INIT_STATE.store(STATE_DONE, Ordering::Release);
        }
        Err(_) => {
            // Another thread is selecting; the caller re-checks afterwards.
            while INIT_STATE.load(Ordering::Acquire) == STATE_IN_PROGRESS {
                core::hint::spin_loop();
            }
        }
    }
}

fn to_tag(backend: Backend) -> u8 {
    match backend {
        Backend::Portable(_) => BACKEND_PORTABLE,
        #[cfg(is_simd_eligible)]
        Backend::Ssse3(_) => BACKEND_SSSE3,
    }
}

fn from_tag(tag: u8) -> Backend {
    match tag {
        // BACKEND_SSSE3 is only ever stored after Ssse3::detect succeeded.
        #[cfg(is_simd_eligible)]
        BACKEND_SSSE3 => Backend::Ssse3(Ssse3 { _detected: () }),
        _ => Backend::Portable(Portable),
    }
}

/// Returns `true` once the process-wide selection has completed.
#[cfg(test)]
pub(crate) fn is_selected() -> bool {
    INIT_STATE.load(Ordering::Acquire) == STATE_DONE
}

/// Forgets the cached selection so the next call selects again.
#[cfg(test)]
pub(crate) fn reset_selection() {
    let _ = INIT_STATE.compare_exchange(
        STATE_DONE,
        STATE_UNINIT,
        Ordering::AcqRel,
        Ordering::Relaxed,
    );
}

/// Name of the compression kernel this process uses: `"portable"` or
/// `"ssse3"`.
///
/// Selects the kernel on first call.
///
/// # Example
///
/// ```rust
/// let name = rampart_blake2s::backend_name();
/// assert!(name == "portable" || name == "ssse3");
/// ```
pub fn backend_name() -> &'static str {
    selected_backend().name()
}
