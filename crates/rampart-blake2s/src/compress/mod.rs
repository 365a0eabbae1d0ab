// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Compression function `F` kernels.

pub(crate) mod portable;

#[cfg(is_simd_eligible)]
pub(crate) mod ssse3;
