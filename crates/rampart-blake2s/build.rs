// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

fn main() {
    // Declare custom cfg to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(is_simd_eligible)");

    // Pinned to the portable kernel
    if std::env::var("CARGO_FEATURE_PORTABLE_ONLY").is_ok() {
        return;
    }

    let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // The SSSE3 kernel exists for x86_64 only; availability is still probed
    // at runtime before it is selected.
    if target_arch == "x86_64" {
        println!("cargo:rustc-cfg=is_simd_eligible");
    }
}
