// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_util::hex_to_bytes;

use crate::consts::{BLOCK_LEN, OUT_LEN};
use crate::error::Blake2sError;
use crate::hash::blake2s;
use crate::hmac::blake2s_hmac;

use super::hmac_vectors::*;
use super::sequence;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn hmac(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut out = [0u8; OUT_LEN];
    blake2s_hmac(&mut out, message, key).expect("Failed to blake2s_hmac(..)");
    out.to_vec()
}

#[test]
fn test_hmac_vectors() {
    assert_eq!(hmac(b"key", FOX), hex_to_bytes(HMAC_FOX));
    assert_eq!(hmac(b"", b""), hex_to_bytes(HMAC_EMPTY));
    assert_eq!(hmac(&[0x42; BLOCK_LEN], b"message"), hex_to_bytes(HMAC_KEY64));
    assert_eq!(hmac(&[0x42; BLOCK_LEN + 1], b"message"), hex_to_bytes(HMAC_KEY65));
    assert_eq!(hmac(&sequence(100), b"message"), hex_to_bytes(HMAC_KEY100));

    let long: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    assert_eq!(hmac(b"key", &long), hex_to_bytes(HMAC_LONG_MESSAGE));
}

#[test]
fn test_long_key_equals_reduced_key() {
    let long_key = [0x42u8; BLOCK_LEN + 1];
    let mut reduced = [0u8; OUT_LEN];
    blake2s(&mut reduced, &long_key, &[]).expect("Failed to blake2s(..)");

    assert_eq!(hmac(&long_key, b"message"), hmac(&reduced, b"message"));
}

#[test]
fn test_block_sized_key_is_not_reduced() {
    let key = [0x42u8; BLOCK_LEN];
    let mut reduced = [0u8; OUT_LEN];
    blake2s(&mut reduced, &key, &[]).expect("Failed to blake2s(..)");

    assert_ne!(hmac(&key, b"message"), hmac(&reduced, b"message"));
}

#[test]
fn test_truncated_tag_is_prefix() {
    let full = hmac(b"key", FOX);

    for len in 1..=OUT_LEN {
        let mut out = vec![0u8; len];
        blake2s_hmac(&mut out, FOX, b"key").expect("Failed to blake2s_hmac(..)");

        assert_eq!(out, full[..len]);
    }
}

#[test]
fn test_invalid_output_lengths() {
    let mut empty: [u8; 0] = [];
    let mut too_long = [0u8; OUT_LEN + 1];

    assert_eq!(blake2s_hmac(&mut empty, FOX, b"key"), Err(Blake2sError::InvalidLength));
    assert_eq!(blake2s_hmac(&mut too_long, FOX, b"key"), Err(Blake2sError::InvalidLength));
    assert!(too_long.iter().all(|b| *b == 0));
}

#[test]
fn test_key_and_message_are_not_interchangeable() {
    assert_ne!(hmac(b"key", b"message"), hmac(b"message", b"key"));
}
