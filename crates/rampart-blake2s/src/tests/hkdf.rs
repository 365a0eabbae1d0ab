// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_util::hex_to_bytes;

use crate::consts::OUT_LEN;
use crate::error::Blake2sError;
use crate::hkdf::blake2s_hkdf;
use crate::hmac::blake2s_hmac;

use super::hmac_vectors::{HKDF_EMPTY_OUTPUTS, HKDF_IKM_OUTPUTS};
use super::sequence;

const IKM: &[u8] = b"input keying material";

fn derive3(data: &[u8], key: &[u8]) -> [[u8; OUT_LEN]; 3] {
    let mut out1 = [0u8; OUT_LEN];
    let mut out2 = [0u8; OUT_LEN];
    let mut out3 = [0u8; OUT_LEN];

    blake2s_hkdf(&mut out1, Some(&mut out2), Some(&mut out3), data, key)
        .expect("Failed to blake2s_hkdf(..)");

    [out1, out2, out3]
}

#[test]
fn test_hkdf_vectors() {
    let outputs = derive3(IKM, &sequence(32));
    for (out, expected) in outputs.iter().zip(HKDF_IKM_OUTPUTS) {
        assert_eq!(out.to_vec(), hex_to_bytes(expected));
    }

    let outputs = derive3(b"", &[0u8; 32]);
    for (out, expected) in outputs.iter().zip(HKDF_EMPTY_OUTPUTS) {
        assert_eq!(out.to_vec(), hex_to_bytes(expected));
    }
}

#[test]
fn test_hkdf_matches_hmac_chain() {
    let key = sequence(32);

    let mut prk = [0u8; OUT_LEN];
    blake2s_hmac(&mut prk, IKM, &key).expect("Failed to blake2s_hmac(..)");

    let mut t1 = [0u8; OUT_LEN];
    blake2s_hmac(&mut t1, &[0x01], &prk).expect("Failed to blake2s_hmac(..)");

    let mut input = t1.to_vec();
    input.push(0x02);
    let mut t2 = [0u8; OUT_LEN];
    blake2s_hmac(&mut t2, &input, &prk).expect("Failed to blake2s_hmac(..)");

    let mut input = t2.to_vec();
    input.push(0x03);
    let mut t3 = [0u8; OUT_LEN];
    blake2s_hmac(&mut t3, &input, &prk).expect("Failed to blake2s_hmac(..)");

    assert_eq!(derive3(IKM, &key), [t1, t2, t3]);
}

#[test]
fn test_fewer_outputs_are_prefixes_of_the_chain() {
    let full = derive3(IKM, &sequence(32));

    let mut only1 = [0u8; OUT_LEN];
    blake2s_hkdf(&mut only1, None, None, IKM, &sequence(32)).expect("Failed to blake2s_hkdf(..)");
    assert_eq!(only1, full[0]);

    let mut out1 = [0u8; OUT_LEN];
    let mut out2 = [0u8; OUT_LEN];
    blake2s_hkdf(&mut out1, Some(&mut out2), None, IKM, &sequence(32))
        .expect("Failed to blake2s_hkdf(..)");
    assert_eq!([out1, out2], [full[0], full[1]]);
}

#[test]
fn test_truncated_outputs() {
    let full = derive3(IKM, &sequence(32));

    let mut out1 = [0u8; 1];
    let mut out2 = [0u8; 16];
    let mut out3 = [0u8; 31];
    blake2s_hkdf(&mut out1, Some(&mut out2), Some(&mut out3), IKM, &sequence(32))
        .expect("Failed to blake2s_hkdf(..)");

    // Truncating one output does not change the chain feeding the next.
    assert_eq!(out1[..], full[0][..1]);
    assert_eq!(out2[..], full[1][..16]);
    assert_eq!(out3[..], full[2][..31]);
}

#[test]
fn test_outputs_are_distinct_and_deterministic() {
    let a = derive3(IKM, &sequence(32));
    let b = derive3(IKM, &sequence(32));

    assert_eq!(a, b);
    assert_ne!(a[0], a[1]);
    assert_ne!(a[1], a[2]);
    assert_ne!(a[0], a[2]);
}

#[test]
fn test_key_changes_every_output() {
    let a = derive3(IKM, &sequence(32));
    let mut other_key = sequence(32);
    other_key[31] ^= 1;
    let b = derive3(IKM, &other_key);

    for (x, y) in a.iter().zip(b.iter()) {
        assert_ne!(x, y);
    }
}

#[test]
fn test_out3_without_out2_is_illegal() {
    let mut out1 = [0u8; OUT_LEN];
    let mut out3 = [0u8; OUT_LEN];

    assert_eq!(
        blake2s_hkdf(&mut out1, None, Some(&mut out3), IKM, &sequence(32)),
        Err(Blake2sError::IllegalState)
    );

    // Nothing written
    assert!(out1.iter().all(|b| *b == 0));
    assert!(out3.iter().all(|b| *b == 0));
}

#[test]
fn test_invalid_lengths_write_nothing() {
    let mut out1 = [0u8; OUT_LEN];
    let mut out2 = [0u8; OUT_LEN + 1];
    let mut empty: [u8; 0] = [];

    assert_eq!(
        blake2s_hkdf(&mut out1, Some(&mut out2), None, IKM, &sequence(32)),
        Err(Blake2sError::InvalidLength)
    );
    assert!(out1.iter().all(|b| *b == 0));

    assert_eq!(
        blake2s_hkdf(&mut empty, None, None, IKM, &sequence(32)),
        Err(Blake2sError::InvalidLength)
    );

    let mut out2 = [0u8; OUT_LEN];
    assert_eq!(
        blake2s_hkdf(&mut out1, Some(&mut out2), Some(&mut empty), IKM, &sequence(32)),
        Err(Blake2sError::InvalidLength)
    );
    assert!(out1.iter().all(|b| *b == 0));
    assert!(out2.iter().all(|b| *b == 0));
}
