// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use crate::{expand, rampart_zero_path};

fn pretty(ts: TokenStream) -> String {
    let file: syn::File = syn::parse2(ts).expect("Failed to parse expansion");
    prettyplease::unparse(&file)
}

fn expand_ok(input: DeriveInput) -> String {
    let ts = expand(&input, &quote!(::rampart_zero)).expect("Failed to expand(..)");
    pretty(ts)
}

fn expand_err(input: DeriveInput) -> String {
    match expand(&input, &quote!(::rampart_zero)) {
        Ok(_) => panic!("expansion unexpectedly succeeded"),
        Err(e) => e.to_string(),
    }
}

// === === === === === === === === === ===
// Crate path
// === === === === === === === === === ===

#[test]
fn test_rampart_zero_path_without_dependency() {
    // This crate does not depend on rampart-zero.
    assert_eq!(
        rampart_zero_path().to_string(),
        quote!(::rampart_zero).to_string()
    );
}

// === === === === === === === === === ===
// Generated impls
// === === === === === === === === === ===

#[test]
fn test_fields_erased_in_order_sentinel_last() {
    let out = expand_ok(parse_quote! {
        struct State {
            h: [u32; 8],
            buffer: [u8; 64],
            __sentinel: ZeroizeOnDropSentinel,
        }
    });

    let h = out.find("fast_zeroize(&mut self.h)").expect("h not erased");
    let buffer = out
        .find("fast_zeroize(&mut self.buffer)")
        .expect("buffer not erased");
    let sentinel = out
        .find("fast_zeroize(&mut self.__sentinel)")
        .expect("sentinel not erased");

    assert!(h < buffer);
    assert!(buffer < sentinel);
}

#[test]
fn test_is_zeroized_ignores_sentinel() {
    let out = expand_ok(parse_quote! {
        struct State {
            prk: [u8; 32],
            __sentinel: ZeroizeOnDropSentinel,
        }
    });

    assert!(out.contains("is_zeroized(&self.prk)"));
    assert!(!out.contains("is_zeroized(&self.__sentinel)"));
}

#[test]
fn test_skipped_field_untouched() {
    let out = expand_ok(parse_quote! {
        struct State {
            h: [u32; 8],
            #[fast_zeroize(skip)]
            out_len: usize,
        }
    });

    assert!(out.contains("self.h"));
    assert!(!out.contains("self.out_len"));
}

#[test]
fn test_assert_impl_requires_sentinel() {
    let with = expand_ok(parse_quote! {
        struct Keyed {
            key: [u8; 32],
            __sentinel: ZeroizeOnDropSentinel,
        }
    });
    let without = expand_ok(parse_quote! {
        struct Counter {
            t: [u32; 2],
        }
    });

    assert!(with.contains("AssertZeroizeOnDrop for Keyed"));
    assert!(with.contains("::rampart_zero::assert_zeroize_on_drop(self)"));
    assert!(!without.contains("AssertZeroizeOnDrop"));
}

#[test]
fn test_drop_only_on_request() {
    let with = expand_ok(parse_quote! {
        #[fast_zeroize(drop)]
        struct Keyed {
            key: [u8; 32],
        }
    });
    let without = expand_ok(parse_quote! {
        struct Keyed {
            key: [u8; 32],
        }
    });

    assert!(with.contains("impl ::core::ops::Drop for Keyed"));
    assert!(!without.contains("Drop"));
}

#[test]
fn test_generics_are_forwarded() {
    let out = expand_ok(parse_quote! {
        struct Wrapper<T: Copy> {
            inner: T,
        }
    });

    assert!(out.contains("impl<T: Copy> ::rampart_zero::FastZeroizable for Wrapper<T>"));
}

#[test]
fn test_empty_struct_is_always_zeroized() {
    let out = expand_ok(parse_quote! {
        struct Marker {}
    });

    assert!(out.contains("fn is_zeroized(&self) -> bool"));
    assert!(out.contains("true"));
}

// === === === === === === === === === ===
// Rejected input
// === === === === === === === === === ===

#[test]
fn test_rejects_enum() {
    let err = expand_err(parse_quote! {
        enum Mode {
            Keyed,
            Unkeyed,
        }
    });

    assert!(err.contains("only be derived for structs"));
}

#[test]
fn test_rejects_tuple_struct() {
    let err = expand_err(parse_quote! {
        struct Digest([u8; 32]);
    });

    assert!(err.contains("named fields"));
}

#[test]
fn test_rejects_unknown_struct_attribute() {
    let err = expand_err(parse_quote! {
        #[fast_zeroize(skip)]
        struct State {
            h: [u32; 8],
        }
    });

    assert!(err.contains("fast_zeroize(drop)"));
}

#[test]
fn test_rejects_unknown_field_attribute() {
    let err = expand_err(parse_quote! {
        struct State {
            #[fast_zeroize(drop)]
            h: [u32; 8],
        }
    });

    assert!(err.contains("fast_zeroize(skip)"));
}
