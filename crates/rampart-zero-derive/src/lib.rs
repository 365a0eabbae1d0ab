// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macro for the `rampart_zero` crate.
//!
//! Provides `#[derive(RampartZero)]` for structs holding hash state and key
//! material.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, parse_macro_input};

const SENTINEL_FIELD: &str = "__sentinel";

/// Derives `FastZeroizable`, `ZeroizationProbe` and, when a `__sentinel`
/// field is present, `AssertZeroizeOnDrop`.
///
/// Only structs with named fields are supported. Fields are erased in
/// declaration order and the sentinel last. `is_zeroized` ignores the sentinel.
///
/// # Attributes
///
/// - `#[fast_zeroize(drop)]` on the struct: also derive `Drop`, which erases
///   every field
/// - `#[fast_zeroize(skip)]` on a field: neither erased nor checked (digest
///   length, backend handle)
///
/// # Example
///
/// ```rust,ignore
/// use rampart_zero::{RampartZero, ZeroizeOnDropSentinel};
///
/// #[derive(RampartZero)]
/// #[fast_zeroize(drop)]
/// struct MacState {
///     key_block: [u8; 64],
///     #[fast_zeroize(skip)]
///     tag_len: usize,
///     __sentinel: ZeroizeOnDropSentinel,
/// }
/// ```
#[proc_macro_derive(RampartZero, attributes(fast_zeroize))]
pub fn derive_rampart_zero(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let root = rampart_zero_path();

    expand(&input, &root)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Path of the `rampart_zero` crate as seen from the deriving crate.
pub(crate) fn rampart_zero_path() -> TokenStream2 {
    match crate_name("rampart-zero") {
        Ok(FoundCrate::Itself) => quote!(crate),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        // Not a direct dependency: resolution fails at the use site.
        Err(_) => quote!(::rampart_zero),
    }
}

/// Reads `#[fast_zeroize(..)]` attributes, accepting only `allowed`.
fn fast_zeroize_flags(attrs: &[Attribute], allowed: &str) -> syn::Result<bool> {
    let mut found = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("fast_zeroize")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(allowed) {
                found = true;
                Ok(())
            } else {
                Err(meta.error(format!("expected `fast_zeroize({allowed})`")))
            }
        })?;
    }

    Ok(found)
}

pub(crate) fn expand(input: &DeriveInput, root: &TokenStream2) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "RampartZero requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "RampartZero can only be derived for structs",
            ));
        }
    };

    let with_drop = fast_zeroize_flags(&input.attrs, "drop")?;

    let mut erased: Vec<&Ident> = Vec::new();
    let mut sentinel: Option<&Ident> = None;

    for field in fields {
        if fast_zeroize_flags(&field.attrs, "skip")? {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if ident == SENTINEL_FIELD {
            sentinel = Some(ident);
        } else {
            erased.push(ident);
        }
    }

    let sentinel_erase = sentinel.map(|s| {
        quote! { #root::FastZeroizable::fast_zeroize(&mut self.#s); }
    });

    let mut output = quote! {
        impl #impl_generics #root::FastZeroizable for #name #ty_generics #where_clause {
            fn fast_zeroize(&mut self) {
                #( #root::FastZeroizable::fast_zeroize(&mut self.#erased); )*
                #sentinel_erase
            }
        }

        impl #impl_generics #root::ZeroizationProbe for #name #ty_generics #where_clause {
            fn is_zeroized(&self) -> bool {
                true #( && #root::ZeroizationProbe::is_zeroized(&self.#erased) )*
            }
        }
    };

    if let Some(s) = sentinel {
        output.extend(quote! {
            impl #impl_generics #root::AssertZeroizeOnDrop for #name #ty_generics #where_clause {
                fn clone_sentinel(&self) -> #root::ZeroizeOnDropSentinel {
                    ::core::clone::Clone::clone(&self.#s)
                }

                fn assert_zeroize_on_drop(self) {
                    #root::assert_zeroize_on_drop(self);
                }
            }
        });
    }

    if with_drop {
        output.extend(quote! {
            impl #impl_generics ::core::ops::Drop for #name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::FastZeroizable::fast_zeroize(self);
                }
            }
        });
    }

    Ok(output)
}
