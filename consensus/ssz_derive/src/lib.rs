//! Provides the following procedural derive macros:
//!
//! - `#[derive(Encode)]`
//! - `#[derive(Decode)]`
//!
//! These macros provide SSZ encoding/decoding for a `struct`. Fields are encoded/decoded in the
//! order they are defined.
//!
//! Presently, only `structs` with named fields are supported. `enum`s and tuple-structs are
//! unsupported.
//!
//! Each field contributes an `ssz::FieldLayout` to the container, which is all the generated
//! code needs to know about it: the header length, the fixed/variable classification and the
//! placement of offsets are all derived from the list of layouts.
//!
//! Example:
//! ```
//! use ssz::{Decode, Encode};
//! use ssz_derive::{Decode, Encode};
//!
//! #[derive(Debug, PartialEq, Encode, Decode)]
//! struct Foo {
//!     pub bar: bool,
//!     pub baz: Vec<u64>,
//! }
//!
//! let foo = Foo {
//!     bar: true,
//!     baz: vec![42],
//! };
//!
//! let bytes = foo.as_ssz_bytes();
//! assert_eq!(bytes, vec![1, 5, 0, 0, 0, 42, 0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(Foo::from_ssz_bytes(&bytes).unwrap(), foo);
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Returns the `(ident, type)` of each named field in the struct.
///
/// # Panics
/// Any unnamed struct field (like in a tuple struct) will raise a panic at compile time.
fn get_named_fields(struct_data: &syn::DataStruct) -> (Vec<&syn::Ident>, Vec<&syn::Type>) {
    struct_data
        .fields
        .iter()
        .map(|f| match &f.ident {
            Some(ident) => (ident, &f.ty),
            _ => panic!("ssz_derive only supports named struct fields."),
        })
        .unzip()
}

fn get_struct_data(item: &DeriveInput) -> &syn::DataStruct {
    match &item.data {
        syn::Data::Struct(s) => s,
        _ => panic!("ssz_derive only supports structs."),
    }
}

/// Implements `ssz::Encode` for some `struct`.
///
/// Fields are encoded in the order they are defined.
#[proc_macro_derive(Encode)]
pub fn ssz_encode_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let (field_idents, field_types) = get_named_fields(get_struct_data(&item));

    let layouts = quote! {
        [
            #(
                ssz::FieldLayout::of_encode::<#field_types>(),
            )*
        ]
    };

    let output = quote! {
        impl #impl_generics ssz::Encode for #name #ty_generics #where_clause {
            fn is_ssz_fixed_len() -> bool {
                ssz::is_static(&#layouts)
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    ssz::fixed_portion_len(&#layouts)
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn ssz_fixed_portion_len() -> usize {
                ssz::fixed_portion_len(&#layouts)
            }

            fn ssz_bytes_len(&self) -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    <Self as ssz::Encode>::ssz_fixed_len()
                } else {
                    let mut len = <Self as ssz::Encode>::ssz_fixed_portion_len();
                    #(
                        if !<#field_types as ssz::Encode>::is_ssz_fixed_len() {
                            len += ssz::Encode::ssz_bytes_len(&self.#field_idents);
                        }
                    )*
                    len
                }
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                let mut encoder = ssz::SszEncoder::container(
                    buf,
                    <Self as ssz::Encode>::ssz_fixed_portion_len(),
                );

                #(
                    encoder.append(&self.#field_idents);
                )*

                encoder.finalize();
            }
        }
    };
    output.into()
}

/// Implements `ssz::Decode` for some `struct`.
///
/// Fields are decoded in the order they are defined.
#[proc_macro_derive(Decode)]
pub fn ssz_decode_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let (field_idents, field_types) = get_named_fields(get_struct_data(&item));

    let layouts = quote! {
        [
            #(
                ssz::FieldLayout::of_decode::<#field_types>(),
            )*
        ]
    };

    let output = quote! {
        impl #impl_generics ssz::Decode for #name #ty_generics #where_clause {
            fn is_ssz_fixed_len() -> bool {
                ssz::is_static(&#layouts)
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    ssz::fixed_portion_len(&#layouts)
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn from_ssz_bytes(bytes: &[u8]) -> std::result::Result<Self, ssz::DecodeError> {
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    let expected = <Self as ssz::Decode>::ssz_fixed_len();
                    if bytes.len() != expected {
                        return Err(ssz::DecodeError::InvalidByteLength {
                            len: bytes.len(),
                            expected,
                        });
                    }
                }

                let mut builder = ssz::SszDecoderBuilder::new(bytes);

                #(
                    builder.register_type::<#field_types>()?;
                )*

                let mut decoder = builder.build()?;

                Ok(Self {
                    #(
                        #field_idents: decoder.decode_next()?,
                    )*
                })
            }
        }
    };
    output.into()
}
