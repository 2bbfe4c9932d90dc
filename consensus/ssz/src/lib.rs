//! Provides encoding (serialization) and decoding (deserialization) in the SimpleSerialize (SSZ)
//! format used by the consensus layer, plus the flat list encoding used for execution-layer
//! requests.
//!
//! ## Example
//!
//! ```rust
//! use ssz_derive::{Encode, Decode};
//! use ssz::{Decode, Encode};
//!
//! #[derive(PartialEq, Debug, Encode, Decode)]
//! struct Foo {
//!     a: u64,
//!     b: Vec<u16>,
//! }
//!
//! fn ssz_encode_decode_example() {
//!     let foo = Foo {
//!         a: 42,
//!         b: vec![1, 3, 3, 7]
//!     };
//!
//!     let ssz_bytes: Vec<u8> = foo.as_ssz_bytes();
//!
//!     let decoded_foo = Foo::from_ssz_bytes(&ssz_bytes).unwrap();
//!
//!     assert_eq!(foo, decoded_foo);
//! }
//!
//! ```
//!
//! See `tests/` for more examples.

mod decode;
mod encode;
pub mod flat;
mod layout;

pub use decode::{
    impls::{decode_list_of_fixed_length_items, decode_list_of_variable_length_items},
    read_offset, sanitize_offset, Decode, DecodeError, ErrorKind, SszDecoder, SszDecoderBuilder,
};
pub use encode::{encode_length, sequence_ssz_append, sequence_ssz_bytes_len, Encode, SszEncoder};
pub use flat::{decode_flat_list, encode_flat_list, EmptyList};
pub use layout::{fixed_portion_len, is_static, FieldLayout};

/// The number of bytes used to represent an offset.
pub const BYTES_PER_LENGTH_OFFSET: usize = 4;
/// The maximum value that can be represented using `BYTES_PER_LENGTH_OFFSET`.
#[cfg(target_pointer_width = "32")]
pub const MAX_LENGTH_VALUE: usize = (u32::MAX >> (8 * (4 - BYTES_PER_LENGTH_OFFSET))) as usize;
#[cfg(target_pointer_width = "64")]
pub const MAX_LENGTH_VALUE: usize = (u64::MAX >> (8 * (8 - BYTES_PER_LENGTH_OFFSET))) as usize;

/// Convenience function to SSZ encode an object supporting ssz::Encode.
///
/// Equivalent to `val.as_ssz_bytes()`.
pub fn ssz_encode<T>(val: &T) -> Vec<u8>
where
    T: Encode,
{
    val.as_ssz_bytes()
}
