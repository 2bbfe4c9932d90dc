//! Flat concatenation of fixed-length items, as used for the request lists exchanged with the
//! execution layer (EIP-7685).
//!
//! Items are written back-to-back with no offsets and no length prefix, so the only framing is
//! the total length. A decoder must therefore know the maximum number of items and whether an
//! empty buffer is acceptable where it is called.

use super::*;

/// How `decode_flat_list` treats an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyList {
    /// Zero bytes decode to zero items.
    Allow,
    /// Zero bytes are an error: the list must contain at least one item.
    Reject,
}

/// Concatenates the SSZ encoding of each item.
///
/// The result has length `items.len() * T::ssz_fixed_len()`; an empty slice encodes to zero
/// bytes.
pub fn encode_flat_list<T: Encode>(items: &[T]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(items.len() * T::ssz_fixed_len());

    for item in items {
        item.ssz_append(&mut buf);
    }

    buf
}

/// Splits `bytes` into equal `T::ssz_fixed_len()` chunks and decodes each one.
///
/// Checks are applied in order:
///
/// 1. `T` must be fixed-length.
/// 2. An empty `bytes` fails with `DecodeError::EmptyNotAllowed` if `empty` is
///    `EmptyList::Reject`, otherwise it decodes to no items.
/// 3. `bytes.len()` must be a multiple of the item size
///    (`DecodeError::NotMultipleOfItemSize`).
/// 4. The item count must not exceed `max_len` (`DecodeError::BoundExceeded`).
pub fn decode_flat_list<T: Decode>(
    bytes: &[u8],
    max_len: usize,
    empty: EmptyList,
) -> Result<Vec<T>, DecodeError> {
    if !T::is_ssz_fixed_len() {
        return Err(DecodeError::BytesInvalid(
            "flat lists require fixed-length items".to_string(),
        ));
    }

    if bytes.is_empty() {
        return match empty {
            EmptyList::Allow => Ok(vec![]),
            EmptyList::Reject => Err(DecodeError::EmptyNotAllowed),
        };
    }

    decode_list_of_fixed_length_items(bytes, Some(max_len))
}
