use super::*;
use alloy_primitives::{Address, FixedBytes, U256};

macro_rules! impl_decodable_for_uint {
    ($type: ident, $bit_size: expr) => {
        impl Decode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $bit_size / 8
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
                let len = bytes.len();
                let expected = <Self as Decode>::ssz_fixed_len();

                if len != expected {
                    Err(DecodeError::InvalidByteLength { len, expected })
                } else {
                    let mut array: [u8; $bit_size / 8] = std::default::Default::default();
                    array.clone_from_slice(bytes);

                    Ok(Self::from_le_bytes(array))
                }
            }
        }
    };
}

impl_decodable_for_uint!(u8, 8);
impl_decodable_for_uint!(u16, 16);
impl_decodable_for_uint!(u32, 32);
impl_decodable_for_uint!(u64, 64);

#[cfg(target_pointer_width = "32")]
impl_decodable_for_uint!(usize, 32);

#[cfg(target_pointer_width = "64")]
impl_decodable_for_uint!(usize, 64);

/// Returns `Ok(())` if `bytes` is exactly `expected` bytes long.
fn check_fixed_len(bytes: &[u8], expected: usize) -> Result<(), DecodeError> {
    let len = bytes.len();

    if len != expected {
        Err(DecodeError::InvalidByteLength { len, expected })
    } else {
        Ok(())
    }
}

impl Decode for bool {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        1
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        check_fixed_len(bytes, 1)?;

        match bytes[0] {
            0b0000_0000 => Ok(false),
            0b0000_0001 => Ok(true),
            _ => Err(DecodeError::BytesInvalid(format!(
                "Out-of-range for boolean: {}",
                bytes[0]
            ))),
        }
    }
}

impl Decode for U256 {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        32
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        check_fixed_len(bytes, 32)?;

        Ok(U256::from_le_slice(bytes))
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; N]>::try_from(bytes).map_err(|_| DecodeError::InvalidByteLength {
            len: bytes.len(),
            expected: N,
        })
    }
}

impl<const N: usize> Decode for FixedBytes<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; N]>::from_ssz_bytes(bytes).map(FixedBytes)
    }
}

impl Decode for Address {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        20
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; 20]>::from_ssz_bytes(bytes).map(Address::from)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if T::is_ssz_fixed_len() {
            decode_list_of_fixed_length_items(bytes, None)
        } else {
            decode_list_of_variable_length_items(bytes, None)
        }
    }
}

/// Decodes `bytes` as the back-to-back encodings of some fixed-length `T`.
///
/// If `max_len` is `Some(max)`, decoding fails with `DecodeError::BoundExceeded` when more than
/// `max` items are present. An empty `bytes` is an empty list.
pub fn decode_list_of_fixed_length_items<T: Decode>(
    bytes: &[u8],
    max_len: Option<usize>,
) -> Result<Vec<T>, DecodeError> {
    let item_size = T::ssz_fixed_len();

    if item_size == 0 {
        return Err(DecodeError::ZeroLengthItem);
    }

    if bytes.len() % item_size != 0 {
        return Err(DecodeError::NotMultipleOfItemSize {
            len: bytes.len(),
            item_size,
        });
    }

    let num_items = bytes.len() / item_size;

    if let Some(max) = max_len {
        if num_items > max {
            return Err(DecodeError::BoundExceeded {
                len: num_items,
                max,
            });
        }
    }

    bytes.chunks(item_size).map(T::from_ssz_bytes).collect()
}

/// Decodes `bytes` as if it were a list of variable-length items.
///
/// The list is an offset table with one entry per item, followed by the items. The number of
/// items is derived from the first offset.
///
/// If `max_len` is `Some(max)`, decoding fails with `DecodeError::BoundExceeded` when the
/// number of items exceeds `max`.
pub fn decode_list_of_variable_length_items<T: Decode>(
    bytes: &[u8],
    max_len: Option<usize>,
) -> Result<Vec<T>, DecodeError> {
    if bytes.is_empty() {
        return Ok(vec![]);
    }

    let first_offset = read_offset(bytes)?;
    sanitize_offset(first_offset, None, bytes.len(), Some(first_offset))?;

    if first_offset % BYTES_PER_LENGTH_OFFSET != 0 || first_offset < BYTES_PER_LENGTH_OFFSET {
        return Err(DecodeError::InvalidListFixedBytesLen(first_offset));
    }

    let num_items = first_offset / BYTES_PER_LENGTH_OFFSET;

    if let Some(max) = max_len {
        if num_items > max {
            return Err(DecodeError::BoundExceeded {
                len: num_items,
                max,
            });
        }
    }

    let mut values = Vec::with_capacity(num_items);
    let mut offset = first_offset;

    for i in 1..=num_items {
        let slice_option = if i == num_items {
            bytes.get(offset..)
        } else {
            let start = offset;

            let next_offset = read_offset(
                bytes
                    .get(i * BYTES_PER_LENGTH_OFFSET..)
                    .ok_or(DecodeError::OutOfBoundsByte {
                        i: i * BYTES_PER_LENGTH_OFFSET,
                    })?,
            )?;
            offset = sanitize_offset(next_offset, Some(offset), bytes.len(), Some(first_offset))?;

            bytes.get(start..offset)
        };

        let slice = slice_option.ok_or(DecodeError::OutOfBoundsByte { i: offset })?;

        values.push(T::from_ssz_bytes(slice)?);
    }

    Ok(values)
}
