use super::*;

/// Describes how a single field of a container occupies the fixed-length (header) portion of
/// the container's SSZ bytes.
///
/// Containers are encoded and decoded by walking a list of these descriptors, so the same logic
/// serves every container regardless of the concrete field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// The field is written in place and always occupies exactly `size` bytes.
    Static { size: usize },
    /// The field is represented in the header by a `BYTES_PER_LENGTH_OFFSET` offset, its content
    /// being appended after the header.
    Dynamic,
}

impl FieldLayout {
    /// The layout of some encodable type `T`.
    pub fn of_encode<T: Encode>() -> Self {
        if T::is_ssz_fixed_len() {
            FieldLayout::Static {
                size: T::ssz_fixed_len(),
            }
        } else {
            FieldLayout::Dynamic
        }
    }

    /// The layout of some decodable type `T`.
    pub fn of_decode<T: Decode>() -> Self {
        if T::is_ssz_fixed_len() {
            FieldLayout::Static {
                size: T::ssz_fixed_len(),
            }
        } else {
            FieldLayout::Dynamic
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, FieldLayout::Static { .. })
    }

    /// The number of bytes this field occupies in the header.
    pub fn fixed_len(&self) -> usize {
        match self {
            FieldLayout::Static { size } => *size,
            FieldLayout::Dynamic => BYTES_PER_LENGTH_OFFSET,
        }
    }
}

/// Returns the length of the header of a container with the given fields: the sum of all
/// static field sizes plus one offset per dynamic field.
pub fn fixed_portion_len(fields: &[FieldLayout]) -> usize {
    fields.iter().map(FieldLayout::fixed_len).sum()
}

/// Returns `true` if a container with the given fields has a fixed length.
pub fn is_static(fields: &[FieldLayout]) -> bool {
    fields.iter().all(FieldLayout::is_static)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_of_primitives() {
        assert_eq!(
            FieldLayout::of_encode::<u64>(),
            FieldLayout::Static { size: 8 }
        );
        assert_eq!(
            FieldLayout::of_decode::<[u8; 48]>(),
            FieldLayout::Static { size: 48 }
        );
        assert_eq!(FieldLayout::of_encode::<Vec<u8>>(), FieldLayout::Dynamic);
        assert_eq!(FieldLayout::of_decode::<Vec<u64>>(), FieldLayout::Dynamic);
    }

    #[test]
    fn header_length() {
        let fields = [
            FieldLayout::of_encode::<u64>(),
            FieldLayout::of_encode::<Vec<u8>>(),
            FieldLayout::of_encode::<[u8; 32]>(),
            FieldLayout::of_encode::<Vec<u16>>(),
        ];

        assert_eq!(fixed_portion_len(&fields), 8 + 4 + 32 + 4);
        assert!(!is_static(&fields));
        assert!(is_static(&fields[2..3]));
        assert_eq!(fixed_portion_len(&[]), 0);
    }
}
