use super::*;

mod impls;

pub use impls::{sequence_ssz_append, sequence_ssz_bytes_len};

/// Provides SSZ encoding (serialization) via the `as_ssz_bytes(&self)` method.
///
/// See `tests/` for manual implementations or the crate root for implementations using
/// `#[derive(Encode)]`.
pub trait Encode {
    /// Returns `true` if this object has a fixed-length.
    ///
    /// I.e., there are no variable length items in this object or any of it's contained objects.
    fn is_ssz_fixed_len() -> bool;

    /// Append the encoding `self` to `buf`.
    ///
    /// Note, variable length objects need only to append their "variable length" portion, they do
    /// not need to provide their offset.
    fn ssz_append(&self, buf: &mut Vec<u8>);

    /// The number of bytes this object occupies in the fixed-length portion of the SSZ bytes.
    ///
    /// By default, this is set to `BYTES_PER_LENGTH_OFFSET` which is suitable for variable length
    /// objects, but not fixed-length objects. Fixed-length objects _must_ return a value which
    /// represents their length.
    fn ssz_fixed_len() -> usize {
        BYTES_PER_LENGTH_OFFSET
    }

    /// The length of the header region of this object's own encoding, i.e. its static fields
    /// plus one offset per dynamic field.
    ///
    /// Fixed-length objects are all header. Variable-length containers override this with the
    /// size of their offset table and static fields, which is known before any content is.
    /// Lists have no header of their own and return zero.
    fn ssz_fixed_portion_len() -> usize {
        if <Self as Encode>::is_ssz_fixed_len() {
            <Self as Encode>::ssz_fixed_len()
        } else {
            0
        }
    }

    /// Returns the size (in bytes) when `self` is serialized.
    ///
    /// Returns the same value as `self.as_ssz_bytes().len()` but this method is significantly more
    /// efficient.
    fn ssz_bytes_len(&self) -> usize;

    /// Returns the full-form encoding of this object.
    ///
    /// The default implementation of this method should suffice for most cases.
    fn as_ssz_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.ssz_bytes_len());

        self.ssz_append(&mut buf);

        buf
    }
}

/// Allow for encoding an ordered series of distinct or indistinct objects as SSZ bytes.
///
/// **You must call `finalize(..)` after the final `append(..)` call** to ensure the bytes are
/// written to `buf`.
///
/// ## Example
///
/// Use `SszEncoder` to produce identical output to `foo.as_ssz_bytes()`:
///
/// ```rust
/// use ssz_derive::{Encode, Decode};
/// use ssz::{fixed_portion_len, Decode, Encode, FieldLayout, SszEncoder};
///
/// #[derive(PartialEq, Debug, Encode, Decode)]
/// struct Foo {
///     a: u64,
///     b: Vec<u16>,
/// }
///
/// fn ssz_encode_example() {
///     let foo = Foo {
///         a: 42,
///         b: vec![1, 3, 3, 7]
///     };
///
///     let mut buf: Vec<u8> = vec![];
///     let offset = fixed_portion_len(&[
///         FieldLayout::of_encode::<u64>(),
///         FieldLayout::of_encode::<Vec<u16>>(),
///     ]);
///
///     let mut encoder = SszEncoder::container(&mut buf, offset);
///
///     encoder.append(&foo.a);
///     encoder.append(&foo.b);
///
///     encoder.finalize();
///
///     assert_eq!(foo.as_ssz_bytes(), buf);
/// }
///
/// ```
pub struct SszEncoder<'a> {
    offset: usize,
    buf: &'a mut Vec<u8>,
    variable_bytes: Vec<u8>,
}

impl<'a> SszEncoder<'a> {
    /// Instantiate a new encoder for encoding a SSZ container.
    ///
    /// `num_fixed_bytes` is the length of the header: the first offset written points directly
    /// after it.
    pub fn container(buf: &'a mut Vec<u8>, num_fixed_bytes: usize) -> Self {
        buf.reserve(num_fixed_bytes);

        Self {
            offset: num_fixed_bytes,
            buf,
            variable_bytes: vec![],
        }
    }

    /// Append some `item` to the SSZ bytes.
    pub fn append<T: Encode>(&mut self, item: &T) {
        self.append_parameterized(FieldLayout::of_encode::<T>(), |buf| item.ssz_append(buf))
    }

    /// Uses `layout` to decide if the bytes produced by `ssz_append` are written in place or
    /// referenced by an offset.
    pub fn append_parameterized<F>(&mut self, layout: FieldLayout, ssz_append: F)
    where
        F: Fn(&mut Vec<u8>),
    {
        match layout {
            FieldLayout::Static { .. } => ssz_append(self.buf),
            FieldLayout::Dynamic => {
                self.buf
                    .extend_from_slice(&encode_length(self.offset + self.variable_bytes.len()));

                ssz_append(&mut self.variable_bytes);
            }
        }
    }

    /// Write the variable bytes to `self.bytes`.
    ///
    /// This method must be called after the final `append(..)` call when serializing
    /// variable-length items.
    pub fn finalize(&mut self) -> &mut Vec<u8> {
        self.buf.append(&mut self.variable_bytes);

        self.buf
    }
}

/// Encode `len` as a little-endian byte array of `BYTES_PER_LENGTH_OFFSET` length.
///
/// If `len` is larger than `2 ^ BYTES_PER_LENGTH_OFFSET`, a `debug_assert` is raised.
pub fn encode_length(len: usize) -> [u8; BYTES_PER_LENGTH_OFFSET] {
    // Lengths this large cannot come from a valid consensus object. Producing a wrong offset is
    // preferred over aborting the process, so only debug builds check it.
    debug_assert!(len <= MAX_LENGTH_VALUE);

    let mut bytes = [0; BYTES_PER_LENGTH_OFFSET];
    bytes.copy_from_slice(&len.to_le_bytes()[0..BYTES_PER_LENGTH_OFFSET]);
    bytes
}
