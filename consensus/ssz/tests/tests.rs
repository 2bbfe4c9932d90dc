use ssz::{Decode, DecodeError, Encode, ErrorKind};
use ssz_derive::{Decode, Encode};

mod round_trip {
    use super::*;

    fn round_trip<T: Encode + Decode + std::fmt::Debug + PartialEq>(items: Vec<T>) {
        for item in items {
            let encoded = &item.as_ssz_bytes();
            assert_eq!(item.ssz_bytes_len(), encoded.len());
            assert_eq!(T::from_ssz_bytes(encoded), Ok(item));
        }
    }

    #[test]
    fn bool() {
        let items: Vec<bool> = vec![true, false];

        round_trip(items);
    }

    #[test]
    fn u8_array_4() {
        let items: Vec<[u8; 4]> = vec![[0, 0, 0, 0], [1, 0, 0, 0], [1, 2, 3, 4], [1, 2, 0, 4]];

        round_trip(items);
    }

    #[test]
    fn vec_u16() {
        let items: Vec<Vec<u16>> = vec![
            vec![],
            vec![255],
            vec![0, 1, 2],
            vec![100; 64],
            vec![255, 0, 255],
        ];

        round_trip(items);
    }

    #[test]
    fn vec_of_vec_u16() {
        let items: Vec<Vec<Vec<u16>>> = vec![
            vec![],
            vec![vec![]],
            vec![vec![1, 2, 3]],
            vec![vec![], vec![]],
            vec![vec![], vec![1, 2, 3]],
            vec![vec![1, 2, 3], vec![1, 2, 3]],
            vec![vec![1, 2, 3], vec![], vec![1, 2, 3]],
            vec![vec![], vec![], vec![1, 2, 3]],
            vec![vec![], vec![1], vec![1, 2, 3]],
            vec![vec![], vec![1], vec![1, 2, 3]],
        ];

        round_trip(items);
    }

    #[derive(Debug, PartialEq, Encode, Decode)]
    struct FixedLen {
        a: u16,
        b: u64,
        c: u32,
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn fixed_len_struct_encoding() {
        let items: Vec<FixedLen> = vec![
            FixedLen { a: 0, b: 0, c: 0 },
            FixedLen { a: 1, b: 1, c: 1 },
            FixedLen { a: 1, b: 0, c: 1 },
        ];

        let expected_encodings = vec![
            //  | u16--| u64----------------------------| u32----------|
            vec![00, 00, 00, 00, 00, 00, 00, 00, 00, 00, 00, 00, 00, 00],
            vec![01, 00, 01, 00, 00, 00, 00, 00, 00, 00, 01, 00, 00, 00],
            vec![01, 00, 00, 00, 00, 00, 00, 00, 00, 00, 01, 00, 00, 00],
        ];

        for i in 0..items.len() {
            assert_eq!(
                items[i].as_ssz_bytes(),
                expected_encodings[i],
                "Failed on {}",
                i
            );
        }
    }

    #[test]
    fn fixed_len_excess_bytes() {
        let fixed = FixedLen { a: 1, b: 2, c: 3 };

        let mut bytes = fixed.as_ssz_bytes();
        bytes.append(&mut vec![0]);

        assert_eq!(
            FixedLen::from_ssz_bytes(&bytes),
            Err(DecodeError::InvalidByteLength {
                len: 15,
                expected: 14,
            })
        );
    }

    #[test]
    fn fixed_len_too_short() {
        let bytes = vec![1, 0, 2, 0, 0, 0];

        let err = FixedLen::from_ssz_bytes(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidByteLength {
                len: 6,
                expected: 14,
            }
        );
        assert_eq!(err.kind(), ErrorKind::SizeMismatch);
    }

    #[test]
    fn vec_of_fixed_len_struct() {
        let items: Vec<FixedLen> = vec![
            FixedLen { a: 0, b: 0, c: 0 },
            FixedLen { a: 1, b: 1, c: 1 },
            FixedLen { a: 1, b: 0, c: 1 },
        ];

        round_trip(items);
    }

    #[derive(Debug, PartialEq, Encode, Decode)]
    struct VariableLen {
        a: u16,
        b: Vec<u16>,
        c: u32,
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn offset_into_fixed_bytes() {
        let bytes = vec![
            //  1   2   3   4   5   6   7   8   9   10  11  12  13  14  15
            //      | offset        | u32           | variable
            01, 00, 09, 00, 00, 00, 01, 00, 00, 00, 00, 00, 01, 00, 02, 00,
        ];

        assert_eq!(
            VariableLen::from_ssz_bytes(&bytes),
            Err(DecodeError::OffsetIntoFixedPortion(9))
        );
    }

    #[test]
    fn variable_len_excess_bytes() {
        let variable = VariableLen {
            a: 1,
            b: vec![2],
            c: 3,
        };

        let mut bytes = variable.as_ssz_bytes();
        bytes.append(&mut vec![0]);

        // The error message triggered is not so helpful, it's caught by a side-effect. Just
        // checking there is _some_ error is fine.
        assert!(VariableLen::from_ssz_bytes(&bytes).is_err());
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn first_offset_skips_byte() {
        let bytes = vec![
            //  1   2   3   4   5   6   7   8   9   10  11  12  13  14  15
            //      | offset        | u32           | variable
            01, 00, 11, 00, 00, 00, 01, 00, 00, 00, 00, 00, 01, 00, 02, 00,
        ];

        assert_eq!(
            VariableLen::from_ssz_bytes(&bytes),
            Err(DecodeError::OffsetSkipsVariableBytes(11))
        );
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn variable_len_struct_encoding() {
        let items: Vec<VariableLen> = vec![
            VariableLen {
                a: 0,
                b: vec![],
                c: 0,
            },
            VariableLen {
                a: 1,
                b: vec![0],
                c: 1,
            },
            VariableLen {
                a: 1,
                b: vec![0, 1, 2],
                c: 1,
            },
        ];

        let expected_encodings = vec![
            //   00..................................09
            //  | u16--| vec offset-----| u32------------| vec payload --------|
            vec![00, 00, 10, 00, 00, 00, 00, 00, 00, 00],
            vec![01, 00, 10, 00, 00, 00, 01, 00, 00, 00, 00, 00],
            vec![
                01, 00, 10, 00, 00, 00, 01, 00, 00, 00, 00, 00, 01, 00, 02, 00,
            ],
        ];

        for i in 0..items.len() {
            assert_eq!(
                items[i].as_ssz_bytes(),
                expected_encodings[i],
                "Failed on {}",
                i
            );
        }
    }

    #[test]
    fn vec_of_variable_len_struct() {
        let items: Vec<VariableLen> = vec![
            VariableLen {
                a: 0,
                b: vec![],
                c: 0,
            },
            VariableLen {
                a: 255,
                b: vec![0, 1, 2, 3],
                c: 99,
            },
            VariableLen {
                a: 255,
                b: vec![0],
                c: 99,
            },
            VariableLen {
                a: 50,
                b: vec![0],
                c: 0,
            },
        ];

        round_trip(items);
    }

    #[derive(Debug, PartialEq, Encode, Decode)]
    struct ThreeVariableLen {
        a: u16,
        b: Vec<u16>,
        c: Vec<u16>,
        d: Vec<u16>,
    }

    #[test]
    fn three_variable_len() {
        let vec: Vec<ThreeVariableLen> = vec![ThreeVariableLen {
            a: 42,
            b: vec![0],
            c: vec![1],
            d: vec![2],
        }];

        round_trip(vec);
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn offsets_decreasing() {
        let bytes = vec![
            //  1   2   3   4   5   6   7   8   9   10  11  12  13  14
            //      | offset        | offset        | offset        | variable
            01, 00, 14, 00, 00, 00, 15, 00, 00, 00, 14, 00, 00, 00, 00, 00,
        ];

        assert_eq!(
            ThreeVariableLen::from_ssz_bytes(&bytes),
            Err(DecodeError::OffsetsAreDecreasing(14))
        );
    }

    #[test]
    #[allow(clippy::zero_prefixed_literal)]
    fn offset_out_of_bounds() {
        let bytes = vec![
            //  1   2   3   4   5   6   7   8   9   10  11  12  13  14
            //      | offset        | offset        | offset        | variable
            01, 00, 14, 00, 00, 00, 14, 00, 00, 00, 17, 00, 00, 00, 00, 00,
        ];

        let err = ThreeVariableLen::from_ssz_bytes(&bytes).unwrap_err();
        assert_eq!(err, DecodeError::OffsetOutOfBounds(17));
        assert_eq!(err.kind(), ErrorKind::OffsetError);
    }

    #[test]
    fn header_too_short() {
        // Only one of the three offsets fits.
        let bytes = vec![1, 0, 6, 0, 0, 0, 14];

        assert_eq!(
            ThreeVariableLen::from_ssz_bytes(&bytes).unwrap_err().kind(),
            ErrorKind::OffsetError
        );
    }

    #[derive(Debug, PartialEq, Encode, Decode)]
    struct Nested {
        x: u8,
        inner: VariableLen,
        fixed: FixedLen,
    }

    #[test]
    fn nested_dynamic_container() {
        let nested = Nested {
            x: 7,
            inner: VariableLen {
                a: 1,
                b: vec![5, 6],
                c: 2,
            },
            fixed: FixedLen { a: 3, b: 4, c: 5 },
        };

        // x (1) + offset (4) + FixedLen (14).
        assert_eq!(<Nested as Encode>::ssz_fixed_portion_len(), 19);
        // VariableLen has a 10 byte header of its own.
        assert_eq!(<VariableLen as Encode>::ssz_fixed_portion_len(), 10);
        assert_eq!(<VariableLen as Encode>::ssz_fixed_len(), 4);

        let bytes = nested.as_ssz_bytes();
        assert_eq!(bytes.len(), 19 + 10 + 4);
        assert_eq!(&bytes[1..5], &[19, 0, 0, 0]);
        assert_eq!(nested.ssz_bytes_len(), bytes.len());

        round_trip(vec![nested]);
    }
}

mod derive_macro {
    use super::*;

    fn assert_encode<T: Encode>(item: &T, bytes: &[u8]) {
        assert_eq!(item.as_ssz_bytes(), bytes);
    }

    fn assert_encode_decode<T: Encode + Decode + PartialEq + std::fmt::Debug>(
        item: &T,
        bytes: &[u8],
    ) {
        assert_encode(item, bytes);
        assert_eq!(T::from_ssz_bytes(bytes).unwrap(), *item);
    }

    #[derive(PartialEq, Debug, Encode, Decode)]
    struct VariableA {
        a: u8,
        b: Vec<u8>,
    }

    #[derive(PartialEq, Debug, Encode, Decode)]
    struct VariableB {
        a: Vec<u8>,
        b: u8,
    }

    #[test]
    fn variable_a() {
        assert_encode_decode(
            &VariableA {
                a: 1,
                b: vec![2, 3],
            },
            &[1, 5, 0, 0, 0, 2, 3],
        );
    }

    #[test]
    fn variable_b() {
        assert_encode_decode(
            &VariableB {
                a: vec![1, 2],
                b: 3,
            },
            &[5, 0, 0, 0, 3, 1, 2],
        );
    }

    #[derive(PartialEq, Debug, Encode, Decode)]
    struct Empty {}

    #[test]
    fn empty_container() {
        assert_encode_decode(&Empty {}, &[]);
        assert!(<Empty as Decode>::is_ssz_fixed_len());
        assert!(Empty::from_ssz_bytes(&[0]).is_err());
    }
}
