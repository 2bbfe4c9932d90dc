#[cfg(test)]
#[macro_export]
macro_rules! ssz_tests {
    ($type: ty) => {
        #[test]
        pub fn test_ssz_round_trip() {
            use ssz::{ssz_encode, Decode, Encode};
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            let bytes = ssz_encode(&original);
            assert_eq!(original.ssz_bytes_len(), bytes.len());

            let decoded = <$type>::from_ssz_bytes(&bytes).unwrap();
            assert_eq!(original, decoded);
        }

        #[test]
        pub fn test_ssz_canonical_size() {
            use ssz::Encode;
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            if <$type as Encode>::is_ssz_fixed_len() {
                assert_eq!(
                    original.as_ssz_bytes().len(),
                    <$type as Encode>::ssz_fixed_len()
                );
            } else {
                assert!(original.ssz_bytes_len() >= <$type as Encode>::ssz_fixed_portion_len());
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! tree_hash_tests {
    ($type: ty) => {
        #[test]
        pub fn test_tree_hash_stability() {
            use tree_hash::TreeHash;
            use $crate::test_utils::{SeedableRng, TestRandom, XorShiftRng};

            let mut rng = XorShiftRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);
            let root = original.tree_hash_root();

            // Same value, same root.
            let mut rng = XorShiftRng::from_seed([42; 16]);
            let again = <$type>::random_for_test(&mut rng);
            assert_eq!(again.tree_hash_root(), root);

            // Round-tripping through SSZ leaves the root untouched.
            let decoded = <$type as ssz::Decode>::from_ssz_bytes(&ssz::ssz_encode(&original))
                .unwrap();
            assert_eq!(decoded.tree_hash_root(), root);
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! ssz_and_tree_hash_tests {
    ($type: ty) => {
        ssz_tests!($type);
        tree_hash_tests!($type);
    };
}
