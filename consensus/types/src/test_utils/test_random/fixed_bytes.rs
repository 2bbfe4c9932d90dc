use super::*;
use alloy_primitives::{FixedBytes, U256};

/// Covers `Hash256`, `PublicKeyBytes`, `SignatureBytes` and `Graffiti`.
impl<const N: usize> TestRandom for FixedBytes<N> {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        FixedBytes(<[u8; N]>::random_for_test(rng))
    }
}

impl TestRandom for Address {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Address::from(<[u8; 20]>::random_for_test(rng))
    }
}

impl TestRandom for U256 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        U256::from_le_bytes(<[u8; 32]>::random_for_test(rng))
    }
}
