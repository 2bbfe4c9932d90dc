use crate::test_utils::TestRandom;
use crate::{Address, PublicKeyBytes};

use serde::{Deserialize, Serialize};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A withdrawal or exit triggered from the execution layer.
#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom,
)]
pub struct WithdrawalRequest {
    pub source_address: Address,
    pub validator_pubkey: PublicKeyBytes,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
}

impl WithdrawalRequest {
    pub fn max_size() -> usize {
        <Self as Encode>::ssz_fixed_len()
    }
}
