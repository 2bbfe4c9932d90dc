use crate::test_utils::TestRandom;
use crate::{DepositMessage, Hash256, PublicKeyBytes, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A validator deposit, as included in a block body or reported by the execution layer.
#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom,
)]
pub struct Deposit {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
    pub signature: SignatureBytes,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
}

/// Deposits delivered in an execution payload share the block deposit layout.
pub type DepositRequest = Deposit;

impl Deposit {
    /// The SSZ size of every `Deposit`.
    pub fn max_size() -> usize {
        <Self as Encode>::ssz_fixed_len()
    }

    /// Returns the message whose signing root is covered by `self.signature`.
    pub fn deposit_message(&self) -> DepositMessage {
        DepositMessage {
            pubkey: self.pubkey,
            withdrawal_credentials: self.withdrawal_credentials,
            amount: self.amount,
        }
    }
}
