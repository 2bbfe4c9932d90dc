use crate::test_utils::TestRandom;
use crate::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A `BeaconBlock` and a signature from its proposer.
#[derive(
    Debug, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom, Derivative,
)]
#[derivative(PartialEq, Eq, Hash(bound = "E: EthSpec"))]
#[serde(bound = "E: EthSpec")]
pub struct SignedBeaconBlock<E: EthSpec> {
    pub message: BeaconBlock<E>,
    pub signature: SignatureBytes,
}

impl<E: EthSpec> SignedBeaconBlock<E> {
    /// Returns the root of the unsigned block, which is how blocks are referred to.
    pub fn canonical_root(&self) -> Hash256 {
        self.message.tree_hash_root()
    }

    /// Produces the signed header of this block, as carried in proposer slashings.
    pub fn signed_block_header(&self) -> SignedBeaconBlockHeader {
        self.message.block_header().into_signed(self.signature)
    }

    /// Deconstruct the `SignedBeaconBlock` into a `BeaconBlock` and signature.
    pub fn deconstruct(self) -> (BeaconBlock<E>, SignatureBytes) {
        (self.message, self.signature)
    }
}

impl<E: EthSpec> ValidateAfterDecode for SignedBeaconBlock<E> {
    fn validate_after_decode(&self, spec: &ChainSpec) -> Result<(), ValidationError> {
        self.message.validate_after_decode(spec)
    }
}
