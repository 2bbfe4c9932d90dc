use crate::test_utils::TestRandom;
use crate::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A block of the `BeaconChain`.
#[derive(
    Debug, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom, Derivative,
)]
#[derivative(PartialEq, Eq, Hash(bound = "E: EthSpec"))]
#[serde(bound = "E: EthSpec", deny_unknown_fields)]
pub struct BeaconBlock<E: EthSpec> {
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    pub body: BeaconBlockBody<E>,
}

impl<E: EthSpec> SignedRoot for BeaconBlock<E> {}

impl<E: EthSpec> BeaconBlock<E> {
    /// Returns the `tree_hash_root` of the block.
    pub fn canonical_root(&self) -> Hash256 {
        self.tree_hash_root()
    }

    /// Return the tree hash root of the block's body.
    pub fn body_root(&self) -> Hash256 {
        self.body.tree_hash_root()
    }

    /// Returns a full `BeaconBlockHeader` of this block.
    ///
    /// Note: performs a full tree-hash of `self.body`.
    pub fn block_header(&self) -> BeaconBlockHeader {
        BeaconBlockHeader {
            slot: self.slot,
            proposer_index: self.proposer_index,
            parent_root: self.parent_root,
            state_root: self.state_root,
            body_root: self.body_root(),
        }
    }

    /// Pairs the block with a signature produced elsewhere.
    pub fn into_signed(self, signature: SignatureBytes) -> SignedBeaconBlock<E> {
        SignedBeaconBlock {
            message: self,
            signature,
        }
    }
}

impl<E: EthSpec> ValidateAfterDecode for BeaconBlock<E> {
    fn validate_after_decode(&self, spec: &ChainSpec) -> Result<(), ValidationError> {
        self.body.validate_after_decode(spec)
    }
}
