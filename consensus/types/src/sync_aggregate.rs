use crate::test_utils::TestRandom;
use crate::SignatureBytes;

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// Participation bits of the sync committee, one per member, packed little-endian.
pub type SyncCommitteeBits = FixedBytes<64>;

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TreeHash,
    TestRandom,
)]
pub struct SyncAggregate {
    pub sync_committee_bits: SyncCommitteeBits,
    pub sync_committee_signature: SignatureBytes,
}

impl SyncAggregate {
    /// Returns `true` if the member at `index` took part.
    ///
    /// Indices beyond the committee return `false`.
    pub fn participated(&self, index: usize) -> bool {
        self.sync_committee_bits
            .get(index / 8)
            .map_or(false, |byte| byte & (1 << (index % 8)) != 0)
    }

    pub fn num_participants(&self) -> usize {
        self.sync_committee_bits
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }
}
