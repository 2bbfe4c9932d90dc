use crate::test_utils::TestRandom;
use crate::Hash256;

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// The envelope that is actually signed: an object root paired with the domain it is signed in.
#[derive(
    Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom,
)]
pub struct SigningData {
    pub object_root: Hash256,
    pub domain: Hash256,
}

/// Types that can be signed. The message signed is the root of a `SigningData`.
pub trait SignedRoot: TreeHash {
    fn signing_root(&self, domain: Hash256) -> Hash256 {
        SigningData {
            object_root: self.tree_hash_root(),
            domain,
        }
        .tree_hash_root()
    }
}
