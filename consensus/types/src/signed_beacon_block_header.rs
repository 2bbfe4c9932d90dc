use crate::test_utils::TestRandom;
use crate::{BeaconBlockHeader, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// A signed header of a `BeaconBlock`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom,
)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: SignatureBytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_random_instance;
    use crate::{Domain, Hash256, SignedRoot};
    use ssz::Encode;
    use tree_hash::TreeHash;

    ssz_and_tree_hash_tests!(SignedBeaconBlockHeader);

    #[test]
    fn size() {
        assert_eq!(<SignedBeaconBlockHeader as Encode>::ssz_fixed_len(), 208);
    }

    #[test]
    fn signature_does_not_change_signing_root() {
        let header = test_random_instance::<BeaconBlockHeader>();
        let domain = crate::ChainSpec::mainnet().compute_domain(
            Domain::BeaconProposer,
            [0; 4],
            Hash256::ZERO,
        );

        let a = header.clone().into_signed(SignatureBytes::repeat_byte(1));
        let b = header.clone().into_signed(SignatureBytes::repeat_byte(2));

        assert_ne!(a.tree_hash_root(), b.tree_hash_root());
        assert_eq!(
            a.message.signing_root(domain),
            b.message.signing_root(domain)
        );
        assert_eq!(a.message.signing_root(domain), header.signing_root(domain));
    }
}
