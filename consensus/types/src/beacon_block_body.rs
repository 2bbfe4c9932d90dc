use crate::test_utils::TestRandom;
use crate::validate::check_list_bound;
use crate::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

/// The body of a `BeaconChain` block, restricted to the operations handled by this crate.
#[derive(
    Debug, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom, Derivative,
)]
#[derivative(PartialEq, Eq, Hash(bound = "E: EthSpec"))]
#[serde(bound = "E: EthSpec", deny_unknown_fields)]
pub struct BeaconBlockBody<E: EthSpec> {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Graffiti,
    pub deposits: VariableList<Deposit, E::MaxDepositsPerBlock>,
    pub execution_requests: ExecutionRequests<E>,
}

impl<E: EthSpec> ValidateAfterDecode for BeaconBlockBody<E> {
    fn validate_after_decode(&self, spec: &ChainSpec) -> Result<(), ValidationError> {
        check_list_bound("deposits", self.deposits.len(), spec.max_deposits_per_block)?;
        self.execution_requests.validate_after_decode(spec)
    }
}
