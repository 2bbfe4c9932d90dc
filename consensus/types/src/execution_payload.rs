use crate::test_utils::TestRandom;
use crate::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use ssz::Encode;
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub type Transaction<N> = VariableList<u8, N>;
pub type Transactions<E> = VariableList<
    Transaction<<E as EthSpec>::MaxBytesPerTransaction>,
    <E as EthSpec>::MaxTransactionsPerPayload,
>;
pub type Withdrawals<E> = VariableList<Withdrawal, <E as EthSpec>::MaxWithdrawalsPerPayload>;

/// An execution block as seen by the consensus layer.
///
/// `extra_data` and each transaction are byte lists and `transactions` is a list of byte lists,
/// so three of the fields live in the variable part of the encoding.
#[derive(
    Default, Debug, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom, Derivative,
)]
#[derivative(PartialEq, Eq, Hash(bound = "E: EthSpec"))]
#[serde(bound = "E: EthSpec")]
pub struct ExecutionPayload<E: EthSpec> {
    pub parent_hash: Hash256,
    pub fee_recipient: Address,
    pub state_root: Hash256,
    pub receipts_root: Hash256,
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    pub prev_randao: Hash256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    #[serde(with = "ssz_types::serde_utils::hex_var_list")]
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    #[serde(with = "serde_utils::quoted_u256")]
    pub base_fee_per_gas: Uint256,
    pub block_hash: Hash256,
    #[serde(with = "ssz_types::serde_utils::list_of_hex_var_list")]
    pub transactions: Transactions<E>,
    pub withdrawals: Withdrawals<E>,
    #[serde(with = "serde_utils::quoted_u64")]
    pub blob_gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub excess_blob_gas: u64,
}

impl<E: EthSpec> ExecutionPayload<E> {
    /// Returns the SSZ size of `self`.
    pub fn payload_size(&self) -> usize {
        self.ssz_bytes_len()
    }

    /// The size of the fixed part of the encoding: every static field plus one offset for each
    /// of `extra_data`, `transactions` and `withdrawals`.
    pub fn fixed_portion_size() -> usize {
        Self::default().as_ssz_bytes().len()
    }

    /// Returns the largest possible encoding, with every list filled to its bound.
    pub fn max_execution_payload_size() -> usize {
        Self::fixed_portion_size()
            + E::max_extra_data_bytes()
            + E::max_transactions_per_payload()
                * (ssz::BYTES_PER_LENGTH_OFFSET + E::max_bytes_per_transaction())
            + E::max_withdrawals_per_payload() * <Withdrawal as Encode>::ssz_fixed_len()
    }
}

impl<E: EthSpec> ValidateAfterDecode for ExecutionPayload<E> {}
