//! Ethereum consensus types, with SSZ encoding, tree hashing and the bounds checks that only a
//! `ChainSpec` can know about.

#[macro_use]
pub mod test_utils;

pub mod application_domain;
pub mod attestation_data;
pub mod beacon_block;
pub mod beacon_block_body;
pub mod beacon_block_header;
pub mod chain_spec;
pub mod consolidation_request;
pub mod deposit;
pub mod deposit_message;
pub mod eth1_data;
pub mod eth_spec;
pub mod execution_payload;
pub mod execution_payload_header;
pub mod execution_requests;
pub mod fork;
pub mod fork_data;
pub mod pending_partial_withdrawal;
pub mod signed_beacon_block;
pub mod signed_beacon_block_header;
pub mod signing_data;
pub mod slashing_info;
pub mod sync_aggregate;
pub mod validate;
pub mod validator;
pub mod withdrawal;
pub mod withdrawal_request;

mod slot_epoch;

pub use crate::application_domain::ApplicationDomain;
pub use crate::attestation_data::AttestationData;
pub use crate::beacon_block::BeaconBlock;
pub use crate::beacon_block_body::BeaconBlockBody;
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::chain_spec::{ChainSpec, Config, ConfigError, Domain};
pub use crate::consolidation_request::ConsolidationRequest;
pub use crate::deposit::{Deposit, DepositRequest};
pub use crate::deposit_message::DepositMessage;
pub use crate::eth1_data::Eth1Data;
pub use crate::eth_spec::{EthSpec, EthSpecId, MainnetEthSpec, MinimalEthSpec};
pub use crate::execution_payload::{ExecutionPayload, Transaction, Transactions, Withdrawals};
pub use crate::execution_payload_header::ExecutionPayloadHeader;
pub use crate::execution_requests::{
    decode_consolidation_requests, decode_deposit_requests, decode_withdrawal_requests,
    ExecutionRequests, RequestsError, CONSOLIDATION_REQUEST_TYPE, DEPOSIT_REQUEST_TYPE,
    WITHDRAWAL_REQUEST_TYPE,
};
pub use crate::fork::Fork;
pub use crate::fork_data::ForkData;
pub use crate::pending_partial_withdrawal::PendingPartialWithdrawal;
pub use crate::signed_beacon_block::SignedBeaconBlock;
pub use crate::signed_beacon_block_header::SignedBeaconBlockHeader;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::slashing_info::SlashingInfo;
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::sync_aggregate::SyncAggregate;
pub use crate::validate::{ValidateAfterDecode, ValidationError};
pub use crate::validator::Validator;
pub use crate::withdrawal::Withdrawal;
pub use crate::withdrawal_request::WithdrawalRequest;

pub type Hash256 = alloy_primitives::B256;
pub type Address = alloy_primitives::Address;
pub type Uint256 = alloy_primitives::U256;
pub type PublicKeyBytes = alloy_primitives::FixedBytes<48>;
pub type SignatureBytes = alloy_primitives::FixedBytes<96>;
pub type Graffiti = alloy_primitives::FixedBytes<32>;

pub use ssz_types::{typenum, typenum::Unsigned, FixedVector, VariableList};
