//! Requests raised by the execution layer and carried in the beacon block body (EIP-7685).
//!
//! Over the engine API the requests travel as a list of `request_type ‖ flat_encoding`
//! elements, one per non-empty request type, sorted by type.

use crate::test_utils::TestRandom;
use crate::validate::check_list_bound;
use crate::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use slog::{debug, Logger};
use ssz::{decode_flat_list, encode_flat_list, Decode, DecodeError, EmptyList};
use ssz_derive::{Decode, Encode};
use test_random_derive::TestRandom;
use tree_hash_derive::TreeHash;

pub const DEPOSIT_REQUEST_TYPE: u8 = 0x00;
pub const WITHDRAWAL_REQUEST_TYPE: u8 = 0x01;
pub const CONSOLIDATION_REQUEST_TYPE: u8 = 0x02;

pub type DepositRequests<E> =
    VariableList<DepositRequest, <E as EthSpec>::MaxDepositRequestsPerPayload>;
pub type WithdrawalRequests<E> =
    VariableList<WithdrawalRequest, <E as EthSpec>::MaxWithdrawalRequestsPerPayload>;
pub type ConsolidationRequests<E> =
    VariableList<ConsolidationRequest, <E as EthSpec>::MaxConsolidationRequestsPerPayload>;

#[derive(Debug, PartialEq, Clone)]
pub enum RequestsError {
    /// The element at `index` has no request type byte.
    EmptyRequest { index: usize },
    /// Request types must be strictly increasing.
    UnsortedRequestTypes { previous: u8, current: u8 },
    UnknownRequestType(u8),
    /// The payload following a known request type could not be decoded.
    InvalidRequests { request_type: u8, error: DecodeError },
}

#[derive(
    Debug, Derivative, Default, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, TestRandom,
)]
#[serde(bound = "E: EthSpec")]
#[derivative(PartialEq, Eq, Hash(bound = "E: EthSpec"))]
pub struct ExecutionRequests<E: EthSpec> {
    pub deposits: DepositRequests<E>,
    pub withdrawals: WithdrawalRequests<E>,
    pub consolidations: ConsolidationRequests<E>,
}

impl<E: EthSpec> ExecutionRequests<E> {
    /// Returns the encoding of the requests as sent to the execution engine.
    ///
    /// Empty request lists are left out entirely.
    pub fn get_execution_requests_list(&self) -> Vec<Vec<u8>> {
        let mut requests_list = Vec::new();

        for (request_type, encoded) in [
            (DEPOSIT_REQUEST_TYPE, encode_flat_list(&self.deposits)),
            (WITHDRAWAL_REQUEST_TYPE, encode_flat_list(&self.withdrawals)),
            (CONSOLIDATION_REQUEST_TYPE, encode_flat_list(&self.consolidations)),
        ] {
            if !encoded.is_empty() {
                let mut element = Vec::with_capacity(1 + encoded.len());
                element.push(request_type);
                element.extend(encoded);
                requests_list.push(element);
            }
        }

        requests_list
    }

    /// Decodes the engine API encoding produced by `get_execution_requests_list`.
    ///
    /// Each element is a request type byte followed by a non-empty flat list of requests. Types
    /// must appear at most once and in increasing order. List lengths are checked against the
    /// bounds of `spec`.
    pub fn from_execution_requests_list(
        requests_list: &[Vec<u8>],
        spec: &ChainSpec,
        log: &Logger,
    ) -> Result<Self, RequestsError> {
        let result = Self::decode_requests_list(requests_list, spec);

        match &result {
            Ok(requests) => debug!(
                log,
                "Decoded execution requests";
                "deposits" => requests.deposits.len(),
                "withdrawals" => requests.withdrawals.len(),
                "consolidations" => requests.consolidations.len(),
            ),
            Err(e) => debug!(
                log,
                "Rejected execution requests";
                "elements" => requests_list.len(),
                "error" => ?e,
            ),
        }

        result
    }

    fn decode_requests_list(
        requests_list: &[Vec<u8>],
        spec: &ChainSpec,
    ) -> Result<Self, RequestsError> {
        let mut requests = Self::default();
        let mut previous_type = None;

        for (index, element) in requests_list.iter().enumerate() {
            let (&request_type, bytes) = element
                .split_first()
                .ok_or(RequestsError::EmptyRequest { index })?;

            if let Some(previous) = previous_type {
                if request_type <= previous {
                    return Err(RequestsError::UnsortedRequestTypes {
                        previous,
                        current: request_type,
                    });
                }
            }
            previous_type = Some(request_type);

            let invalid = |error| RequestsError::InvalidRequests {
                request_type,
                error,
            };

            match request_type {
                DEPOSIT_REQUEST_TYPE => {
                    requests.deposits = decode_deposit_requests::<E>(bytes, spec).map_err(invalid)?
                }
                WITHDRAWAL_REQUEST_TYPE => {
                    requests.withdrawals =
                        decode_withdrawal_requests::<E>(bytes, spec).map_err(invalid)?
                }
                CONSOLIDATION_REQUEST_TYPE => {
                    requests.consolidations =
                        decode_consolidation_requests::<E>(bytes, spec).map_err(invalid)?
                }
                unknown => return Err(RequestsError::UnknownRequestType(unknown)),
            }
        }

        Ok(requests)
    }
}

impl<E: EthSpec> ValidateAfterDecode for ExecutionRequests<E> {
    fn validate_after_decode(&self, spec: &ChainSpec) -> Result<(), ValidationError> {
        check_list_bound(
            "deposits",
            self.deposits.len(),
            spec.max_deposit_requests_per_payload,
        )?;
        check_list_bound(
            "withdrawals",
            self.withdrawals.len(),
            spec.max_withdrawal_requests_per_payload,
        )?;
        check_list_bound(
            "consolidations",
            self.consolidations.len(),
            spec.max_consolidation_requests_per_payload,
        )
    }
}

/// Decodes a flat list of deposit requests. An empty `bytes` is an error.
pub fn decode_deposit_requests<E: EthSpec>(
    bytes: &[u8],
    spec: &ChainSpec,
) -> Result<DepositRequests<E>, DecodeError> {
    decode_request_list(bytes, spec.max_deposit_requests_per_payload)
}

/// Decodes a flat list of withdrawal requests. An empty `bytes` is an error.
pub fn decode_withdrawal_requests<E: EthSpec>(
    bytes: &[u8],
    spec: &ChainSpec,
) -> Result<WithdrawalRequests<E>, DecodeError> {
    decode_request_list(bytes, spec.max_withdrawal_requests_per_payload)
}

/// Decodes a flat list of consolidation requests. An empty `bytes` is an error.
pub fn decode_consolidation_requests<E: EthSpec>(
    bytes: &[u8],
    spec: &ChainSpec,
) -> Result<ConsolidationRequests<E>, DecodeError> {
    decode_request_list(bytes, spec.max_consolidation_requests_per_payload)
}

/// The bound applied is the smaller of the runtime bound and the list's type-level bound `N`.
fn decode_request_list<T: Decode, N: Unsigned>(
    bytes: &[u8],
    runtime_max: u64,
) -> Result<VariableList<T, N>, DecodeError> {
    let max_len = usize::try_from(runtime_max).map_or(N::to_usize(), |max| max.min(N::to_usize()));
    let requests = decode_flat_list(bytes, max_len, EmptyList::Reject)?;

    VariableList::new(requests)
        .map_err(|e| DecodeError::BytesInvalid(format!("Invalid request list: {:?}", e)))
}
