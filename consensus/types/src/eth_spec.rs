use crate::*;

use serde::{Deserialize, Serialize};
use ssz_types::typenum::{U1048576, U1073741824, U16, U2, U256, U32, U4, U8192};
use std::fmt::{self, Debug};
use std::str::FromStr;

const MAINNET: &str = "mainnet";
const MINIMAL: &str = "minimal";

/// Used to identify one of the `EthSpec` instances defined here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EthSpecId {
    Mainnet,
    Minimal,
}

impl FromStr for EthSpecId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MAINNET => Ok(EthSpecId::Mainnet),
            MINIMAL => Ok(EthSpecId::Minimal),
            _ => Err(format!("Unknown eth spec: {}", s)),
        }
    }
}

impl fmt::Display for EthSpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EthSpecId::Mainnet => MAINNET,
            EthSpecId::Minimal => MINIMAL,
        };
        write!(f, "{}", s)
    }
}

/// The compile-time list lengths of a preset.
///
/// These are the capacities used for padding when tree hashing and the hard limit when decoding.
/// A `ChainSpec` may lower, but never raise, any of them at runtime.
pub trait EthSpec: 'static + Default + Sync + Send + Clone + Debug + PartialEq + Eq {
    /*
     * Max operations per block
     */
    type MaxDepositsPerBlock: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    /*
     * Execution layer requests (EIP-7685)
     */
    type MaxDepositRequestsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxWithdrawalRequestsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxConsolidationRequestsPerPayload: Unsigned
        + Clone
        + Sync
        + Send
        + Debug
        + PartialEq
        + Eq;
    /*
     * Execution payload
     */
    type BytesPerLogsBloom: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxExtraDataBytes: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxBytesPerTransaction: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxTransactionsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;
    type MaxWithdrawalsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq + Eq;

    fn default_spec() -> ChainSpec;

    fn spec_name() -> EthSpecId;

    /// Returns the `MAX_DEPOSITS` constant for this specification.
    fn max_deposits_per_block() -> usize {
        Self::MaxDepositsPerBlock::to_usize()
    }

    /// Returns the `MAX_DEPOSIT_REQUESTS_PER_PAYLOAD` constant for this specification.
    fn max_deposit_requests_per_payload() -> usize {
        Self::MaxDepositRequestsPerPayload::to_usize()
    }

    /// Returns the `MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD` constant for this specification.
    fn max_withdrawal_requests_per_payload() -> usize {
        Self::MaxWithdrawalRequestsPerPayload::to_usize()
    }

    /// Returns the `MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD` constant for this specification.
    fn max_consolidation_requests_per_payload() -> usize {
        Self::MaxConsolidationRequestsPerPayload::to_usize()
    }

    fn bytes_per_logs_bloom() -> usize {
        Self::BytesPerLogsBloom::to_usize()
    }

    fn max_extra_data_bytes() -> usize {
        Self::MaxExtraDataBytes::to_usize()
    }

    fn max_bytes_per_transaction() -> usize {
        Self::MaxBytesPerTransaction::to_usize()
    }

    fn max_transactions_per_payload() -> usize {
        Self::MaxTransactionsPerPayload::to_usize()
    }

    /// Returns the `MAX_WITHDRAWALS_PER_PAYLOAD` constant for this specification.
    fn max_withdrawals_per_payload() -> usize {
        Self::MaxWithdrawalsPerPayload::to_usize()
    }
}

/// Ethereum Foundation specifications.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MainnetEthSpec;

impl EthSpec for MainnetEthSpec {
    type MaxDepositsPerBlock = U16;
    type MaxDepositRequestsPerPayload = U8192;
    type MaxWithdrawalRequestsPerPayload = U16;
    type MaxConsolidationRequestsPerPayload = U2;
    type BytesPerLogsBloom = U256;
    type MaxExtraDataBytes = U32;
    type MaxBytesPerTransaction = U1073741824; // 1,073,741,824
    type MaxTransactionsPerPayload = U1048576; // 1,048,576
    type MaxWithdrawalsPerPayload = U16;

    fn default_spec() -> ChainSpec {
        ChainSpec::mainnet()
    }

    fn spec_name() -> EthSpecId {
        EthSpecId::Mainnet
    }
}

/// Ethereum Foundation minimal spec, as defined in the eth2.0-specs repo.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MinimalEthSpec;

impl EthSpec for MinimalEthSpec {
    type MaxDepositsPerBlock = U16;
    type MaxDepositRequestsPerPayload = U4;
    type MaxWithdrawalRequestsPerPayload = U2;
    type MaxConsolidationRequestsPerPayload = U2;
    type BytesPerLogsBloom = U256;
    type MaxExtraDataBytes = U32;
    type MaxBytesPerTransaction = U1073741824;
    type MaxTransactionsPerPayload = U1048576;
    type MaxWithdrawalsPerPayload = U4;

    fn default_spec() -> ChainSpec {
        ChainSpec::minimal()
    }

    fn spec_name() -> EthSpecId {
        EthSpecId::Minimal
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spec_ids() {
        assert_eq!("mainnet".parse::<EthSpecId>(), Ok(EthSpecId::Mainnet));
        assert_eq!("minimal".parse::<EthSpecId>(), Ok(EthSpecId::Minimal));
        assert!("gnosis".parse::<EthSpecId>().is_err());
        assert_eq!(MinimalEthSpec::spec_name().to_string(), "minimal");
    }

    #[test]
    fn default_specs_respect_type_level_bounds() {
        fn check<E: EthSpec>() {
            let spec = E::default_spec();
            assert!(spec.max_deposits_per_block as usize <= E::max_deposits_per_block());
            assert!(
                spec.max_deposit_requests_per_payload as usize
                    <= E::max_deposit_requests_per_payload()
            );
            assert!(
                spec.max_withdrawal_requests_per_payload as usize
                    <= E::max_withdrawal_requests_per_payload()
            );
            assert!(
                spec.max_consolidation_requests_per_payload as usize
                    <= E::max_consolidation_requests_per_payload()
            );
        }

        check::<MainnetEthSpec>();
        check::<MinimalEthSpec>();
    }

    #[test]
    fn mainnet_bounds() {
        assert_eq!(MainnetEthSpec::max_deposits_per_block(), 16);
        assert_eq!(MainnetEthSpec::max_deposit_requests_per_payload(), 8192);
        assert_eq!(MainnetEthSpec::max_withdrawal_requests_per_payload(), 16);
        assert_eq!(MainnetEthSpec::max_consolidation_requests_per_payload(), 2);
        assert_eq!(MainnetEthSpec::bytes_per_logs_bloom(), 256);
        assert_eq!(MainnetEthSpec::max_extra_data_bytes(), 32);
        assert_eq!(MainnetEthSpec::max_bytes_per_transaction(), 1 << 30);
        assert_eq!(MainnetEthSpec::max_transactions_per_payload(), 1 << 20);
        assert_eq!(MainnetEthSpec::max_withdrawals_per_payload(), 16);
        assert_eq!(MinimalEthSpec::max_withdrawals_per_payload(), 4);
    }
}
