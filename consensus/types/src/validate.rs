//! Checks that run after a successful decode.
//!
//! The SSZ decoders only know the type-level bound of each list. A `ChainSpec` may set a lower
//! bound at runtime, so any value decoded from the network must also pass
//! `ValidateAfterDecode::validate_after_decode` before it is used.

use crate::*;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// A list holds more items than the `ChainSpec` allows.
    BoundExceeded {
        field: &'static str,
        len: usize,
        max: u64,
    },
}

pub trait ValidateAfterDecode {
    /// Returns an error if `self` breaks a bound set by `spec`.
    ///
    /// Types without runtime bounds accept every value.
    fn validate_after_decode(&self, _spec: &ChainSpec) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Returns an error if a list of `len` items is longer than `max`.
pub fn check_list_bound(field: &'static str, len: usize, max: u64) -> Result<(), ValidationError> {
    if len as u64 > max {
        Err(ValidationError::BoundExceeded { field, len, max })
    } else {
        Ok(())
    }
}

macro_rules! impl_without_bounds {
    ($($type: ty),*) => {
        $(impl ValidateAfterDecode for $type {})*
    };
}

impl_without_bounds!(
    AttestationData,
    BeaconBlockHeader,
    ConsolidationRequest,
    Deposit,
    DepositMessage,
    Eth1Data,
    Fork,
    ForkData,
    PendingPartialWithdrawal,
    SignedBeaconBlockHeader,
    SigningData,
    SlashingInfo,
    SyncAggregate,
    Validator,
    Withdrawal,
    WithdrawalRequest
);
