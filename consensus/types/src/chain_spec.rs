use crate::application_domain::{ApplicationDomain, APPLICATION_DOMAIN_BUILDER};
use crate::*;
use serde::{Deserialize, Serialize};
use slog::{debug, warn, Logger};
use std::fs::File;
use std::path::Path;
use tree_hash::TreeHash;

/// Each of the BLS signature domains.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Domain {
    BeaconProposer,
    BeaconAttester,
    Randao,
    Deposit,
    VoluntaryExit,
    SelectionProof,
    AggregateAndProof,
    ApplicationMask(ApplicationDomain),
}

/// Holds the runtime "constants" of a chain.
///
/// The list bounds here are the ones enforced by `ValidateAfterDecode` and the execution request
/// decoders. Each must be no greater than the matching type-level bound of the `EthSpec` in use;
/// `Config::apply_to_chain_spec` refuses to build a spec that breaks this.
#[derive(PartialEq, Debug, Clone)]
pub struct ChainSpec {
    /*
     * Config name
     */
    pub config_name: Option<String>,

    /*
     * Fork versions
     */
    pub genesis_fork_version: [u8; 4],

    /*
     * Max operations per block
     */
    pub max_deposits_per_block: u64,

    /*
     * Execution layer requests
     */
    pub max_deposit_requests_per_payload: u64,
    pub max_withdrawal_requests_per_payload: u64,
    pub max_consolidation_requests_per_payload: u64,

    /*
     * Signature domains
     */
    pub(crate) domain_beacon_proposer: u32,
    pub(crate) domain_beacon_attester: u32,
    pub(crate) domain_randao: u32,
    pub(crate) domain_deposit: u32,
    pub(crate) domain_voluntary_exit: u32,
    pub(crate) domain_selection_proof: u32,
    pub(crate) domain_aggregate_and_proof: u32,
    pub(crate) domain_application_mask: u32,
}

impl ChainSpec {
    /// Returns the domain type, as a little-endian integer, for some `Domain`.
    pub fn get_domain_constant(&self, domain: Domain) -> u32 {
        match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::BeaconAttester => self.domain_beacon_attester,
            Domain::Randao => self.domain_randao,
            Domain::Deposit => self.domain_deposit,
            Domain::VoluntaryExit => self.domain_voluntary_exit,
            Domain::SelectionProof => self.domain_selection_proof,
            Domain::AggregateAndProof => self.domain_aggregate_and_proof,
            Domain::ApplicationMask(application_domain) => {
                self.domain_application_mask | application_domain.get_domain_constant()
            }
        }
    }

    /// Get the domain that represents the fork meta and signature domain at `epoch`.
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain: Domain,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let fork_version = fork.get_fork_version(epoch);
        self.compute_domain(domain, fork_version, genesis_validators_root)
    }

    /// Get the domain for a deposit signature.
    ///
    /// Deposits are valid across forks, thus the deposit domain is computed
    /// with the genesis fork version and a zero genesis validators root.
    pub fn get_deposit_domain(&self) -> Hash256 {
        self.compute_domain(Domain::Deposit, self.genesis_fork_version, Hash256::ZERO)
    }

    /// Return the 32-byte fork data root for the `current_version` and `genesis_validators_root`.
    ///
    /// This is used primarily in signature domains to avoid collisions across forks/chains.
    pub fn compute_fork_data_root(
        current_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        ForkData {
            current_version,
            genesis_validators_root,
        }
        .tree_hash_root()
    }

    /// Compute a domain by applying the given `fork_version`.
    ///
    /// The result is the 4-byte domain type followed by the first 28 bytes of the fork data root.
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let domain_constant = self.get_domain_constant(domain);

        let mut domain = [0; 32];
        domain[0..4].copy_from_slice(&domain_constant.to_le_bytes());
        domain[4..].copy_from_slice(
            &Self::compute_fork_data_root(fork_version, genesis_validators_root)[..28],
        );

        Hash256::from(domain)
    }

    /// Returns a `ChainSpec` compatible with the Ethereum Foundation specification.
    pub fn mainnet() -> Self {
        Self {
            config_name: Some("mainnet".to_string()),
            genesis_fork_version: [0; 4],
            max_deposits_per_block: 16,
            max_deposit_requests_per_payload: 8192,
            max_withdrawal_requests_per_payload: 16,
            max_consolidation_requests_per_payload: 2,
            domain_beacon_proposer: 0,
            domain_beacon_attester: 1,
            domain_randao: 2,
            domain_deposit: 3,
            domain_voluntary_exit: 4,
            domain_selection_proof: 5,
            domain_aggregate_and_proof: 6,
            domain_application_mask: APPLICATION_DOMAIN_BUILDER,
        }
    }

    /// Ethereum Foundation minimal spec, as defined in the eth2.0-specs repo.
    pub fn minimal() -> Self {
        Self {
            config_name: Some("minimal".to_string()),
            genesis_fork_version: [0x00, 0x00, 0x00, 0x01],
            max_deposit_requests_per_payload: 4,
            max_withdrawal_requests_per_payload: 2,
            ..ChainSpec::mainnet()
        }
    }

    /// Loads a YAML `Config` from `path` and applies it for `E`.
    pub fn from_config_file<E: EthSpec>(path: &Path, log: &Logger) -> Result<Self, ConfigError> {
        let result = Config::from_file(path).and_then(|config| config.apply_to_chain_spec::<E>());

        match &result {
            Ok(spec) => debug!(
                log,
                "Loaded chain config";
                "path" => %path.display(),
                "config_name" => spec.config_name.as_deref().unwrap_or("unknown"),
            ),
            Err(e) => warn!(
                log,
                "Unable to load chain config";
                "path" => %path.display(),
                "error" => ?e,
            ),
        }

        result
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Errors produced while loading or applying a `Config`.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The config file could not be opened or read.
    Io(String),
    /// The config file is not valid YAML for a `Config`.
    Yaml(String),
    /// The `PRESET_BASE` does not name the `EthSpec` the config is applied to.
    PresetMismatch { config: String, expected: EthSpecId },
    /// A runtime bound is larger than the type-level bound of the `EthSpec`.
    BoundExceedsPreset {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// YAML chain config, restricted to the fields this crate uses.
///
/// Keys are upper case and integers are quoted, as in the published network configs.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Config {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    pub preset_base: String,

    #[serde(with = "serde_utils::bytes_4_hex")]
    pub genesis_fork_version: [u8; 4],

    #[serde(with = "serde_utils::quoted_u64")]
    pub max_deposits_per_block: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_deposit_requests_per_payload: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_withdrawal_requests_per_payload: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub max_consolidation_requests_per_payload: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_chain_spec::<MainnetEthSpec>(&ChainSpec::mainnet())
    }
}

impl Config {
    pub fn from_chain_spec<E: EthSpec>(spec: &ChainSpec) -> Self {
        Self {
            config_name: spec.config_name.clone(),
            preset_base: E::spec_name().to_string(),
            genesis_fork_version: spec.genesis_fork_version,
            max_deposits_per_block: spec.max_deposits_per_block,
            max_deposit_requests_per_payload: spec.max_deposit_requests_per_payload,
            max_withdrawal_requests_per_payload: spec.max_withdrawal_requests_per_payload,
            max_consolidation_requests_per_payload: spec.max_consolidation_requests_per_payload,
        }
    }

    pub fn from_file(filename: &Path) -> Result<Self, ConfigError> {
        let f = File::open(filename)
            .map_err(|e| ConfigError::Io(format!("Error opening spec at {:?}: {:?}", filename, e)))?;
        serde_yaml::from_reader(f)
            .map_err(|e| ConfigError::Yaml(format!("Error parsing spec at {:?}: {:?}", filename, e)))
    }

    /// Builds a `ChainSpec` for `E` with the values of this config.
    ///
    /// Fails if the config was written for another preset or if any list bound exceeds the
    /// type-level bound of `E`.
    pub fn apply_to_chain_spec<E: EthSpec>(&self) -> Result<ChainSpec, ConfigError> {
        if self.preset_base != E::spec_name().to_string() {
            return Err(ConfigError::PresetMismatch {
                config: self.preset_base.clone(),
                expected: E::spec_name(),
            });
        }

        check_preset_bound(
            "MAX_DEPOSITS_PER_BLOCK",
            self.max_deposits_per_block,
            E::max_deposits_per_block(),
        )?;
        check_preset_bound(
            "MAX_DEPOSIT_REQUESTS_PER_PAYLOAD",
            self.max_deposit_requests_per_payload,
            E::max_deposit_requests_per_payload(),
        )?;
        check_preset_bound(
            "MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD",
            self.max_withdrawal_requests_per_payload,
            E::max_withdrawal_requests_per_payload(),
        )?;
        check_preset_bound(
            "MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD",
            self.max_consolidation_requests_per_payload,
            E::max_consolidation_requests_per_payload(),
        )?;

        Ok(ChainSpec {
            config_name: self.config_name.clone(),
            genesis_fork_version: self.genesis_fork_version,
            max_deposits_per_block: self.max_deposits_per_block,
            max_deposit_requests_per_payload: self.max_deposit_requests_per_payload,
            max_withdrawal_requests_per_payload: self.max_withdrawal_requests_per_payload,
            max_consolidation_requests_per_payload: self.max_consolidation_requests_per_payload,
            ..E::default_spec()
        })
    }
}

fn check_preset_bound(field: &'static str, value: u64, max: usize) -> Result<(), ConfigError> {
    let max = max as u64;
    if value > max {
        Err(ConfigError::BoundExceedsPreset { field, value, max })
    } else {
        Ok(())
    }
}
