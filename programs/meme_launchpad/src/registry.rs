//! Deployment registry: where the launchpad program lives on each network.
//!
//! The registry is plain JSON keyed by network id, then by contract name:
//!
//! ```json
//! { "13579": { "MemeLaunchpad": { "address": "CEHHsuVxvA8qtm2sWYrEp3E3nf1mJSvb6pVRhc1ZHQRL" } } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NETWORK_ID, LAUNCHPAD_CONTRACT_NAME};
use crate::error::RegistryError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct ContractEntry {
    address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractDeployment {
    pub address: Pubkey,
}

/// Result of a registry lookup. A missing network or contract is an explicit
/// answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Configured(ContractDeployment),
    NotConfigured,
}

impl Deployment {
    pub fn address(&self) -> Option<Pubkey> {
        match self {
            Deployment::Configured(deployment) => Some(deployment.address),
            Deployment::NotConfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Deployment::Configured(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRegistry {
    networks: BTreeMap<u64, BTreeMap<String, ContractDeployment>>,
}

impl DeploymentRegistry {
    /// Registry holding only the crate's own program id on the default network.
    pub fn with_default_program() -> Self {
        let mut registry = Self::default();
        registry.insert(DEFAULT_NETWORK_ID, LAUNCHPAD_CONTRACT_NAME, crate::ID);
        registry
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: BTreeMap<u64, BTreeMap<String, ContractEntry>> = serde_json::from_str(json)?;
        let mut registry = Self::default();
        for (network_id, contracts) in raw {
            for (contract, entry) in contracts {
                let address = Pubkey::from_str(&entry.address).map_err(|_| {
                    RegistryError::InvalidAddress {
                        network_id,
                        contract: contract.clone(),
                        address: entry.address.clone(),
                    }
                })?;
                registry.insert(network_id, &contract, address);
            }
        }
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, RegistryError> {
        let raw: BTreeMap<u64, BTreeMap<&str, ContractEntry>> = self
            .networks
            .iter()
            .map(|(network_id, contracts)| {
                let entries = contracts
                    .iter()
                    .map(|(name, deployment)| {
                        (
                            name.as_str(),
                            ContractEntry {
                                address: deployment.address.to_string(),
                            },
                        )
                    })
                    .collect();
                (*network_id, entries)
            })
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn insert(&mut self, network_id: u64, contract: &str, address: Pubkey) {
        self.networks
            .entry(network_id)
            .or_default()
            .insert(contract.to_string(), ContractDeployment { address });
    }

    pub fn lookup(&self, network_id: u64, contract: &str) -> Deployment {
        self.networks
            .get(&network_id)
            .and_then(|contracts| contracts.get(contract))
            .map_or(Deployment::NotConfigured, |d| Deployment::Configured(*d))
    }

    pub fn launchpad(&self, network_id: u64) -> Deployment {
        self.lookup(network_id, LAUNCHPAD_CONTRACT_NAME)
    }
}
