// Built-in uses
use std::collections::HashSet;
// External uses
use serde::Deserialize;
// Workspace uses
use mgv_types::{contract_names, ContractName, DEFAULT_MISSING_MARKER, DEFAULT_VERSION_PREFIX};
// Local uses
use crate::{envy_load, ConfigError};

/// Contracts listed on the addresses page, in placeholder substitution order.
pub const DEFAULT_CONTRACTS: [&str; 4] = ["Mangrove", "MgvCleaner", "MgvReader", "MgvOracle"];
/// Placeholder holding the version id in the previous-addresses template.
pub const DEFAULT_VERSION_VAR: &str = "id";
/// Upper bound on the number of historical versions scanned.
pub const DEFAULT_MAX_VERSIONS: u32 = 1000;

/// Options of the contract addresses page generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AddressesConfig {
    /// Contracts to look up, in the order their placeholders are substituted.
    #[serde(default = "default_contracts")]
    pub contracts: Vec<ContractName>,
    /// Text rendered for a contract that has no address in a deployment.
    #[serde(default = "default_missing_marker")]
    pub missing_marker: String,
    /// Prefix of the historical deployment suffix (`-v` gives `Mangrove-v1`).
    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,
    /// Placeholder name holding the version id in the previous-addresses template.
    #[serde(default = "default_version_var")]
    pub version_var: String,
    /// Safety ceiling for the historical versions scan.
    #[serde(default = "default_max_versions")]
    pub max_versions: u32,
}

fn default_contracts() -> Vec<ContractName> {
    contract_names(DEFAULT_CONTRACTS.iter().copied())
}

fn default_missing_marker() -> String {
    DEFAULT_MISSING_MARKER.to_string()
}

fn default_version_prefix() -> String {
    DEFAULT_VERSION_PREFIX.to_string()
}

fn default_version_var() -> String {
    DEFAULT_VERSION_VAR.to_string()
}

fn default_max_versions() -> u32 {
    DEFAULT_MAX_VERSIONS
}

impl Default for AddressesConfig {
    fn default() -> Self {
        Self {
            contracts: default_contracts(),
            missing_marker: default_missing_marker(),
            version_prefix: default_version_prefix(),
            version_var: default_version_var(),
            max_versions: default_max_versions(),
        }
    }
}

impl AddressesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Loads the config from the given `(name, value)` variables, ignoring
    /// everything without the `ADDRESSES_` prefix.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy_load!("addresses", "ADDRESSES_", vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contracts.is_empty() {
            return Err(ConfigError::EmptyContractList);
        }
        if self.contracts.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::BlankContractName);
        }
        if self.max_versions == 0 {
            return Err(ConfigError::ZeroMaxVersions);
        }

        let mut seen = HashSet::new();
        for name in &self.contracts {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateContract(name.to_string()));
            }
        }
        if seen.contains(self.version_var.as_str()) {
            return Err(ConfigError::VersionVarCollision(self.version_var.clone()));
        }

        Ok(())
    }
}
