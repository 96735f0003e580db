use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Name of a deployed contract, e.g. `Mangrove` or `MgvReader`.
///
/// The name doubles as the placeholder key in the address templates and as
/// the stem of the deployment artifact file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractName(String);

impl ContractName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_deref!(ContractName, str);
impl_display!(ContractName);

impl AsRef<str> for ContractName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContractName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContractName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Convenience helper to build an ordered contract list from string literals.
pub fn contract_names<I, S>(names: I) -> Vec<ContractName>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(ContractName::new).collect()
}
