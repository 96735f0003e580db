use thiserror::Error;

pub use crate::configs::AddressesConfig;

pub mod configs;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Cannot load config <{name}>: {reason}")]
    Load { name: &'static str, reason: String },
    #[error("Contract list is empty")]
    EmptyContractList,
    #[error("Contract list contains a blank name")]
    BlankContractName,
    #[error("Contract '{0}' is listed more than once")]
    DuplicateContract(String),
    #[error("Version placeholder '{0}' collides with a contract name")]
    VersionVarCollision(String),
    #[error("Maximum number of versions must be at least 1")]
    ZeroMaxVersions,
}
