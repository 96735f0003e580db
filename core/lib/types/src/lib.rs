//! Deployment address types.
//!
//! `mgv_types` contains the data model shared by the address collection and the
//! page rendering crates:
//!
//! - [`ContractName`]: name of a tracked contract, also used as the template placeholder key.
//! - [`AddressRecord`]: addresses of every tracked contract at one point of the deployment
//!   storage; a contract with no record there is *absent*.
//! - [`ResolvedRecord`]: an [`AddressRecord`] where absent addresses were replaced by a
//!   printable marker.
//! - [`VersionEntry`] and [`VersionedHistory`]: the previous deployments, ordered from the
//!   oldest to the newest one.
//!
//! [`ContractName`]: ./contract/struct.ContractName.html
//! [`AddressRecord`]: ./record/struct.AddressRecord.html
//! [`ResolvedRecord`]: ./record/struct.ResolvedRecord.html
//! [`VersionEntry`]: ./history/struct.VersionEntry.html
//! [`VersionedHistory`]: ./history/struct.VersionedHistory.html

#[macro_use]
mod macros;

pub mod contract;
pub mod history;
pub mod record;
pub mod version;

pub use self::contract::{contract_names, ContractName};
pub use self::history::{HistoryError, VersionEntry, VersionedHistory};
pub use self::record::{AddressRecord, ResolvedRecord};
pub use self::version::{VersionId, DEFAULT_VERSION_PREFIX};

/// Text rendered in place of an address that has no record.
pub const DEFAULT_MISSING_MARKER: &str = "none";
