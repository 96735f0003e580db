//! Collection of the current and historical contract addresses.
//!
//! Historical deployments are numbered from 1 without gaps. The scan walks the
//! versions upwards and stops at the first version where none of the contracts
//! has a record; that version is not part of the history.

// Workspace uses
use mgv_config::AddressesConfig;
use mgv_types::{AddressRecord, ContractName, VersionEntry, VersionId, VersionedHistory};
// Local uses
use crate::{error::CollectError, reader::RecordReader};

/// Parameters of the versions scan.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorOptions {
    /// Prefix of the version suffix, `-v` for `Mangrove-v1`.
    pub version_prefix: String,
    /// Replacement for absent addresses in historical entries.
    pub missing_marker: String,
    /// Maximum number of historical versions accepted before the scan is aborted.
    pub max_versions: u32,
}

impl From<&AddressesConfig> for CollectorOptions {
    fn from(config: &AddressesConfig) -> Self {
        Self {
            version_prefix: config.version_prefix.clone(),
            missing_marker: config.missing_marker.clone(),
            max_versions: config.max_versions,
        }
    }
}

impl Default for CollectorOptions {
    fn default() -> Self {
        (&AddressesConfig::default()).into()
    }
}

/// Addresses found in the deployment storage.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedAddresses {
    /// Current deployment. Absent addresses are kept absent.
    pub current: AddressRecord,
    /// Previous deployments, oldest first.
    pub history: VersionedHistory,
}

#[derive(Debug)]
pub struct VersionedCollector<R> {
    reader: R,
    options: CollectorOptions,
}

impl<R: RecordReader> VersionedCollector<R> {
    pub fn new(reader: R, options: CollectorOptions) -> Self {
        Self { reader, options }
    }

    /// Reads the current addresses and the whole deployment history of `names`.
    pub fn collect(&self, names: &[ContractName]) -> Result<CollectedAddresses, CollectError> {
        let current = self.current(names)?;
        vlog::debug!("Found current addresses: {:?}", current);

        let history = self.history(names)?;
        vlog::debug!("Found old deployment addresses: {:?}", history);

        Ok(CollectedAddresses { current, history })
    }

    /// Addresses of the current deployment.
    pub fn current(&self, names: &[ContractName]) -> Result<AddressRecord, CollectError> {
        self.read_record(names, None)
    }

    /// Scans the historical versions starting from version 1.
    ///
    /// At most `max_versions + 1` versions are queried: a version above the
    /// ceiling that still has addresses fails the scan with
    /// [`CollectError::VersionLimitExceeded`].
    pub fn history(&self, names: &[ContractName]) -> Result<VersionedHistory, CollectError> {
        let mut history = VersionedHistory::new();
        let mut version = VersionId::FIRST;

        loop {
            let suffix = version.suffix(&self.options.version_prefix);
            let record = self.read_record(names, Some(&suffix))?;

            if record.is_all_absent() {
                vlog::debug!("No addresses recorded for version {}, stopping", version);
                break;
            }
            if *version > self.options.max_versions {
                return Err(CollectError::VersionLimitExceeded(self.options.max_versions));
            }

            let absent = record.absent_count();
            if absent > 0 {
                vlog::debug!("{} contract(s) have no address in version {}", absent, version);
            }

            let addresses = record.resolve(&self.options.missing_marker);
            history.push(VersionEntry::new(version, addresses))?;

            version = version
                .next()
                .ok_or(CollectError::VersionLimitExceeded(self.options.max_versions))?;
        }

        Ok(history)
    }

    fn read_record(
        &self,
        names: &[ContractName],
        version_suffix: Option<&str>,
    ) -> Result<AddressRecord, CollectError> {
        let mut record = AddressRecord::new();
        for name in names {
            let address = self.reader.lookup(name, version_suffix)?;
            record.insert(name.clone(), address);
        }
        Ok(record)
    }
}
