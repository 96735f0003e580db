// Built-in deps
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};
// Workspace uses
use mgv_types::ContractName;
// Local uses
use crate::{error::RecordReaderError, reader::RecordReader};

type RecordKey = (String, Option<String>);

/// Record reader backed by a hash map, for tests and dry runs.
///
/// Every query is logged so callers can check which versions were visited.
#[derive(Debug, Default)]
pub struct InMemoryRecordReader {
    records: HashMap<RecordKey, String>,
    failures: HashSet<RecordKey>,
    queries: RefCell<Vec<RecordKey>>,
}

impl InMemoryRecordReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the address of `contract` under `version_suffix` (`None` for the current deployment).
    pub fn insert(
        &mut self,
        contract: &str,
        version_suffix: Option<&str>,
        address: impl Into<String>,
    ) -> &mut Self {
        self.records
            .insert(key(contract, version_suffix), address.into());
        self
    }

    /// Makes every query for `contract` under `version_suffix` fail.
    pub fn fail_on(&mut self, contract: &str, version_suffix: Option<&str>) -> &mut Self {
        self.failures.insert(key(contract, version_suffix));
        self
    }

    /// Queries answered so far, in order.
    pub fn queries(&self) -> Vec<(String, Option<String>)> {
        self.queries.borrow().clone()
    }
}

fn key(contract: &str, version_suffix: Option<&str>) -> RecordKey {
    (contract.to_string(), version_suffix.map(String::from))
}

impl RecordReader for InMemoryRecordReader {
    fn lookup(
        &self,
        contract: &ContractName,
        version_suffix: Option<&str>,
    ) -> Result<Option<String>, RecordReaderError> {
        let key = key(contract.as_str(), version_suffix);
        self.queries.borrow_mut().push(key.clone());

        if self.failures.contains(&key) {
            return Err(RecordReaderError::Unavailable {
                contract: contract.to_string(),
                reason: format!("injected failure for suffix {:?}", version_suffix),
            });
        }

        Ok(self.records.get(&key).cloned())
    }
}
