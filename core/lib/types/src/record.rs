use std::iter::FromIterator;

use crate::ContractName;

/// Contract addresses found at a single point of the deployment storage.
///
/// Entries keep the order in which contracts were queried. An entry with no
/// address means the storage has no record for the contract at that point,
/// which is a normal outcome rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    entries: Vec<(ContractName, Option<String>)>,
}

impl AddressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the address of `name`, replacing a previous entry for the same contract
    /// in place so that the query order is preserved.
    pub fn insert(&mut self, name: ContractName, address: Option<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = address,
            None => self.entries.push((name, address)),
        }
    }

    /// Address of the contract, `None` if it is absent or was never queried.
    pub fn address(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .and_then(|(_, address)| address.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|(existing, _)| existing.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContractName, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, address)| (name, address.as_deref()))
    }

    /// Number of queried contracts with no address.
    pub fn absent_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, address)| address.is_none())
            .count()
    }

    /// Whether no queried contract has an address.
    ///
    /// An empty record counts as all-absent: there is nothing to show for it.
    pub fn is_all_absent(&self) -> bool {
        self.absent_count() == self.entries.len()
    }

    /// Replaces every absent address with `missing_marker`.
    pub fn resolve(self, missing_marker: &str) -> ResolvedRecord {
        let entries = self
            .entries
            .into_iter()
            .map(|(name, address)| {
                let address = address.unwrap_or_else(|| missing_marker.to_string());
                (name, address)
            })
            .collect();

        ResolvedRecord { entries }
    }
}

impl FromIterator<(ContractName, Option<String>)> for AddressRecord {
    fn from_iter<T: IntoIterator<Item = (ContractName, Option<String>)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (name, address) in iter {
            record.insert(name, address);
        }
        record
    }
}

/// Address record ready to be rendered: every contract has a printable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRecord {
    entries: Vec<(ContractName, String)>,
}

impl ResolvedRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContractName, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name, value.as_str()))
    }
}
