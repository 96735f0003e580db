use mgv_types::ContractName;

use crate::error::RecordReaderError;

/// Source of recorded contract addresses.
///
/// The storage location is bound when the reader is created. Implementations
/// must answer every query: a contract with no record under the requested
/// version is reported as `Ok(None)`, and errors are reserved for storage that
/// cannot be read at all.
pub trait RecordReader {
    /// Returns the address of `contract` in the current deployment
    /// (`version_suffix == None`) or in the historical deployment identified by
    /// the suffix, e.g. `Some("-v2")`.
    fn lookup(
        &self,
        contract: &ContractName,
        version_suffix: Option<&str>,
    ) -> Result<Option<String>, RecordReaderError>;
}

impl<R: RecordReader + ?Sized> RecordReader for &R {
    fn lookup(
        &self,
        contract: &ContractName,
        version_suffix: Option<&str>,
    ) -> Result<Option<String>, RecordReaderError> {
        (**self).lookup(contract, version_suffix)
    }
}
