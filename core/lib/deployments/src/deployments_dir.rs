//! Reader for hardhat-deploy output folders.
//!
//! Every deployed contract has a `<ContractName><suffix>.json` artifact in the
//! network folder, e.g. `deployments/mumbai/Mangrove.json` for the current
//! deployment and `deployments/mumbai/Mangrove-v1.json` for the first one.
//! Only the `address` field of the artifact is used.

// Built-in deps
use std::{fs, io, path::PathBuf};
// External uses
use serde::Deserialize;
// Workspace uses
use mgv_types::ContractName;
// Local uses
use crate::{error::RecordReaderError, reader::RecordReader};

const ARTIFACT_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
struct DeploymentArtifact {
    address: Option<String>,
}

/// Deployment records stored as hardhat artifacts in a single folder.
#[derive(Debug, Clone)]
pub struct DeploymentsDir {
    root: PathBuf,
}

impl DeploymentsDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the artifact for `contract` under `version_suffix`.
    pub fn artifact_path(&self, contract: &ContractName, version_suffix: Option<&str>) -> PathBuf {
        // `set_extension` would clobber dotted contract names, so the file name is built whole.
        self.root.join(format!(
            "{}{}.{}",
            contract,
            version_suffix.unwrap_or_default(),
            ARTIFACT_EXTENSION
        ))
    }
}

impl RecordReader for DeploymentsDir {
    fn lookup(
        &self,
        contract: &ContractName,
        version_suffix: Option<&str>,
    ) -> Result<Option<String>, RecordReaderError> {
        let path = self.artifact_path(contract, version_suffix);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                vlog::trace!("No deployment record at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(RecordReaderError::Io { path, source }),
        };

        let artifact: DeploymentArtifact = serde_json::from_str(&content)
            .map_err(|source| RecordReaderError::Malformed {
                path: path.clone(),
                source,
            })?;

        Ok(artifact.address.filter(|address| !address.trim().is_empty()))
    }
}
