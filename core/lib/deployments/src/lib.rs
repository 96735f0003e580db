//! Access to recorded contract deployments.
//!
//! [`RecordReader`] is the seam to the storage: it answers "which address does
//! this contract have under this version suffix". [`DeploymentsDir`] reads
//! hardhat-deploy folders, [`InMemoryRecordReader`] keeps records in memory.
//! [`VersionedCollector`] builds the current record and the version history
//! on top of any reader.
//!
//! [`RecordReader`]: ./reader/trait.RecordReader.html
//! [`DeploymentsDir`]: ./deployments_dir/struct.DeploymentsDir.html
//! [`InMemoryRecordReader`]: ./inmemory_reader/struct.InMemoryRecordReader.html
//! [`VersionedCollector`]: ./collector/struct.VersionedCollector.html

pub mod collector;
pub mod deployments_dir;
pub mod error;
pub mod inmemory_reader;
pub mod reader;

pub use crate::{
    collector::{CollectedAddresses, CollectorOptions, VersionedCollector},
    deployments_dir::DeploymentsDir,
    error::{CollectError, RecordReaderError},
    inmemory_reader::InMemoryRecordReader,
    reader::RecordReader,
};
