use std::{io, path::PathBuf};

use thiserror::Error;

use mgv_config::ConfigError;
use mgv_deployments::CollectError;
use mgv_templates::TemplateError;

use crate::cli::CliError;

#[derive(Debug, Error)]
pub enum AddressesMdError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot collect deployment addresses: {0}")]
    Collect(#[from] CollectError),
    #[error("Cannot read template {path:?}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot render the addresses page: {0}")]
    Render(#[from] TemplateError),
    #[error("Cannot write the addresses page to {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
