//! Generator of the contract addresses page.
//!
//! Reads the current and previous addresses of the core contracts from a
//! hardhat deployments folder and renders them into a markdown page:
//! the current addresses template once, followed by the previous addresses
//! template once per historical deployment, oldest first.
//!
//! Nothing is written unless the whole page was rendered.

pub mod cli;
pub mod error;

// Built-in deps
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
// External uses
use tempfile::NamedTempFile;
// Workspace uses
use mgv_config::AddressesConfig;
use mgv_deployments::{DeploymentsDir, RecordReader, VersionedCollector};
use mgv_templates::DocumentAssembler;
// Local uses
pub use crate::{
    cli::{Args, Cli, CliError},
    error::AddressesMdError,
};

/// Reads a template file as UTF-8 text.
pub fn load_template(path: &Path) -> Result<String, AddressesMdError> {
    fs::read_to_string(path).map_err(|source| AddressesMdError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the addresses page for the contracts in `config` from the records of `reader`.
pub fn generate_page<R: RecordReader>(
    reader: R,
    config: &AddressesConfig,
    template: &str,
    previous_template: &str,
) -> Result<String, AddressesMdError> {
    let collected = VersionedCollector::new(reader, config.into()).collect(&config.contracts)?;
    vlog::info!(
        "Found {} previous deployment(s) of {} contract(s)",
        collected.history.len(),
        config.contracts.len()
    );

    let current = collected.current.resolve(&config.missing_marker);
    let page = DocumentAssembler::from_config(config)?.render_document(
        &current,
        &collected.history,
        template,
        previous_template,
    )?;

    Ok(page)
}

/// Generates the page described by `args` and writes it to the output path.
pub fn write_addresses_md(args: &Args, config: &AddressesConfig) -> Result<(), AddressesMdError> {
    let reader = DeploymentsDir::new(&args.deployment);
    let template = load_template(&args.template)?;
    let previous_template = load_template(&args.template_previous)?;

    let page = generate_page(reader, config, &template, &previous_template)?;
    vlog::debug!(
        "Constructed the following content, which will be written to file at {}:\n{}",
        args.output.display(),
        page
    );

    write_atomically(&args.output, page.as_bytes()).map_err(|source| {
        AddressesMdError::OutputWrite {
            path: args.output.clone(),
            source,
        }
    })?;
    vlog::info!("Contract addresses written to {}", args.output.display());

    Ok(())
}

/// Writes `content` to a temporary file next to `path` and renames it over `path`,
/// so the destination holds either the previous content or the complete new one.
fn write_atomically(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    Ok(())
}
