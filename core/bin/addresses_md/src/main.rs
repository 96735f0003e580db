//! Writes the markdown page listing current and previous addresses of the core contracts.
//!
//! ```text
//! write_addresses_md --deployment ../deployments/mumbai \
//!     --template ./contract-addresses-template.md \
//!     --templatePrevious ./contract-previous-addresses-template.md \
//!     --output ../contract-addresses.md [--debug]
//! ```
//!
//! The set of contracts and the page details are taken from the `ADDRESSES_*`
//! environment variables, see `mgv_config::AddressesConfig`.

use mgv_addresses_md::{write_addresses_md, AddressesMdError, Cli, CliError};
use mgv_config::AddressesConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_iter_safe(std::env::args_os()).unwrap_or_else(|err| err.exit());
    vlog::init(cli.opt.debug);

    for arg in &cli.ignored {
        vlog::warn!("Unexpected argument '{}' - ignoring.", arg);
    }
    vlog::debug!("Args: {:?}", cli.opt);

    let args = cli.opt.into_args().map_err(|err| {
        let CliError::MissingArguments(names) = &err;
        for name in names {
            vlog::error!("Missing argument {}.", name);
        }
        AddressesMdError::from(err)
    })?;

    let config = AddressesConfig::from_env().map_err(AddressesMdError::from)?;
    vlog::debug!("Config: {:?}", config);

    write_addresses_md(&args, &config)?;

    Ok(())
}
