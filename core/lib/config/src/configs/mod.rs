// Public re-exports
pub use self::addresses::AddressesConfig;

pub mod addresses;

#[cfg(test)]
pub(crate) mod test_utils;

/// Convenience macro that loads the structure from the `(name, value)` variables given the prefix.
///
/// Evaluates to `Result<_, ConfigError>`; the error names the config that failed to load.
#[macro_export]
macro_rules! envy_load {
    ($name:expr, $prefix:expr, $vars:expr) => {
        envy::prefixed($prefix)
            .from_iter($vars)
            .map_err(|err| $crate::ConfigError::Load {
                name: $name,
                reason: err.to_string(),
            })
    };
}
