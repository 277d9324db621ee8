pub mod models;

pub use models::Config;

use thiserror::Error;

pub const ENV_DELEGATION_SET_ID: &str = "ZONEUP_DELEGATION_SET_ID";
pub const ENV_SOA_EMAIL: &str = "ZONEUP_SOA_EMAIL";
pub const ENV_NAMESERVERS: &str = "ZONEUP_NAMESERVERS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("domain cannot be empty")]
    EmptyDomain,

    #[error("invalid domain format: {0}")]
    InvalidDomain(String),

    #[error("{0} environment variable is required")]
    MissingVariable(&'static str),
}

/// Shallow syntax check only; the provider does the real validation.
pub fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::EmptyDomain);
    }
    if !domain.contains('.') {
        return Err(ConfigError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

/// Process environment lookup for `Config::from_lookup`.
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    /// Builds the config from an arbitrary variable source. Variables are
    /// checked in a fixed order and the first missing one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVariable(key))
        };

        let delegation_set_id = required(ENV_DELEGATION_SET_ID)?;
        let soa_email = required(ENV_SOA_EMAIL)?;
        let name_servers = parse_name_servers(&required(ENV_NAMESERVERS)?);

        if name_servers.is_empty() {
            return Err(ConfigError::MissingVariable(ENV_NAMESERVERS));
        }

        Ok(Self {
            delegation_set_id,
            soa_email,
            name_servers,
        })
    }
}

fn parse_name_servers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
        .map(String::from)
        .collect()
}
