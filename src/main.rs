mod api;
mod config;
mod provision;
#[cfg(test)]
mod tests;

use std::future::Future;

use anyhow::Result;
use api::{DnsApiClient, Route53Client};
use clap::Parser;
use config::Config;
use log::info;
use provision::ZoneProvisioner;

/// Create a Route 53 hosted zone on a reusable delegation set and
/// overwrite its default NS and SOA records.
#[derive(Debug, Parser)]
#[command(name = "zoneup", disable_help_flag = true, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Domain to create the hosted zone for, e.g. example.com
    pub domain: String,
}

/// Validates the domain and the environment, then connects and provisions.
/// `connect` is only invoked once every input has been accepted.
pub(crate) async fn run<L, F, Fut, C>(domain: &str, lookup: L, connect: F) -> Result<String>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<C>>,
    C: DnsApiClient,
{
    config::validate_domain(domain)?;
    let config = Config::from_lookup(lookup)?;

    let client = connect().await?;
    let zone = ZoneProvisioner::new(client)
        .provision(domain, &config)
        .await?;

    info!(
        "Hosted zone {} delegated via {:?}, record change {} is {}",
        zone.zone_id, zone.name_servers, zone.change.id, zone.change.status
    );
    Ok(format!(
        "Successfully created hosted zone for domain: {}",
        domain
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let message = run(&cli.domain, config::env_var, Route53Client::from_env).await?;
    println!("{}", message);
    Ok(())
}
