use crate::api::{models::*, DnsApiClient};
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::{debug, error, info};

pub const NS_TTL: i64 = 60;
pub const SOA_TTL: i64 = 900;

// serial refresh retry expire minimum
const SOA_TIMERS: &str = "1 7200 900 1209600 86400";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedZone {
    pub zone_id: String,
    pub name_servers: Vec<String>,
    pub change: ChangeInfo,
}

pub struct ZoneProvisioner<C> {
    client: C,
}

impl<C: DnsApiClient> ZoneProvisioner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Creates the hosted zone, then overwrites its NS and SOA records in a
    /// single batch. A failed update leaves the zone in place.
    pub async fn provision(&self, domain: &str, config: &Config) -> Result<ProvisionedZone> {
        let request = create_zone_request(domain, config, Utc::now().timestamp());
        info!(
            "Creating hosted zone for {} with delegation set {}",
            domain, config.delegation_set_id
        );

        let zone = self
            .client
            .create_hosted_zone(&request)
            .await
            .with_context(|| format!("Failed to create hosted zone for {}", domain))?;

        info!(
            "Created hosted zone {} ({}) with nameservers {:?}",
            zone.id, zone.name, zone.name_servers
        );

        let primary_ns = zone.name_servers.first().ok_or_else(|| {
            anyhow!(
                "Provider assigned no nameservers to hosted zone {}; NS/SOA records not updated",
                zone.id
            )
        })?;

        let changes = build_change_batch(domain, config, primary_ns);
        debug!("Change batch: {}", serde_json::to_string(&changes)?);

        let change = match self.client.change_record_sets(&zone.id, &changes).await {
            Ok(change) => change,
            Err(e) => {
                error!(
                    "Hosted zone {} was created but its NS/SOA records were not updated",
                    zone.id
                );
                return Err(e.context(format!(
                    "Failed to update NS/SOA records for hosted zone {}",
                    zone.id
                )));
            }
        };

        info!("Submitted record change {} ({})", change.id, change.status);

        Ok(ProvisionedZone {
            zone_id: zone.id,
            name_servers: zone.name_servers,
            change,
        })
    }
}

pub fn create_zone_request(domain: &str, config: &Config, unix_seconds: i64) -> CreateZoneRequest {
    CreateZoneRequest {
        name: domain.to_string(),
        delegation_set_id: config.delegation_set_id.clone(),
        caller_reference: caller_reference(domain, unix_seconds),
        comment: format!("Created by zoneup for {}", domain),
        private_zone: false,
    }
}

pub fn caller_reference(domain: &str, unix_seconds: i64) -> String {
    format!("zoneup-{}-{}", domain, unix_seconds)
}

pub fn soa_value(primary_ns: &str, soa_email: &str) -> String {
    format!("{}. {}. {}", primary_ns, soa_email, SOA_TIMERS)
}

pub fn build_change_batch(domain: &str, config: &Config, primary_ns: &str) -> Vec<RecordChange> {
    vec![
        RecordChange {
            action: ChangeAction::Upsert,
            record_set: RecordSet {
                name: domain.to_string(),
                r#type: RecordType::Ns,
                ttl: NS_TTL,
                values: config.name_servers.clone(),
            },
        },
        RecordChange {
            action: ChangeAction::Upsert,
            record_set: RecordSet {
                name: domain.to_string(),
                r#type: RecordType::Soa,
                ttl: SOA_TTL,
                values: vec![soa_value(primary_ns, &config.soa_email)],
            },
        },
    ]
}
