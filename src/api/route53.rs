use super::{client::DnsApiClient, models::*};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{
    Change, ChangeAction as SdkChangeAction, ChangeBatch, HostedZoneConfig, ResourceRecord,
    ResourceRecordSet, RrType,
};
use log::debug;

// Route 53 is a global service; any region resolves to the same endpoint.
const DEFAULT_REGION: &str = "us-east-1";

pub struct Route53Client {
    client: aws_sdk_route53::Client,
}

#[async_trait]
impl DnsApiClient for Route53Client {
    async fn create_hosted_zone(&self, request: &CreateZoneRequest) -> Result<HostedZone> {
        let output = self
            .client
            .create_hosted_zone()
            .name(&request.name)
            .delegation_set_id(&request.delegation_set_id)
            .caller_reference(&request.caller_reference)
            .hosted_zone_config(
                HostedZoneConfig::builder()
                    .comment(&request.comment)
                    .private_zone(request.private_zone)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        let zone = output
            .hosted_zone()
            .ok_or_else(|| anyhow!("Create hosted zone response has no hosted zone"))?;

        let name_servers = output
            .delegation_set()
            .map(|set| set.name_servers().to_vec())
            .unwrap_or_default();

        Ok(HostedZone {
            id: zone.id().to_string(),
            name: zone.name().to_string(),
            name_servers,
        })
    }

    async fn change_record_sets(
        &self,
        zone_id: &str,
        changes: &[RecordChange],
    ) -> Result<ChangeInfo> {
        let changes = changes
            .iter()
            .map(to_sdk_change)
            .collect::<Result<Vec<_>>>()?;

        let batch = ChangeBatch::builder().set_changes(Some(changes)).build()?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        let info = output
            .change_info()
            .ok_or_else(|| anyhow!("Change record sets response has no change info"))?;

        Ok(ChangeInfo {
            id: info.id().to_string(),
            status: info.status().as_str().to_string(),
        })
    }
}

impl Route53Client {
    pub fn new(client: aws_sdk_route53::Client) -> Self {
        Self { client }
    }

    /// Loads the shared AWS config and resolves credentials up front so a
    /// missing or broken credential chain fails before any API call.
    pub async fn from_env() -> Result<Self> {
        let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .ok_or_else(|| anyhow!("Unable to load AWS config: no credentials provider"))?;
        provider
            .provide_credentials()
            .await
            .context("Unable to load AWS credentials")?;

        debug!("Loaded AWS config for region {:?}", config.region());

        Ok(Self::new(aws_sdk_route53::Client::new(&config)))
    }
}

fn to_sdk_change(change: &RecordChange) -> Result<Change> {
    let records = change
        .record_set
        .values
        .iter()
        .map(|value| ResourceRecord::builder().value(value).build())
        .collect::<Result<Vec<_>, _>>()?;

    let record_type = match change.record_set.r#type {
        RecordType::Ns => RrType::Ns,
        RecordType::Soa => RrType::Soa,
    };

    let record_set = ResourceRecordSet::builder()
        .name(&change.record_set.name)
        .r#type(record_type)
        .ttl(change.record_set.ttl)
        .set_resource_records(Some(records))
        .build()?;

    let action = match change.action {
        ChangeAction::Upsert => SdkChangeAction::Upsert,
    };

    Ok(Change::builder()
        .action(action)
        .resource_record_set(record_set)
        .build()?)
}
