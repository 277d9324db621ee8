use super::models::*;
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient {
    async fn create_hosted_zone(&self, request: &CreateZoneRequest) -> Result<HostedZone>;

    /// Applies all changes as one atomic batch.
    async fn change_record_sets(
        &self,
        zone_id: &str,
        changes: &[RecordChange],
    ) -> Result<ChangeInfo>;
}
