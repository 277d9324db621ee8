use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateZoneRequest {
    pub name: String,
    pub delegation_set_id: String,
    /// Unique token the provider uses to reject accidental duplicate requests.
    pub caller_reference: String,
    pub comment: String,
    pub private_zone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
    /// Nameservers assigned by the provider, in the order it returned them.
    pub name_servers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Ns,
    Soa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub name: String,
    pub r#type: RecordType,
    pub ttl: i64,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordChange {
    pub action: ChangeAction,
    pub record_set: RecordSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeInfo {
    pub id: String,
    pub status: String,
}
