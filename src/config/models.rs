/// Operator-supplied settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub delegation_set_id: String,

    /// SOA contact mailbox in DNS form, e.g. `hostmaster.example.com`.
    pub soa_email: String,

    /// Nameservers written into the zone's NS record, in the order given.
    pub name_servers: Vec<String>,
}
