pub mod client;
pub mod models;
pub mod route53;

pub use client::DnsApiClient;
pub use route53::Route53Client;
