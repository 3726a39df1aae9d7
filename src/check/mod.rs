//! Concurrent availability checking
//!
//! The checker consumes DNS and WHOIS as abstract capabilities behind the
//! [`DnsResolve`] and [`WhoisLookup`] traits, so tests can substitute stubs
//! and the protocol clients stay swappable.

pub mod checker;
pub mod dns;
#[cfg(feature = "whois")]
pub mod whois;

// Re-export main functionality
pub use checker::AvailabilityChecker;
pub use dns::DnsClient;
#[cfg(feature = "whois")]
pub use whois::WhoisClient;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of resolving a candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsAnswer {
    /// The name resolved; carries the record strings that came back
    Records(Vec<String>),
    /// The name exists in the DNS tree but returned no answer records
    NameExists,
    /// Authoritative no-such-name
    NxDomain,
}

/// Registration details extracted from a WHOIS response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
}

/// Outcome of a WHOIS lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisAnswer {
    /// The registry reports an active registration
    Registered(WhoisRecord),
    /// The registry affirmatively reports no registration
    NotFound,
    /// The response matched neither registration nor absence patterns
    Indeterminate,
}

/// DNS resolution capability: `resolve(name) -> records | NXDOMAIN`.
///
/// Implementations enforce their own per-operation timeout and surface it
/// as an error; a failed resolution is never evidence of availability.
#[async_trait]
pub trait DnsResolve: Send + Sync {
    async fn resolve(&self, fqdn: &str) -> Result<DnsAnswer>;
}

/// WHOIS lookup capability: `lookup(domain) -> record | not-found`.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    async fn lookup(&self, fqdn: &str) -> Result<WhoisAnswer>;
}
