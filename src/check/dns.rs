//! DNS capability backed by trust-dns-resolver

use super::{DnsAnswer, DnsResolve};
use crate::error::{FudgeError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::TokioAsyncResolver;

/// System-independent DNS client with a per-operation timeout.
///
/// Looks up A/AAAA first and falls back to NS, so a registered name that
/// carries only a delegation still classifies as existing.
pub struct DnsClient {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl DnsClient {
    pub fn new(op_timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = op_timeout;
        opts.attempts = 1;

        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
        Self {
            resolver,
            timeout: op_timeout,
        }
    }

    async fn resolve_ns(&self, fqdn: &str) -> Result<DnsAnswer> {
        let lookup = timeout(self.timeout, self.resolver.ns_lookup(fqdn))
            .await
            .map_err(|_| {
                FudgeError::timeout(format!("NS lookup for {}", fqdn), self.timeout.as_secs())
            })?;

        match lookup {
            Ok(ns) => {
                let records: Vec<String> = ns.iter().map(|rdata| rdata.0.to_string()).collect();
                if records.is_empty() {
                    Ok(DnsAnswer::NameExists)
                } else {
                    Ok(DnsAnswer::Records(records))
                }
            }
            Err(err) => Self::classify_error(fqdn, err, self.timeout),
        }
    }

    fn classify_error(fqdn: &str, err: ResolveError, op_timeout: Duration) -> Result<DnsAnswer> {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NXDomain {
                    Ok(DnsAnswer::NxDomain)
                } else {
                    // NODATA: the name exists, there just was no answer of
                    // the queried type
                    Ok(DnsAnswer::NameExists)
                }
            }
            ResolveErrorKind::Timeout => Err(FudgeError::timeout(
                format!("DNS lookup for {}", fqdn),
                op_timeout.as_secs(),
            )),
            _ => Err(FudgeError::dns(fqdn, err.to_string())),
        }
    }
}

#[async_trait]
impl DnsResolve for DnsClient {
    async fn resolve(&self, fqdn: &str) -> Result<DnsAnswer> {
        let lookup = timeout(self.timeout, self.resolver.lookup_ip(fqdn))
            .await
            .map_err(|_| {
                FudgeError::timeout(format!("DNS lookup for {}", fqdn), self.timeout.as_secs())
            })?;

        match lookup {
            Ok(addresses) => {
                let records: Vec<String> =
                    addresses.iter().map(|ip| ip.to_string()).collect();
                if records.is_empty() {
                    self.resolve_ns(fqdn).await
                } else {
                    Ok(DnsAnswer::Records(records))
                }
            }
            Err(err) => match Self::classify_error(fqdn, err, self.timeout)? {
                // no address records is not conclusive; a delegation alone
                // still means the name is taken
                DnsAnswer::NameExists => self.resolve_ns(fqdn).await,
                answer => Ok(answer),
            },
        }
    }
}
