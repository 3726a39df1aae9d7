//! Candidate availability checker
//!
//! Each candidate moves Pending -> Checking -> {Registered, Available,
//! Error}. Checks run concurrently under a semaphore bound; each candidate
//! produces exactly one result slot, in input order, so results stay
//! attributable. A failed or inconclusive check is an Error, never
//! Available.

use super::{DnsAnswer, DnsResolve, WhoisAnswer, WhoisLookup, WhoisRecord};
use crate::types::{Availability, CheckConfig, CheckMetrics, CheckResult, MetricsSnapshot};
use futures::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Concurrent availability checker over abstract DNS/WHOIS capabilities.
pub struct AvailabilityChecker {
    config: CheckConfig,
    semaphore: Semaphore,
    dns: Arc<dyn DnsResolve>,
    whois: Option<Arc<dyn WhoisLookup>>,
    metrics: Arc<CheckMetrics>,
    cancelled: Arc<AtomicBool>,
}

impl AvailabilityChecker {
    /// Create a checker wired to the real DNS and WHOIS clients.
    pub fn new(config: CheckConfig) -> Self {
        let dns: Arc<dyn DnsResolve> = Arc::new(super::DnsClient::new(config.timeout));

        #[cfg(feature = "whois")]
        let whois: Option<Arc<dyn WhoisLookup>> = if config.enable_whois {
            Some(Arc::new(super::WhoisClient::new(config.timeout)))
        } else {
            None
        };
        #[cfg(not(feature = "whois"))]
        let whois: Option<Arc<dyn WhoisLookup>> = None;

        Self::with_capabilities(config, dns, whois)
    }

    /// Create a checker over caller-supplied capabilities.
    pub fn with_capabilities(
        config: CheckConfig,
        dns: Arc<dyn DnsResolve>,
        whois: Option<Arc<dyn WhoisLookup>>,
    ) -> Self {
        let whois = if config.enable_whois { whois } else { None };
        Self {
            semaphore: Semaphore::new(config.concurrency.max(1)),
            config,
            dns,
            whois,
            metrics: Arc::new(CheckMetrics::new()),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop dispatching new checks. In-flight checks finish; candidates not
    /// yet dispatched complete immediately with an Error result.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Check a single candidate domain.
    ///
    /// Never fails the run: every network problem folds into an Error
    /// status with the cause recorded on the result.
    pub async fn check_candidate(&self, candidate: &str) -> CheckResult {
        if self.is_cancelled() {
            return self.finish(error_result(candidate, "check cancelled"), None);
        }

        let permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                return self.finish(error_result(candidate, "checker shut down"), None);
            }
        };

        if self.is_cancelled() {
            drop(permit);
            return self.finish(error_result(candidate, "check cancelled"), None);
        }

        let start = Instant::now();
        let result = self.classify(candidate).await;
        drop(permit);

        self.finish(result, Some(start))
    }

    async fn classify(&self, candidate: &str) -> CheckResult {
        match self.dns.resolve(candidate).await {
            Ok(DnsAnswer::Records(records)) => {
                tracing::debug!(domain = %candidate, records = records.len(), "DNS resolved");
                CheckResult::new(candidate, Availability::Registered)
            }
            Ok(DnsAnswer::NameExists) => {
                tracing::debug!(domain = %candidate, "name exists without answer records");
                CheckResult::new(candidate, Availability::Registered)
            }
            Ok(DnsAnswer::NxDomain) => match &self.whois {
                // DNS alone says unregistered
                None => CheckResult::new(candidate, Availability::Available),
                Some(whois) => match whois.lookup(candidate).await {
                    Ok(WhoisAnswer::Registered(record)) => {
                        registered_result(candidate, record)
                    }
                    Ok(WhoisAnswer::NotFound) => {
                        CheckResult::new(candidate, Availability::Available)
                    }
                    Ok(WhoisAnswer::Indeterminate) => {
                        error_result(candidate, "WHOIS response inconclusive")
                    }
                    Err(err) => error_result(candidate, err.to_string()),
                },
            },
            Err(dns_err) => {
                // a WHOIS registration is still proof the name is taken,
                // but WHOIS silence cannot upgrade a failed DNS check to
                // Available
                if let Some(whois) = &self.whois {
                    if let Ok(WhoisAnswer::Registered(record)) = whois.lookup(candidate).await {
                        return registered_result(candidate, record);
                    }
                }
                error_result(candidate, dns_err.to_string())
            }
        }
    }

    fn finish(&self, mut result: CheckResult, start: Option<Instant>) -> CheckResult {
        result.check_duration = start.map(|s| s.elapsed());
        self.metrics.record(result.status);

        tracing::debug!(
            domain = %result.domain,
            status = %result.status,
            error = result.error_message.as_deref().unwrap_or(""),
            "candidate check completed"
        );

        result
    }

    /// Check all candidates concurrently, bounded by the configured
    /// concurrency. Returns one result per candidate, in input order.
    pub async fn check_all(&self, candidates: &[String]) -> Vec<CheckResult> {
        let batch_start = Instant::now();
        let futures = candidates.iter().map(|c| self.check_candidate(c));
        let results = join_all(futures).await;

        let snapshot = self.metrics.snapshot();
        tracing::info!(
            candidates = candidates.len(),
            registered = snapshot.registered,
            available = snapshot.available,
            errors = snapshot.errors,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "batch check completed"
        );

        results
    }
}

fn registered_result(candidate: &str, record: WhoisRecord) -> CheckResult {
    let mut result = CheckResult::new(candidate, Availability::Registered);
    result.registrar = record.registrar;
    result.creation_date = record.creation_date;
    result.expiration_date = record.expiration_date;
    result.nameservers = record.nameservers;
    result
}

fn error_result(candidate: &str, message: impl Into<String>) -> CheckResult {
    let mut result = CheckResult::new(candidate, Availability::Error);
    result.error_message = Some(message.into());
    result
}
