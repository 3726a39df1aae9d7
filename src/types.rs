//! Core types and structures for domain-fudge

use crate::error::{FudgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A parsed target domain: second-level label plus its TLD suffix.
///
/// The label never contains dots; the TLD keeps its leading dot and may be
/// multi-part (e.g. `.co.uk`). `label + tld` reconstructs the original name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    label: String,
    tld: String,
}

impl Domain {
    /// Parse a raw `label.tld...` string into its parts.
    ///
    /// The label is everything before the first dot, case-preserved. Only
    /// second-level names are supported (e.g. `google.com`, `amazon.co.uk`).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (label, rest) = input.split_once('.').ok_or_else(|| {
            FudgeError::validation(format!("domain '{}' has no TLD", input))
        })?;

        if label.is_empty() {
            return Err(FudgeError::validation(format!(
                "domain '{}' has an empty label",
                input
            )));
        }
        if rest.is_empty() {
            return Err(FudgeError::validation(format!(
                "domain '{}' has an empty TLD",
                input
            )));
        }

        Ok(Self {
            label: label.to_string(),
            tld: format!(".{}", rest),
        })
    }

    /// Second-level label, case-preserved.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// TLD suffix with its leading dot.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Reconstruct the fully-qualified name.
    pub fn fqdn(&self) -> String {
        format!("{}{}", self.label, self.tld)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.label, self.tld)
    }
}

/// Candidate availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// DNS resolved or WHOIS reported an active registration
    Registered,
    /// Affirmatively unregistered (NXDOMAIN and no WHOIS record)
    Available,
    /// Inconclusive: timeout, network failure or malformed response
    Error,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Registered => write!(f, "registered"),
            Availability::Available => write!(f, "available"),
            Availability::Error => write!(f, "error"),
        }
    }
}

/// Availability check result for one candidate domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub domain: String,
    pub status: Availability,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Option<Duration>,
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
    pub error_message: Option<String>,
}

impl CheckResult {
    /// Build a bare result with no WHOIS detail.
    pub fn new(domain: impl Into<String>, status: Availability) -> Self {
        Self {
            domain: domain.into(),
            status,
            checked_at: Utc::now(),
            check_duration: None,
            registrar: None,
            creation_date: None,
            expiration_date: None,
            nameservers: Vec::new(),
            error_message: None,
        }
    }
}

/// Configuration for availability checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Maximum checks in flight at once
    pub concurrency: usize,
    /// Per network operation timeout
    pub timeout: Duration,
    /// Consult WHOIS after DNS
    pub enable_whois: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout: Duration::from_secs(10),
            enable_whois: true,
        }
    }
}

/// Run-wide check counters, updated concurrently by in-flight checks
#[derive(Debug, Default)]
pub struct CheckMetrics {
    checked: AtomicU64,
    registered: AtomicU64,
    available: AtomicU64,
    errors: AtomicU64,
}

impl CheckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, status: Availability) {
        self.checked.fetch_add(1, Ordering::Relaxed);
        match status {
            Availability::Registered => self.registered.fetch_add(1, Ordering::Relaxed),
            Availability::Available => self.available.fetch_add(1, Ordering::Relaxed),
            Availability::Error => self.errors.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            checked: self.checked.load(Ordering::Relaxed),
            registered: self.registered.load(Ordering::Relaxed),
            available: self.available.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`CheckMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub checked: u64,
    pub registered: u64,
    pub available: u64,
    pub errors: u64,
}
