//! Integration tests for domain-fudge

use async_trait::async_trait;
use domain_fudge::{
    generate_candidates, resolve_tlds, Availability, AvailabilityChecker, CheckConfig,
    DnsAnswer, DnsResolve, Domain, FudgeError, LookalikeTable, TldSelection, WhoisAnswer,
    WhoisLookup, WhoisRecord,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

struct NxDomainDns;

#[async_trait]
impl DnsResolve for NxDomainDns {
    async fn resolve(&self, _fqdn: &str) -> domain_fudge::Result<DnsAnswer> {
        Ok(DnsAnswer::NxDomain)
    }
}

struct TimeoutDns;

#[async_trait]
impl DnsResolve for TimeoutDns {
    async fn resolve(&self, fqdn: &str) -> domain_fudge::Result<DnsAnswer> {
        Err(FudgeError::timeout(format!("DNS lookup for {}", fqdn), 10))
    }
}

struct RegisteredWhois;

#[async_trait]
impl WhoisLookup for RegisteredWhois {
    async fn lookup(&self, _fqdn: &str) -> domain_fudge::Result<WhoisAnswer> {
        Ok(WhoisAnswer::Registered(WhoisRecord {
            registrar: Some("Example Registrar".to_string()),
            ..Default::default()
        }))
    }
}

fn generate(input: &str, selection: &TldSelection) -> Vec<String> {
    let domain = Domain::parse(input).unwrap();
    let table = LookalikeTable::builtin();
    let tlds = resolve_tlds(domain.tld(), selection);
    generate_candidates(&domain, &table, &tlds)
}

#[tokio::test]
async fn test_end_to_end_nxdomain_means_all_available() {
    // original TLD only, WHOIS disabled, DNS stub returns NXDOMAIN for
    // everything: every candidate must classify Available
    let candidates = generate("example.com", &TldSelection::default());
    assert!(!candidates.is_empty());

    let config = CheckConfig {
        concurrency: 8,
        timeout: Duration::from_secs(5),
        enable_whois: false,
    };
    let checker = AvailabilityChecker::with_capabilities(config, Arc::new(NxDomainDns), None);
    let results = checker.check_all(&candidates).await;

    assert_eq!(results.len(), candidates.len());
    for result in &results {
        assert_eq!(
            result.status,
            Availability::Available,
            "candidate {} should be available",
            result.domain
        );
    }

    let metrics = checker.metrics();
    assert_eq!(metrics.available, candidates.len() as u64);
    assert_eq!(metrics.registered, 0);
    assert_eq!(metrics.errors, 0);
}

#[tokio::test]
async fn test_end_to_end_timeouts_are_errors_not_available() {
    let candidates = generate("boot.com", &TldSelection::default());

    let config = CheckConfig {
        concurrency: 4,
        timeout: Duration::from_secs(5),
        enable_whois: false,
    };
    let checker = AvailabilityChecker::with_capabilities(config, Arc::new(TimeoutDns), None);
    let results = checker.check_all(&candidates).await;

    for result in &results {
        assert_eq!(result.status, Availability::Error);
        assert!(result.error_message.is_some());
    }
    assert_eq!(checker.metrics().available, 0);
}

#[tokio::test]
async fn test_end_to_end_whois_registration_wins_over_nxdomain() {
    let candidates = generate("boot.com", &TldSelection::default());

    let config = CheckConfig {
        concurrency: 4,
        timeout: Duration::from_secs(5),
        enable_whois: true,
    };
    let checker = AvailabilityChecker::with_capabilities(
        config,
        Arc::new(NxDomainDns),
        Some(Arc::new(RegisteredWhois)),
    );
    let results = checker.check_all(&candidates).await;

    for result in &results {
        assert_eq!(result.status, Availability::Registered);
        assert_eq!(result.registrar.as_deref(), Some("Example Registrar"));
    }
}

#[test]
fn test_generation_is_deduplicated_and_excludes_original() {
    let selection = TldSelection {
        original_set: true,
        custom: Some("io".to_string()),
        ..Default::default()
    };
    let candidates = generate("boot.com", &selection);

    let unique: HashSet<_> = candidates.iter().collect();
    assert_eq!(unique.len(), candidates.len());
    assert!(!candidates.contains(&"boot.com".to_string()));

    // same label under the other TLD categories is a candidate
    assert!(candidates.contains(&"b0ot.net".to_string()));
    assert!(candidates.contains(&"b0ot.io".to_string()));
}

#[test]
fn test_generation_with_restricted_country_codes() {
    let selection = TldSelection {
        country_codes: true,
        ..Default::default()
    };
    let candidates = generate("boot.com", &selection);

    // restricted codes appear only through their compound suffixes
    assert!(candidates.contains(&"b0ot.com.au".to_string()));
    assert!(!candidates.iter().any(|c| c.ends_with(".au")
        && !c.ends_with(".com.au")
        && !c.ends_with(".net.au")
        && !c.ends_with(".org.au")
        && !c.ends_with(".asn.au")
        && !c.ends_with(".id.au")));
}

#[test]
fn test_multi_part_tld_round_trip() {
    let domain = Domain::parse("amazon.co.uk").unwrap();
    assert_eq!(domain.label(), "amazon");
    assert_eq!(domain.tld(), ".co.uk");

    let candidates = generate("amazon.co.uk", &TldSelection::default());
    // 'a' -> 'd' substitution at both sites, original TLD preserved
    assert!(candidates.contains(&"dmazon.co.uk".to_string()));
    assert!(candidates.contains(&"amdzon.co.uk".to_string()));
    assert!(candidates.contains(&"dmdzon.co.uk".to_string()));
}
