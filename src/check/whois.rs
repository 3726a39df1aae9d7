//! WHOIS capability over TCP/43
//!
//! Pure Rust WHOIS (no external `whois` binary). High-usage TLDs map
//! straight to their registry server; anything else goes through IANA
//! referral discovery first.

use super::{WhoisAnswer, WhoisLookup, WhoisRecord};
use crate::error::{FudgeError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

const AVAILABLE_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no entries found",
    "domain not found",
    "domain available",
    "not registered",
    "available for registration",
];

const TAKEN_PATTERNS: &[&str] = &[
    "registrar:",
    "creation date:",
    "created:",
    "registered:",
    "name server:",
    "nameserver:",
    "domain status:",
    "status:",
];

/// WHOIS client with per-operation timeouts.
pub struct WhoisClient {
    timeout: Duration,
}

impl WhoisClient {
    pub fn new(op_timeout: Duration) -> Self {
        Self {
            timeout: op_timeout,
        }
    }

    /// Classify a raw WHOIS response and extract the registration record.
    fn parse_response(&self, output: &str) -> WhoisAnswer {
        let output_lower = output.to_lowercase();

        let is_available = AVAILABLE_PATTERNS
            .iter()
            .any(|pattern| output_lower.contains(pattern));
        let is_taken = TAKEN_PATTERNS
            .iter()
            .any(|pattern| output_lower.contains(pattern));

        if is_available && !is_taken {
            WhoisAnswer::NotFound
        } else if is_taken {
            WhoisAnswer::Registered(WhoisRecord {
                registrar: Self::extract_field(output, &["registrar:", "registrar name:"]),
                creation_date: Self::extract_field(
                    output,
                    &["creation date:", "created:", "registered:"],
                )
                .and_then(|date| Self::parse_date(&date)),
                expiration_date: Self::extract_field(
                    output,
                    &["expiration date:", "expires:", "expiry date:"],
                )
                .and_then(|date| Self::parse_date(&date)),
                nameservers: Self::extract_nameservers(output),
            })
        } else {
            WhoisAnswer::Indeterminate
        }
    }

    fn extract_field(output: &str, patterns: &[&str]) -> Option<String> {
        for pattern in patterns {
            if let Some(line) = output
                .lines()
                .find(|line| line.to_lowercase().trim_start().starts_with(pattern))
            {
                if let Some(value) = line.splitn(2, ':').nth(1) {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
        None
    }

    fn extract_nameservers(output: &str) -> Vec<String> {
        let ns_patterns = ["name server:", "nameserver:", "nserver:"];
        let mut nameservers = Vec::new();

        for line in output.lines() {
            let line_lower = line.to_lowercase();
            for pattern in &ns_patterns {
                if line_lower.trim_start().starts_with(pattern) {
                    if let Some(ns) = line.splitn(2, ':').nth(1) {
                        let ns = ns.trim();
                        if !ns.is_empty() {
                            nameservers.push(ns.to_string());
                        }
                    }
                }
            }
        }

        nameservers
    }

    fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
        let date_str = date_str.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
                return Some(dt.and_utc());
            }
        }

        for format in ["%Y-%m-%d", "%d-%b-%Y", "%d.%m.%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
                return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
            }
        }

        None
    }

    fn server_for_tld(tld: &str) -> Option<&'static str> {
        // Convention-based mapping for high-usage TLDs; unknown TLDs fall
        // back to IANA discovery
        match tld {
            "com" | "net" => Some("whois.verisign-grs.com"),
            "org" => Some("whois.pir.org"),
            "io" => Some("whois.nic.io"),
            "ai" => Some("whois.nic.ai"),
            "co" => Some("whois.nic.co"),
            "me" => Some("whois.nic.me"),
            "uk" => Some("whois.nic.uk"),
            "de" => Some("whois.denic.de"),
            "au" => Some("whois.auda.org.au"),
            "xyz" => Some("whois.nic.xyz"),
            _ => None,
        }
    }

    async fn query(&self, server: &str, query: &str) -> Result<String> {
        let addr = format!("{}:43", server);
        let secs = self.timeout.as_secs();

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| FudgeError::timeout("WHOIS connect", secs))?
            .map_err(|e| FudgeError::network(format!("WHOIS connect to {} failed: {}", addr, e)))?;

        timeout(
            self.timeout,
            stream.write_all(format!("{}\r\n", query).as_bytes()),
        )
        .await
        .map_err(|_| FudgeError::timeout("WHOIS write", secs))?
        .map_err(|e| FudgeError::network(format!("WHOIS write to {} failed: {}", addr, e)))?;

        let mut buf = Vec::new();
        timeout(self.timeout, stream.read_to_end(&mut buf))
            .await
            .map_err(|_| FudgeError::timeout("WHOIS read", secs))?
            .map_err(|e| FudgeError::network(format!("WHOIS read from {} failed: {}", addr, e)))?;

        Ok(String::from_utf8_lossy(&buf).to_string())
    }

    fn parse_iana_referral(iana: &str) -> Option<String> {
        iana.lines()
            .map(str::trim)
            .find_map(|line| {
                let lower = line.to_lowercase();
                if lower.starts_with("whois:") || lower.starts_with("refer:") {
                    Some(line.splitn(2, ':').nth(1)?.trim().to_string())
                } else {
                    None
                }
            })
            .filter(|s| !s.is_empty())
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, fqdn: &str) -> Result<WhoisAnswer> {
        let tld = fqdn
            .rsplit('.')
            .next()
            .filter(|tld| !tld.is_empty())
            .ok_or_else(|| FudgeError::whois(fqdn, "no TLD in domain"))?
            .to_lowercase();

        let raw = match Self::server_for_tld(&tld) {
            Some(server) => self.query(server, fqdn).await?,
            None => {
                let iana = self.query("whois.iana.org", &tld).await?;
                let discovered = Self::parse_iana_referral(&iana).ok_or_else(|| {
                    FudgeError::whois(fqdn, format!("no WHOIS server found for TLD '{}'", tld))
                })?;
                self.query(&discovered, fqdn).await?
            }
        };

        Ok(self.parse_response(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WhoisClient {
        WhoisClient::new(Duration::from_secs(5))
    }

    #[test]
    fn test_parse_registered_response() {
        let raw = r#"
Domain Name: EXAMPLE.COM
Registrar: RESERVED-Internet Assigned Numbers Authority
Creation Date: 1995-08-14T04:00:00Z
Expiration Date: 2026-08-13T04:00:00Z
Name Server: A.IANA-SERVERS.NET
Name Server: B.IANA-SERVERS.NET
"#;
        match client().parse_response(raw) {
            WhoisAnswer::Registered(record) => {
                assert_eq!(
                    record.registrar.as_deref(),
                    Some("RESERVED-Internet Assigned Numbers Authority")
                );
                assert!(record.creation_date.is_some());
                assert!(record.expiration_date.is_some());
                assert_eq!(
                    record.nameservers,
                    vec!["A.IANA-SERVERS.NET", "B.IANA-SERVERS.NET"]
                );
            }
            other => panic!("expected registered, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_not_found_response() {
        let raw = "No match for domain \"B00T.COM\".\n>>> Last update of whois database <<<\n";
        assert_eq!(client().parse_response(raw), WhoisAnswer::NotFound);
    }

    #[test]
    fn test_indeterminate_response_is_not_available() {
        let raw = "% Query rate exceeded, try again later\n";
        assert_eq!(client().parse_response(raw), WhoisAnswer::Indeterminate);
    }

    #[test]
    fn test_taken_patterns_win_over_available_patterns() {
        // a registered response mentioning "not found" in a comment must
        // still classify as registered
        let raw = "Registrar: Example Registrar\nRemark: errors not found in record\n";
        assert!(matches!(
            client().parse_response(raw),
            WhoisAnswer::Registered(_)
        ));
    }

    #[test]
    fn test_iana_referral_parsing() {
        let sample = r#"
domain:       COM
organisation: Verisign Global Registry Services
whois:        whois.verisign-grs.com
status:       ACTIVE
"#;
        assert_eq!(
            WhoisClient::parse_iana_referral(sample).as_deref(),
            Some("whois.verisign-grs.com")
        );

        let refer = "refer: whois.nic.io\n";
        assert_eq!(
            WhoisClient::parse_iana_referral(refer).as_deref(),
            Some("whois.nic.io")
        );
    }

    #[test]
    fn test_date_parsing_formats() {
        assert!(WhoisClient::parse_date("1995-08-14T04:00:00Z").is_some());
        assert!(WhoisClient::parse_date("2023-01-15").is_some());
        assert!(WhoisClient::parse_date("15-Jan-2023").is_some());
        assert!(WhoisClient::parse_date("garbage").is_none());
    }
}
