//! Candidate generation
//!
//! Composes the permutation engine with the resolved TLD set to produce the
//! final list of fully-qualified candidate domains. Pure computation, no
//! I/O; runs to completion before any checking starts.

use super::lookalike::LookalikeTable;
use super::permute::permute_label;
use crate::types::Domain;
use std::collections::HashSet;

/// Generate every fudged candidate for `domain` across `tlds`.
///
/// The label and its uppercased form are permuted as two independent base
/// labels across every character in the table. Output is deduplicated by
/// exact string equality in first-seen order, and the unmodified original
/// name is never emitted: only variants are worth checking.
pub fn generate_candidates(
    domain: &Domain,
    table: &LookalikeTable,
    tlds: &[String],
) -> Vec<String> {
    let original = domain.fqdn();
    let upper = domain.label().to_uppercase();

    let mut base_labels = vec![domain.label().to_string()];
    if upper != domain.label() {
        base_labels.push(upper);
    }

    let mut variant_labels = Vec::new();
    for base in &base_labels {
        for c in table.chars() {
            if let Some(replacements) = table.replacements(c) {
                variant_labels.extend(permute_label(base, c, replacements));
            }
        }
    }

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for label in &variant_labels {
        for tld in tlds {
            let candidate = format!("{}{}", label, tld);
            if candidate == original {
                continue;
            }
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
    }

    tracing::debug!(
        domain = %original,
        labels = variant_labels.len(),
        tlds = tlds.len(),
        candidates = candidates.len(),
        "candidate generation complete"
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates_for(input: &str, tlds: &[&str]) -> Vec<String> {
        let domain = Domain::parse(input).unwrap();
        let table = LookalikeTable::builtin();
        let tlds: Vec<String> = tlds.iter().map(|t| t.to_string()).collect();
        generate_candidates(&domain, &table, &tlds)
    }

    #[test]
    fn test_simple_label_variants() {
        let candidates = candidates_for("boot.com", &[".com"]);
        for expected in ["b0ot.com", "bo0t.com", "b00t.com"] {
            assert!(candidates.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_uppercase_base_label_is_permuted_too() {
        let candidates = candidates_for("boot.com", &[".com"]);
        // uppercase pass: 'B' -> '8' and 'O' -> '0'
        assert!(candidates.contains(&"8OOT.com".to_string()));
        assert!(candidates.contains(&"B0OT.com".to_string()));
        assert!(candidates.contains(&"B00T.com".to_string()));
    }

    #[test]
    fn test_original_domain_never_emitted() {
        let candidates = candidates_for("boot.com", &[".com", ".net"]);
        assert!(!candidates.contains(&"boot.com".to_string()));
        // the same label under a different TLD is a legitimate candidate
        assert!(candidates.contains(&"b0ot.net".to_string()));
    }

    #[test]
    fn test_no_duplicate_candidates() {
        // 'i' and 'I' both map to ["1", "l"], so the upper and lower passes
        // collide; dedup must collapse them
        let candidates = candidates_for("iii.com", &[".com", ".com", ".net"]);
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn test_label_without_lookalike_characters() {
        // none of 'x', 'y', 'X', 'Y' have table entries
        let candidates = candidates_for("xyx.com", &[".com", ".net"]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_candidates_cross_all_tlds() {
        let candidates = candidates_for("mail.com", &[".com", ".org"]);
        assert!(candidates.contains(&"rnail.com".to_string()));
        assert!(candidates.contains(&"rnail.org".to_string()));
        assert!(candidates.contains(&"ma1l.org".to_string()));
    }

    #[test]
    fn test_first_seen_order_is_deterministic() {
        let a = candidates_for("boot.com", &[".com", ".net"]);
        let b = candidates_for("boot.com", &[".com", ".net"]);
        assert_eq!(a, b);
    }
}
