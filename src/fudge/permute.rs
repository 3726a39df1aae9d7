//! Label permutation engine
//!
//! Enumerates every non-empty subset of a character's occurrence positions
//! in a label and substitutes each replacement string at all positions of
//! the subset at once. For k occurrences and r replacement strings this
//! yields (2^k - 1) * r labels; cost is exponential in the occurrence
//! count, which is acceptable because real labels are short.

/// Character index positions in `label` equal to `target`.
fn occurrence_sites(label: &str, target: char) -> Vec<usize> {
    label
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == target)
        .map(|(i, _)| i)
        .collect()
}

/// All k-element combinations of `items`, in lexicographic order.
fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }

    let mut result = Vec::new();
    for i in 0..=items.len() - k {
        for rest in combinations(&items[i + 1..], k - 1) {
            let mut combo = Vec::with_capacity(k);
            combo.push(items[i]);
            combo.extend(rest);
            result.push(combo);
        }
    }
    result
}

/// Every non-empty subset of `sites`, smallest subsets first.
fn site_subsets(sites: &[usize]) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    for size in 1..=sites.len() {
        result.extend(combinations(sites, size));
    }
    result
}

/// All substitution variants of `label` for one target character.
///
/// Each output label comes from one (site subset, replacement) pair, with
/// the replacement applied at every site of the subset. Sites are the
/// occurrence positions in the original label; the label is rebuilt
/// character by character so multi-character replacements never shift the
/// remaining sites. Output is not deduplicated here.
pub fn permute_label(label: &str, target: char, replacements: &[&str]) -> Vec<String> {
    let sites = occurrence_sites(label, target);
    if sites.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = label.chars().collect();
    let mut variants = Vec::new();

    for subset in site_subsets(&sites) {
        for replacement in replacements {
            let mut variant = String::with_capacity(label.len() + replacement.len());
            for (i, c) in chars.iter().enumerate() {
                if subset.contains(&i) {
                    variant.push_str(replacement);
                } else {
                    variant.push(*c);
                }
            }
            variants.push(variant);
        }
    }

    variants
}
