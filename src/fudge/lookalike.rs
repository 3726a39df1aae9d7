//! Character lookalike substitution table

/// Built-in character confusion map.
///
/// The table is intentionally asymmetric: `a` maps to `d` but `d` does not
/// map back to `a`. Each entry is a visual-similarity judgment, so do not
/// symmetrize or "complete" it. Replacements may be multi-character
/// (`m` -> `rn`), which lengthens the label.
const BUILTIN: &[(char, &[&str])] = &[
    ('a', &["d"]),
    ('A', &["4"]),
    ('b', &["1o", "lo"]),
    ('B', &["8"]),
    ('d', &["ol", "o1"]),
    ('E', &["3"]),
    ('i', &["1", "l"]),
    ('I', &["1", "l"]),
    ('l', &["1", "i"]),
    ('m', &["rn"]),
    ('o', &["0"]),
    ('O', &["0"]),
    ('Q', &["O"]),
    ('s', &["5"]),
    ('S', &["5"]),
    ('T', &["7"]),
    ('w', &["vv"]),
    ('W', &["VV"]),
    ('z', &["2"]),
    ('Z', &["2"]),
    ('0', &["O"]),
    ('1', &["l"]),
    ('2', &["Z"]),
    ('4', &["A"]),
    ('5', &["S"]),
    ('7', &["T"]),
    ('8', &["B"]),
];

/// Immutable mapping from a character to its visually-confusable
/// replacement strings.
///
/// Constructed once at startup and passed explicitly to the permutation
/// engine; never mutated.
#[derive(Debug, Clone, Copy)]
pub struct LookalikeTable {
    entries: &'static [(char, &'static [&'static str])],
}

impl LookalikeTable {
    /// The built-in table covering letters and digits in both cases.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Replacement strings defined for `c`, or `None` if the character has
    /// no lookalikes.
    pub fn replacements(&self, c: char) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, replacements)| *replacements)
    }

    /// All characters the table defines replacements for, in table order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Number of characters with defined replacements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookalikeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacements_lookup() {
        let table = LookalikeTable::builtin();
        assert_eq!(table.replacements('o'), Some(&["0"][..]));
        assert_eq!(table.replacements('m'), Some(&["rn"][..]));
        assert_eq!(table.replacements('b'), Some(&["1o", "lo"][..]));
        assert_eq!(table.replacements('x'), None);
    }

    #[test]
    fn test_asymmetric_entries_preserved() {
        let table = LookalikeTable::builtin();
        // 'a' confuses with 'd' but 'd' has its own distinct replacements
        assert_eq!(table.replacements('a'), Some(&["d"][..]));
        assert_eq!(table.replacements('d'), Some(&["ol", "o1"][..]));
        // 'Q' -> 'O' exists with no reverse 'O' -> 'Q'
        assert_eq!(table.replacements('Q'), Some(&["O"][..]));
        assert_eq!(table.replacements('O'), Some(&["0"][..]));
    }

    #[test]
    fn test_case_sensitive_keys() {
        let table = LookalikeTable::builtin();
        assert_eq!(table.replacements('w'), Some(&["vv"][..]));
        assert_eq!(table.replacements('W'), Some(&["VV"][..]));
        assert_eq!(table.replacements('T'), Some(&["7"][..]));
        // lowercase 't' has no entry
        assert_eq!(table.replacements('t'), None);
    }

    #[test]
    fn test_digit_keys() {
        let table = LookalikeTable::builtin();
        assert_eq!(table.replacements('0'), Some(&["O"][..]));
        assert_eq!(table.replacements('8'), Some(&["B"][..]));
        assert_eq!(table.replacements('3'), None);
    }
}
