use std::collections::BTreeMap;
use tracing::debug;

/// Mapping from a leading digit sequence to a brand or issuer label.
///
/// Keys are non-empty ASCII digit strings. Several prefixes may share a
/// label. Entries are kept ordered by prefix so iteration, and therefore
/// label-to-prefix resolution, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: BTreeMap<String, String>,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the `name:prefix` line format.
    ///
    /// Blank lines, lines without a colon and lines whose prefix is not a
    /// digit string are skipped. A repeated prefix keeps the last name.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((name, prefix)) = line.split_once(':') else {
                debug!("Skipping line {} without separator", line_no + 1);
                continue;
            };

            if !table.insert(prefix.trim(), name.trim()) {
                debug!("Skipping line {} with invalid prefix", line_no + 1);
            }
        }

        table
    }

    /// Stores `label` under `prefix`. Returns `false` and leaves the table
    /// untouched when `prefix` is not a non-empty digit string.
    pub fn insert(&mut self, prefix: impl Into<String>, label: impl Into<String>) -> bool {
        let prefix = prefix.into();
        if !is_digit_prefix(&prefix) {
            return false;
        }

        self.entries.insert(prefix, label.into());
        true
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(prefix, label)` pairs in ascending prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(prefix, label)| (prefix.as_str(), label.as_str()))
    }
}

impl<P, L> FromIterator<(P, L)> for PrefixTable
where
    P: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (prefix, label) in iter {
            table.insert(prefix, label);
        }
        table
    }
}

fn is_digit_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_prefix_lines() {
        let table = PrefixTable::parse(
            "VISA:4\n\
             MASTERCARD:51\n\
             \n\
               AMEX : 34  \n\
             no separator here\n\
             BROKEN:4a\n\
             EMPTY:\n",
        );

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("4"), Some("VISA"));
        assert_eq!(table.get("51"), Some("MASTERCARD"));
        assert_eq!(table.get("34"), Some("AMEX"));
        assert_eq!(table.get("4a"), None);
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let table = PrefixTable::parse("Bank: Gold:440043");
        assert!(table.is_empty());

        let table = PrefixTable::parse("Kaspi Gold:440043");
        assert_eq!(table.get("440043"), Some("Kaspi Gold"));
    }

    #[test]
    fn test_repeated_prefix_keeps_last_name() {
        let table = PrefixTable::parse("First:4\nSecond:4");
        assert_eq!(table.get("4"), Some("Second"));
    }

    #[test]
    fn test_insert_rejects_non_digit_prefix() {
        let mut table = PrefixTable::new();
        assert!(!table.insert("", "Nothing"));
        assert!(!table.insert("4 5", "Spaced"));
        assert!(table.insert("45", "VisaDebit"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iter_is_ordered_by_prefix() {
        let table: PrefixTable = [("51", "MC"), ("4", "Visa"), ("34", "Amex")]
            .into_iter()
            .collect();

        let prefixes: Vec<&str> = table.iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, vec!["34", "4", "51"]);
    }
}
