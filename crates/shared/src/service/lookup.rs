use crate::{errors::LookupError, model::PrefixTable};
use tracing::warn;

/// Label reported when no prefix matches.
pub const UNKNOWN_LABEL: &str = "-";

/// Label of the longest prefix in `table` that `number` starts with.
///
/// Linear scan; prefix tables are a few hundred entries at most.
pub fn lookup<'a>(number: &str, table: Option<&'a PrefixTable>) -> Result<&'a str, LookupError> {
    let table = table.ok_or(LookupError::TableAbsent)?;

    let label = table
        .iter()
        .filter(|(prefix, _)| number.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, label)| label)
        .unwrap_or(UNKNOWN_LABEL);

    Ok(label)
}

/// Like [`lookup`], but an absent table is logged and reported as
/// [`UNKNOWN_LABEL`].
pub fn label_or_unknown<'a>(number: &str, table: Option<&'a PrefixTable>, kind: &str) -> &'a str {
    match lookup(number, table) {
        Ok(label) => label,
        Err(e) => {
            warn!("{kind} lookup skipped: {e}");
            UNKNOWN_LABEL
        }
    }
}

/// First prefix, in ascending prefix order, whose label equals `label`
/// ignoring case.
pub fn find_prefix_by_label<'a>(table: &'a PrefixTable, label: &str) -> Option<&'a str> {
    let wanted = label.to_lowercase();

    table
        .iter()
        .find(|(_, candidate)| candidate.to_lowercase() == wanted)
        .map(|(prefix, _)| prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands() -> PrefixTable {
        [("4", "Visa"), ("45", "VisaDebit"), ("51", "MasterCard")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = brands();

        assert_eq!(lookup("4500123412341234", Some(&table)), Ok("VisaDebit"));
        assert_eq!(lookup("4111111111111111", Some(&table)), Ok("Visa"));
        assert_eq!(lookup("5105105105105100", Some(&table)), Ok("MasterCard"));
    }

    #[test]
    fn test_no_match_is_unknown() {
        let table = brands();

        assert_eq!(lookup("6011000990139424", Some(&table)), Ok(UNKNOWN_LABEL));
        assert_eq!(lookup("", Some(&table)), Ok(UNKNOWN_LABEL));
        assert_eq!(lookup("4", Some(&PrefixTable::new())), Ok(UNKNOWN_LABEL));
    }

    #[test]
    fn test_absent_table() {
        assert_eq!(lookup("4111", None), Err(LookupError::TableAbsent));
        assert_eq!(label_or_unknown("4111", None, "Brand"), UNKNOWN_LABEL);
    }

    #[test]
    fn test_find_prefix_ignores_case() {
        let table = brands();

        assert_eq!(find_prefix_by_label(&table, "visa"), Some("4"));
        assert_eq!(find_prefix_by_label(&table, "VISADEBIT"), Some("45"));
        assert_eq!(find_prefix_by_label(&table, "Amex"), None);
    }

    #[test]
    fn test_find_prefix_shared_label_takes_smallest_prefix() {
        let table: PrefixTable = [("5", "MasterCard"), ("22", "MasterCard"), ("51", "MasterCard")]
            .into_iter()
            .collect();

        assert_eq!(find_prefix_by_label(&table, "mastercard"), Some("22"));
    }
}
