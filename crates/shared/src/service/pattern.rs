//! Expansion of trailing-wildcard patterns such as `45320151128303**`.

use crate::{abstract_trait::DigitSource, errors::PatternError, service::luhn};

pub const WILDCARD: char = '*';

/// Caps enumeration at 10^4 candidates.
pub const MAX_WILDCARDS: usize = 4;

/// Every number matching `pattern` that passes the Luhn check, in ascending
/// order.
///
/// A pattern without wildcards is returned as-is when it is valid.
pub fn expand(pattern: &str) -> Result<Vec<String>, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let prefix = pattern.trim_end_matches(WILDCARD);
    let wildcards = pattern.len() - prefix.len();

    if prefix.contains(WILDCARD) {
        return Err(PatternError::MisplacedWildcard);
    }

    if wildcards > MAX_WILDCARDS {
        return Err(PatternError::TooManyWildcards {
            found: wildcards,
            max: MAX_WILDCARDS,
        });
    }

    if let Some(invalid) = prefix.chars().find(|c| !c.is_ascii_digit()) {
        return Err(PatternError::InvalidCharacter(invalid));
    }

    if wildcards == 0 {
        return if luhn::passes(prefix) {
            Ok(vec![prefix.to_string()])
        } else {
            Err(PatternError::NoMatch)
        };
    }

    let span = 10u32.pow(wildcards as u32);
    let matches: Vec<String> = (0..span)
        .map(|suffix| format!("{prefix}{suffix:0width$}", width = wildcards))
        .filter(|candidate| luhn::passes(candidate))
        .collect();

    if matches.is_empty() {
        return Err(PatternError::NoMatch);
    }

    Ok(matches)
}

/// One match of `pattern`, chosen uniformly with `rng`.
pub fn pick<S>(pattern: &str, rng: &mut S) -> Result<String, PatternError>
where
    S: DigitSource + ?Sized,
{
    let mut matches = expand(pattern)?;
    let index = rng.next_index(matches.len());
    Ok(matches.swap_remove(index))
}
