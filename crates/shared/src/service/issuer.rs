//! Issuing fresh numbers under a fixed prefix.

use crate::{
    abstract_trait::DigitSource, errors::IssueError, service::luhn, utils::mask_card_number,
};
use tracing::{debug, error, warn};

/// Builds a `total_length`-digit number starting with `prefix`, with random
/// middle digits and a computed check digit.
///
/// The check digit is derived so that the result always validates; the
/// attempt loop only guards against a weighting mismatch between this
/// function and [`luhn::is_valid`]. Running out of attempts is therefore a
/// bug, not bad luck.
pub fn issue<S>(
    prefix: &str,
    total_length: usize,
    max_attempts: u32,
    rng: &mut S,
) -> Result<String, IssueError>
where
    S: DigitSource + ?Sized,
{
    if let Some(invalid) = prefix.chars().find(|c| !c.is_ascii_digit()) {
        return Err(IssueError::InvalidPrefix(invalid));
    }

    let free_digits = total_length
        .checked_sub(prefix.len())
        .filter(|free| *free >= 1)
        .ok_or(IssueError::PrefixTooLong {
            prefix_len: prefix.len(),
            total_length,
        })?;

    for attempt in 1..=max_attempts {
        let mut candidate = String::with_capacity(total_length);
        candidate.push_str(prefix);
        candidate.extend((1..free_digits).map(|_| char::from(b'0' + rng.next_digit() % 10)));

        let check = match luhn::check_digit(&candidate) {
            Ok(check) => check,
            Err(e) => {
                warn!("Attempt {attempt}: partial number rejected: {e}");
                continue;
            }
        };
        candidate.push(char::from(b'0' + check));

        if luhn::passes(&candidate) {
            debug!("Issued {} on attempt {attempt}", mask_card_number(&candidate));
            return Ok(candidate);
        }

        warn!(
            "Attempt {attempt}: candidate {} failed verification",
            mask_card_number(&candidate)
        );
    }

    error!("Failed to issue a number for prefix {prefix} after {max_attempts} attempts");
    Err(IssueError::GenerationFailed {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cycle {
        digits: Vec<u8>,
        cursor: usize,
    }

    impl Cycle {
        fn new(digits: &[u8]) -> Self {
            Self {
                digits: digits.to_vec(),
                cursor: 0,
            }
        }
    }

    impl DigitSource for Cycle {
        fn next_digit(&mut self) -> u8 {
            let digit = self.digits[self.cursor % self.digits.len()];
            self.cursor += 1;
            digit
        }

        fn next_index(&mut self, len: usize) -> usize {
            usize::from(self.next_digit()) % len
        }
    }

    #[test]
    fn test_issue_is_deterministic_for_fixed_digits() {
        let mut rng = Cycle::new(&[1, 5, 1, 1, 2, 8, 3, 0, 3, 6]);

        let number = issue("453201", 16, 1, &mut rng).unwrap();

        assert_eq!(number, "4532011511283034");
        assert!(luhn::passes(&number));
    }

    #[test]
    fn test_issue_respects_prefix_and_length() {
        let mut rng = Cycle::new(&[9, 0, 4, 7]);

        for length in [2, 13, 16, 19] {
            let number = issue("4", length, 1, &mut rng).unwrap();
            assert_eq!(number.len(), length);
            assert!(number.starts_with('4'));
            assert!(luhn::passes(&number));
        }
    }

    #[test]
    fn test_prefix_filling_all_but_check_digit() {
        let mut rng = Cycle::new(&[0]);

        assert_eq!(
            issue("453201511283036", 16, 1, &mut rng).unwrap(),
            "4532015112830366"
        );
        assert_eq!(issue("", 1, 1, &mut rng).unwrap(), "0");
    }

    #[test]
    fn test_last_digit_is_the_check_digit_of_the_rest() {
        let mut rng = Cycle::new(&[3, 1, 4, 1, 5, 9, 2, 6, 5]);

        let number = issue("5101", 16, 1, &mut rng).unwrap();
        let (body, last) = number.split_at(15);

        assert_eq!(body, "510131415926531");
        assert_eq!(last, luhn::check_digit(body).unwrap().to_string());
    }

    #[test]
    fn test_prefix_too_long() {
        let mut rng = Cycle::new(&[0]);

        assert_eq!(
            issue("4532015112830366", 16, 1, &mut rng),
            Err(IssueError::PrefixTooLong {
                prefix_len: 16,
                total_length: 16
            })
        );
        assert!(matches!(
            issue("45320151128303661", 16, 1, &mut rng),
            Err(IssueError::PrefixTooLong { .. })
        ));
    }

    #[test]
    fn test_invalid_prefix() {
        let mut rng = Cycle::new(&[0]);

        assert_eq!(
            issue("45x", 16, 1, &mut rng),
            Err(IssueError::InvalidPrefix('x'))
        );
    }

    #[test]
    fn test_zero_attempts() {
        let mut rng = Cycle::new(&[0]);

        assert_eq!(
            issue("4", 16, 0, &mut rng),
            Err(IssueError::GenerationFailed { attempts: 0 })
        );
    }
}
