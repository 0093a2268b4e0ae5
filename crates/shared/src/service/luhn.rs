//! Luhn (mod 10, alternating doubling) checksum.

use crate::errors::ChecksumError;

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Weighted digit sum of `number`, scanning from the rightmost digit.
///
/// Digits at odd distance from the end are doubled, minus 9 when the
/// doubled value exceeds 9. Spaces and tabs are skipped without advancing
/// the position.
pub fn checksum(number: &str) -> Result<u64, ChecksumError> {
    let mut sum = 0u64;
    let mut position = 0usize;

    for (index, character) in number.char_indices().rev() {
        if is_separator(character) {
            continue;
        }

        let Some(digit) = character.to_digit(10) else {
            return Err(ChecksumError::InvalidCharacter { character, index });
        };

        let weighted = if position % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };

        sum += u64::from(weighted);
        position += 1;
    }

    if position == 0 {
        return Err(ChecksumError::EmptyInput);
    }

    Ok(sum)
}

/// Checks whether `number` carries a correct Luhn check digit.
pub fn is_valid(number: &str) -> Result<bool, ChecksumError> {
    Ok(checksum(number)? % 10 == 0)
}

/// Same as [`is_valid`] but treats malformed input as invalid.
pub fn passes(number: &str) -> bool {
    matches!(is_valid(number), Ok(true))
}

/// Digit that, appended to `partial`, yields a valid number.
pub fn check_digit(partial: &str) -> Result<u8, ChecksumError> {
    let sum = checksum(&format!("{partial}0"))?;
    Ok(((10 - sum % 10) % 10) as u8)
}
