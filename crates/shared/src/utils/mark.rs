/// Keeps the first and last four characters, e.g. `4532****0366`.
pub fn mask_card_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();
    if len < 8 {
        "****".to_string()
    } else {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[len - 4..].iter().collect();
        format!("{prefix}****{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4532015112830366"), "4532****0366");
        assert_eq!(mask_card_number("1234567"), "****");
        assert_eq!(mask_card_number("ΑΒΓΔ1234ΕΖΗΘ"), "ΑΒΓΔ****ΕΖΗΘ");
    }
}
