use crate::errors::ChecksumError;
use serde::Serialize;

/// Checksum verdict for one input number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardValidation {
    pub number: String,
    pub result: Result<bool, ChecksumError>,
}

impl CardValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self.result, Ok(true))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardInformation {
    #[serde(rename = "card_number")]
    pub number: String,
    pub valid: bool,
    pub brand: String,
    pub issuer: String,
}
