use crate::{
    abstract_trait::{CardServiceTrait, DynDigitSource},
    config::Config,
    domain::{
        requests::IssueRequest,
        responses::{CardInformation, CardValidation},
    },
    errors::{ServiceError, format_validation_errors},
    model::PrefixTable,
    service::{
        issuer, luhn,
        lookup::{UNKNOWN_LABEL, find_prefix_by_label, label_or_unknown},
        pattern,
    },
    utils::mask_card_number,
};
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};
use validator::Validate;

pub struct CardService {
    card_length: usize,
    max_attempts: u32,
    digits: Mutex<DynDigitSource>,
}

impl CardService {
    pub fn new(config: &Config, digits: DynDigitSource) -> Self {
        Self::with_settings(config.card_length, config.max_attempts, digits)
    }

    pub fn with_settings(card_length: usize, max_attempts: u32, digits: DynDigitSource) -> Self {
        Self {
            card_length,
            max_attempts,
            digits: Mutex::new(digits),
        }
    }

    fn digits(&self) -> Result<MutexGuard<'_, DynDigitSource>, ServiceError> {
        self.digits.lock().map_err(|_| {
            error!("💥 Digit source lock poisoned");
            ServiceError::Internal("Digit source unavailable".into())
        })
    }
}

impl CardServiceTrait for CardService {
    fn validate(&self, numbers: &[String]) -> Vec<CardValidation> {
        info!("🔍 Validating {} number(s)", numbers.len());

        numbers
            .iter()
            .map(|number| {
                let result = luhn::is_valid(number);
                if let Err(e) = &result {
                    warn!("❌ {}: {e}", mask_card_number(number));
                }

                CardValidation {
                    number: number.clone(),
                    result,
                }
            })
            .collect()
    }

    fn generate(&self, pattern: &str, pick: bool) -> Result<Vec<String>, ServiceError> {
        info!("🎲 Expanding pattern {pattern} (pick={pick})");

        let numbers = if pick {
            let mut digits = self.digits()?;
            vec![pattern::pick(pattern, &mut **digits)?]
        } else {
            pattern::expand(pattern)?
        };

        info!("✅ Pattern {pattern} produced {} number(s)", numbers.len());

        Ok(numbers)
    }

    fn information(
        &self,
        number: &str,
        brands: Option<&PrefixTable>,
        issuers: Option<&PrefixTable>,
    ) -> CardInformation {
        let valid = luhn::passes(number);

        let (brand, issuer) = if valid {
            (
                label_or_unknown(number, brands, "Brand"),
                label_or_unknown(number, issuers, "Issuer"),
            )
        } else {
            (UNKNOWN_LABEL, UNKNOWN_LABEL)
        };

        info!(
            "ℹ️ {} valid={valid} brand={brand} issuer={issuer}",
            mask_card_number(number)
        );

        CardInformation {
            number: number.to_string(),
            valid,
            brand: brand.to_string(),
            issuer: issuer.to_string(),
        }
    }

    fn issue(
        &self,
        req: &IssueRequest,
        brands: &PrefixTable,
        issuers: &PrefixTable,
    ) -> Result<String, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Issuing card brand={} issuer={}", req.brand, req.issuer);

        let brand_prefix = find_prefix_by_label(brands, &req.brand).ok_or_else(|| {
            error!("🏷️ Brand {} not found", req.brand);
            ServiceError::BrandNotFound(req.brand.clone())
        })?;

        let issuer_prefix = find_prefix_by_label(issuers, &req.issuer).ok_or_else(|| {
            error!("🏦 Issuer {} not found", req.issuer);
            ServiceError::IssuerNotFound(req.issuer.clone())
        })?;

        if !issuer_prefix.starts_with(brand_prefix) {
            error!("Issuer prefix {issuer_prefix} does not extend brand prefix {brand_prefix}");
            return Err(ServiceError::PrefixMismatch {
                brand_prefix: brand_prefix.to_string(),
                issuer_prefix: issuer_prefix.to_string(),
            });
        }

        let mut digits = self.digits()?;
        let number = issuer::issue(
            issuer_prefix,
            self.card_length,
            self.max_attempts,
            &mut **digits,
        )
        .map_err(|e| {
            error!("💥 Failed to issue card for prefix {issuer_prefix}: {e}");
            ServiceError::from(e)
        })?;

        info!("✅ Card issued successfully: {}", mask_card_number(&number));

        Ok(number)
    }
}
