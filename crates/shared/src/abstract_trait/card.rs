use crate::{
    domain::{
        requests::IssueRequest,
        responses::{CardInformation, CardValidation},
    },
    errors::ServiceError,
    model::PrefixTable,
};
use std::sync::Arc;

pub type DynCardService = Arc<dyn CardServiceTrait + Send + Sync>;

pub trait CardServiceTrait {
    fn validate(&self, numbers: &[String]) -> Vec<CardValidation>;
    fn generate(&self, pattern: &str, pick: bool) -> Result<Vec<String>, ServiceError>;
    fn information(
        &self,
        number: &str,
        brands: Option<&PrefixTable>,
        issuers: Option<&PrefixTable>,
    ) -> CardInformation;
    fn issue(
        &self,
        req: &IssueRequest,
        brands: &PrefixTable,
        issuers: &PrefixTable,
    ) -> Result<String, ServiceError>;
}
