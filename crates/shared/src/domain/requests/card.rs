use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct IssueRequest {
    #[validate(length(min = 1, message = "Card brand is required"))]
    pub brand: String,

    #[validate(length(min = 1, message = "Card issuer is required"))]
    pub issuer: String,
}

impl IssueRequest {
    pub fn new(brand: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            issuer: issuer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_request_requires_names() {
        assert!(IssueRequest::new("Visa", "Kaspi Gold").validate().is_ok());
        assert!(IssueRequest::new("", "Kaspi Gold").validate().is_err());
        assert!(IssueRequest::new("Visa", "").validate().is_err());
    }
}
