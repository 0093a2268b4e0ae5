use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Prefix table is not loaded")]
    TableAbsent,
}
