use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Asterisks must be at the end")]
    MisplacedWildcard,

    #[error("Up to {max} asterisks allowed, got {found}")]
    TooManyWildcards { found: usize, max: usize },

    #[error("Invalid character {0:?} in pattern")]
    InvalidCharacter(char),

    #[error("No valid numbers found")]
    NoMatch,
}
