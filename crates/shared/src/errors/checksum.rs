use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("Empty number")]
    EmptyInput,

    #[error("Invalid character {character:?} in number at index {index}")]
    InvalidCharacter { character: char, index: usize },
}
