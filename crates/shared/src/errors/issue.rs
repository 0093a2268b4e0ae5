use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    #[error("Prefix of length {prefix_len} leaves no room for a check digit in a {total_length}-digit number")]
    PrefixTooLong {
        prefix_len: usize,
        total_length: usize,
    },

    #[error("Invalid character {0:?} in prefix")]
    InvalidPrefix(char),

    #[error("Failed to generate valid card after {attempts} attempts")]
    GenerationFailed { attempts: u32 },
}
