mod checksum;
mod issue;
mod lookup;
mod pattern;
mod service;
mod validate;

pub use self::checksum::ChecksumError;
pub use self::issue::IssueError;
pub use self::lookup::LookupError;
pub use self::pattern::PatternError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
