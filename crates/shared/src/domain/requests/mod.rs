mod card;

pub use self::card::IssueRequest;
