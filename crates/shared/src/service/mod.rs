mod card;
pub mod issuer;
pub mod lookup;
pub mod luhn;
pub mod pattern;

pub use self::card::CardService;
