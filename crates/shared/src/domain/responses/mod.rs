mod card;

pub use self::card::{CardInformation, CardValidation};
