mod card;
mod random;

pub use self::card::{CardServiceTrait, DynCardService};
pub use self::random::{DigitSource, DynDigitSource};
