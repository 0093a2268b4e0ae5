mod logs;
mod mark;
mod random;

pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::random::RngDigitSource;
