mod myconfig;

pub use self::myconfig::{Config, DEFAULT_CARD_LENGTH, DEFAULT_MAX_ATTEMPTS};
