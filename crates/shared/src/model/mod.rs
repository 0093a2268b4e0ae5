mod prefix_table;

pub use self::prefix_table::PrefixTable;
