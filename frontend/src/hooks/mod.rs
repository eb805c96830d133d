mod use_persistent;

pub use use_persistent::use_persistent;
