pub mod address;
pub mod query;
pub mod range;
