pub mod price;
pub mod query;
