pub mod price_list;

pub use price_list::PriceList;
