pub mod book;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod perf;
pub mod processor;
pub mod search;
pub mod types;
pub mod workload;

pub use book::PriceList;
pub use config::Config;
pub use error::PriceQueryError;
pub use processor::{PriceQueryProcessor, RunSummary};
pub use search::SearchMode;
