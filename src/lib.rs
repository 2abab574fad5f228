pub mod analyzers;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod record;

pub use error::{Result, RollupError};
pub use record::{Dataset, Record};
