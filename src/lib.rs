pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod persist;
pub mod pipeline;
pub mod processor;
pub mod report;

pub use config::Config;
pub use error::{Result, TaskFetchError};
pub use filter::{FilterInputs, Selector, StatusFilter};
pub use models::Task;
pub use pipeline::{run, RunSummary};
