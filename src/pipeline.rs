use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::filter::StatusFilter;
use crate::persist;
use crate::processor;
use crate::report::Reporter;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub fetched: usize,
    pub kept: usize,
    pub output_path: PathBuf,
}

/// Fetch, filter, report and persist, in that order. Nothing is written to
/// the output file unless fetching and filtering succeeded; console output
/// is best effort and never stops the write.
pub async fn run<W: Write>(
    config: &Config,
    filter: &StatusFilter,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    let fetcher = Fetcher::new(config)?;
    reporter.starting(fetcher.endpoint());

    let body = fetcher.fetch().await?;
    let processed = processor::process(body, filter)?;

    if processed.no_match {
        reporter.no_match();
    }
    reporter.tasks(&processed.tasks);

    persist::write_tasks(&config.output_path, &processed.tasks)?;
    reporter.saved(&config.output_path.display().to_string());

    Ok(RunSummary {
        fetched: processed.fetched,
        kept: processed.tasks.len(),
        output_path: config.output_path.clone(),
    })
}
