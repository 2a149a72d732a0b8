use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TaskFetchError};

pub const DEFAULT_ENDPOINT: &str = "https://mocki.io/v1/e3016b7c-0966-47a8-9bc5-514daacfbd93";
pub const DEFAULT_OUTPUT: &str = "output.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENDPOINT_VAR: &str = "TASKFETCH_URL";
pub const OUTPUT_VAR: &str = "TASKFETCH_OUTPUT";
pub const TIMEOUT_VAR: &str = "TASKFETCH_TIMEOUT_MS";

/// Everything a run needs to know about where to read from and write to.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Builds a config from defaults overridden by whatever `lookup` returns.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(endpoint) = value_of(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(output) = value_of(OUTPUT_VAR) {
            config.output_path = PathBuf::from(output);
        }
        if let Some(timeout) = value_of(TIMEOUT_VAR) {
            config.timeout = parse_timeout_ms(&timeout)?;
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(TaskFetchError::Config(format!(
            "{TIMEOUT_VAR} deve ser maior que zero"
        ))),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(_) => Err(TaskFetchError::Config(format!(
            "{TIMEOUT_VAR} inválido: '{raw}'"
        ))),
    }
}
