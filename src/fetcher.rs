use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::Result;

pub struct Fetcher {
    client: Client,
    endpoint: String,
}

impl Fetcher {
    /// Builds a client bounded by the configured timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, no retry. Non-2xx statuses are transport errors; the body is
    /// returned without any shape checking.
    pub async fn fetch(&self) -> Result<Value> {
        log::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.bytes().await?;
        log::debug!("{} returned {} ({} bytes)", self.endpoint, status, body.len());

        Ok(decode_body(&body))
    }
}

/// Empty bodies decode to `null` and non-JSON bodies to a plain string, so
/// both fail the array check downstream instead of here.
pub fn decode_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
