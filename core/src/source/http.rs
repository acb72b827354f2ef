use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::model::entry::TimeEntry;
use crate::source::traits::EntrySource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the entry array from an HTTP endpoint with a blocking GET.
///
/// The URL usually embeds an access code in the query string, so log lines
/// only ever show the part before the '?'.
pub struct HttpEntrySource {
    url: String,
}

impl HttpEntrySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}

impl EntrySource for HttpEntrySource {
    fn fetch(&self) -> Result<Vec<TimeEntry>> {
        log::debug!("Fetching entries from {}", self.redacted_url());

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .with_context(|| format!("Failed to load entries from {}", self.redacted_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!(
                "Failed to load entries: {} returned {}",
                self.redacted_url(),
                status
            ));
        }

        // The upstream has been seen returning a bare `null` body; treat
        // that as an empty list rather than a parse failure.
        let entries: Option<Vec<TimeEntry>> = response
            .json()
            .context("Failed to parse entries response as JSON")?;
        let entries = entries.unwrap_or_default();

        log::debug!("Fetched {} entries", entries.len());
        Ok(entries)
    }
}
