//! Tabular data fetcher for published sheets.
//!
//! `fetch_csv` never fails: every attempt error is logged, retried with a
//! linear backoff (`base × attempt`), and an exhausted budget degrades to an
//! empty list. Callers that want to know *why* a list is empty use
//! `fetch_report`, which returns the same rows plus the attempt history.
//! There is no cache: every call goes to the network.

pub mod parse;
pub mod transport;

pub use parse::{Parsed, normalize_header, parse_csv};
pub use transport::{HttpResponse, HttpTransport, Sleeper, ThreadSleeper, Transport};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use transport::check_status;

/// Markers of an HTML page served in place of the CSV export
/// (the sign-in page shown for sheets that are not public).
const HTML_MARKERS: [&str; 3] = ["<!DOCTYPE html>", "<html>", "<script"];

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Total number of attempts.
    pub retries: u32,
    /// Wait after failed attempt `k` is `backoff × k`.
    pub backoff: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            retries: cfg.retries,
            backoff: cfg.backoff(),
        }
    }
}

/// What happened during one `fetch_report` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport<R> {
    pub rows: Vec<R>,
    pub attempts: u32,
    /// One message per failed attempt, in order.
    pub errors: Vec<String>,
    /// Row-level parse warnings of the successful attempt.
    pub warnings: Vec<String>,
}

impl<R> FetchReport<R> {
    pub fn succeeded(&self) -> bool {
        self.errors.len() < self.attempts as usize
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }

    /// `None` when the sheet loaded.
    pub fn failure(&self) -> Option<FetchFailure> {
        if self.succeeded() {
            return None;
        }
        Some(FetchFailure {
            attempts: self.attempts,
            reason: self.last_error().unwrap_or("no attempt was made").to_string(),
        })
    }
}

/// Why a sheet came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub attempts: u32,
    pub reason: String,
}

/// Append the cache-busting `t=<millis>` parameter.
pub fn cache_busted(url: &str, millis: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={millis}")
}

pub fn looks_like_html(body: &str) -> bool {
    HTML_MARKERS.iter().any(|m| body.contains(m))
}

pub struct Fetcher<T: Transport = HttpTransport, S: Sleeper = ThreadSleeper> {
    transport: T,
    sleeper: S,
    options: FetchOptions,
}

impl Fetcher {
    /// Network fetcher configured from the user's settings.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(
            HttpTransport::new(cfg.timeout())?,
            ThreadSleeper,
            FetchOptions::from_config(cfg),
        ))
    }
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    pub fn new(transport: T, sleeper: S, options: FetchOptions) -> Self {
        Self {
            transport,
            sleeper,
            options,
        }
    }

    pub fn options(&self) -> FetchOptions {
        self.options
    }

    /// Rows of the sheet at `url`, or an empty list once the retry budget is spent.
    pub fn fetch_csv<R: DeserializeOwned>(&self, url: &str) -> Vec<R> {
        self.fetch_report(url).rows
    }

    pub fn fetch_csv_with_retries<R: DeserializeOwned>(&self, url: &str, retries: u32) -> Vec<R> {
        self.fetch_report_with_retries(url, retries).rows
    }

    pub fn fetch_report<R: DeserializeOwned>(&self, url: &str) -> FetchReport<R> {
        self.fetch_report_with_retries(url, self.options.retries)
    }

    pub fn fetch_report_with_retries<R: DeserializeOwned>(
        &self,
        url: &str,
        retries: u32,
    ) -> FetchReport<R> {
        let mut report = FetchReport {
            rows: Vec::new(),
            attempts: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        };

        for attempt in 1..=retries {
            report.attempts = attempt;

            match self.attempt::<R>(url) {
                Ok(parsed) => {
                    if !parsed.warnings.is_empty() {
                        debug!(url, warnings = ?parsed.warnings, "CSV parsing issues encountered");
                    }
                    info!(url, rows = parsed.rows.len(), attempt, "sheet fetched");
                    report.rows = parsed.rows;
                    report.warnings = parsed.warnings;
                    return report;
                }
                Err(e) => {
                    warn!(url, attempt, error = %e, "fetch attempt failed");
                    report.errors.push(e.to_string());

                    if attempt < retries {
                        self.sleeper.sleep(self.options.backoff * attempt);
                    }
                }
            }
        }

        report
    }

    fn attempt<R: DeserializeOwned>(&self, url: &str) -> AppResult<Parsed<R>> {
        let busted = cache_busted(url, Utc::now().timestamp_millis());
        let response = self.transport.get(&busted)?;
        check_status(&response)?;

        if looks_like_html(&response.body) {
            return Err(AppError::SourceNotPublic(url.to_string()));
        }

        Ok(parse_csv(&response.body)?)
    }
}
