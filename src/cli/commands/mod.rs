pub mod calendar;
pub mod config;
pub mod db;
pub mod emergency;
pub mod home;
pub mod init;
pub mod list;
pub mod log;
pub mod notes;
pub mod prefs;
pub mod show;
pub mod watch;

use crate::config::Config;
use crate::db::initialize::open_ready;
use crate::db::log::ttlog_quiet;
use crate::db::prefs::update_last_notified_id;
use crate::errors::AppResult;
use crate::fetch::{FetchFailure, FetchReport, Fetcher};
use crate::models::notification::latest;
use crate::models::{EntityKind, Notification};
use crate::ui::messages;
use serde::de::DeserializeOwned;

/// Fetch one sheet for a command.
///
/// A failed load is not an error: the user is warned, the failure lands in
/// the internal log, and the command carries on with an empty list.
pub(crate) fn load_sheet<R: DeserializeOwned>(
    cfg: &Config,
    kind: EntityKind,
    url: Option<&str>,
    retries: Option<u32>,
) -> AppResult<Vec<R>> {
    let fetcher = Fetcher::from_config(cfg)?;
    let url = url.unwrap_or_else(|| cfg.sources.url_for(kind));

    let report: FetchReport<R> = match retries {
        Some(n) => fetcher.fetch_report_with_retries(url, n),
        None => fetcher.fetch_report(url),
    };

    if let Some(failure) = report.failure() {
        report_failure(cfg, kind, &failure);
    }

    Ok(report.rows)
}

/// Warn about a sheet that could not be loaded and note it in the internal log.
pub(crate) fn report_failure(cfg: &Config, kind: EntityKind, failure: &FetchFailure) {
    messages::warning(format!("Could not load {}: {}", kind.title(), failure.reason));

    let message = format!("{} attempt(s): {}", failure.attempts, failure.reason);
    match open_ready(&cfg.database) {
        Ok(pool) => ttlog_quiet(&pool.conn, "fetch_failed", kind.as_str(), &message),
        Err(e) => tracing::warn!(error = %e, "internal log unavailable"),
    }
}

/// Store the id of the newest notification. Returns true when it differs
/// from the stored one. Bookkeeping never fails the command.
pub(crate) fn remember_latest_notification(cfg: &Config, feed: &[Notification]) -> bool {
    let Some(newest) = latest(feed, 1).into_iter().next() else {
        return false;
    };

    match open_ready(&cfg.database).and_then(|pool| update_last_notified_id(&pool, &newest.id))
    {
        Ok(changed) => changed,
        Err(e) => {
            tracing::warn!(error = %e, "could not update last notified id");
            false
        }
    }
}
