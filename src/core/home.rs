//! Landing view: events and notifications loaded side by side, plus a quote.

use crate::config::Sources;
use crate::fetch::{FetchFailure, FetchReport, Fetcher, Sleeper, Transport};
use crate::models::notification::latest;
use crate::models::{EntityKind, Event, Notification};
use chrono::{Datelike, NaiveDate};
use std::thread;

pub const QUOTES: [&str; 5] = [
    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
    "Your time is limited, so don't waste it living someone else's life.",
    "The only way to do great work is to love what you do.",
    "Believe you can and you're halfway there.",
    "It does not matter how slowly you go as long as you do not stop.",
];

/// Number of notifications shown on the landing view.
pub const LATEST_NOTIFICATIONS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub events: Vec<Event>,
    /// Newest first, at most [`LATEST_NOTIFICATIONS`].
    pub notifications: Vec<Notification>,
    /// Sheets that came back empty because every attempt failed.
    pub failures: Vec<(EntityKind, FetchFailure)>,
}

/// Same quote for the whole day.
pub fn quote_of_the_day(day: NaiveDate) -> &'static str {
    QUOTES[day.ordinal0() as usize % QUOTES.len()]
}

/// Fetch both sheets concurrently. A failing sheet yields an empty section.
pub fn load<T, S>(fetcher: &Fetcher<T, S>, sources: &Sources) -> HomeFeed
where
    T: Transport + Sync,
    S: Sleeper + Sync,
{
    let (events, feed): (FetchReport<Event>, FetchReport<Notification>) = thread::scope(|s| {
        let events = s.spawn(|| fetcher.fetch_report(sources.url_for(EntityKind::Events)));
        let feed = s.spawn(|| fetcher.fetch_report(sources.url_for(EntityKind::Notifications)));
        (
            events.join().unwrap_or_default(),
            feed.join().unwrap_or_default(),
        )
    });

    let failures = [
        (EntityKind::Events, events.failure()),
        (EntityKind::Notifications, feed.failure()),
    ]
    .into_iter()
    .filter_map(|(kind, failure)| failure.map(|f| (kind, f)))
    .collect();

    HomeFeed {
        events: events.rows,
        notifications: latest(&feed.rows, LATEST_NOTIFICATIONS),
        failures,
    }
}
