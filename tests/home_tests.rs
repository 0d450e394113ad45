use alfahub::config::Sources;
use alfahub::core::home::load;
use alfahub::errors::AppResult;
use alfahub::fetch::{FetchOptions, Fetcher, HttpResponse, Sleeper, Transport};
use alfahub::models::EntityKind;
use std::time::Duration;

mod common;
use common::{EVENTS_CSV, HTML_PAGE};

const EVENTS_URL: &str = "https://sheets.test/events";
const NOTIFICATIONS_URL: &str = "https://sheets.test/notifications";

/// Serves the events sheet; every other URL gets the sign-in page.
struct EventsOnly;

impl Transport for EventsOnly {
    fn get(&self, url: &str) -> AppResult<HttpResponse> {
        let body = if url.starts_with(EVENTS_URL) {
            EVENTS_CSV
        } else {
            HTML_PAGE
        };
        Ok(HttpResponse {
            status: 200,
            reason: "OK".into(),
            body: body.into(),
        })
    }
}

struct NoWait;

impl Sleeper for NoWait {
    fn sleep(&self, _dur: Duration) {}
}

fn sources() -> Sources {
    Sources {
        events: EVENTS_URL.into(),
        notifications: NOTIFICATIONS_URL.into(),
        ..Sources::default()
    }
}

#[test]
fn home_keeps_loaded_sheet_and_reports_the_failed_one() {
    let fetcher = Fetcher::new(
        EventsOnly,
        NoWait,
        FetchOptions {
            retries: 2,
            backoff: Duration::from_millis(1),
        },
    );

    let feed = load(&fetcher, &sources());

    assert_eq!(feed.events.len(), 3);
    assert!(feed.notifications.is_empty());

    assert_eq!(feed.failures.len(), 1);
    let (kind, failure) = &feed.failures[0];
    assert_eq!(*kind, EntityKind::Notifications);
    assert_eq!(failure.attempts, 2);
    assert!(failure.reason.contains(NOTIFICATIONS_URL), "{}", failure.reason);
}
