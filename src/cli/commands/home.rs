use super::{remember_latest_notification, report_failure};
use crate::config::Config;
use crate::core::home::{self, quote_of_the_day};
use crate::core::pipeline::{SortOrder, sort_chronologically};
use crate::errors::AppResult;
use crate::fetch::Fetcher;
use crate::models::Event;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::{parse_timestamp, today};
use crate::utils::formatting::wrap_block;
use crate::utils::table::Table;
use chrono::NaiveTime;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let fetcher = Fetcher::from_config(cfg)?;
    let feed = home::load(&fetcher, &cfg.sources);
    for (kind, failure) in &feed.failures {
        report_failure(cfg, *kind, failure);
    }

    println!("\n{GREY}\"{}\"{RESET}\n", wrap_block(quote_of_the_day(today()), 72, "").trim());

    println!("{CYAN}Latest notifications{RESET}\n");
    if feed.notifications.is_empty() {
        println!("Nothing new.\n");
    } else {
        let indexed: Vec<_> = feed.notifications.iter().cloned().enumerate().collect();
        println!("{}", Table::indexed(&indexed).render());
    }

    println!("{CYAN}Upcoming events{RESET}\n");
    let upcoming = upcoming_events(&feed.events);
    if upcoming.is_empty() {
        println!("No upcoming events.");
    } else {
        println!("{}", Table::indexed(&upcoming).render());
    }

    if !feed.notifications.is_empty() {
        remember_latest_notification(cfg, &feed.notifications);
    }
    Ok(())
}

/// Events dated today or later, soonest first, keyed by their list position.
fn upcoming_events(events: &[Event]) -> Vec<(usize, Event)> {
    let start = today().and_time(NaiveTime::MIN);
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| parse_timestamp(&e.date).is_some_and(|d| d >= start))
        .cloned()
        .collect();
    sort_chronologically(&mut upcoming, SortOrder::Asc);

    upcoming
        .into_iter()
        .map(|e| {
            let pos = events.iter().position(|r| *r == e).unwrap_or_default();
            (pos, e)
        })
        .collect()
}
