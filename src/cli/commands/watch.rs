use super::{load_sheet, remember_latest_notification};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::poller::Poller;
use crate::errors::AppResult;
use crate::models::notification::latest;
use crate::models::{EntityKind, Notification};
use crate::ui::messages;
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;
use chrono::Local;
use std::time::Duration;

const SHOWN: usize = 3;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        ticks,
        interval,
        url,
    } = cmd
    {
        let interval = interval
            .map(|s| Duration::from_secs(s.max(1)))
            .unwrap_or_else(|| cfg.poll_interval());

        refresh(cfg, url.as_deref())?;

        if *ticks == Some(0) {
            return Ok(());
        }

        messages::info(format!(
            "Refreshing every {}s, Ctrl-C to stop",
            interval.as_secs()
        ));

        // fetching happens here; ticks missed during a slow load collapse
        // into a single pending refresh
        let (poller, rx) = Poller::signals(interval);

        let mut done = 0u32;
        while rx.recv().is_ok() {
            refresh(cfg, url.as_deref())?;
            done += 1;
            if ticks.is_some_and(|n| done >= n) {
                break;
            }
        }

        poller.stop();
    }
    Ok(())
}

fn refresh(cfg: &Config, url: Option<&str>) -> AppResult<()> {
    let feed: Vec<Notification> = load_sheet(cfg, EntityKind::Notifications, url, None)?;
    let stamp = Local::now().format("%H:%M:%S");

    if feed.is_empty() {
        println!("{GREY}[{stamp}]{RESET} No notifications.");
        return Ok(());
    }

    let newest = latest(&feed, SHOWN);
    if remember_latest_notification(cfg, &feed)
        && let Some(top) = newest.first()
    {
        messages::success(format!("New notification: {}", top.title));
    }

    println!("{GREY}[{stamp}]{RESET} {} notifications\n", feed.len());
    let indexed: Vec<(usize, Notification)> = newest.into_iter().enumerate().collect();
    print!("{}", Table::indexed(&indexed).render());
    println!();
    Ok(())
}
