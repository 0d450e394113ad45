use super::load_sheet;
use super::show::resolve;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{ics_content, quick_add_url, write_ics};
use crate::db::initialize::open_ready;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::{EntityKind, Event};
use crate::ui::messages;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        index,
        id,
        ics,
        google,
        url,
    } = cmd
    {
        let events: Vec<Event> = load_sheet(cfg, EntityKind::Events, url.as_deref(), None)?;
        let event = resolve(&events, index.as_deref(), id.as_deref(), "event")?;

        if let Some(target) = ics {
            let path = write_ics(event, &expand_tilde(target))?;
            messages::success(format!("Calendar file written to {}", path.display()));

            if let Ok(pool) = open_ready(&cfg.database) {
                ttlog_quiet(&pool.conn, "calendar", &event.title, &path.display().to_string());
            }
        }

        if *google {
            println!("{}", quick_add_url(event)?);
        }

        // no target: the ICS text goes to stdout
        if ics.is_none() && !*google {
            println!("{}", ics_content(event));
        }
    }
    Ok(())
}
