use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_ready;
use crate::db::prefs;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prefs { theme, print } = cmd {
        let pool = open_ready(&cfg.database)?;

        if let Some(t) = theme {
            prefs::set_theme(&pool, *t)?;
            messages::success(format!("Theme set to {}", t.as_str()));
        }

        if *print {
            let all = prefs::all(&pool)?;
            if all.is_empty() {
                println!("No preferences stored.");
            }
            for (key, value) in all {
                println!("{CYAN}{key}{RESET}: {value}");
            }
        } else if theme.is_none() {
            println!("{CYAN}theme{RESET}: {}", prefs::theme(&pool)?.as_str());
        }
    }
    Ok(())
}
