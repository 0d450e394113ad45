use crate::errors::{AppError, AppResult};
use crate::models::entity::EntityKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Published sheet export URLs, one per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub notifications: String,
    pub clubs: String,
    pub events: String,
    pub pg_rooms: String,
    pub duty_leaves: String,
    pub notes: String,
    pub free_courses: String,
    pub deals: String,
    pub ai_tools: String,
    pub youtube_channels: String,
}

const SHEET_BASE: &str = "https://docs.google.com/spreadsheets/d/e";

fn published(key: &str) -> String {
    format!("{SHEET_BASE}/{key}/pub?output=csv")
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            notifications: published(
                "2PACX-1vQUDTneEKYYwycyff6lwX030bKrLmjei5oLoSNps9Bnq0xYPvHvdscfduptfGDGVTxVVrAVoCHmYwjm",
            ),
            clubs: published(
                "2PACX-1vTutrPFWy-tbOY7w9_8w9Hjtal2UcXdpzYgS6saSKkfz4CPS-OF0Jsq7teJwM2_EoY2oO4zL84T2Ume",
            ),
            events: published(
                "2PACX-1vRpixLbNxivDdemmaapBXvAQ1rJ4_XfN3itfGMJrfNiYkkUru0lVaVjBMnRHyTC0GS_cVF___lSZxOM",
            ),
            pg_rooms: published(
                "2PACX-1vQvuBuVYGplUPi_Oub70On4_55OJ6vedmvfyE-hN-4hreCx9lb4R9Q77QgYjnLg3DodYqIKoHHxhMY8",
            ),
            duty_leaves: published(
                "2PACX-1vReLG7nneziWyiN6tDs8oiM0Xtu1IvjyviHHmfC2y9XlfmW9cbnAPKOATQL7U4o04-ZuvEbh9Smnvqh",
            ),
            notes: published(
                "2PACX-1vR2vMWiKIqgwb7Z3gtZpruwqtYsIuTSXjb1Cvx9V3-cAcwbfEjt61OoWCXnHqFVrz24BvgCLKcwc0a0",
            ),
            free_courses: published(
                "2PACX-1vS_e7tpBP1Nmcd16P9wilFj0x2hjh6viw1LgSFEnkgW1Ly2JYmEUa-k9hSVPMJu83kIBbqwlT4YHwMh",
            ),
            deals: published(
                "2PACX-1vTmJHK5mRkJu7i9P5_TPm6EYlGeHPh0D5z21QDeMh2RYMYlUshQI9k2V7L9OfoVhlfAQMl52FhwunSt",
            ),
            ai_tools: published(
                "2PACX-1vSIVrt0-WsX8hRY1OGAZtcWzrTNJ97HIk3Bma4TGg3nbc8FDvsDsu4GPjPasSv8aPVsDiNBFoXC0xqU",
            ),
            youtube_channels: published(
                "2PACX-1vQ5WzZpEEOYwRthpFinPILGKEGP5_rx-SGK2jmqZ1CuGQNFCrS28YdVkccPGQ331do7A05CEWe0E9ps",
            ),
        }
    }
}

impl Sources {
    pub fn url_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Notifications => &self.notifications,
            EntityKind::Clubs => &self.clubs,
            EntityKind::Events => &self.events,
            EntityKind::PgRooms => &self.pg_rooms,
            EntityKind::DutyLeaves => &self.duty_leaves,
            EntityKind::Notes => &self.notes,
            EntityKind::Courses => &self.free_courses,
            EntityKind::Deals => &self.deals,
            EntityKind::AiTools => &self.ai_tools,
            EntityKind::Youtube => &self.youtube_channels,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub sources: Sources,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_retries() -> u32 {
    3
}
fn default_backoff_ms() -> u64 {
    1000
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_poll_interval_secs() -> u64 {
    60
}
fn default_origin() -> String {
    "localhost".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            sources: Sources::default(),
            retries: default_retries(),
            backoff_ms: default_backoff_ms(),
            timeout_secs: default_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            origin: default_origin(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("alfahub")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".alfahub")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("alfahub.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("alfahub.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", db_path.display(), e))
            })?;
        }

        Ok(db_path)
    }
}
