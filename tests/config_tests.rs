use alfahub::config::Config;
use alfahub::config::migrate::{migrate_config, missing_fields};
use alfahub::fetch::FetchOptions;
use alfahub::models::EntityKind;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_alfahub.conf"));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults_match_the_documented_fetch_policy() {
    let cfg = Config::default();
    assert_eq!(cfg.retries, 3);
    assert_eq!(cfg.backoff(), Duration::from_millis(1000));
    assert_eq!(cfg.poll_interval(), Duration::from_secs(60));

    let opts = FetchOptions::from_config(&cfg);
    assert_eq!(opts, FetchOptions::default());

    for kind in EntityKind::ALL {
        assert!(cfg.sources.url_for(kind).ends_with("/pub?output=csv"), "{kind}");
    }
}

#[test]
fn partial_file_reports_missing_fields() {
    let path = temp_conf(
        "partial",
        "database: /tmp/x.sqlite\nsources:\n  events: https://example.org/events.csv\n",
    );

    let missing = missing_fields(&path).unwrap();
    assert!(missing.contains(&"retries".to_string()));
    assert!(missing.contains(&"sources.clubs".to_string()));
    assert!(!missing.contains(&"sources.events".to_string()));
    assert!(!missing.contains(&"database".to_string()));
}

#[test]
fn migration_fills_defaults_and_keeps_user_values() {
    let path = temp_conf(
        "migrate",
        "database: /tmp/x.sqlite\nretries: 5\nsources:\n  events: https://example.org/events.csv\n",
    );

    assert!(migrate_config(&path).unwrap());
    assert!(missing_fields(&path).unwrap().is_empty());
    assert!(!migrate_config(&path).unwrap());

    let cfg: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cfg.retries, 5);
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.sources.events, "https://example.org/events.csv");
    assert_eq!(cfg.sources.clubs, Config::default().sources.clubs);
}

#[test]
fn poll_interval_has_a_floor() {
    let cfg = Config {
        poll_interval_secs: 0,
        ..Config::default()
    };
    assert_eq!(cfg.poll_interval(), Duration::from_secs(1));
}
