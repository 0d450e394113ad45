use alfahub::core::log::LogLogic;
use alfahub::db::initialize::open_ready;
use alfahub::db::log::ttlog;
use alfahub::db::migrate::run_pending_migrations;
use alfahub::db::prefs::{self, Theme};

mod common;
use common::setup_test_db;

#[test]
fn migrations_are_idempotent() {
    let db_path = setup_test_db("migrations_idempotent");
    let pool = open_ready(&db_path).unwrap();

    run_pending_migrations(&pool.conn).unwrap();
    run_pending_migrations(&pool.conn).unwrap();

    let applied = LogLogic::entries(&pool, Some("migration_applied")).unwrap();
    assert_eq!(applied.len(), 2);
}

#[test]
fn theme_defaults_to_light_and_last_write_wins() {
    let db_path = setup_test_db("prefs_theme");
    let pool = open_ready(&db_path).unwrap();

    assert_eq!(prefs::theme(&pool).unwrap(), Theme::Light);

    prefs::set_theme(&pool, Theme::Dark).unwrap();
    prefs::set_theme(&pool, Theme::Light).unwrap();
    prefs::set_theme(&pool, Theme::Dark).unwrap();
    assert_eq!(prefs::theme(&pool).unwrap(), Theme::Dark);

    let changes = LogLogic::entries(&pool, Some("prefs")).unwrap();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[2].message, "Theme set to dark");
}

#[test]
fn theme_survives_reopening() {
    let db_path = setup_test_db("prefs_reopen");
    {
        let pool = open_ready(&db_path).unwrap();
        prefs::set_theme(&pool, Theme::Dark).unwrap();
    }
    let pool = open_ready(&db_path).unwrap();
    assert_eq!(prefs::theme(&pool).unwrap(), Theme::Dark);
}

#[test]
fn last_notified_id_reports_changes() {
    let db_path = setup_test_db("prefs_last_notified");
    let pool = open_ready(&db_path).unwrap();

    assert_eq!(prefs::last_notified_id(&pool).unwrap(), None);
    assert!(prefs::update_last_notified_id(&pool, "n-7").unwrap());
    assert!(!prefs::update_last_notified_id(&pool, "n-7").unwrap());
    assert!(prefs::update_last_notified_id(&pool, "n-8").unwrap());
    assert_eq!(prefs::last_notified_id(&pool).unwrap().as_deref(), Some("n-8"));

    let all = prefs::all(&pool).unwrap();
    assert_eq!(all, vec![("last_notified_id".to_string(), "n-8".to_string())]);
}

#[test]
fn log_entries_filter_by_operation() {
    let db_path = setup_test_db("log_filter");
    let pool = open_ready(&db_path).unwrap();

    ttlog(&pool.conn, "fetch_failed", "events", "3 attempt(s): HTTP error: 503").unwrap();
    ttlog(&pool.conn, "calendar", "Hackathon", "/tmp/Hackathon.ics").unwrap();

    let failures = LogLogic::entries(&pool, Some("fetch_failed")).unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].target, "events");

    let everything = LogLogic::entries(&pool, None).unwrap();
    assert!(everything.len() >= 4);
}
