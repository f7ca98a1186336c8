mod support;

use rusqlite::Connection;
use support::setup_db;

#[test]
fn migrate_is_idempotent() {
    let mut test_db = setup_db();
    test_db.db.migrate().expect("second migrate");

    let conn = Connection::open(&test_db.path).expect("open conn");
    let tables: Vec<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .expect("prepare")
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("collect");
    for table in [
        "activity_logs",
        "app_setting",
        "departments",
        "maintenance_events",
        "service_providers",
        "users",
        "vehicles",
    ] {
        assert!(tables.iter().any(|name| name == table), "missing {table}");
    }
}

#[test]
fn logo_url_setting_round_trips_and_clears() {
    let test_db = setup_db();
    let db = &test_db.db;
    assert_eq!(db.get_logo_url().expect("logo"), None);

    db.set_logo_url(Some("http://127.0.0.1:3845/storage/logos/a.png"))
        .expect("set logo");
    db.set_logo_url(Some("http://127.0.0.1:3845/storage/logos/b.png"))
        .expect("overwrite logo");
    assert_eq!(
        db.get_logo_url().expect("logo").as_deref(),
        Some("http://127.0.0.1:3845/storage/logos/b.png")
    );

    db.set_logo_url(None).expect("clear logo");
    assert_eq!(db.get_logo_url().expect("logo"), None);
}
