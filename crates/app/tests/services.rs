mod support;

use chrono::NaiveDate;
use fleet_app::{ActivityParams, AppError, MaintenanceQuery, UserImage};
use fleet_core::{
    ActivityAction, ActivityEntity, Granularity, MaintenancePatch, MaintenanceStatus, UserRole,
};
use support::{ACTOR, maintenance_input, setup_app, user_input, vehicle_input};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn month_chart_counts_events_per_week() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    for (title, start) in [
        ("a", "2024-03-01T09:00:00Z"),
        ("b", "2024-03-01T14:00:00Z"),
        ("c", "2024-03-08T10:00:00Z"),
        ("outside", "2024-04-02T10:00:00Z"),
    ] {
        services
            .maintenance
            .create(ACTOR, &maintenance_input(&vehicle.id, title, start))
            .expect("event");
    }

    let report = services
        .dashboard
        .maintenance_chart(Granularity::Month, Some(day(2024, 3, 10)))
        .expect("chart");
    let counts: Vec<_> = report.buckets.iter().map(|bucket| bucket.count).collect();
    assert_eq!(counts, vec![2, 1, 0, 0, 0]);
    assert_eq!(report.skipped, 0);

    let week = services
        .dashboard
        .maintenance_chart(Granularity::Week, Some(day(2024, 3, 7)))
        .expect("week chart");
    assert_eq!(week.buckets.len(), 7);
    assert_eq!(week.total(), 2);
}

#[test]
fn calendar_groups_events_by_day() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    services
        .maintenance
        .create(ACTOR, &maintenance_input(&vehicle.id, "late", "2024-02-29T15:00:00Z"))
        .expect("event");
    services
        .maintenance
        .create(ACTOR, &maintenance_input(&vehicle.id, "early", "2024-02-29T08:00:00Z"))
        .expect("event");

    let grid = services
        .dashboard
        .calendar(Some(day(2024, 2, 10)))
        .expect("calendar");
    assert_eq!(grid.len(), 29);
    let last = &grid[28];
    assert_eq!(last.date, day(2024, 2, 29));
    let titles: Vec<_> = last.events.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, vec!["early", "late"]);
}

#[test]
fn mutations_are_recorded_in_activity_feed() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    let event = services
        .maintenance
        .create(ACTOR, &maintenance_input(&vehicle.id, "Frenos", "2024-03-02T10:00:00Z"))
        .expect("event");
    services
        .maintenance
        .update(
            ACTOR,
            &event.id,
            &MaintenancePatch {
                status: Some(MaintenanceStatus::Completed),
                ..MaintenancePatch::default()
            },
        )
        .expect("update");
    services.maintenance.delete(ACTOR, &event.id).expect("delete");
    services.vehicles.delete(ACTOR, &vehicle.id).expect("delete vehicle");

    let page = services
        .activity
        .list(&ActivityParams::default())
        .expect("activity");
    assert_eq!(page.total, 5);
    assert_eq!(page.per_page, 4);
    assert_eq!(page.logs.len(), 4);
    let newest = &page.logs[0];
    assert_eq!(newest.action, ActivityAction::Delete);
    assert_eq!(newest.entity, ActivityEntity::Vehicle);
    assert_eq!(newest.user_id, ACTOR);
    assert_eq!(
        page.logs[2].description.as_deref(),
        Some("Changed Frenos status to completed")
    );
}

#[test]
fn maintenance_rules_are_enforced() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");

    let mut reversed = maintenance_input(&vehicle.id, "Frenos", "2024-03-02T10:00:00Z");
    reversed.end_date = "2024-03-01T10:00:00Z".to_string();
    assert!(matches!(
        services.maintenance.create(ACTOR, &reversed),
        Err(AppError::InvalidInput(_))
    ));

    let orphan = maintenance_input("missing", "Frenos", "2024-03-02T10:00:00Z");
    assert!(matches!(
        services.maintenance.create(ACTOR, &orphan),
        Err(AppError::InvalidInput(_))
    ));

    let mut negative = maintenance_input(&vehicle.id, "Frenos", "2024-03-02T10:00:00Z");
    negative.cost = Some(-1.0);
    assert!(services.maintenance.create(ACTOR, &negative).is_err());

    let event = services
        .maintenance
        .create(ACTOR, &maintenance_input(&vehicle.id, "Frenos", "2024-03-02"))
        .expect("event");
    assert_eq!(event.start_date, "2024-03-02T00:00:00.000Z");
    assert_eq!(event.created_by, ACTOR);
    let moved_end = MaintenancePatch {
        end_date: Some("2024-03-01T00:00:00Z".to_string()),
        ..MaintenancePatch::default()
    };
    assert!(matches!(
        services.maintenance.update(ACTOR, &event.id, &moved_end),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        services.maintenance.get("missing"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn list_query_accepts_dates_and_history_requires_vehicle() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    for (title, start) in [
        ("march", "2024-03-15T10:00:00Z"),
        ("april", "2024-04-15T10:00:00Z"),
    ] {
        services
            .maintenance
            .create(ACTOR, &maintenance_input(&vehicle.id, title, start))
            .expect("event");
    }

    let march = services
        .maintenance
        .list(&MaintenanceQuery {
            start: Some("2024-03-01".to_string()),
            end: Some("2024-04-01".to_string()),
            ..MaintenanceQuery::default()
        })
        .expect("list");
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].vehicle_label, "Toyota Hilux");

    assert_eq!(services.maintenance.history(&vehicle.id).expect("history").len(), 2);
    assert!(matches!(
        services.maintenance.history("missing"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn only_drivers_can_be_assigned() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    let staff = services
        .users
        .create(ACTOR, &user_input("staff@fleet.test", UserRole::Staff))
        .expect("staff");
    let driver = services
        .users
        .create(ACTOR, &user_input("driver@fleet.test", UserRole::Driver))
        .expect("driver");

    assert!(matches!(
        services.vehicles.assign_driver(ACTOR, &vehicle.id, Some(&staff.id)),
        Err(AppError::InvalidInput(_))
    ));
    let assigned = services
        .vehicles
        .assign_driver(ACTOR, &vehicle.id, Some(&driver.id))
        .expect("assign");
    assert_eq!(assigned.assigned_driver_id.as_deref(), Some(driver.id.as_str()));
    assert_eq!(services.users.drivers().expect("drivers").len(), 1);

    assert!(matches!(
        services
            .users
            .create(ACTOR, &user_input("driver@fleet.test", UserRole::Driver)),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn uploads_store_files_and_public_urls() {
    let app = setup_app();
    let services = &app.state.services;
    let vehicle = services
        .vehicles
        .create(ACTOR, &vehicle_input("1234-ABC"))
        .expect("vehicle");
    let updated = services
        .vehicles
        .upload_image(ACTOR, &vehicle.id, "front.jpg", b"jpeg")
        .expect("upload");
    let expected = format!(
        "http://127.0.0.1:3845/storage/vehicles/{}/front.jpg",
        vehicle.id
    );
    assert_eq!(updated.image_url.as_deref(), Some(expected.as_str()));

    let driver = services
        .users
        .create(ACTOR, &user_input("driver@fleet.test", UserRole::Driver))
        .expect("driver");
    let driver = services
        .users
        .upload_image(ACTOR, &driver.id, UserImage::License, "license.png", b"png")
        .expect("license");
    let expected = format!(
        "http://127.0.0.1:3845/storage/licenses/{}/license.png",
        driver.id
    );
    assert_eq!(driver.license_image_url.as_deref(), Some(expected.as_str()));
    assert!(driver.image_url.is_none());

    let settings = services
        .settings
        .upload_logo("logo.png", b"logo")
        .expect("logo");
    assert_eq!(
        settings.logo_url.as_deref(),
        Some("http://127.0.0.1:3845/storage/logos/logo.png")
    );
    let logos = services.storage.list("logos").expect("list");
    assert_eq!(logos.len(), 1);

    assert!(matches!(
        services.settings.upload_logo("../escape.png", b"x"),
        Err(AppError::Storage(_))
    ));
}
