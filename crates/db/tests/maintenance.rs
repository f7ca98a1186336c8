mod support;

use fleet_core::{MaintenancePatch, MaintenanceStatus, MaintenanceType, UserRole};
use fleet_db::{MaintenanceFilter, SortOrder};
use support::{
    make_maintenance_input, make_provider_input, make_user_input, make_vehicle_input, setup_db,
};

#[test]
fn listing_joins_provider_name_and_vehicle_label() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let provider = db
        .insert_service_provider(&make_provider_input("Taller Central", true))
        .expect("insert provider");
    let mut input = make_maintenance_input(&vehicle.id, "Cambio de aceite", "2024-03-01T09:00:00.000Z");
    input.service_provider_id = Some(provider.id.clone());
    let event = db.insert_maintenance_event(&input).expect("insert event");

    let rows = db
        .list_maintenance_events(&MaintenanceFilter::default())
        .expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event, event);
    assert_eq!(rows[0].service_provider_name.as_deref(), Some("Taller Central"));
    assert_eq!(rows[0].vehicle_label, "Toyota Hilux");
}

#[test]
fn range_bounds_are_half_open() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    for (title, start) in [
        ("before", "2024-02-29T23:59:59.999Z"),
        ("at start", "2024-03-01T00:00:00.000Z"),
        ("inside", "2024-03-15T12:00:00.000Z"),
        ("at end", "2024-04-01T00:00:00.000Z"),
    ] {
        db.insert_maintenance_event(&make_maintenance_input(&vehicle.id, title, start))
            .expect("insert");
    }

    let rows = db
        .list_maintenance_events(&MaintenanceFilter {
            start: Some("2024-03-01T00:00:00.000Z".to_string()),
            end: Some("2024-04-01T00:00:00.000Z".to_string()),
            order: SortOrder::Ascending,
            ..MaintenanceFilter::default()
        })
        .expect("list");
    let titles: Vec<_> = rows.iter().map(|row| row.event.title.as_str()).collect();
    assert_eq!(titles, vec!["at start", "inside"]);
}

#[test]
fn default_order_is_newest_first() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    for (title, start) in [
        ("middle", "2024-03-08T10:00:00.000Z"),
        ("oldest", "2024-03-01T09:00:00.000Z"),
        ("newest", "2024-03-20T08:00:00.000Z"),
    ] {
        db.insert_maintenance_event(&make_maintenance_input(&vehicle.id, title, start))
            .expect("insert");
    }
    let titles: Vec<_> = db
        .list_maintenance_events(&MaintenanceFilter::default())
        .expect("list")
        .into_iter()
        .map(|row| row.event.title)
        .collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn filters_combine_vehicle_status_type_and_search() {
    let test_db = setup_db();
    let db = &test_db.db;
    let hilux = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let patrol = db
        .insert_vehicle(&make_vehicle_input("Nissan", "Patrol", "9876-XYZ"))
        .expect("insert vehicle");

    let mut brakes = make_maintenance_input(&hilux.id, "Frenos", "2024-03-02T10:00:00.000Z");
    brakes.description = "Revisar pastillas de freno".to_string();
    brakes.event_type = MaintenanceType::Repair;
    db.insert_maintenance_event(&brakes).expect("insert");

    let mut oil = make_maintenance_input(&hilux.id, "Cambio de aceite", "2024-03-03T10:00:00.000Z");
    oil.status = MaintenanceStatus::Completed;
    db.insert_maintenance_event(&oil).expect("insert");

    db.insert_maintenance_event(&make_maintenance_input(
        &patrol.id,
        "Aceite y filtros",
        "2024-03-04T10:00:00.000Z",
    ))
    .expect("insert");

    let history = db
        .list_maintenance_events(&MaintenanceFilter {
            vehicle_id: Some(hilux.id.clone()),
            ..MaintenanceFilter::default()
        })
        .expect("history");
    assert_eq!(history.len(), 2);

    let pending = db
        .list_maintenance_events(&MaintenanceFilter {
            status: Some(MaintenanceStatus::Pending),
            ..MaintenanceFilter::default()
        })
        .expect("pending");
    assert_eq!(pending.len(), 2);

    let repairs = db
        .list_maintenance_events(&MaintenanceFilter {
            event_type: Some(MaintenanceType::Repair),
            ..MaintenanceFilter::default()
        })
        .expect("repairs");
    assert_eq!(repairs.len(), 1);
    assert_eq!(repairs[0].event.title, "Frenos");

    let search = db
        .list_maintenance_events(&MaintenanceFilter {
            search: Some("ACEITE".to_string()),
            ..MaintenanceFilter::default()
        })
        .expect("search");
    assert_eq!(search.len(), 2);

    let description_search = db
        .list_maintenance_events(&MaintenanceFilter {
            search: Some("pastillas".to_string()),
            ..MaintenanceFilter::default()
        })
        .expect("search description");
    assert_eq!(description_search.len(), 1);
}

#[test]
fn patch_updates_only_given_fields() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let event = db
        .insert_maintenance_event(&make_maintenance_input(
            &vehicle.id,
            "Frenos",
            "2024-03-02T10:00:00.000Z",
        ))
        .expect("insert");

    let updated = db
        .update_maintenance_event(
            &event.id,
            &MaintenancePatch {
                status: Some(MaintenanceStatus::InProgress),
                cost: Some(Some(120.5)),
                ..MaintenancePatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(updated.status, MaintenanceStatus::InProgress);
    assert_eq!(updated.cost, Some(120.5));
    assert_eq!(updated.title, "Frenos");
    assert_eq!(updated.start_date, event.start_date);
    assert_eq!(
        db.get_maintenance_event(&event.id).expect("get"),
        Some(updated)
    );
}

#[test]
fn patch_sets_then_clears_provider_and_cost() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let provider = db
        .insert_service_provider(&make_provider_input("Taller", true))
        .expect("insert provider");
    let event = db
        .insert_maintenance_event(&make_maintenance_input(
            &vehicle.id,
            "Frenos",
            "2024-03-02T10:00:00.000Z",
        ))
        .expect("insert");

    let assigned = db
        .update_maintenance_event(
            &event.id,
            &MaintenancePatch {
                service_provider_id: Some(Some(provider.id.clone())),
                cost: Some(Some(80.0)),
                ..MaintenancePatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(assigned.service_provider_id, Some(provider.id.clone()));
    assert_eq!(assigned.cost, Some(80.0));

    let untouched = db
        .update_maintenance_event(
            &event.id,
            &MaintenancePatch {
                title: Some("Frenos delanteros".to_string()),
                ..MaintenancePatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(untouched.service_provider_id, Some(provider.id.clone()));
    assert_eq!(untouched.cost, Some(80.0));

    let cleared = db
        .update_maintenance_event(
            &event.id,
            &MaintenancePatch {
                service_provider_id: Some(None),
                cost: Some(None),
                ..MaintenancePatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(cleared.service_provider_id, None);
    assert_eq!(cleared.cost, None);
    assert_eq!(cleared.title, "Frenos delanteros");
}

#[test]
fn deleting_vehicle_cascades_and_provider_is_nulled() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let other = db
        .insert_vehicle(&make_vehicle_input("Nissan", "Patrol", "9876-XYZ"))
        .expect("insert vehicle");
    let provider = db
        .insert_service_provider(&make_provider_input("Taller", true))
        .expect("insert provider");
    let gone = db
        .insert_maintenance_event(&make_maintenance_input(
            &vehicle.id,
            "Frenos",
            "2024-03-02T10:00:00.000Z",
        ))
        .expect("insert");
    let mut kept = make_maintenance_input(&other.id, "Aceite", "2024-03-03T10:00:00.000Z");
    kept.service_provider_id = Some(provider.id.clone());
    let kept = db.insert_maintenance_event(&kept).expect("insert");

    assert!(db.delete_vehicle(&vehicle.id).expect("delete vehicle"));
    assert!(db.get_maintenance_event(&gone.id).expect("get").is_none());

    assert!(db.delete_service_provider(&provider.id).expect("delete provider"));
    let kept = db
        .get_maintenance_event(&kept.id)
        .expect("get")
        .expect("exists");
    assert_eq!(kept.service_provider_id, None);
}

#[test]
fn dashboard_stats_count_each_card() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    db.insert_vehicle(&make_vehicle_input("Nissan", "Patrol", "9876-XYZ"))
        .expect("insert vehicle");
    db.insert_user(&make_user_input("d1@fleet.test", UserRole::Driver))
        .expect("insert");
    db.insert_user(&make_user_input("d2@fleet.test", UserRole::Driver))
        .expect("insert");
    db.insert_user(&make_user_input("staff@fleet.test", UserRole::Staff))
        .expect("insert");

    db.insert_maintenance_event(&make_maintenance_input(
        &vehicle.id,
        "Revisión",
        "2024-03-01T09:00:00.000Z",
    ))
    .expect("insert");
    let mut emergency = make_maintenance_input(&vehicle.id, "Choque", "2024-03-02T09:00:00.000Z");
    emergency.event_type = MaintenanceType::Emergency;
    emergency.status = MaintenanceStatus::Completed;
    db.insert_maintenance_event(&emergency).expect("insert");

    let stats = db.dashboard_stats().expect("stats");
    assert_eq!(stats.total_vehicles, 2);
    assert_eq!(stats.active_drivers, 2);
    assert_eq!(stats.pending_maintenance, 1);
    assert_eq!(stats.scheduled_services, 1);
}
