mod support;

use fleet_core::{
    DepartmentInput, ServiceProviderPatch, UserPatch, UserRole, VehiclePatch, VehicleStatus,
};
use support::{make_provider_input, make_user_input, make_vehicle_input, setup_db};

#[test]
fn vehicle_crud_round_trip() {
    let test_db = setup_db();
    let db = &test_db.db;
    let created = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    assert_eq!(created.status, VehicleStatus::Active);
    assert_eq!(created.created_at, created.updated_at);

    let patch = VehiclePatch {
        status: Some(VehicleStatus::Maintenance),
        mileage: Some(15_500),
        ..VehiclePatch::default()
    };
    let updated = db
        .update_vehicle(&created.id, &patch)
        .expect("update vehicle")
        .expect("vehicle exists");
    assert_eq!(updated.status, VehicleStatus::Maintenance);
    assert_eq!(updated.mileage, 15_500);
    assert_eq!(updated.make, "Toyota");

    let loaded = db
        .get_vehicle(&created.id)
        .expect("get vehicle")
        .expect("vehicle exists");
    assert_eq!(loaded, updated);

    assert!(db.delete_vehicle(&created.id).expect("delete"));
    assert!(!db.delete_vehicle(&created.id).expect("delete again"));
    assert!(db.get_vehicle(&created.id).expect("get").is_none());
    assert!(
        db.update_vehicle(&created.id, &patch)
            .expect("update missing")
            .is_none()
    );
}

#[test]
fn vehicle_patch_clears_nullable_fields() {
    let test_db = setup_db();
    let db = &test_db.db;
    let mut input = make_vehicle_input("Toyota", "Hilux", "1234-ABC");
    input.notes = Some("needs tires".to_string());
    input.insurance_policy = Some("POL-77".to_string());
    let created = db.insert_vehicle(&input).expect("insert vehicle");

    let cleared = db
        .update_vehicle(
            &created.id,
            &VehiclePatch {
                notes: Some(None),
                ..VehiclePatch::default()
            },
        )
        .expect("update vehicle")
        .expect("vehicle exists");
    assert_eq!(cleared.notes, None);
    assert_eq!(cleared.insurance_policy.as_deref(), Some("POL-77"));
}

#[test]
fn vehicles_list_by_make_and_model() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_vehicle(&make_vehicle_input("Toyota", "Land Cruiser", "B-2"))
        .expect("insert");
    db.insert_vehicle(&make_vehicle_input("Nissan", "Patrol", "A-1"))
        .expect("insert");
    db.insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "C-3"))
        .expect("insert");

    let plates: Vec<_> = db
        .list_vehicles()
        .expect("list")
        .into_iter()
        .map(|vehicle| vehicle.license_plate)
        .collect();
    assert_eq!(plates, vec!["A-1", "C-3", "B-2"]);
    assert_eq!(db.count_vehicles().expect("count"), 3);
}

#[test]
fn assign_driver_sets_and_clears() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    let driver = db
        .insert_user(&make_user_input("driver@fleet.test", UserRole::Driver))
        .expect("insert driver");

    assert!(db.assign_driver(&vehicle.id, Some(&driver.id)).expect("assign"));
    let loaded = db.get_vehicle(&vehicle.id).expect("get").expect("exists");
    assert_eq!(loaded.assigned_driver_id.as_deref(), Some(driver.id.as_str()));

    assert!(db.assign_driver(&vehicle.id, None).expect("clear"));
    let loaded = db.get_vehicle(&vehicle.id).expect("get").expect("exists");
    assert_eq!(loaded.assigned_driver_id, None);

    assert!(!db.assign_driver("missing", None).expect("missing vehicle"));
}

#[test]
fn deleting_driver_unassigns_vehicle() {
    let test_db = setup_db();
    let db = &test_db.db;
    let driver = db
        .insert_user(&make_user_input("driver@fleet.test", UserRole::Driver))
        .expect("insert driver");
    let mut input = make_vehicle_input("Toyota", "Hilux", "1234-ABC");
    input.assigned_driver_id = Some(driver.id.clone());
    let vehicle = db.insert_vehicle(&input).expect("insert vehicle");

    assert!(db.delete_user(&driver.id).expect("delete driver"));
    let loaded = db.get_vehicle(&vehicle.id).expect("get").expect("exists");
    assert_eq!(loaded.assigned_driver_id, None);
}

#[test]
fn vehicle_image_is_replaced() {
    let test_db = setup_db();
    let db = &test_db.db;
    let vehicle = db
        .insert_vehicle(&make_vehicle_input("Toyota", "Hilux", "1234-ABC"))
        .expect("insert vehicle");
    assert!(
        db.set_vehicle_image(&vehicle.id, Some("http://host/vehicles/a.png"))
            .expect("set image")
    );
    let loaded = db.get_vehicle(&vehicle.id).expect("get").expect("exists");
    assert_eq!(loaded.image_url.as_deref(), Some("http://host/vehicles/a.png"));
}

#[test]
fn users_filter_by_role_and_update_images() {
    let test_db = setup_db();
    let db = &test_db.db;
    let driver = db
        .insert_user(&make_user_input("driver@fleet.test", UserRole::Driver))
        .expect("insert driver");
    db.insert_user(&make_user_input("admin@fleet.test", UserRole::Admin))
        .expect("insert admin");

    let drivers = db.list_users(Some(UserRole::Driver)).expect("drivers");
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].email, "driver@fleet.test");
    assert_eq!(db.list_users(None).expect("all").len(), 2);
    assert_eq!(db.count_users_by_role(UserRole::Driver).expect("count"), 1);

    assert!(
        db.set_user_images(&driver.id, Some("http://host/users/p.png"), None)
            .expect("profile image")
    );
    assert!(
        db.set_user_images(&driver.id, None, Some("http://host/licenses/l.png"))
            .expect("license image")
    );
    let loaded = db.get_user(&driver.id).expect("get").expect("exists");
    assert_eq!(loaded.image_url.as_deref(), Some("http://host/users/p.png"));
    assert_eq!(
        loaded.license_image_url.as_deref(),
        Some("http://host/licenses/l.png")
    );

    let updated = db
        .update_user(
            &driver.id,
            &UserPatch {
                first_name: Some("Luis".to_string()),
                ..UserPatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(updated.first_name, "Luis");
    assert_eq!(updated.email, "driver@fleet.test");
}

#[test]
fn duplicate_email_is_rejected() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_user(&make_user_input("same@fleet.test", UserRole::Staff))
        .expect("insert");
    assert!(
        db.insert_user(&make_user_input("same@fleet.test", UserRole::Driver))
            .is_err()
    );
}

#[test]
fn department_crud_and_user_link() {
    let test_db = setup_db();
    let db = &test_db.db;
    let department = db
        .insert_department(&DepartmentInput {
            name: "Operaciones".to_string(),
            description: Some("Departamento de Operaciones y Logística".to_string()),
        })
        .expect("insert department");
    let mut input = make_user_input("staff@fleet.test", UserRole::Staff);
    input.department_id = Some(department.id.clone());
    let user = db.insert_user(&input).expect("insert user");

    let renamed = db
        .update_department(
            &department.id,
            &DepartmentInput {
                name: "Logística".to_string(),
                description: None,
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(renamed.name, "Logística");
    assert_eq!(renamed.description, None);
    assert_eq!(db.list_departments().expect("list").len(), 1);

    assert!(db.delete_department(&department.id).expect("delete"));
    let loaded = db.get_user(&user.id).expect("get").expect("exists");
    assert_eq!(loaded.department_id, None);
}

#[test]
fn active_providers_are_sorted_by_name() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_service_provider(&make_provider_input("Taller Zeta", true))
        .expect("insert");
    db.insert_service_provider(&make_provider_input("Autoservicio Alfa", true))
        .expect("insert");
    db.insert_service_provider(&make_provider_input("Cerrado", false))
        .expect("insert");

    let names: Vec<_> = db
        .list_active_service_providers()
        .expect("list active")
        .into_iter()
        .map(|provider| provider.name)
        .collect();
    assert_eq!(names, vec!["Autoservicio Alfa", "Taller Zeta"]);
    assert_eq!(db.list_service_providers().expect("list").len(), 3);
}

#[test]
fn provider_specialties_survive_update() {
    let test_db = setup_db();
    let db = &test_db.db;
    let provider = db
        .insert_service_provider(&make_provider_input("Taller", true))
        .expect("insert");
    assert_eq!(provider.specialties, vec!["brakes", "engine"]);
    assert!(provider.is_active);

    let updated = db
        .update_service_provider(
            &provider.id,
            &ServiceProviderPatch {
                specialties: Some(vec!["paint".to_string()]),
                is_active: Some(false),
                ..ServiceProviderPatch::default()
            },
        )
        .expect("update")
        .expect("exists");
    assert_eq!(updated.specialties, vec!["paint"]);
    assert!(!updated.is_active);
    assert!(db.list_active_service_providers().expect("active").is_empty());
}
