//! End-to-end flows through validation and storage.

use flightdesk::{CityRegistry, Field, RawFields, Rejection, Storage, Validator};
use tempfile::TempDir;

fn form(full_name: &str, departure: &str, destination: &str) -> RawFields {
    RawFields::new()
        .with(Field::FullName, full_name)
        .with(Field::FlightNumber, "MS777")
        .with(Field::Departure, departure)
        .with(Field::Destination, destination)
        .with(Field::Date, "05/16/25")
        .with(Field::SeatNumber, "12A")
}

#[test]
fn book_list_edit_cancel() {
    let storage = Storage::open_in_memory().unwrap();
    let validator = Validator::default();

    let booking = validator.validate(&form("Jane Doe", "cairo", "london")).unwrap();
    let id = storage.create(&booking).unwrap();

    let listed = storage.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].booking.departure, "Cairo");
    assert_eq!(listed[0].booking.destination, "London");

    // Edit the way a form does: start from the stored row, change one field.
    let mut raw = RawFields::from(&listed[0].booking);
    raw.set(Field::Destination, " paris ");
    let changed = validator.validate(&raw).unwrap();
    assert!(storage.update(id, &changed).unwrap());

    let listed = storage.list_all().unwrap();
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].booking, changed);
    assert_eq!(listed[0].booking.destination, "Paris");

    assert!(storage.delete(id).unwrap());
    assert!(storage.list_all().unwrap().is_empty());
}

#[test]
fn rejected_input_never_reaches_storage() {
    let storage = Storage::open_in_memory().unwrap();
    let validator = Validator::default();

    for raw in [
        form("Jane Doe", "Cairo", "   "),
        form("John3 Doe", "Cairo", "London"),
        form("Jane Doe", "Cairo", "Londn"),
    ] {
        assert!(validator.validate(&raw).is_err());
    }

    assert_eq!(storage.count().unwrap(), 0);
}

#[test]
fn misspelled_city_suggestion() {
    let err = Validator::default()
        .validate(&form("Jane Doe", "Cairo", "Londn"))
        .unwrap_err();

    assert_eq!(
        err,
        Rejection::InvalidCity {
            field: Field::Destination,
            supplied: "Londn".to_string(),
            suggestion: Some("London".to_string()),
        }
    );
}

#[test]
fn delete_middle_of_three() {
    let storage = Storage::open_in_memory().unwrap();
    let validator = Validator::default();

    let ids: Vec<i64> = ["Ann Lee", "Bob Ray", "Cat Moe"]
        .into_iter()
        .map(|name| {
            let booking = validator.validate(&form(name, "Rome", "Dubai")).unwrap();
            storage.create(&booking).unwrap()
        })
        .collect();

    assert!(storage.delete(ids[1]).unwrap());

    let remaining = storage.list_all().unwrap();
    let remaining_ids: Vec<i64> = remaining.iter().map(|r| r.id).collect();
    assert_eq!(remaining_ids, vec![ids[0], ids[2]]);
    assert_eq!(remaining[0].booking.full_name, "Ann Lee");
    assert_eq!(remaining[1].booking.full_name, "Cat Moe");
}

#[test]
fn update_and_delete_report_missing_rows() {
    let storage = Storage::open_in_memory().unwrap();
    let booking = Validator::default()
        .validate(&form("Jane Doe", "Tokyo", "Beijing"))
        .unwrap();

    assert!(!storage.update(404, &booking).unwrap());
    assert!(!storage.delete(404).unwrap());
    assert_eq!(storage.count().unwrap(), 0);
}

#[test]
fn initialize_twice_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("flights.db");

    let storage = Storage::open(&db_path).unwrap();
    let booking = Validator::default()
        .validate(&form("Jane Doe", "Berlin", "Toronto"))
        .unwrap();
    storage.create(&booking).unwrap();
    let before = storage.list_all().unwrap();

    storage.initialize().unwrap();
    storage.initialize().unwrap();
    drop(storage);

    let reopened = Storage::open(&db_path).unwrap();
    assert_eq!(reopened.list_all().unwrap(), before);
}

#[test]
fn injected_city_set() {
    let validator = Validator::new(CityRegistry::new(["Oslo", "Lima"]));

    let booking = validator.validate(&form("Jane Doe", "OSLO", "lima")).unwrap();
    assert_eq!(booking.departure, "Oslo");
    assert_eq!(booking.destination, "Lima");

    let err = validator
        .validate(&form("Jane Doe", "Cairo", "Lima"))
        .unwrap_err();
    assert!(matches!(
        err,
        Rejection::InvalidCity {
            field: Field::Departure,
            suggestion: None,
            ..
        }
    ));
}
