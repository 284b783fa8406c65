use parcel_core::{Parcel, ParcelStatus, ParcelValidationError, UNASSIGNED_NUMBER};

#[test]
fn parcel_new_sets_defaults() {
    let parcel = Parcel::new(1000, "test", "2024-05-01T10:00:00Z");

    assert_eq!(parcel.number, UNASSIGNED_NUMBER);
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(parcel.address, "test");
    assert_eq!(parcel.created_at, "2024-05-01T10:00:00Z");
    assert!(parcel.is_address_mutable());
    assert!(parcel.is_deletable());
}

#[test]
fn status_advances_until_delivered() {
    assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
    assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
    assert_eq!(ParcelStatus::Delivered.next(), None);
}

#[test]
fn status_text_matches_stored_values() {
    for status in [
        ParcelStatus::Registered,
        ParcelStatus::Sent,
        ParcelStatus::Delivered,
    ] {
        assert_eq!(ParcelStatus::parse(status.as_str()), Some(status));
        assert_eq!(status.to_string(), status.as_str());
    }
    assert_eq!(ParcelStatus::parse("Registered"), None);
    assert_eq!(ParcelStatus::parse("lost"), None);
}

#[test]
fn only_registered_parcels_are_mutable() {
    let mut parcel = Parcel::new(1, "test", "2024-05-01T10:00:00Z");
    parcel.status = ParcelStatus::Sent;
    assert!(!parcel.is_address_mutable());
    assert!(!parcel.is_deletable());
}

#[test]
fn validate_rejects_blank_created_at_and_negative_number() {
    let blank = Parcel::new(1, "test", "");
    assert_eq!(blank.validate(), Err(ParcelValidationError::BlankCreatedAt));

    let negative = Parcel::new(1, "test", "2024-05-01T10:00:00Z").with_number(-3);
    assert_eq!(
        negative.validate(),
        Err(ParcelValidationError::NegativeNumber(-3))
    );
}

#[test]
fn parcel_serialization_uses_expected_wire_fields() {
    let parcel = Parcel::new(1000, "Main st. 1", "2024-05-01T10:00:00Z").with_number(12);

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 12);
    assert_eq!(json["client"], 1000);
    assert_eq!(json["status"], "registered");
    assert_eq!(json["address"], "Main st. 1");
    assert_eq!(json["created_at"], "2024-05-01T10:00:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);
}

#[test]
fn validate_new_ignores_number() {
    let parcel = Parcel::new(1, "test", "2024-05-01T10:00:00Z").with_number(-3);
    assert_eq!(parcel.validate_new(), Ok(()));
    assert_eq!(
        Parcel::new(1, "test", " ").validate_new(),
        Err(ParcelValidationError::BlankCreatedAt)
    );
}
